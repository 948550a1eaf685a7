use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::score::MatchEvent;

/// Error type for match-result updates that violate the scoring rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// A cancellation found no eligible goal to remove. The result string is
    /// carried unmodified so callers can report and retry.
    #[error("cannot apply {event} to \"{result}\": no eligible goal to cancel")]
    UpdateRuleViolation { event: MatchEvent, result: String },
    #[error("unknown match event \"{0}\"")]
    UnknownEvent(String),
}

/// Error type for budget entities and query periods.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("invalid year-month \"{0}\": expected six digits YYYYMM with a month of 01-12")]
    InvalidYearMonth(String),
    #[error("invalid period: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Error type for the embedded demo fixtures.
#[derive(Debug, Error)]
pub enum MockDataError {
    #[error("fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
