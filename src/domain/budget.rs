use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::period::Period;
use crate::errors::BudgetError;

/// A calendar month in compact `YYYYMM` form.
///
/// Validated at construction and on deserialization, so a held value always
/// names a real year and month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct YearMonth(u32);

impl YearMonth {
    pub fn new(raw: u32) -> Result<Self, BudgetError> {
        let month = raw % 100;
        if !(100_001..=999_912).contains(&raw) || month == 0 || month > 12 {
            return Err(BudgetError::InvalidYearMonth(raw.to_string()));
        }
        Ok(Self(raw))
    }

    pub fn year(&self) -> i32 {
        (self.0 / 100) as i32
    }

    pub fn month(&self) -> u32 {
        self.0 % 100
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year(), self.month(), 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
    }

    /// Calendar length of the month, leap-aware (28-31).
    pub fn days_in_month(&self) -> i64 {
        i64::from(self.last_day().day())
    }

    /// The full calendar month as a day-granular period.
    pub fn period(&self) -> Period {
        Period {
            start: self.first_day(),
            end: self.last_day(),
        }
    }
}

impl TryFrom<u32> for YearMonth {
    type Error = BudgetError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<YearMonth> for u32 {
    fn from(value: YearMonth) -> Self {
        value.0
    }
}

impl FromStr for YearMonth {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BudgetError::InvalidYearMonth(s.to_string()));
        }
        let raw: u32 = s
            .parse()
            .map_err(|_| BudgetError::InvalidYearMonth(s.to_string()))?;
        Self::new(raw)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// A single month's budget envelope.
///
/// The amount covers the whole calendar month named by `year_month`; derived
/// values (daily rate, month period) are computed on demand and never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub year_month: YearMonth,
    pub amount: i64,
}

impl Budget {
    pub fn new(year_month: YearMonth, amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            year_month,
            amount,
        }
    }

    /// Builds a budget from the raw `YYYYMM` form, validating it.
    pub fn from_raw(year_month: u32, amount: i64) -> Result<Self, BudgetError> {
        Ok(Self::new(YearMonth::new(year_month)?, amount))
    }

    /// The budget prorated to a single day of its month.
    pub fn daily_amount(&self) -> f64 {
        self.amount as f64 / self.year_month.days_in_month() as f64
    }

    /// The portion of the budget falling inside `query`, by day overlap with
    /// the budget's own calendar month. Zero when the ranges are disjoint.
    pub fn overlapping_amount(&self, query: &Period) -> f64 {
        self.daily_amount() * self.year_month.period().overlap_days(query) as f64
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Budget {
    fn display_label(&self) -> String {
        format!("{}: {}", self.year_month, self.amount)
    }
}
