//! In-memory demo fixtures.
//!
//! The demo app has no real data source; these embedded constants stand in
//! for the stores the screens would normally query. Parsing runs the same
//! validation as any other input, so a broken fixture fails loudly instead
//! of reaching a screen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::budget::Budget;
use crate::domain::common::{Displayable, Identifiable};
use crate::domain::score::MatchResult;
use crate::errors::MockDataError;

const BUDGET_FIXTURES: &str = r#"[
    { "id": "0b0cf2ac-4597-4d35-a171-67553ee5b2fb", "year_month": 202506, "amount": 2900 },
    { "id": "5f0a6f46-2f8f-4a8b-9d3c-0a5a1d2cce01", "year_month": 202507, "amount": 3100 },
    { "id": "9a3f3dd0-6f2a-4a03-8d9d-4a9b8f2d8c42", "year_month": 202508, "amount": 310 }
]"#;

const MATCH_FIXTURES: &str = r#"[
    {
        "id": "c5a1b1de-3a65-4f70-9c87-2f4f3d6c1a9e",
        "home_team": "Rovers",
        "away_team": "Wanderers",
        "result": "HHA;A"
    },
    {
        "id": "7d0f6c9e-84e4-4a6d-b2ff-6f6f0c6e2b11",
        "home_team": "Athletic",
        "away_team": "United",
        "result": ""
    }
]"#;

/// A demo match as the scoreboard screen sees it: two team names plus the
/// current result encoding, keyed by match id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchFixture {
    pub id: Uuid,
    pub home_team: String,
    pub away_team: String,
    pub result: MatchResult,
}

impl Identifiable for MatchFixture {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for MatchFixture {
    fn display_label(&self) -> String {
        let score = self.result.score();
        format!("{} {} {}", self.home_team, score, self.away_team)
    }
}

pub fn sample_budgets() -> Result<Vec<Budget>, MockDataError> {
    Ok(serde_json::from_str(BUDGET_FIXTURES)?)
}

pub fn sample_matches() -> Result<Vec<MatchFixture>, MockDataError> {
    Ok(serde_json::from_str(MATCH_FIXTURES)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_fixtures_parse_and_validate() {
        let budgets = sample_budgets().expect("fixtures are well formed");
        assert_eq!(budgets.len(), 3);
        assert_eq!(u32::from(budgets[1].year_month), 202507);
        assert_eq!(budgets[1].amount, 3100);
    }

    #[test]
    fn match_fixtures_parse() {
        let matches = sample_matches().expect("fixtures are well formed");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].display_label(), "Rovers 2-2 Wanderers");
        assert_eq!(matches[1].result.score(), crate::domain::score::Score::default());
    }
}
