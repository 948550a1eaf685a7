use crate::domain::score::{MatchEvent, MatchResult, Score};
use crate::errors::MatchError;

/// Stateless façade over [`MatchResult`]. Callers own the current result for
/// each match (keyed by match id in the app layer) and swap in the returned
/// value; on failure the input stays valid and unchanged.
pub struct MatchService;

impl MatchService {
    pub fn apply_event(
        current: &MatchResult,
        event: MatchEvent,
    ) -> Result<MatchResult, MatchError> {
        let updated = current.apply(event);
        if updated.is_err() {
            tracing::debug!(%event, result = current.as_str(), "match update rejected");
        }
        updated
    }

    pub fn parse_to_display(current: &MatchResult) -> Score {
        current.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_event_returns_updated_result() {
        let current = MatchResult::from_encoded("H");
        let updated = MatchService::apply_event(&current, MatchEvent::AwayGoal).unwrap();
        assert_eq!(updated.as_str(), "HA");
        assert_eq!(current.as_str(), "H");
    }

    #[test]
    fn rejected_cancel_carries_event_and_original() {
        let current = MatchResult::from_encoded("HHA;");
        let err = MatchService::apply_event(&current, MatchEvent::CancelHomeGoal)
            .expect_err("no home goal in reach");
        assert_eq!(
            err,
            MatchError::UpdateRuleViolation {
                event: MatchEvent::CancelHomeGoal,
                result: "HHA;".to_string(),
            }
        );
    }

    #[test]
    fn parse_to_display_decodes_scoreboard() {
        let score = MatchService::parse_to_display(&MatchResult::from_encoded("HHA;A"));
        assert_eq!((score.home, score.away, score.second_half), (2, 2, true));
    }
}
