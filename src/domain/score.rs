use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Marks the transition from the first half to the second.
pub const HALF_MARKER: char = ';';

const HOME_TAG: char = 'H';
const AWAY_TAG: char = 'A';

/// A scoring-relevant event, in the order it happened on the pitch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchEvent {
    HomeGoal,
    AwayGoal,
    CancelHomeGoal,
    CancelAwayGoal,
    NextPeriod,
}

impl MatchEvent {
    pub fn code(&self) -> &'static str {
        match self {
            MatchEvent::HomeGoal => "home_goal",
            MatchEvent::AwayGoal => "away_goal",
            MatchEvent::CancelHomeGoal => "cancel_home_goal",
            MatchEvent::CancelAwayGoal => "cancel_away_goal",
            MatchEvent::NextPeriod => "next_period",
        }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MatchEvent {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home_goal" => Ok(MatchEvent::HomeGoal),
            "away_goal" => Ok(MatchEvent::AwayGoal),
            "cancel_home_goal" => Ok(MatchEvent::CancelHomeGoal),
            "cancel_away_goal" => Ok(MatchEvent::CancelAwayGoal),
            "next_period" => Ok(MatchEvent::NextPeriod),
            other => Err(MatchError::UnknownEvent(other.to_string())),
        }
    }
}

/// The canonical encoding of a match: one `H`/`A` character per goal, in
/// order of occurrence, plus at most one half marker.
///
/// The string is the whole state. Goals are appended; cancellations remove
/// the most recent matching goal of the current half, falling back to the
/// goal immediately before the half marker when the second half has none.
/// Characters outside the alphabet are preserved by every mutation and
/// ignored when decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MatchResult(String);

impl MatchResult {
    /// An empty result: 0-0, first half.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_second_half(&self) -> bool {
        self.0.contains(HALF_MARKER)
    }

    /// Applies `event` and returns the updated result, leaving `self`
    /// untouched. Cancellations fail when no eligible goal exists; the error
    /// carries the event and the original encoding.
    pub fn apply(&self, event: MatchEvent) -> Result<MatchResult, MatchError> {
        match event {
            MatchEvent::HomeGoal => Ok(self.with_appended(HOME_TAG)),
            MatchEvent::AwayGoal => Ok(self.with_appended(AWAY_TAG)),
            MatchEvent::NextPeriod => {
                if self.is_second_half() {
                    Ok(self.clone())
                } else {
                    Ok(self.with_appended(HALF_MARKER))
                }
            }
            MatchEvent::CancelHomeGoal => self.cancel(HOME_TAG, event),
            MatchEvent::CancelAwayGoal => self.cancel(AWAY_TAG, event),
        }
    }

    /// Decodes the encoding into a scoreboard view. Total: any input decodes,
    /// unknown characters are skipped.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for ch in self.0.chars() {
            match ch {
                HOME_TAG => score.home += 1,
                AWAY_TAG => score.away += 1,
                HALF_MARKER => score.second_half = true,
                _ => {}
            }
        }
        score
    }

    fn with_appended(&self, tag: char) -> MatchResult {
        let mut encoded = self.0.clone();
        encoded.push(tag);
        MatchResult(encoded)
    }

    /// Finds the goal to excise: latest `target` after the first half marker,
    /// else the single character right before the marker, else (without a
    /// marker) the latest `target` anywhere.
    fn cancel(&self, target: char, event: MatchEvent) -> Result<MatchResult, MatchError> {
        let index = match self.0.find(HALF_MARKER) {
            None => self.0.rfind(target),
            Some(marker) => self.0[marker + 1..]
                .rfind(target)
                .map(|offset| marker + 1 + offset)
                .or_else(|| {
                    self.0[..marker]
                        .char_indices()
                        .next_back()
                        .filter(|&(_, ch)| ch == target)
                        .map(|(index, _)| index)
                }),
        };
        match index {
            Some(index) => {
                let mut encoded = self.0.clone();
                encoded.remove(index);
                Ok(MatchResult(encoded))
            }
            None => Err(MatchError::UpdateRuleViolation {
                event,
                result: self.0.clone(),
            }),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded scoreboard view of a result encoding.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
    pub second_half: bool,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}
