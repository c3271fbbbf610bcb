use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of a match from the perspective team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
    /// At least one side of the score is missing.
    Unknown,
}

impl MatchResult {
    /// Classify a score. Both sides must be present.
    pub fn from_goals(goals_for: Option<u32>, goals_against: Option<u32>) -> Self {
        match (goals_for, goals_against) {
            (Some(scored), Some(conceded)) if scored > conceded => Self::Win,
            (Some(scored), Some(conceded)) if scored == conceded => Self::Draw,
            (Some(_), Some(_)) => Self::Loss,
            _ => Self::Unknown,
        }
    }

    /// Single-letter form code, `None` for unknown results.
    pub fn code(&self) -> Option<char> {
        match self {
            Self::Win => Some('W'),
            Self::Draw => Some('D'),
            Self::Loss => Some('L'),
            Self::Unknown => None,
        }
    }

    /// League points earned: 3 for a win, 1 for a draw.
    pub fn points(&self) -> u32 {
        match self {
            Self::Win => 3,
            Self::Draw => 1,
            Self::Loss | Self::Unknown => 0,
        }
    }
}

/// A match seen from one team's side.
///
/// Derived from a [`RawMatch`](super::RawMatch) and a perspective team; never
/// cached because the same raw match yields two different records depending
/// on which side is asking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedMatch {
    pub date: Option<DateTime<Utc>>,
    pub opponent: String,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub result: MatchResult,
    pub is_home: bool,
    pub competition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_classification() {
        assert_eq!(MatchResult::from_goals(Some(3), Some(1)), MatchResult::Win);
        assert_eq!(MatchResult::from_goals(Some(0), Some(0)), MatchResult::Draw);
        assert_eq!(MatchResult::from_goals(Some(1), Some(4)), MatchResult::Loss);
    }

    #[test]
    fn test_partial_score_is_unknown() {
        assert_eq!(MatchResult::from_goals(None, Some(0)), MatchResult::Unknown);
        assert_eq!(MatchResult::from_goals(Some(0), None), MatchResult::Unknown);
        assert_eq!(MatchResult::from_goals(None, None), MatchResult::Unknown);
    }

    #[test]
    fn test_codes_and_points() {
        assert_eq!(MatchResult::Win.code(), Some('W'));
        assert_eq!(MatchResult::Unknown.code(), None);
        assert_eq!(MatchResult::Draw.points(), 1);
        assert_eq!(MatchResult::Unknown.points(), 0);
    }

    #[test]
    fn test_result_serializes_upper_case() {
        assert_eq!(
            serde_json::to_string(&MatchResult::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }
}
