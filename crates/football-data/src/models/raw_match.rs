use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::lenient;
use super::team::TeamRef;

/// Upstream match status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Suspended,
    Postponed,
    Cancelled,
    Awarded,
    #[serde(other)]
    Unknown,
}

/// Home/away goal pair. Either side may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    #[serde(default, deserialize_with = "lenient")]
    pub home: Option<u32>,

    #[serde(default, deserialize_with = "lenient")]
    pub away: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub full_time: Option<ScoreLine>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Match record as returned by `teams/{id}/matches`.
///
/// Every interpreted field is optional and tolerant: a field of the wrong
/// JSON type reads as `None` instead of failing the record. Fields the
/// crate does not interpret are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,

    /// ISO-8601 kick-off time, usually with a `Z` suffix. Parsed during
    /// normalization, not here.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub utc_date: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub home_team: Option<TeamRef>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub away_team: Option<TeamRef>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub competition: Option<Competition>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawMatch {
    pub fn is_finished(&self) -> bool {
        self.status == Some(MatchStatus::Finished)
    }

    /// Full-time score, `(None, None)` when the record has none.
    pub fn full_time(&self) -> (Option<u32>, Option<u32>) {
        self.score
            .as_ref()
            .and_then(|score| score.full_time.as_ref())
            .map(|line| (line.home, line.away))
            .unwrap_or((None, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_finished_match() {
        let raw: RawMatch = serde_json::from_value(json!({
            "id": 436000,
            "status": "FINISHED",
            "utcDate": "2023-08-12T12:00:00Z",
            "matchday": 1,
            "homeTeam": {"id": 57, "name": "Arsenal FC"},
            "awayTeam": {"id": 351, "name": "Nottingham Forest FC"},
            "score": {"winner": "HOME_TEAM", "fullTime": {"home": 2, "away": 1}},
            "competition": {"id": 2021, "name": "Premier League"}
        }))
        .unwrap();

        assert!(raw.is_finished());
        assert_eq!(raw.full_time(), (Some(2), Some(1)));
        assert_eq!(raw.extra.get("matchday"), Some(&json!(1)));
        assert_eq!(
            raw.competition.unwrap().name.as_deref(),
            Some("Premier League")
        );
    }

    #[test]
    fn test_null_scores_stay_absent() {
        let raw: RawMatch = serde_json::from_value(json!({
            "status": "FINISHED",
            "score": {"fullTime": {"home": null, "away": 3}}
        }))
        .unwrap();

        assert_eq!(raw.full_time(), (None, Some(3)));
    }

    #[test]
    fn test_wrongly_typed_fields_degrade() {
        let raw: RawMatch = serde_json::from_value(json!({
            "status": 7,
            "utcDate": false,
            "homeTeam": "Arsenal",
            "score": {"fullTime": {"home": "two", "away": -1}}
        }))
        .unwrap();

        assert_eq!(raw.status, None);
        assert_eq!(raw.utc_date, None);
        assert_eq!(raw.home_team, None);
        assert_eq!(raw.full_time(), (None, None));
    }

    #[test]
    fn test_unknown_status() {
        let raw: RawMatch = serde_json::from_value(json!({"status": "ABANDONED"})).unwrap();
        assert_eq!(raw.status, Some(MatchStatus::Unknown));
        assert!(!raw.is_finished());
    }

    #[test]
    fn test_status_names() {
        let raw: RawMatch = serde_json::from_value(json!({"status": "IN_PLAY"})).unwrap();
        assert_eq!(raw.status, Some(MatchStatus::InPlay));
    }
}
