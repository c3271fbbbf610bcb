use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::lenient;
use super::team::TeamRef;

/// Standings group type. Only `TOTAL` is served to callers.
pub const TOTAL_STANDINGS: &str = "TOTAL";

/// One row of a standings table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamRef>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub played_games: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub won: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub draw: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub lost: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub goals_for: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub goals_against: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub goal_difference: Option<i32>,

    /// Recent results, e.g. `"W,W,D,L,W"`. Often null upstream.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_row() {
        let row: StandingRow = serde_json::from_value(json!({
            "position": 1,
            "team": {"id": 65, "name": "Manchester City FC", "tla": "MCI"},
            "playedGames": 38,
            "form": null,
            "won": 28,
            "draw": 7,
            "lost": 3,
            "points": 91,
            "goalsFor": 96,
            "goalsAgainst": 34,
            "goalDifference": 62
        }))
        .unwrap();

        assert_eq!(row.position, Some(1));
        assert_eq!(row.points, Some(91));
        assert_eq!(row.goal_difference, Some(62));
        assert_eq!(row.form, None);
        assert_eq!(
            row.team.unwrap().name.as_deref(),
            Some("Manchester City FC")
        );
    }

    #[test]
    fn test_negative_goal_difference() {
        let row: StandingRow = serde_json::from_value(json!({"goalDifference": -49})).unwrap();
        assert_eq!(row.goal_difference, Some(-49));
    }
}
