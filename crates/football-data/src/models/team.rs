use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::{lenient, lenient_or_default};
use super::types::TeamId;

/// Team as returned by `competitions/{code}/teams` and `teams/{id}`.
///
/// Only `id` and `name` are interpreted; crest, venue, squad and the rest of
/// the upstream metadata ride along untouched in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Team {
    pub fn team_id(&self) -> TeamId {
        TeamId::Numeric(self.id)
    }

    /// Slim `{id, name}` view used by team pickers.
    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub id: i64,
    pub name: String,
}

/// Team reference embedded in matches and standings rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<TeamId>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_keeps_upstream_metadata() {
        let team: Team = serde_json::from_value(json!({
            "id": 57,
            "name": "Arsenal FC",
            "tla": "ARS",
            "venue": "Emirates Stadium"
        }))
        .unwrap();

        assert_eq!(team.id, 57);
        assert_eq!(team.name, "Arsenal FC");
        assert_eq!(team.extra.get("tla"), Some(&json!("ARS")));

        let back = serde_json::to_value(&team).unwrap();
        assert_eq!(back["venue"], json!("Emirates Stadium"));
    }

    #[test]
    fn test_team_with_null_or_missing_name_is_kept() {
        let team: Team = serde_json::from_value(json!({"id": 58, "name": null})).unwrap();
        assert_eq!(team.id, 58);
        assert_eq!(team.name, "");

        let team: Team = serde_json::from_value(json!({"id": 59, "name": 7})).unwrap();
        assert_eq!(team.name, "");

        let team: Team = serde_json::from_value(json!({"id": 60})).unwrap();
        assert_eq!(team.name, "");
    }

    #[test]
    fn test_team_summary() {
        let team: Team = serde_json::from_value(json!({"id": 61, "name": "Chelsea FC"})).unwrap();
        assert_eq!(
            team.summary(),
            TeamSummary {
                id: 61,
                name: "Chelsea FC".to_string()
            }
        );
        assert_eq!(team.team_id(), TeamId::from("61"));
    }

    #[test]
    fn test_team_ref_tolerates_bad_fields() {
        let team: TeamRef = serde_json::from_value(json!({"id": {"nested": true}, "name": 12})).unwrap();
        assert_eq!(team.id, None);
        assert_eq!(team.name, None);
    }
}
