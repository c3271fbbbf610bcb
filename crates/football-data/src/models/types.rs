use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::FootballDataError;

/// Season used when the caller does not pick one.
pub const DEFAULT_SEASON: &str = "2023";

/// Seasons offered to users, newest first.
const SEASON_CATALOG: &[&str] = &["2023", "2022", "2021", "2020"];

/// Team identifier as it arrives from the upstream API.
///
/// The same team may be referenced as `57` in one payload and `"57"` in
/// another (or in a URL path), so equality and hashing are defined on the
/// string form. The original representation is kept for serialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamId {
    Numeric(i64),
    Text(String),
}

impl TeamId {
    /// String form used for comparisons and endpoint paths.
    pub fn as_key(&self) -> String {
        match self {
            Self::Numeric(id) => id.to_string(),
            Self::Text(id) => id.clone(),
        }
    }
}

impl PartialEq for TeamId {
    fn eq(&self, other: &Self) -> bool {
        self.as_key() == other.as_key()
    }
}

impl Eq for TeamId {}

impl Hash for TeamId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

impl From<i64> for TeamId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for TeamId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Season identifier, a 4-digit starting year such as `"2023"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SeasonId(String);

impl SeasonId {
    /// Parse and validate a season identifier.
    pub fn new(season: impl AsRef<str>) -> Result<Self, FootballDataError> {
        let season = season.as_ref().trim();
        if season.len() == 4 && season.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(season.to_string()))
        } else {
            Err(FootballDataError::InvalidParameter(format!(
                "season must be a 4-digit year, got '{}'",
                season
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label spanning both calendar years, e.g. `"2023-2024"`.
    pub fn label(&self) -> String {
        match self.0.parse::<u32>() {
            Ok(year) => format!("{}-{}", year, year + 1),
            Err(_) => self.0.clone(),
        }
    }

    /// Seasons offered to users, newest first.
    pub fn catalog() -> Vec<SeasonId> {
        SEASON_CATALOG
            .iter()
            .map(|season| SeasonId(season.to_string()))
            .collect()
    }
}

impl Default for SeasonId {
    fn default() -> Self {
        Self(DEFAULT_SEASON.to_string())
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SeasonId {
    type Err = FootballDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
