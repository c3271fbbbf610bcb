use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FootballDataError;

/// Competitions supported by the fetch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueCode {
    #[serde(rename = "PL")]
    PremierLeague,
    #[serde(rename = "PD")]
    LaLiga,
    #[serde(rename = "SA")]
    SerieA,
    #[serde(rename = "BL1")]
    Bundesliga,
    #[serde(rename = "FL1")]
    Ligue1,
}

impl LeagueCode {
    /// All supported leagues in display order.
    pub fn all() -> &'static [LeagueCode] {
        &[
            Self::PremierLeague,
            Self::LaLiga,
            Self::SerieA,
            Self::Bundesliga,
            Self::Ligue1,
        ]
    }

    /// Upstream competition code used in endpoint paths.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PremierLeague => "PL",
            Self::LaLiga => "PD",
            Self::SerieA => "SA",
            Self::Bundesliga => "BL1",
            Self::Ligue1 => "FL1",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PremierLeague => "Premier League",
            Self::LaLiga => "La Liga",
            Self::SerieA => "Serie A",
            Self::Bundesliga => "Bundesliga",
            Self::Ligue1 => "Ligue 1",
        }
    }

    /// Name with country tag, e.g. "Serie A (ITA)".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PremierLeague => "Premier League (ENG)",
            Self::LaLiga => "LaLiga (ESP)",
            Self::SerieA => "Serie A (ITA)",
            Self::Bundesliga => "Bundesliga (GER)",
            Self::Ligue1 => "Ligue 1 (FRA)",
        }
    }
}

impl fmt::Display for LeagueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LeagueCode {
    type Err = FootballDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|league| league.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                FootballDataError::InvalidParameter(format!(
                    "unsupported league '{}', expected one of PL, PD, SA, BL1, FL1",
                    wanted
                ))
            })
    }
}
