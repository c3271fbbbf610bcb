//! Football data models
//!
//! This module contains the core data types for fetch and normalization:
//! - `types` - Identifiers (TeamId, SeasonId)
//! - `league` - Supported competitions (LeagueCode)
//! - `team` - Team payloads and embedded team references
//! - `raw_match` - Upstream match records (RawMatch, MatchStatus)
//! - `standing` - Standings table rows (StandingRow)
//! - `normalized` - Perspective-relative match records (NormalizedMatch, MatchResult)

mod lenient;
mod league;
mod normalized;
mod raw_match;
mod standing;
mod team;
mod types;

pub use league::LeagueCode;
pub use normalized::{MatchResult, NormalizedMatch};
pub use raw_match::{Competition, MatchStatus, RawMatch, Score, ScoreLine};
pub use standing::{StandingRow, TOTAL_STANDINGS};
pub use team::{Team, TeamRef, TeamSummary};
pub use types::{SeasonId, TeamId, DEFAULT_SEASON};
