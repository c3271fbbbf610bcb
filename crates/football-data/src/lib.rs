//! Matchday Football Data Crate
//!
//! This crate fetches teams, matches and standings from football-data.org
//! and turns raw match payloads into analytics-ready records.
//!
//! # Overview
//!
//! The football data crate supports:
//! - Rate limiting to the upstream's 10 requests per minute
//! - Bounded per-query response caching
//! - Domain filtering (finished matches only, TOTAL standings only)
//! - Perspective-relative match normalization
//! - Chronological series and form summaries for reporting
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |     Caller       | --> | FootballData-    |  (cache -> limiter -> transport)
//! +------------------+     |    Service       |
//!                          +------------------+
//!                                  |
//!                    +-------------+-------------+
//!                    v             v             v
//!            +-------------+ +-----------+ +-------------+
//!            | FetchCache  | |RateLimiter| | Transport   |  (reqwest or mock)
//!            +-------------+ +-----------+ +-------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    RawMatch      |  (FINISHED, truncated)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | NormalizedMatch  |  (perspective team's side)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`FootballDataService`] - Cached, rate-limited query operations
//! - [`RateLimiter`] - Minimum spacing between upstream calls
//! - [`ResponseCache`] - Bounded map with insertion-order eviction
//! - [`RawMatch`] / [`NormalizedMatch`] - Upstream and derived match records
//! - [`Fetched`] - Operation result carrying the value and its advisory
//! - [`FootballDataError`] - Failure taxonomy and advisory classification

pub mod config;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod report;

pub use config::{CacheCapacities, FootballDataConfig};
pub use errors::{AdvisoryLevel, FootballDataError, TransportError};

// Re-export all public types from models
pub use models::{
    LeagueCode, MatchResult, MatchStatus, NormalizedMatch, RawMatch, SeasonId, StandingRow, Team,
    TeamId, TeamRef, TeamSummary, DEFAULT_SEASON,
};

// Re-export fetch layer types
pub use fetch::{
    Advisory, CacheStats, FetchCacheStats, Fetched, FootballDataService, QueryKey,
    RateLimitConfig, RateLimiter, ResponseCache, DEFAULT_MATCH_LIMIT,
};

pub use normalize::{normalize, normalize_match, parse_match_date};
pub use provider::{FootballDataClient, FootballTransport};
pub use report::{chronological, goal_series, FormSummary, GoalPoint};
