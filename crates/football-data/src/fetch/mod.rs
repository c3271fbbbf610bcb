//! Fetch layer.
//!
//! This module provides the cached, rate-limited query operations:
//! - Minimum-interval rate limiting shared by all operations
//! - Bounded per-operation response caches
//! - Per-call advisories for failures the user should see
//! - The `FootballDataService` tying them to a transport

mod advisories;
mod cache;
mod rate_limiter;
mod service;

pub use advisories::{Advisory, Fetched};
pub use cache::{CacheStats, FetchCache, FetchCacheStats, QueryKey, ResponseCache};
pub use rate_limiter::{RateLimitConfig, RateLimiter};
pub use service::{FootballDataService, DEFAULT_MATCH_LIMIT};
