use std::time::Duration;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";

/// Per-request timeout.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Minimum gap between outbound calls; 6s keeps us under 10 calls/minute.
const DEFAULT_MIN_INTERVAL_MS: u64 = 6_000;

/// Capacity of each response cache category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheCapacities {
    pub teams: usize,
    pub team: usize,
    pub matches: usize,
    pub standings: usize,
}

impl Default for CacheCapacities {
    fn default() -> Self {
        Self {
            teams: 128,
            team: 256,
            matches: 256,
            standings: 128,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FootballDataConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
    pub min_request_interval: Duration,
    pub cache_capacities: CacheCapacities,
}

impl Default for FootballDataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            min_request_interval: Duration::from_millis(DEFAULT_MIN_INTERVAL_MS),
            cache_capacities: CacheCapacities::default(),
        }
    }
}

impl FootballDataConfig {
    /// Read settings from the process environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("FOOTBALL_DATA_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = lookup("FOOTBALL_DATA_KEY").filter(|s| !s.trim().is_empty());
        let timeout_ms: u64 = lookup("FOOTBALL_DATA_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let interval_ms: u64 = lookup("FOOTBALL_DATA_MIN_INTERVAL_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MIN_INTERVAL_MS);

        Self {
            base_url,
            api_key,
            request_timeout: Duration::from_millis(timeout_ms),
            min_request_interval: Duration::from_millis(interval_ms),
            cache_capacities: CacheCapacities::default(),
        }
    }
}
