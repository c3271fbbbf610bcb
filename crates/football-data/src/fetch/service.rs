//! Cached, rate-limited query operations.
//!
//! Every operation follows the same protocol:
//! 1. Build the [`QueryKey`] with defaults applied (season "2023").
//! 2. Return the cached value on a hit, without touching the limiter.
//! 3. On a miss, wait for a limiter slot and fetch the endpoint.
//! 4. On failure, return the empty value with this call's advisory.
//! 5. On success, apply the operation's filtering, cache and return it.
//!
//! Failures are never cached, so a later call retries the upstream.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use urlencoding::encode;

use crate::config::FootballDataConfig;
use crate::errors::{AdvisoryLevel, FootballDataError};
use crate::fetch::advisories::Fetched;
use crate::fetch::cache::{FetchCache, FetchCacheStats, QueryKey};
use crate::fetch::rate_limiter::{RateLimitConfig, RateLimiter};
use crate::models::{
    LeagueCode, NormalizedMatch, RawMatch, SeasonId, StandingRow, Team, TeamId, TOTAL_STANDINGS,
};
use crate::normalize::normalize;
use crate::provider::{FootballDataClient, FootballTransport};

/// Number of finished matches returned when the caller gives no limit.
pub const DEFAULT_MATCH_LIMIT: usize = 15;

/// Matches requested per wanted match. Non-finished matches are dropped
/// after the fetch, so asking for twice as many usually fills the limit.
/// Short lists are returned as they are.
const OVER_FETCH_FACTOR: usize = 2;

/// Entry point for teams, matches and standings.
pub struct FootballDataService {
    transport: Arc<dyn FootballTransport>,
    rate_limiter: Arc<RateLimiter>,
    cache: FetchCache,
    request_timeout: Duration,
}

impl FootballDataService {
    /// Build a service around an explicit transport and limiter.
    ///
    /// Pass the same `Arc<RateLimiter>` to every service that talks to the
    /// same upstream account.
    pub fn new(
        transport: Arc<dyn FootballTransport>,
        rate_limiter: Arc<RateLimiter>,
        config: &FootballDataConfig,
    ) -> Self {
        Self {
            transport,
            rate_limiter,
            cache: FetchCache::new(&config.cache_capacities),
            request_timeout: config.request_timeout,
        }
    }

    /// Build a service that talks to football-data.org over HTTP.
    pub fn from_config(config: &FootballDataConfig) -> Self {
        let transport = Arc::new(FootballDataClient::from_config(config));
        let rate_limiter = Arc::new(RateLimiter::with_config(RateLimitConfig {
            min_interval: config.min_request_interval,
        }));
        Self::new(transport, rate_limiter, config)
    }

    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }

    /// Teams taking part in a league season.
    pub async fn get_teams_in_league(
        &self,
        league: LeagueCode,
        season: Option<&SeasonId>,
    ) -> Fetched<Vec<Team>> {
        let season = season.cloned().unwrap_or_default();
        let key = QueryKey::Teams {
            league,
            season: season.clone(),
        };

        if let Some(teams) = self.cache.teams.get(&key) {
            debug!("Cache hit: {}", key);
            return Fetched::ok(teams);
        }

        let endpoint = format!(
            "competitions/{}/teams?season={}",
            league.code(),
            encode(season.as_str())
        );
        match self.fetch_json(&endpoint).await {
            Ok(body) => {
                let teams: Vec<Team> = parse_records(&body, "teams");
                info!("Fetched {} teams for {} season {}", teams.len(), league, season);
                self.cache.teams.insert(key, teams.clone());
                Fetched::ok(teams)
            }
            Err(e) => self.failed(&key, &e, Vec::new()),
        }
    }

    /// Team details, `None` when the upstream has nothing usable.
    pub async fn get_team_by_id(&self, team_id: &TeamId) -> Fetched<Option<Team>> {
        let key = QueryKey::Team {
            team_id: team_id.clone(),
        };

        if let Some(team) = self.cache.team.get(&key) {
            debug!("Cache hit: {}", key);
            return Fetched::ok(team);
        }

        let endpoint = format!("teams/{}", encode(&team_id.as_key()));
        match self.fetch_json(&endpoint).await {
            Ok(body) => {
                let team = parse_team(body);
                self.cache.team.insert(key, team.clone());
                Fetched::ok(team)
            }
            Err(e) => self.failed(&key, &e, None),
        }
    }

    /// Most recent FINISHED matches of a team, at most `limit` of them.
    ///
    /// `limit` defaults to 15; zero is treated as one. The over-fetch
    /// request size saturates instead of overflowing for huge limits.
    pub async fn get_last_matches_for_team(
        &self,
        team_id: &TeamId,
        season: Option<&SeasonId>,
        limit: Option<usize>,
    ) -> Fetched<Vec<RawMatch>> {
        let season = season.cloned().unwrap_or_default();
        let limit = limit.unwrap_or(DEFAULT_MATCH_LIMIT).max(1);
        let key = QueryKey::Matches {
            team_id: team_id.clone(),
            season: season.clone(),
            limit,
        };

        if let Some(matches) = self.cache.matches.get(&key) {
            debug!("Cache hit: {}", key);
            return Fetched::ok(matches);
        }

        let endpoint = format!(
            "teams/{}/matches?season={}&limit={}",
            encode(&team_id.as_key()),
            encode(season.as_str()),
            limit.saturating_mul(OVER_FETCH_FACTOR)
        );
        match self.fetch_json(&endpoint).await {
            Ok(body) => {
                let all: Vec<RawMatch> = parse_records(&body, "matches");
                let total = all.len();
                let finished: Vec<RawMatch> = all
                    .into_iter()
                    .filter(RawMatch::is_finished)
                    .take(limit)
                    .collect();
                info!(
                    "Team {} season {}: {} finished matches kept of {} fetched",
                    team_id,
                    season,
                    finished.len(),
                    total
                );
                self.cache.matches.insert(key, finished.clone());
                Fetched::ok(finished)
            }
            Err(e) => self.failed(&key, &e, Vec::new()),
        }
    }

    /// Rows of the league's TOTAL standings table.
    pub async fn get_league_standings(
        &self,
        league: LeagueCode,
        season: Option<&SeasonId>,
    ) -> Fetched<Vec<StandingRow>> {
        let season = season.cloned().unwrap_or_default();
        let key = QueryKey::Standings {
            league,
            season: season.clone(),
        };

        if let Some(rows) = self.cache.standings.get(&key) {
            debug!("Cache hit: {}", key);
            return Fetched::ok(rows);
        }

        let endpoint = format!(
            "competitions/{}/standings?season={}",
            league.code(),
            encode(season.as_str())
        );
        match self.fetch_json(&endpoint).await {
            Ok(body) => {
                let rows = total_table(&body);
                self.cache.standings.insert(key, rows.clone());
                Fetched::ok(rows)
            }
            Err(e) => self.failed(&key, &e, Vec::new()),
        }
    }

    /// Fetch a team's last finished matches and normalize them from its side.
    pub async fn get_normalized_matches(
        &self,
        team_id: &TeamId,
        season: Option<&SeasonId>,
        limit: Option<usize>,
    ) -> Fetched<Vec<NormalizedMatch>> {
        self.get_last_matches_for_team(team_id, season, limit)
            .await
            .map(|raw| normalize(&raw, team_id))
    }

    pub fn cache_stats(&self) -> FetchCacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear_all();
    }

    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FootballDataError> {
        self.rate_limiter.await_slot().await;
        debug!("{} fetch: {}", self.transport.id(), endpoint);

        self.transport
            .fetch(endpoint, self.request_timeout)
            .await
            .map_err(|e| FootballDataError::from_transport(e, endpoint))
    }

    fn failed<T>(&self, key: &QueryKey, e: &FootballDataError, empty: T) -> Fetched<T> {
        match e.advisory_level() {
            Some(AdvisoryLevel::Warning) => warn!("{} failed: {}", key, e),
            Some(AdvisoryLevel::Error) => error!("{} failed: {}", key, e),
            None => debug!("{}: {}", key, e),
        }
        Fetched::failed(empty, e)
    }
}

/// Deserialize `body[field]` entry by entry, skipping entries that cannot
/// be read. A missing or non-array field yields an empty list.
fn parse_records<T: DeserializeOwned>(body: &Value, field: &str) -> Vec<T> {
    let Some(entries) = body.get(field).and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match T::deserialize(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                let malformed = FootballDataError::MalformedRecord {
                    context: format!("{}[{}]", field, index),
                    message: e.to_string(),
                };
                warn!("{}", malformed);
                None
            }
        })
        .collect()
}

fn parse_team(body: Value) -> Option<Team> {
    if !body.as_object().is_some_and(|map| !map.is_empty()) {
        return None;
    }

    match serde_json::from_value(body) {
        Ok(team) => Some(team),
        Err(e) => {
            let malformed = FootballDataError::MalformedRecord {
                context: "team".to_string(),
                message: e.to_string(),
            };
            warn!("{}", malformed);
            None
        }
    }
}

/// Table of the first `TOTAL` standings group, empty if there is none.
fn total_table(body: &Value) -> Vec<StandingRow> {
    body.get("standings")
        .and_then(Value::as_array)
        .and_then(|groups| {
            groups.iter().find(|group| {
                group.get("type").and_then(Value::as_str) == Some(TOTAL_STANDINGS)
            })
        })
        .map(|group| parse_records(group, "table"))
        .unwrap_or_default()
}
