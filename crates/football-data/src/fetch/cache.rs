//! Bounded response cache with insertion-order eviction.
//!
//! Each query category gets its own [`ResponseCache`] with a fixed capacity.
//! When a cache is full the entry that was inserted first is evicted,
//! regardless of how recently it was read. Re-inserting an existing key
//! replaces the value but keeps its original position in the eviction
//! order. There is no time-based expiry; entries live until evicted or the
//! process exits.

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use lru::LruCache;
use serde::Serialize;

use crate::config::CacheCapacities;
use crate::models::{LeagueCode, RawMatch, SeasonId, StandingRow, Team, TeamId};

/// Full identity of a fetch: operation plus every parameter that affects
/// the result. Two keys that differ in any parameter never collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Teams {
        league: LeagueCode,
        season: SeasonId,
    },
    Team {
        team_id: TeamId,
    },
    Matches {
        team_id: TeamId,
        season: SeasonId,
        limit: usize,
    },
    Standings {
        league: LeagueCode,
        season: SeasonId,
    },
}

impl QueryKey {
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Teams { .. } => "get_teams_in_league",
            Self::Team { .. } => "get_team_by_id",
            Self::Matches { .. } => "get_last_matches_for_team",
            Self::Standings { .. } => "get_league_standings",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teams { league, season } | Self::Standings { league, season } => {
                write!(f, "{}({}, {})", self.operation(), league, season)
            }
            Self::Team { team_id } => write!(f, "{}({})", self.operation(), team_id),
            Self::Matches {
                team_id,
                season,
                limit,
            } => write!(f, "{}({}, {}, {})", self.operation(), team_id, season, limit),
        }
    }
}

/// Counters for one cache.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Capacity-bounded map with insertion-order eviction.
///
/// Backed by an [`LruCache`] that is only ever read with `peek`, so reads
/// never promote an entry and the recency order stays the insertion order.
/// Reads share a read guard; inserts and eviction run under the write guard.
pub struct ResponseCache<K, V> {
    entries: RwLock<LruCache<K, V>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<K, V> ResponseCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            capacity: capacity.get(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Lock for reading, recovering from poison if necessary.
    ///
    /// Every mutation is a single `LruCache` call, so a poisoned lock still
    /// holds a consistent cache.
    fn read_entries(&self) -> RwLockReadGuard<'_, LruCache<K, V>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("Response cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, LruCache<K, V>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("Response cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let value = self.read_entries().peek(key).cloned();
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        value
    }

    pub fn contains(&self, key: &K) -> bool {
        self.read_entries().contains(key)
    }

    /// Store a value, evicting the oldest inserted entry when full.
    ///
    /// Re-inserting an existing key replaces the value in place.
    pub fn insert(&self, key: K, value: V) {
        let mut entries = self.write_entries();

        if let Some(existing) = entries.peek_mut(&key) {
            *existing = value;
            return;
        }

        if let Some((evicted, _)) = entries.push(key, value) {
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!("Response cache: evicted {:?}", evicted);
        }
    }

    pub fn invalidate(&self, key: &K) {
        self.write_entries().pop(key);
    }

    pub fn clear(&self) {
        self.write_entries().clear();
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            capacity: self.capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

/// The four per-operation caches used by the fetch service.
pub struct FetchCache {
    pub(crate) teams: ResponseCache<QueryKey, Vec<Team>>,
    pub(crate) team: ResponseCache<QueryKey, Option<Team>>,
    pub(crate) matches: ResponseCache<QueryKey, Vec<RawMatch>>,
    pub(crate) standings: ResponseCache<QueryKey, Vec<StandingRow>>,
}

impl FetchCache {
    pub fn new(capacities: &CacheCapacities) -> Self {
        Self {
            teams: ResponseCache::new(capacities.teams),
            team: ResponseCache::new(capacities.team),
            matches: ResponseCache::new(capacities.matches),
            standings: ResponseCache::new(capacities.standings),
        }
    }

    pub fn clear_all(&self) {
        self.teams.clear();
        self.team.clear();
        self.matches.clear();
        self.standings.clear();
    }

    pub fn stats(&self) -> FetchCacheStats {
        FetchCacheStats {
            teams: self.teams.stats(),
            team: self.team.stats(),
            matches: self.matches.stats(),
            standings: self.standings.stats(),
        }
    }
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::new(&CacheCapacities::default())
    }
}

/// Statistics for every cache category.
#[derive(Clone, Debug, Serialize)]
pub struct FetchCacheStats {
    pub teams: CacheStats,
    pub team: CacheStats,
    pub matches: CacheStats,
    pub standings: CacheStats,
}

impl FetchCacheStats {
    pub fn total_entries(&self) -> usize {
        self.teams.entries + self.team.entries + self.matches.entries + self.standings.entries
    }
}
