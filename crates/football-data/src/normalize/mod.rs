//! Match normalization.
//!
//! Raw match records are written from the home side: `homeTeam`,
//! `awayTeam` and a home/away score pair. Analytics want them from one
//! team's side: who the opponent was, goals for and against, and the
//! outcome. This module performs that flip for a given perspective team.
//!
//! Normalization never fails. Bad or missing fields degrade the affected
//! record (no date, unknown result) and the rest of the batch is processed
//! as usual.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::models::{MatchResult, NormalizedMatch, RawMatch, TeamId};

/// Normalize a batch of matches from `perspective`'s side.
///
/// Output order matches input order.
pub fn normalize(raw_matches: &[RawMatch], perspective: &TeamId) -> Vec<NormalizedMatch> {
    let normalized: Vec<NormalizedMatch> = raw_matches
        .iter()
        .map(|raw| normalize_match(raw, perspective))
        .collect();

    let with_goals = normalized
        .iter()
        .filter(|m| m.goals_for.is_some())
        .count();
    debug!(
        "Normalized {} matches for team {}, {} with goal data",
        normalized.len(),
        perspective,
        with_goals
    );

    normalized
}

/// Normalize one match from `perspective`'s side.
///
/// The perspective team is home when its id equals `homeTeam.id` as
/// strings; in every other case, including a missing home id, it is
/// treated as the away side.
pub fn normalize_match(raw: &RawMatch, perspective: &TeamId) -> NormalizedMatch {
    let home = raw.home_team.as_ref();
    let away = raw.away_team.as_ref();
    let home_name = home.and_then(|t| t.name.clone()).unwrap_or_default();
    let away_name = away.and_then(|t| t.name.clone()).unwrap_or_default();

    let is_home = home
        .and_then(|t| t.id.as_ref())
        .is_some_and(|home_id| home_id.as_key() == perspective.as_key());

    let (home_goals, away_goals) = raw.full_time();
    let (goals_for, goals_against, opponent) = if is_home {
        (home_goals, away_goals, away_name)
    } else {
        (away_goals, home_goals, home_name)
    };

    let result = MatchResult::from_goals(goals_for, goals_against);
    if result == MatchResult::Unknown {
        debug!(
            "Match {:?} has no complete full-time score",
            raw.id
        );
    }

    NormalizedMatch {
        date: raw.utc_date.as_deref().and_then(parse_match_date),
        opponent,
        goals_for,
        goals_against,
        result,
        is_home,
        competition: raw
            .competition
            .as_ref()
            .and_then(|c| c.name.clone())
            .unwrap_or_default(),
    }
}

/// Parse an upstream kick-off timestamp.
///
/// Accepts RFC 3339 (`2023-08-12T12:00:00Z`, `...+02:00`), a naive
/// `YYYY-MM-DDTHH:MM:SS` and a bare date, the last two read as UTC.
pub fn parse_match_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
