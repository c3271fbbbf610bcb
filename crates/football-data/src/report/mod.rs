//! Reporting helpers over normalized matches.
//!
//! Chart and table renderers live outside this crate; what they need from
//! it is data in a stable order:
//! - [`chronological`] - oldest first, undated matches leading
//! - [`goal_series`] - per-match goals for/against with axis labels
//! - [`FormSummary`] - aggregate record, goals and points

mod summary;

pub use summary::FormSummary;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::NormalizedMatch;

/// Characters of the opponent name used in labels of undated matches.
const OPPONENT_LABEL_CHARS: usize = 8;

/// Sort matches oldest first.
///
/// Undated matches sort before every dated one; ties keep input order.
pub fn chronological(matches: &[NormalizedMatch]) -> Vec<NormalizedMatch> {
    let mut sorted = matches.to_vec();
    // Option orders None before Some, and sort_by_key is stable.
    sorted.sort_by_key(|m| m.date);
    sorted
}

/// One point of a goals-per-match chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoalPoint {
    pub date: Option<DateTime<Utc>>,
    /// `dd/mm` for dated matches, `vs {opponent}...` otherwise.
    pub label: String,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
}

/// Chronological goal series for charts.
pub fn goal_series(matches: &[NormalizedMatch]) -> Vec<GoalPoint> {
    chronological(matches)
        .into_iter()
        .map(|m| GoalPoint {
            label: point_label(&m),
            date: m.date,
            goals_for: m.goals_for,
            goals_against: m.goals_against,
        })
        .collect()
}

fn point_label(m: &NormalizedMatch) -> String {
    match m.date {
        Some(date) => date.format("%d/%m").to_string(),
        None => {
            let short: String = m.opponent.chars().take(OPPONENT_LABEL_CHARS).collect();
            format!("vs {}...", short)
        }
    }
}
