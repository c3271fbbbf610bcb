use serde::Serialize;

use crate::models::{MatchResult, NormalizedMatch};

/// Aggregate record over a set of normalized matches.
///
/// Goal totals only count sides that are present; a match with an unknown
/// result still counts as played and towards the home/away split.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormSummary {
    pub played: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub unknown: usize,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub home: usize,
    pub away: usize,
    pub points: u32,
    /// Result codes in input order, `-` for unknown results.
    pub form: String,
}

impl FormSummary {
    pub fn from_matches(matches: &[NormalizedMatch]) -> Self {
        let mut summary = matches.iter().fold(Self::default(), |mut acc, m| {
            acc.played += 1;
            match m.result {
                MatchResult::Win => acc.wins += 1,
                MatchResult::Draw => acc.draws += 1,
                MatchResult::Loss => acc.losses += 1,
                MatchResult::Unknown => acc.unknown += 1,
            }
            acc.goals_for += m.goals_for.unwrap_or(0);
            acc.goals_against += m.goals_against.unwrap_or(0);
            if m.is_home {
                acc.home += 1;
            } else {
                acc.away += 1;
            }
            acc.points += m.result.points();
            acc.form.push(m.result.code().unwrap_or('-'));
            acc
        });

        summary.goal_difference = i64::from(summary.goals_for) - i64::from(summary.goals_against);
        summary
    }

    /// Share of decided matches that were won, `None` with no decided match.
    pub fn win_rate(&self) -> Option<f64> {
        let decided = self.wins + self.draws + self.losses;
        (decided > 0).then(|| self.wins as f64 / decided as f64)
    }
}
