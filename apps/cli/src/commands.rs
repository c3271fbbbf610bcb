use matchday_football_data::{
    Advisory, FootballDataService, FormSummary, LeagueCode, NormalizedMatch, SeasonId, TeamId, TeamSummary,
};
use serde::Serialize;
use serde_json::Value;

use crate::Command;

#[derive(Serialize)]
struct LeagueEntry {
    code: &'static str,
    name: &'static str,
    display_name: &'static str,
}

#[derive(Serialize)]
struct SeasonEntry {
    id: SeasonId,
    label: String,
}

#[derive(Serialize)]
struct MatchReport {
    team_id: String,
    season: SeasonId,
    matches: Vec<NormalizedMatch>,
    summary: FormSummary,
    win_rate: Option<f64>,
}

/// JSON output of a command plus the advisory its fetch produced.
pub struct Output {
    pub json: Value,
    pub advisory: Option<Advisory>,
}

impl Output {
    fn local(json: Value) -> Self {
        Self {
            json,
            advisory: None,
        }
    }
}

/// Execute one subcommand.
pub async fn run(command: Command, service: &FootballDataService) -> anyhow::Result<Output> {
    let output = match command {
        Command::Leagues => {
            let leagues: Vec<LeagueEntry> = LeagueCode::all()
                .iter()
                .map(|league| LeagueEntry {
                    code: league.code(),
                    name: league.name(),
                    display_name: league.display_name(),
                })
                .collect();
            Output::local(serde_json::to_value(leagues)?)
        }
        Command::Seasons => {
            let seasons: Vec<SeasonEntry> = SeasonId::catalog()
                .into_iter()
                .map(|season| SeasonEntry {
                    label: season.label(),
                    id: season,
                })
                .collect();
            Output::local(serde_json::to_value(seasons)?)
        }
        Command::Teams { league, season } => {
            let fetched = service.get_teams_in_league(league, season.as_ref()).await;
            let summaries: Vec<TeamSummary> =
                fetched.value.iter().map(|team| team.summary()).collect();
            Output {
                json: serde_json::to_value(summaries)?,
                advisory: fetched.advisory,
            }
        }
        Command::Team { id } => {
            let fetched = service.get_team_by_id(&TeamId::from(id.trim())).await;
            Output {
                json: serde_json::to_value(fetched.value)?,
                advisory: fetched.advisory,
            }
        }
        Command::Matches {
            team_id,
            season,
            limit,
        } => {
            let team = TeamId::from(team_id.trim());
            let fetched = service
                .get_normalized_matches(&team, season.as_ref(), limit)
                .await;
            let summary = FormSummary::from_matches(&fetched.value);
            let report = MatchReport {
                team_id: team.as_key(),
                season: season.unwrap_or_default(),
                win_rate: summary.win_rate(),
                summary,
                matches: fetched.value,
            };
            Output {
                json: serde_json::to_value(report)?,
                advisory: fetched.advisory,
            }
        }
        Command::Standings { league, season } => {
            let fetched = service.get_league_standings(league, season.as_ref()).await;
            Output {
                json: serde_json::to_value(fetched.value)?,
                advisory: fetched.advisory,
            }
        }
    };

    Ok(output)
}
