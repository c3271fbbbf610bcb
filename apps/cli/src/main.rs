mod commands;

use clap::{Parser, Subcommand};
use matchday_football_data::{
    AdvisoryLevel, FootballDataConfig, FootballDataService, LeagueCode, SeasonId,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "Football statistics from football-data.org", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the supported leagues
    Leagues,
    /// List the selectable seasons
    Seasons,
    /// Teams taking part in a league season
    Teams {
        /// League code (PL, PD, SA, BL1, FL1)
        league: LeagueCode,
        /// Season start year
        #[arg(long)]
        season: Option<SeasonId>,
    },
    /// Details of a single team
    Team {
        /// football-data.org team id
        id: String,
    },
    /// Last finished matches of a team with a form summary
    Matches {
        /// football-data.org team id
        team_id: String,
        /// Season start year
        #[arg(long)]
        season: Option<SeasonId>,
        /// Number of finished matches to return
        #[arg(long)]
        limit: Option<usize>,
    },
    /// League table (overall standings)
    Standings {
        /// League code (PL, PD, SA, BL1, FL1)
        league: LeagueCode,
        /// Season start year
        #[arg(long)]
        season: Option<SeasonId>,
    },
}

/// Install the global subscriber. Logs go to stderr so stdout stays JSON.
fn init_tracing() {
    let log_format = std::env::var("MATCHDAY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = FootballDataConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!("FOOTBALL_DATA_KEY is not set, upstream requests will be rejected");
    }
    let service = FootballDataService::from_config(&config);

    let output = commands::run(cli.command, &service).await?;
    println!("{}", serde_json::to_string_pretty(&output.json)?);

    if let Some(advisory) = output.advisory {
        let level = match advisory.level {
            AdvisoryLevel::Warning => "warning",
            AdvisoryLevel::Error => "error",
        };
        eprintln!("{}: {}", level, advisory.message);
    }

    Ok(())
}
