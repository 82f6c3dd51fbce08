use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use event_standings::compute_standings;
use event_standings::config::AppConfig;
use event_standings::models::{ScoringMetric, Standings, TeamId};
use event_standings::scope::{Scope, ScopeRequest};
use event_standings::storage::{Dataset, StorageConfig};

#[derive(Parser)]
#[command(name = "event-standings")]
#[command(about = "Season standings for event-based sports")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ScopeArgs {
    /// Scope kind: sport, sport-without-waitlist, league, league-waitlist,
    /// league-without-waitlist, division, team, group, sport-event-tournament
    #[arg(long)]
    scope: String,

    /// ID of the scope entity
    #[arg(long)]
    id: String,

    /// Metric to rank by, in precedence order (repeatable)
    #[arg(long = "metric")]
    metrics: Vec<String>,

    /// Tournament round (0 = all rounds)
    #[arg(long, default_value = "0")]
    round: u32,

    /// Team taking part in the tournament (repeatable)
    #[arg(long = "tournament-team")]
    tournament_teams: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every team in a scope
    Rank {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Print the standings as JSON
        #[arg(long)]
        json: bool,

        /// Do not prefix team labels with their rank
        #[arg(long)]
        no_numbers: bool,
    },

    /// Show one team's standing within a scope
    Team {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Team to look up
        #[arg(long)]
        team_id: String,

        /// Print the team record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported standing metrics
    Metrics,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting event-standings v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Rank {
            scope,
            json,
            no_numbers,
        } => {
            let standings = run_standings(&config, &scope)?;
            let numbered = config.standings.numbered_names && !no_numbers;

            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                print_standings(&standings, numbered);
            }
        }

        Commands::Team {
            scope,
            team_id,
            json,
        } => {
            let standings = run_standings(&config, &scope)?;
            let team_id = TeamId::from(team_id);

            let Some(team) = standings.find_team(&team_id) else {
                anyhow::bail!("Team {} is not part of {} {}", team_id, scope.scope, scope.id);
            };

            if json {
                println!("{}", serde_json::to_string_pretty(team)?);
            } else {
                println!("\n=== {} ===", team.team_name);
                println!("Rank:          {} of {}", team.rank, team.total_teams);
                println!("Events:        {}", team.number_of_events());
                for &metric in &standings.metrics {
                    println!(
                        "{:<15}{}",
                        format!("{}:", metric.display_name()),
                        event_standings::calculate::display_value(team, metric, standings.time_based)
                    );
                }
                if team.is_replaced {
                    println!("(replaced)");
                }
            }
        }

        Commands::Metrics => {
            println!("\n=== Standing Metrics ===");
            for metric in ScoringMetric::ALL {
                println!(
                    "{:<10}{:<10}{:<28}{:?}",
                    metric.code(),
                    metric.display_name(),
                    metric.description(),
                    metric.data_kind()
                );
            }
        }
    }

    Ok(())
}

/// Resolve the scope from storage, then score and rank it.
fn run_standings(config: &AppConfig, args: &ScopeArgs) -> Result<Standings> {
    let scope: Scope = args.scope.parse()?;
    let request = ScopeRequest::new(scope, args.id.as_str())
        .with_round(args.round)
        .with_tournament_teams(
            args.tournament_teams
                .iter()
                .map(|id| TeamId::from(id.as_str()))
                .collect(),
        );

    let metrics: Vec<ScoringMetric> = if args.metrics.is_empty() {
        config.standings.metrics()?
    } else {
        args.metrics
            .iter()
            .map(|m| m.parse::<ScoringMetric>())
            .collect::<Result<_, _>>()?
    };

    let storage = StorageConfig::new(config.data_dir.clone());
    let dataset = Dataset::load(&storage)?;
    let resolved = dataset.resolve(&request)?;

    Ok(compute_standings(&request, resolved, &metrics))
}

fn print_standings(standings: &Standings, numbered: bool) {
    println!(
        "\n=== Standings: {} {} ===",
        standings.scope, standings.entity_id
    );

    let mut header = format!("{:<24}", "Team");
    for metric in &standings.metrics {
        header.push_str(&format!("{:>10}", metric.display_name()));
    }
    println!("{}", header);

    for row in standings.rows(numbered) {
        let mut line = format!("{:<24}", row.label);
        for (_, value) in &row.values {
            line.push_str(&format!("{:>10}", value));
        }
        if row.is_replaced {
            line.push_str("  (replaced)");
        }
        println!("{}", line);
    }

    println!("\nOrder: {}", standings.order_by);
    println!("Computed at {}", standings.computed_at.format("%Y-%m-%d %H:%M:%S UTC"));
}
