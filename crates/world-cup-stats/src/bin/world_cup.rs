//! World Cup Dashboard CLI
//!
//! Terminal front-end for the finals table and the two lookups.
//!
//! Usage:
//!   world-cup table
//!   world-cup wins Brazil
//!   world-cup finalists 2018 --json

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use world_cup_stats::{describe_year, wins_message, QueryService};

#[derive(Parser, Debug)]
#[command(
    name = "world-cup",
    about = "FIFA World Cup winners and finalists, 1930 to 2022"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Countries that have won the World Cup, most titles first
    Table,
    /// Choropleth rows: ISO code, country, wins
    Map,
    /// Number of titles for a country
    Wins { country: String },
    /// Winner and runner-up of a tournament
    Finalists {
        #[arg(allow_negative_numbers = true)]
        year: i64,
    },
    /// Tournament years on record
    Years,
    /// Summary figures
    Stats,
}

#[derive(Serialize)]
struct CountryWins<'a> {
    country: &'a str,
    wins: u32,
    message: String,
}

#[derive(Serialize)]
struct YearFinalists {
    year: i64,
    finalists: Option<world_cup_stats::Finalists>,
    message: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let service = QueryService::fifa_world_cup();
    debug!(command = ?args.command, "running");

    match args.command {
        Command::Table => {
            if args.json {
                print_json(&service.win_counts())?;
            } else {
                println!("{:<12} {:>4}", "Country", "Wins");
                for entry in service.win_counts() {
                    println!("{:<12} {:>4}", entry.country, entry.wins);
                }
            }
        }
        Command::Map => {
            let rows: Vec<_> = service
                .win_counts()
                .iter()
                .filter_map(|entry| Some((entry.geo_code.as_ref()?, entry)))
                .collect();
            if args.json {
                let rows: Vec<_> = rows
                    .iter()
                    .map(|(iso, entry)| {
                        serde_json::json!({ "iso": iso, "country": entry.country, "wins": entry.wins })
                    })
                    .collect();
                print_json(&rows)?;
            } else {
                for (iso, entry) in rows {
                    println!("{} {:<12} {:>4}", iso, entry.country, entry.wins);
                }
            }
        }
        Command::Wins { country } => {
            let wins = service.wins_for(&country)?;
            let message = wins_message(&country, wins);
            if args.json {
                print_json(&CountryWins {
                    country: &country,
                    wins,
                    message,
                })?;
            } else {
                println!("{}", message);
            }
        }
        Command::Finalists { year } => {
            let message = describe_year(&service, year);
            if args.json {
                print_json(&YearFinalists {
                    year,
                    finalists: service.finalists_for(year).ok(),
                    message,
                })?;
            } else {
                println!("{}", message);
            }
        }
        Command::Years => {
            let years: Vec<u16> = service.years().collect();
            if args.json {
                print_json(&years)?;
            } else {
                for year in years {
                    println!("{}", year);
                }
            }
        }
        Command::Stats => {
            let stats = service.stats();
            if args.json {
                print_json(&stats)?;
            } else {
                println!("Tournaments:        {}", stats.editions);
                println!("Distinct winners:   {}", stats.distinct_winners);
                println!("Distinct finalists: {}", stats.distinct_finalists);
                if let (Some(first), Some(last)) = (stats.first_year, stats.last_year) {
                    println!("Span:               {}-{}", first, last);
                }
                if let Some(leader) = stats.leader {
                    println!("Most titles:        {} ({})", leader.country, leader.wins);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
