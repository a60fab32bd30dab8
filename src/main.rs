//! Farm Timers CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use farm_timers::aggregator::{crop_panels, group_crops_by_type};
use farm_timers::models::{DurationTables, Impact, SuggestionThresholds};
use farm_timers::parser::parse_snapshot_from_file;
use farm_timers::{calculate_timers, derive_timers, now_millis, TimerOptions, TimerReport};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "farm-timers")]
#[command(about = "Derive farm countdowns from a captured Sunflower Land snapshot", long_about = None)]
#[command(version)]
struct Cli {
    /// Log derivation details (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every active timer, ready crops first
    Timers {
        /// Snapshot or stored session data (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Evaluate at this instant (epoch milliseconds) instead of now
        #[arg(long)]
        now: Option<i64>,

        /// Override the built-in growth/respawn tables (JSON)
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Also write a Markdown report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Show crops grouped by type
    Crops {
        /// Snapshot or stored session data (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Evaluate at this instant (epoch milliseconds) instead of now
        #[arg(long)]
        now: Option<i64>,

        /// Override the built-in growth/respawn tables (JSON)
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// Print the effective duration tables
    Tables {
        /// Tables file to merge over the defaults
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("{}", "❌ Failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "farm_timers=warn",
        1 => "farm_timers=debug",
        _ => "farm_timers=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Timers { input, now, tables, json, report } => {
            let tables = load_tables(tables.as_deref())?;
            let now = now.unwrap_or_else(now_millis);
            let result = load_report(&input, now, &tables)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }

            if let Some(path) = report {
                let markdown = farm_timers::report::generate_report(&result);
                std::fs::write(&path, markdown)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                println!("  - Report: {}", path.display());
            }
        }

        Commands::Crops { input, now, tables } => {
            let tables = load_tables(tables.as_deref())?;
            let now = now.unwrap_or_else(now_millis);
            let snapshot = parse_snapshot_from_file(&input)
                .with_context(|| format!("Failed to load snapshot from {}", input.display()))?;
            let timers = derive_timers(&snapshot, now, &tables);

            let panels = crop_panels(group_crops_by_type(&timers, now));
            if panels.is_empty() {
                println!("{}", "No crops planted.".yellow());
            }
            for panel in panels {
                println!("{} {} ({}) {}", panel.icon, panel.name.bold(), panel.count, panel.stats.dimmed());
                for item in &panel.items {
                    let status = if item.is_ready {
                        item.status.green()
                    } else {
                        item.status.normal()
                    };
                    println!("    {} - {}", item.label, status);
                }
                println!();
            }
        }

        Commands::Tables { tables } => {
            let tables = load_tables(tables.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&tables)?);
        }
    }

    Ok(())
}

fn load_tables(path: Option<&Path>) -> Result<DurationTables> {
    match path {
        Some(path) => Ok(DurationTables::from_path(path)?),
        None => Ok(DurationTables::builtin().clone()),
    }
}

fn load_report(input: &Path, now: i64, tables: &DurationTables) -> Result<TimerReport> {
    let snapshot = parse_snapshot_from_file(input)
        .with_context(|| format!("Failed to load snapshot from {}", input.display()))?;
    let options = TimerOptions {
        tables,
        thresholds: SuggestionThresholds::default(),
    };
    Ok(calculate_timers(Some(&snapshot), now, &options))
}

fn print_report(report: &TimerReport) {
    println!("{}", "🌻 Farm Timers".bold().blue());
    println!("{}", "=".repeat(50).blue());
    println!();

    if report.timers.is_empty() {
        println!("{}", "No active timers.".yellow());
    }
    for timer in &report.timers {
        if timer.is_ready {
            println!("  {} {}", "✅ READY".green().bold(), timer.label);
        } else {
            println!("  ⏳ {:>8}  {}", timer.remaining_formatted.cyan(), timer.label);
        }
    }

    if !report.scheduled_activities.is_empty() {
        println!();
        println!("{}", "📅 Upcoming:".bold());
        for activity in report.scheduled_activities.iter().take(5) {
            println!("  - {}", activity.name);
        }
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("{}", "💡 Suggestions:".yellow().bold());
        for suggestion in &report.suggestions {
            let impact = match suggestion.impact {
                Impact::High => suggestion.impact.to_string().red(),
                Impact::Medium => suggestion.impact.to_string().yellow(),
                Impact::Low => suggestion.impact.to_string().blue(),
            };
            println!("  [{}] {}", impact, suggestion.title.bold());
            println!("    {}", suggestion.description.dimmed());
        }
    }
}
