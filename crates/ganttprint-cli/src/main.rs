//! ganttprint CLI - Gantt chart report printer
//!
//! Command-line interface for rendering schedules into paginated Gantt reports.

mod config;
mod synthetic;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use ganttprint_core::{Instant, PageSize, Renderer, Schedule};
use ganttprint_render::GanttLayoutEngine;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ganttprint")]
#[command(author, version, about = "Gantt chart report printer", long_about = None)]
struct Cli {
    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON schedule into an SVG report
    Render {
        /// Schedule file: a JSON array of items
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Render a generated demo schedule
    Demo {
        /// Number of items to generate
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Start of the first item, RFC 3339 (defaults to now)
        #[arg(long)]
        start: Option<Instant>,

        #[command(flatten)]
        report: ReportArgs,
    },
}

#[derive(Args)]
struct ReportArgs {
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,

    /// Paper size: A2, A3 or A4
    #[arg(short, long)]
    size: Option<PageSize>,

    /// TOML file with report options
    #[arg(short, long, env = "GANTTPRINT_CONFIG")]
    config: Option<PathBuf>,

    /// Append a summary page
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render { file, report } => {
            let schedule = load_schedule(&file)?;
            write_report(&schedule, &report)
        }
        Commands::Demo {
            count,
            start,
            report,
        } => {
            let schedule = synthetic::generate_staggered(count, start.unwrap_or_else(Utc::now));
            write_report(&schedule, &report)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_schedule(path: &Path) -> Result<Schedule> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule {}", path.display()))?;
    let schedule: Schedule = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse schedule {}", path.display()))?;
    info!(items = schedule.len(), path = %path.display(), "loaded schedule");
    Ok(schedule)
}

fn write_report(schedule: &Schedule, args: &ReportArgs) -> Result<()> {
    let options = config::load_options(args.config.as_deref())?;
    let options = config::apply_overrides(options, args.size, args.summary);
    let page_size = options.page_size;

    let engine = GanttLayoutEngine::with_options(options);
    let svg = engine.render(schedule).context("failed to render report")?;

    std::fs::write(&args.output, &svg)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(bytes = svg.len(), page_size = %page_size, "wrote report");

    println!(
        "Rendered {} items on {} to {}",
        schedule.len(),
        page_size,
        args.output.display()
    );
    Ok(())
}
