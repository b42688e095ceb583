mod config;
mod ingest;
mod models;
mod presentation;
mod storage;
mod types;

use std::fs;
use std::io::stderr;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Settings, DEFAULT_CONFIG_PATH, DEFAULT_CURRENCY_SYMBOL};
use crate::ingest::{IngestEngine, IngestOutcome};
use crate::presentation::Dashboard;
use crate::storage::CsvArtifactStore;

/// Cleans per-region sales files for one product and charts its daily sales.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter, price and write the sales summary from a directory of transaction CSVs
    Ingest {
        /// YAML configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf
    },
    /// Write the dashboard for a sales summary as a standalone HTML page
    Render {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, default_value = "sales_dashboard.html")]
        output: PathBuf
    },
    /// Serve the dashboard for a sales summary over HTTP
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, default_value = "127.0.0.1:8050")]
        address: String
    }
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Sales summary written by `ingest`
    #[arg(long, default_value = "pink_morsel_sales_summary.csv")]
    input: PathBuf,

    /// Product name shown in headings (derived from the summary file name by default)
    #[arg(long)]
    title: Option<String>
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    match cli.command {
        Command::Ingest { config } => run_ingest(config).await,
        Command::Render { source, output } => run_render(source, output),
        Command::Serve { source, address } => run_serve(source, address).await
    }
}

async fn run_ingest(config_path: PathBuf) -> Result<()> {
    let settings = Settings::from_file(&config_path)
        .with_context(|| format!("Could not load configuration from '{}'", config_path.display()))?;

    let store = CsvArtifactStore::new(settings.artifact_path());
    let engine = IngestEngine::new(settings);

    let timer = Instant::now();
    let outcome = spawn_blocking(move || engine.run(&store)).await??;
    let duration = timer.elapsed();

    match outcome {
        IngestOutcome::Written { path, rows, rule } => {
            info!("Saved {rows} record(s) priced in '{}' to {} in {duration:?}", rule.symbol, path.display());
        }
        IngestOutcome::Empty => {
            info!("Processing complete in {duration:?}, no output written");
        }
    }

    Ok(())
}

fn run_render(source: SourceArgs, output: PathBuf) -> Result<()> {
    let page = load_dashboard(source).render_page()?;

    fs::write(&output, page)
        .with_context(|| format!("Could not write dashboard to '{}'", output.display()))?;

    info!("Dashboard written to {}", output.display());

    Ok(())
}

async fn run_serve(source: SourceArgs, address: String) -> Result<()> {
    //NOTE: Data is loaded and rendered once here; requests only ever read the finished page
    let page = load_dashboard(source).render_page()?;

    presentation::serve(&address, page).await
        .with_context(|| format!("Dashboard server failed on '{address}'"))
}

fn load_dashboard(source: SourceArgs) -> Dashboard {
    let store = CsvArtifactStore::new(source.input);

    Dashboard::initialize(&store, DEFAULT_CURRENCY_SYMBOL, source.title)
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout is left free so the commands stay pipeable; every log line goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
