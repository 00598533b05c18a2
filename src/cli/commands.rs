//! Command implementations for the METAR reader CLI
//!
//! This module contains the command execution logic, output rendering and
//! logging setup for the CLI interface.

use crate::cli::args::{Args, Commands, DecodeArgs, FetchArgs, GlobalArgs, OutputFormat};
use crate::config::MetarConfig;
use crate::decoder::decode;
use crate::fetch::MetarClient;
use crate::models::{DecodeResult, StationCode};
use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use tracing::{debug, info};

/// Main command runner
///
/// Sets up logging, then dispatches to the subcommand. `args.command` must be
/// present; the binary shows help instead of calling this without one.
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args.global)?;
    debug!("Command line arguments: {:?}", args);

    match &args.command {
        Some(Commands::Decode(decode_args)) => run_decode(decode_args, args.global.format),
        Some(Commands::Fetch(fetch_args)) => run_fetch(fetch_args, &args.global).await,
        None => anyhow::bail!("No command given"),
    }
}

/// Decode report text from the arguments or stdin
fn run_decode(args: &DecodeArgs, format: OutputFormat) -> Result<()> {
    let raw = match args.report_text() {
        Some(text) => text,
        None => io::read_to_string(io::stdin()).context("Failed to read METAR from stdin")?,
    };

    let result = decode(&raw)?;
    print_result(&result, format)
}

/// Fetch the latest report for a station and decode it
async fn run_fetch(args: &FetchArgs, global: &GlobalArgs) -> Result<()> {
    let station = StationCode::parse(&args.station)?;
    let config = global.apply_to(MetarConfig::from_env());
    debug!("Loaded configuration: {:?}", config);

    let client = MetarClient::new(config)?;
    info!("Fetching METAR for {}", station);
    let raw = client.fetch_raw_report(&station).await?;

    let result = decode(&raw)?;
    print_result(&result, global.format)
}

/// Write a decoded report to stdout in the requested format
fn print_result(result: &DecodeResult, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("Failed to write to stdout")?;
    Ok(())
}

/// Human-readable rendering: summary, decoded details, then the raw report
pub fn render_text(result: &DecodeResult) -> String {
    let mut lines = vec![format!(
        "{} {}",
        result.details.station.bright_cyan().bold(),
        result.summary.bright_white()
    )];

    for (label, value) in result.details.present() {
        lines.push(format!("  {:<12} {}", label.bright_yellow(), value));
    }

    lines.push(format!("  {:<12} {}", "Raw".bright_black(), result.raw.trim()));
    lines.join("\n")
}

/// Set up structured logging based on CLI arguments
fn setup_logging(global: &GlobalArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = global.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_reader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
