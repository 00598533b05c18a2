//! Command-line argument definitions for the METAR reader
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::MetarConfig;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// CLI arguments for the METAR reader
///
/// Turns cryptic aviation weather reports into plain-English descriptions,
/// either from report text you supply or fetched live for an airport.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-reader",
    version,
    about = "Decode METAR aviation weather reports into plain English",
    long_about = "Decodes METAR aviation weather reports into human-readable weather: \
                  observation time, wind, visibility, weather, clouds, temperature, \
                  dewpoint and pressure, plus a one-line summary. Reports can be given \
                  directly or fetched for an airport from the Aviation Weather Center."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode METAR text given on the command line or on stdin
    Decode(DecodeArgs),
    /// Fetch and decode the latest METAR for an airport
    Fetch(FetchArgs),
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Raw METAR groups; read from stdin when omitted
    ///
    /// Groups are joined with single spaces, so the report can be passed
    /// quoted or unquoted. Intensity groups such as `-RA` are accepted as-is,
    /// so global options must come before `decode`.
    #[arg(
        value_name = "METAR",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Raw METAR groups, read from stdin when omitted. Everything after \
                `decode` is report text, so put global options such as -v or \
                --format before the subcommand"
    )]
    pub report: Vec<String>,
}

impl DecodeArgs {
    /// Report text from the arguments, if any were given
    pub fn report_text(&self) -> Option<String> {
        if self.report.is_empty() {
            None
        } else {
            Some(self.report.join(" "))
        }
    }
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Four-character ICAO airport code (e.g. KHIO), case-insensitive
    #[arg(value_name = "STATION")]
    pub station: String,
}

/// Options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct GlobalArgs {
    /// Output format for decoded reports
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        global = true,
        help = "Output format for decoded reports"
    )]
    pub format: OutputFormat,

    /// METAR API endpoint (overrides METAR_API_URL)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides METAR_TIMEOUT_SECS)
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}

impl GlobalArgs {
    /// Get log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Apply command-line overrides on top of an existing configuration
    pub fn apply_to(&self, config: MetarConfig) -> MetarConfig {
        let config = match &self.api_url {
            Some(url) => config.with_api_base_url(url.clone()),
            None => config,
        };

        match self.timeout_secs {
            Some(secs) => config.with_timeout_secs(secs),
            None => config,
        }
    }
}
