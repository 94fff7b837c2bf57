//! CLI argument definitions for the demographics dashboard.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use demog_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "demog",
    version,
    about = "Demographics dashboard - nested gender bar charts from CSV statistics",
    long_about = "Load hiring, evaluation, staff, review, and symposium statistics and\n\
                  render them as nested Male/Female/Non-Binary bar charts.\n\n\
                  Reads one CSV file per dataset from the data directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: $DEMOG_CONFIG, then the platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the input CSV files (overrides the configuration).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging settings implied by the flags.
    ///
    /// `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the dashboard tabs with their categories and defaults.
    Panels,

    /// Print panels as tables.
    Show(ShowArgs),

    /// Write every chart as JSON.
    Export(ExportArgs),

    /// Read hiring stages from stdin and reprint the Hiring chart after each.
    Watch,

    /// Load and validate every input file.
    Check,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Tab to print (name or title); prints every tab when omitted.
    #[arg(long = "panel", value_name = "TAB")]
    pub panel: Option<String>,

    /// Category key to select before printing.
    #[arg(long = "key", value_name = "KEY", requires = "panel")]
    pub key: Option<String>,

    /// Show male/female fractions instead of counts.
    #[arg(long = "ratio", conflicts_with = "counts")]
    pub ratio: bool,

    /// Show raw counts even where the panel defaults to fractions.
    #[arg(long = "counts")]
    pub counts: bool,
}

impl ShowArgs {
    /// Ratio override from the flags, if any.
    pub fn ratio_override(&self) -> Option<bool> {
        if self.ratio {
            Some(true)
        } else if self.counts {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
