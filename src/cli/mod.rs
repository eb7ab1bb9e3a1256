use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, value_parser};

use crate::config::default::DEFAULT_SCAN_ENDPOINT;

/// urlcheck - Check a URL against a remote scanning service
#[derive(Parser, Debug)]
#[command(author, version, about = "urlcheck - Check a URL against a remote scanning service", long_about = None)]
pub struct Cli {
    /// Global log level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Log to file (in addition to stderr)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub log_file: bool,

    /// Log file path (default: ~/.urlcheck/urlcheck.log)
    #[arg(long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub log_file_path: Option<PathBuf>,

    /// Suppress non-error logs
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub quiet: bool,

    /// Save the scan result to a JSON file
    #[arg(short, long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Suppress stdout output (use with --output)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub no_stdout: bool,

    /// Scanning service endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_SCAN_ENDPOINT)]
    pub endpoint: String,

    /// Settings file path (default: ~/.urlcheck/settings.json)
    #[arg(long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub settings_file: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Command,
}

/// Log level
#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    pub fn to_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit one URL and show the verdict
    Check(CheckArgs),

    /// Prompt for URLs until quit (":theme" toggles the theme)
    Interactive,

    /// Show or toggle the color theme
    Theme(ThemeArgs),
}

/// Check arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// URL to check
    #[arg(required = true, value_parser = parse_required_url)]
    pub url: String,
}

/// Theme arguments
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Flip between dark and light and save the choice
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub toggle: bool,
}

/// The URL is free text; only blank input is rejected and the text is sent as typed.
pub fn parse_required_url(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("URL must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}
