//! # Oarview CLI
//!
//! Command-line interface for oarview, a friendlier replacement for
//! `oarstat`. This crate provides argument parsing, site resolution and the
//! two reporting modes (job queue and node availability).

// Re-export all modules
pub mod commands;
pub mod config;
pub mod display;
pub mod site;

// Re-export common types
pub use config::Config;

use clap::Parser;
use thiserror::Error;

/// Application-level errors for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Core domain error: {0}")]
    Core(#[from] oarview_core::CoreError),

    #[error("API error: {0}")]
    Api(#[from] oarview_api::ApiError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid site: {0} (expected one of: {sites})", sites = site::SITES.join(", "))]
    InvalidSite(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Process exit code for this failure. An unrecognized site has its own
    /// code so wrapper scripts can tell a misconfiguration from an outage.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidSite(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Main CLI struct. A single command with mode flags, no subcommands.
#[derive(Parser, Debug)]
#[command(name = "oarview")]
#[command(about = "OAR queue and node status tables, easier on the eyes than oarstat")]
#[command(version)]
pub struct Cli {
    /// Max text width for names, comments and core lists
    #[arg(short = 'n', long, default_value_t = 20)]
    pub textmax: usize,

    /// Max rows to display (also sent to the API as a query limit)
    #[arg(short = 'm', long)]
    pub results: Option<usize>,

    /// Site to query; auto-detected from the local hostname when omitted
    #[arg(short, long)]
    pub site: Option<String>,

    /// Show node availability instead of the job queue
    #[arg(long)]
    pub free: bool,

    /// Include nodes whose hard state is "dead" (node mode only)
    #[arg(long)]
    pub dead: bool,

    /// Only show jobs owned by this user
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Main CLI runner - parse, resolve the site, route to the right mode.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new()?;
    let site = site::resolve_site(cli.site.as_deref())?;

    if cli.free {
        commands::nodes::handle(&cli, &site, &config).await
    } else {
        commands::jobs::handle(&cli, &site, &config).await
    }
}
