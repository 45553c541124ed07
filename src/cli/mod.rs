//! Command-line interface for the sandbox listing tool.
//!
//! Each command lives in its own module with its own argument struct and
//! execution logic:
//!
//! - `build` - fetch every section and write the static HTML page
//! - `list` - fetch sections (or assemble a saved response from disk) and
//!   print them to the terminal or as JSON
//! - `auth` - manage the stored GitHub token
//!
//! # Global flags
//!
//! - `--verbose` / `--quiet` - logging verbosity (mutually exclusive)
//! - `--config <path>` - use a specific config file instead of
//!   `~/.sandboxes/config.toml`
//!
//! # Usage
//!
//! ```bash
//! # Write the page to dist/index.html
//! sandboxes build
//!
//! # Print one section as JSON
//! sandboxes list --section templates --format json
//!
//! # Store a token to raise API rate limits
//! sandboxes auth set ghp_xxxxxxxxxxxx
//! ```

mod auth;
mod build;
mod list;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::GlobalConfig;

pub use auth::AuthArgs;
pub use build::BuildArgs;
pub use list::ListArgs;

/// Top-level CLI parser.
#[derive(Parser)]
#[command(name = "sandboxes", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress everything except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all sections and write the static HTML page
    Build(BuildArgs),
    /// Fetch and print sections, or assemble a saved API response
    List(ListArgs),
    /// Manage the stored GitHub token
    Auth(AuthArgs),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging, loads the global config once, and dispatches.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        let config_path = match &self.config {
            Some(path) => path.clone(),
            None => GlobalConfig::default_path()?,
        };
        let config = GlobalConfig::load_from(&config_path).await?;

        match self.command {
            Commands::Build(args) => args.execute(&config, self.quiet).await,
            Commands::List(args) => args.execute(&config).await,
            Commands::Auth(args) => args.execute(config, &config_path).await,
        }
    }

    /// Set up the tracing subscriber on stderr.
    ///
    /// `RUST_LOG` wins when set; otherwise `--verbose` maps to debug,
    /// `--quiet` to error, and the default is warn.
    fn init_logging(&self) {
        let fallback = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
