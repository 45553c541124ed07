//! The `auth` command: manage the stored GitHub token.
//!
//! The token raises API rate limits; it is obtained out of band (a personal
//! access token or an OAuth flow) and only stored here. `show` prints a
//! masked form only — the full token never leaves the config file.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::Path;

use crate::config::GlobalConfig;

/// Arguments for `sandboxes auth`.
#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    command: AuthCommand,
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Store a token in the global config
    Set {
        /// The GitHub token
        token: String,
    },
    /// Show whether a token is configured (masked)
    Show,
    /// Remove the stored token
    Clear,
}

impl AuthArgs {
    /// Apply the auth subcommand to the loaded config and persist it.
    pub async fn execute(self, mut config: GlobalConfig, config_path: &Path) -> Result<()> {
        match self.command {
            AuthCommand::Set { token } => {
                config.github_token = Some(token);
                config.save_to(config_path).await?;
                println!(
                    "{} token saved to {}",
                    "success:".green().bold(),
                    config_path.display()
                );
            }
            AuthCommand::Show => match config.masked_token() {
                Some(masked) => println!("Token configured: {masked}"),
                None => println!("No token configured (requests are anonymous)"),
            },
            AuthCommand::Clear => {
                config.github_token = None;
                config.save_to(config_path).await?;
                println!("{} token removed", "success:".green().bold());
            }
        }
        Ok(())
    }
}
