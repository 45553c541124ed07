//! The `build` command: fetch every section and write the static page.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::api::GithubClient;
use crate::config::GlobalConfig;
use crate::render::render_html;
use crate::sections::{SectionOutcome, builtin_sections, fetch_all_sections};

/// Arguments for `sandboxes build`.
#[derive(Args)]
pub struct BuildArgs {
    /// Where to write the rendered page
    #[arg(short, long, default_value = "dist/index.html", value_name = "PATH")]
    output: PathBuf,
}

impl BuildArgs {
    /// Fetch all sections concurrently, render, and write the page.
    ///
    /// Section failures are rendered inline on the page rather than failing
    /// the build; only rendering or writing the output is fatal.
    pub async fn execute(self, config: &GlobalConfig, quiet: bool) -> Result<()> {
        let client = GithubClient::new(config.github_token.clone())?;
        debug!(authenticated = client.is_authenticated(), "fetching sections");

        let sections = builtin_sections(&config.api_base);
        let reports = fetch_all_sections(&client, &sections).await;
        let html = render_html(&reports)?;

        if let Some(parent) = self.output.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }
        tokio::fs::write(&self.output, html)
            .await
            .with_context(|| format!("failed to write page: {}", self.output.display()))?;

        if !quiet {
            let failed = reports
                .iter()
                .filter(|r| matches!(r.outcome, SectionOutcome::Failed { .. }))
                .count();
            println!("{} {}", "Wrote".green().bold(), self.output.display());
            if failed > 0 {
                println!(
                    "{} {failed} section(s) failed and render as inline errors",
                    "warning:".yellow().bold()
                );
            }
        }

        Ok(())
    }
}
