//! The `list` command: print assembled sections.
//!
//! Two sources:
//! - **Online** (default): fetch the built-in sections, optionally filtered
//!   to one via `--section`.
//! - **Offline** (`--input`): assemble a saved API response from disk. The
//!   file's shape decides the mode — a directory array assembles flat, a
//!   tree object assembles nested and requires `--parent`.

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

use crate::api::{GithubClient, Listing};
use crate::config::GlobalConfig;
use crate::listing::{assemble_flat, assemble_nested};
use crate::render::{render_json, render_terminal};
use crate::sections::{SectionOutcome, SectionReport, builtin_sections, fetch_all_sections};

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal listing
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for `sandboxes list`.
#[derive(Args)]
pub struct ListArgs {
    /// Only this section (by name, e.g. "templates")
    #[arg(short, long, value_name = "NAME")]
    section: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Assemble a saved API response from disk instead of fetching
    #[arg(long, value_name = "FILE", conflicts_with = "section")]
    input: Option<PathBuf>,

    /// Parent category path for nested (tree) input
    #[arg(long, value_name = "PATH", requires = "input")]
    parent: Option<String>,

    /// Branch for URL reconstruction with nested input
    #[arg(long, default_value = "master", requires = "input")]
    branch: String,

    /// Raw paths/names to drop from the listing
    #[arg(long, value_name = "NAME")]
    ignore: Vec<String>,
}

impl ListArgs {
    /// Assemble the requested sections and print them.
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let reports = match &self.input {
            Some(path) => vec![self.assemble_from_file(path).await?],
            None => self.fetch_online(config).await?,
        };

        match self.format {
            OutputFormat::Text => print!("{}", render_terminal(&reports)),
            OutputFormat::Json => println!("{}", render_json(&reports)?),
        }

        Ok(())
    }

    async fn fetch_online(&self, config: &GlobalConfig) -> Result<Vec<SectionReport>> {
        let client = GithubClient::new(config.github_token.clone())?;
        let mut sections = builtin_sections(&config.api_base);

        if let Some(name) = &self.section {
            sections.retain(|s| &s.name == name);
            if sections.is_empty() {
                bail!(
                    "unknown section '{name}' (available: templates, examples, doc-code-samples)"
                );
            }
        }

        Ok(fetch_all_sections(&client, &sections).await)
    }

    /// Offline mode: parse a saved response and run the assembler directly.
    /// Assembly errors are fatal here, not per-section display states — the
    /// caller asked for exactly this input.
    async fn assemble_from_file(&self, path: &Path) -> Result<SectionReport> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read input file: {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&contents)
            .with_context(|| format!("input file is not JSON: {}", path.display()))?;

        let records = match Listing::from_value(value)? {
            Listing::Directory(entries) => assemble_flat(&entries, &self.ignore)?,
            Listing::Tree(tree) => {
                let Some(parent) = &self.parent else {
                    bail!("--parent is required when the input file is a tree listing");
                };
                assemble_nested(&tree, parent, &self.branch, &self.ignore)?
            }
        };

        let title = path
            .file_stem()
            .map_or_else(|| "input".to_string(), |s| s.to_string_lossy().into_owned());
        Ok(SectionReport {
            name: title.clone(),
            title,
            outcome: SectionOutcome::Loaded { records },
        })
    }
}
