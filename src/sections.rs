//! Section catalog and concurrent per-section fetching.
//!
//! The page is made of independent sections (template gallery, in-repo
//! examples, documentation code samples). Each section issues its own
//! fetches and fails on its own: a [`SectionOutcome::Failed`] never cancels
//! or affects sibling sections, which fetch concurrently. Nested child
//! fetches are sequenced after their parent listing is known, but run
//! concurrently with each other.

use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{GithubClient, Listing};
use crate::core::SandboxesError;
use crate::listing::{DisplayRecord, assemble_flat, assemble_nested, sort_records};

/// How a section's listing is fetched and assembled.
#[derive(Debug, Clone)]
pub enum FetchMode {
    /// One flat directory listing of category directories.
    Flat {
        /// Contents API URL returning the directory array
        contents_url: String,
    },
    /// A directory listing of parent categories, then one tree listing per
    /// parent.
    Nested {
        /// Contents API URL returning the parent directory array
        contents_url: String,
        /// Branch used to reconstruct browseable URLs (tree API URLs carry
        /// only object ids)
        branch: String,
    },
}

/// A section of the page: identity plus fetch instructions.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    /// Stable section name, usable as a `--section` filter
    pub name: String,
    /// Human-readable section heading
    pub title: String,
    /// Fetch and assembly mode
    pub mode: FetchMode,
    /// Raw paths/names to drop from the listing
    pub ignore: Vec<String>,
}

/// Terminal state of one section after fetching.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SectionOutcome {
    /// Records assembled and sorted, ready to render
    Loaded {
        /// The assembled display records
        records: Vec<DisplayRecord>,
    },
    /// The section failed; siblings are unaffected
    Failed {
        /// Short message for inline display
        error: String,
    },
}

/// A section's identity together with its fetch outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    /// Stable section name
    pub name: String,
    /// Human-readable section heading
    pub title: String,
    /// What happened
    #[serde(flatten)]
    pub outcome: SectionOutcome,
}

/// The built-in section catalog, mirroring the listing page.
pub fn builtin_sections(api_base: &str) -> Vec<SectionSpec> {
    vec![
        SectionSpec {
            name: "templates".to_string(),
            title: "Create InstantSearch App templates".to_string(),
            mode: FetchMode::Flat {
                contents_url: format!(
                    "{api_base}/repos/algolia/create-instantsearch-app/contents?ref=templates"
                ),
            },
            ignore: Vec::new(),
        },
        SectionSpec {
            name: "examples".to_string(),
            title: "InstantSearch.js examples".to_string(),
            mode: FetchMode::Flat {
                contents_url: format!(
                    "{api_base}/repos/algolia/instantsearch.js/contents/examples?ref=master"
                ),
            },
            ignore: Vec::new(),
        },
        SectionSpec {
            name: "doc-code-samples".to_string(),
            title: "Documentation code samples".to_string(),
            mode: FetchMode::Nested {
                contents_url: format!(
                    "{api_base}/repos/algolia/doc-code-samples/contents?ref=master"
                ),
                branch: "master".to_string(),
            },
            ignore: vec![".github".to_string()],
        },
    ]
}

/// Fetch every section concurrently. Failures stay local to their section.
pub async fn fetch_all_sections(
    client: &GithubClient,
    specs: &[SectionSpec],
) -> Vec<SectionReport> {
    join_all(specs.iter().map(|spec| fetch_section(client, spec))).await
}

/// Fetch one section, converting any error into a terminal display state.
pub async fn fetch_section(client: &GithubClient, spec: &SectionSpec) -> SectionReport {
    let outcome = match try_fetch(client, spec).await {
        Ok(records) => {
            info!(section = %spec.name, count = records.len(), "section loaded");
            SectionOutcome::Loaded { records }
        }
        Err(err) => {
            warn!(section = %spec.name, error = %err, "section failed");
            SectionOutcome::Failed { error: failure_message(&err) }
        }
    };

    SectionReport { name: spec.name.clone(), title: spec.title.clone(), outcome }
}

async fn try_fetch(
    client: &GithubClient,
    spec: &SectionSpec,
) -> Result<Vec<DisplayRecord>, SandboxesError> {
    match &spec.mode {
        FetchMode::Flat { contents_url } => {
            match client.fetch_listing(contents_url).await? {
                Listing::Directory(entries) => assemble_flat(&entries, &spec.ignore),
                Listing::Tree(_) => Err(SandboxesError::MalformedResponse {
                    reason: format!(
                        "{contents_url} returned a tree listing where a directory array was expected"
                    ),
                }),
            }
        }
        FetchMode::Nested { contents_url, branch } => {
            let parents = match client.fetch_listing(contents_url).await? {
                Listing::Directory(entries) => entries,
                Listing::Tree(_) => {
                    return Err(SandboxesError::MalformedResponse {
                        reason: format!(
                            "{contents_url} returned a tree listing where a directory array was expected"
                        ),
                    });
                }
            };

            let child_fetches = parents
                .iter()
                .filter(|parent| parent.entry_type == "dir")
                .filter(|parent| !spec.ignore.iter().any(|i| i == &parent.path))
                .map(|parent| async move {
                    let git_url = parent.git_url.as_deref().ok_or_else(|| {
                        SandboxesError::MalformedResponse {
                            reason: format!(
                                "directory entry '{}' is missing git_url",
                                parent.name
                            ),
                        }
                    })?;
                    match client.fetch_listing(git_url).await? {
                        Listing::Tree(tree) => {
                            assemble_nested(&tree, &parent.path, branch, &spec.ignore)
                        }
                        Listing::Directory(_) => Err(SandboxesError::MalformedResponse {
                            reason: format!(
                                "{git_url} returned a directory array where a tree listing was expected"
                            ),
                        }),
                    }
                });

            let mut records = Vec::new();
            for result in join_all(child_fetches).await {
                records.extend(result?);
            }
            // Per-parent assembly already sorted each group; re-sort so the
            // ordering holds across the whole section. Stable, so relative
            // order within groups is preserved.
            sort_records(&mut records);
            Ok(records)
        }
    }
}

/// Short inline message for a failed section: the error's message text when
/// available, otherwise "unknown". (API errors already carry the remote
/// payload's message field.)
fn failure_message(err: &SandboxesError) -> String {
    let message = err.to_string();
    if message.is_empty() { "unknown".to_string() } else { message }
}
