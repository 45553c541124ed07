//! Wire models for the listing API.
//!
//! The core only ever reads two response shapes: a flat array of directory
//! entries (`GET /repos/{owner}/{repo}/contents/{path}`) and a recursive
//! tree object (`GET /repos/{owner}/{repo}/git/trees/{sha}`). [`Listing`]
//! makes the two shapes first-class sum-type cases with exhaustive handling
//! instead of duck-typed truthiness checks.

use serde::{Deserialize, Serialize};

use crate::core::SandboxesError;

/// One item of a flat directory listing.
///
/// `html_url` and `git_url` are optional at the wire level: entries that get
/// filtered out by the `type` check may legitimately lack them, and the
/// assembler fails loudly if a *kept* entry is missing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Directory or file slug
    pub name: String,
    /// Path relative to the repository root
    #[serde(default)]
    pub path: String,
    /// Entry kind: `"dir"`, `"file"`, ...
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Source-hosting link for the entry
    #[serde(default)]
    pub html_url: Option<String>,
    /// API URL of the entry's git object (a tree URL for directories)
    #[serde(default)]
    pub git_url: Option<String>,
}

/// A recursive tree listing: `{ "tree": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeListing {
    /// Child nodes of the tree
    pub tree: Vec<TreeNode>,
    /// Whether the API truncated the listing
    #[serde(default)]
    pub truncated: bool,
}

/// One node of a tree listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Path relative to the tree root
    pub path: String,
    /// Node kind: `"tree"` or `"blob"`
    #[serde(rename = "type")]
    pub node_type: String,
    /// API URL of the node's git object
    #[serde(default)]
    pub url: Option<String>,
    /// Object id
    #[serde(default)]
    pub sha: String,
}

/// A parsed listing response, one variant per supported shape.
#[derive(Debug, Clone)]
pub enum Listing {
    /// Flat directory listing (top-level category mode)
    Directory(Vec<DirectoryEntry>),
    /// Recursive tree listing (nested mode)
    Tree(TreeListing),
}

impl Listing {
    /// Parse a raw JSON response body into a tagged listing.
    ///
    /// Anything that is neither an array nor an object with a `tree` key is
    /// a malformed response.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SandboxesError> {
        match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)
                .map(Listing::Directory)
                .map_err(|e| SandboxesError::MalformedResponse {
                    reason: format!("invalid directory listing: {e}"),
                }),
            serde_json::Value::Object(ref map) if map.contains_key("tree") => {
                serde_json::from_value(value).map(Listing::Tree).map_err(|e| {
                    SandboxesError::MalformedResponse {
                        reason: format!("invalid tree listing: {e}"),
                    }
                })
            }
            other => Err(SandboxesError::MalformedResponse {
                reason: format!(
                    "expected a directory array or a {{tree: [...]}} object, got {}",
                    value_kind(&other)
                ),
            }),
        }
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
