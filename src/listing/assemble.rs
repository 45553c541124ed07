//! Assembly of raw listing entries into ordered display records.
//!
//! Two input shapes are supported:
//! - **Flat mode**: a top-level directory listing; only `"dir"` entries are
//!   kept, the category id comes from the entry name (minus a trailing
//!   version suffix), and URLs derive from the entry's `html_url`.
//! - **Nested mode**: a tree listing processed relative to a parent
//!   category; only `"tree"` nodes are kept, the id comes from the parent's
//!   path, and URLs are reconstructed from the node's API URL plus the
//!   parent path and branch.
//!
//! Both modes drop entries named by an ignore list, then sort ascending by
//! `(native, !is_family_member)`: non-native before native, family members
//! first within each group, original order otherwise (the sort is stable and
//! has no secondary key).

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::api::models::{DirectoryEntry, TreeListing};
use crate::core::SandboxesError;

use super::classify::classify;
use super::naming::{normalize_name, slugify};
use super::urls;

/// Trailing version suffix on category names, e.g. `react-instantsearch-2.x`.
static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d\.x$").unwrap());

/// The normalized, renderable unit handed to the rendering layer.
///
/// `id` is only ever used for icon lookup and classification; `name` is the
/// human-formatted display text. Records are recomputed on every fetch and
/// have no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Category key, used for icon lookup
    pub id: String,
    /// Human-readable display name
    pub name: String,
    /// Link into the first sandboxing service
    pub sandbox_url: String,
    /// Link into the alternate sandboxing service
    pub alt_sandbox_url: String,
    /// Canonical source link
    pub repo_url: String,
    /// No online sandbox; the card links straight to source
    pub native: bool,
    /// InstantSearch family membership, used only for the sort tie-break
    pub is_family_member: bool,
}

/// Assemble a flat directory listing into sorted display records.
///
/// Entries whose `type` is not `"dir"` are dropped before any field access,
/// so a file entry missing `html_url` is fine; a *kept* entry missing it is
/// a loud [`SandboxesError::MalformedResponse`].
pub fn assemble_flat(
    entries: &[DirectoryEntry],
    ignore: &[String],
) -> Result<Vec<DisplayRecord>, SandboxesError> {
    let mut records = Vec::new();

    for entry in entries.iter().filter(|e| e.entry_type == "dir") {
        if ignore.iter().any(|ignored| ignored == &entry.name) {
            continue;
        }

        let html_url = entry.html_url.as_deref().ok_or_else(|| {
            SandboxesError::MalformedResponse {
                reason: format!("directory entry '{}' is missing html_url", entry.name),
            }
        })?;
        let urls = urls::derive_flat(html_url)?;
        let classification = classify(&entry.name);

        records.push(DisplayRecord {
            id: VERSION_SUFFIX.replace(&entry.name, "").into_owned(),
            name: normalize_name(&entry.name),
            sandbox_url: urls.sandbox_url,
            alt_sandbox_url: urls.alt_sandbox_url,
            repo_url: urls.repo_url,
            native: classification.native,
            is_family_member: classification.is_family_member,
        });
    }

    sort_records(&mut records);
    Ok(records)
}

/// Assemble a tree listing nested under a parent category.
///
/// `parent_path` is the parent entry's path; it supplies both the category
/// id (slugified) and the classification input. `branch` is needed to
/// reconstruct browseable URLs, since tree API URLs carry only object ids.
pub fn assemble_nested(
    listing: &TreeListing,
    parent_path: &str,
    branch: &str,
    ignore: &[String],
) -> Result<Vec<DisplayRecord>, SandboxesError> {
    let mut records = Vec::new();
    let classification = classify(parent_path);

    for node in listing.tree.iter().filter(|n| n.node_type == "tree") {
        if ignore.iter().any(|ignored| ignored == &node.path) {
            continue;
        }

        let api_url = node.url.as_deref().ok_or_else(|| {
            SandboxesError::MalformedResponse {
                reason: format!("tree node '{}' is missing its API URL", node.path),
            }
        })?;
        let urls = urls::derive_nested(api_url, branch, parent_path, &node.path)?;

        records.push(DisplayRecord {
            id: slugify(parent_path),
            name: normalize_name(&node.path),
            sandbox_url: urls.sandbox_url,
            alt_sandbox_url: urls.alt_sandbox_url,
            repo_url: urls.repo_url,
            native: classification.native,
            is_family_member: classification.is_family_member,
        });
    }

    sort_records(&mut records);
    Ok(records)
}

/// Sort ascending by `(native, !is_family_member)`.
///
/// Stable: relative order among equal keys is preserved, and there is no
/// secondary key.
pub fn sort_records(records: &mut [DisplayRecord]) {
    records.sort_by_key(|r| (r.native, !r.is_family_member));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_entry(name: &str, html_url: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: name.to_string(),
            entry_type: "dir".to_string(),
            html_url: Some(html_url.to_string()),
            git_url: None,
        }
    }

    fn file_entry(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: name.to_string(),
            entry_type: "file".to_string(),
            html_url: None,
            git_url: None,
        }
    }

    #[test]
    fn test_flat_keeps_only_directories() {
        let entries = vec![
            dir_entry(
                "instantsearch-android",
                "https://github.com/algolia/instantsearch-android",
            ),
            file_entry("README"),
        ];
        let records = assemble_flat(&entries, &[]).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].native);
        assert_eq!(records[0].repo_url, "https://github.com/algolia/instantsearch-android");
    }

    #[test]
    fn test_flat_strips_version_suffix_from_id() {
        let entries = vec![dir_entry("foo-2.x", "https://github.com/algolia/foo")];
        let records = assemble_flat(&entries, &[]).unwrap();
        assert_eq!(records[0].id, "foo");
        // Display name still reflects the raw slug.
        assert_eq!(records[0].name, "Foo 2.x");
    }

    #[test]
    fn test_flat_kept_entry_missing_html_url_fails_loudly() {
        let entries = vec![DirectoryEntry {
            name: "react".to_string(),
            path: "react".to_string(),
            entry_type: "dir".to_string(),
            html_url: None,
            git_url: None,
        }];
        let err = assemble_flat(&entries, &[]).unwrap_err();
        assert!(matches!(err, SandboxesError::MalformedResponse { .. }));
    }

    #[test]
    fn test_sort_family_first_natives_last() {
        // A: non-native, non-family; B: non-native, family; C: native, family.
        let entries = vec![
            dir_entry("autocomplete.js", "https://github.com/algolia/autocomplete.js"),
            dir_entry("vue-instantsearch", "https://github.com/algolia/vue-instantsearch"),
            dir_entry("instantsearch-ios", "https://github.com/algolia/instantsearch-ios"),
        ];
        let records = assemble_flat(&entries, &[]).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["vue-instantsearch", "autocomplete.js", "instantsearch-ios"]);
    }

    #[test]
    fn test_sort_is_stable_with_no_secondary_key() {
        let entries = vec![
            dir_entry("zeta-instantsearch", "https://github.com/algolia/zeta-instantsearch"),
            dir_entry("alpha-instantsearch", "https://github.com/algolia/alpha-instantsearch"),
        ];
        let records = assemble_flat(&entries, &[]).unwrap();
        // Equal keys keep their original relative order; no alphabetical tie-break.
        assert_eq!(records[0].id, "zeta-instantsearch");
        assert_eq!(records[1].id, "alpha-instantsearch");
    }

    #[test]
    fn test_ignore_list_drops_exact_match_only() {
        let entries = vec![
            dir_entry("react-instantsearch", "https://github.com/algolia/react-instantsearch"),
            dir_entry("vue-instantsearch", "https://github.com/algolia/vue-instantsearch"),
            dir_entry("react", "https://github.com/algolia/react"),
        ];
        let records =
            assemble_flat(&entries, &["react-instantsearch".to_string()]).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["vue-instantsearch", "react"]);
    }

    #[test]
    fn test_nested_assembly() {
        use crate::api::models::TreeNode;

        let listing = TreeListing {
            tree: vec![
                TreeNode {
                    path: "getting-started".to_string(),
                    node_type: "tree".to_string(),
                    url: Some(
                        "https://api.github.com/repos/algolia/doc-code-samples/git/trees/abc"
                            .to_string(),
                    ),
                    sha: "abc".to_string(),
                },
                TreeNode {
                    path: "README.md".to_string(),
                    node_type: "blob".to_string(),
                    url: None,
                    sha: "def".to_string(),
                },
            ],
            truncated: false,
        };

        let records =
            assemble_nested(&listing, "React InstantSearch", "master", &[]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "react-instantsearch");
        assert_eq!(records[0].name, "Getting Started");
        assert_eq!(
            records[0].repo_url,
            "https://github.com/algolia/doc-code-samples/tree/master/React InstantSearch/getting-started"
        );
        // Classification runs on the raw parent path, which is normalized
        // here, so the case-sensitive family test does not match.
        assert!(!records[0].is_family_member);
    }

    #[test]
    fn test_nested_classifies_on_parent_path() {
        use crate::api::models::TreeNode;

        let listing = TreeListing {
            tree: vec![TreeNode {
                path: "media".to_string(),
                node_type: "tree".to_string(),
                url: Some(
                    "https://api.github.com/repos/algolia/doc-code-samples/git/trees/abc"
                        .to_string(),
                ),
                sha: "abc".to_string(),
            }],
            truncated: false,
        };

        let records =
            assemble_nested(&listing, "vue-instantsearch", "master", &[]).unwrap();
        assert_eq!(records[0].id, "vue-instantsearch");
        assert!(records[0].is_family_member);
        assert!(!records[0].native);
    }

    #[test]
    fn test_record_serializes_with_camel_case_contract() {
        let entries =
            vec![dir_entry("react-instantsearch", "https://github.com/algolia/react-instantsearch")];
        let records = assemble_flat(&entries, &[]).unwrap();
        let json = serde_json::to_value(&records[0]).unwrap();
        assert!(json.get("sandboxUrl").is_some());
        assert!(json.get("altSandboxUrl").is_some());
        assert!(json.get("repoUrl").is_some());
    }
}
