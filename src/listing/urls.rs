//! Sandbox and source URL derivation.
//!
//! Given a canonical source URL, this module derives links into the two
//! online sandboxing services. Flat entries carry an `html_url` pointing
//! straight at the source host; nested tree nodes only carry an API URL, so
//! the full repository path has to be reconstructed from the node's API URL
//! plus the parent directory and branch.
//!
//! Malformed or missing URLs are a fatal input error
//! ([`SandboxesError::UrlDerivation`]) — the deriver never guesses.

use crate::constants::{ALT_SANDBOX_HOST, SANDBOX_HOST, SOURCE_HOST};
use crate::core::SandboxesError;

/// The three links derived for a display record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxUrls {
    /// Link into the first sandboxing service (CodeSandbox)
    pub sandbox_url: String,
    /// Link into the alternate sandboxing service (StackBlitz)
    pub alt_sandbox_url: String,
    /// Canonical source link
    pub repo_url: String,
}

/// Derive sandbox URLs from a flat entry's source link.
///
/// The source URL must be of the form `https://github.com/<owner>/<repo>/...`;
/// the sandbox URLs reuse its path with the host swapped. `repo_url` is the
/// input unchanged.
pub fn derive_flat(html_url: &str) -> Result<SandboxUrls, SandboxesError> {
    let prefix = format!("https://{SOURCE_HOST}/");
    let path = html_url.strip_prefix(prefix.as_str()).ok_or_else(|| {
        SandboxesError::UrlDerivation {
            url: html_url.to_string(),
            reason: format!("expected an https://{SOURCE_HOST}/ link"),
        }
    })?;

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    if segments.next().is_none() || segments.next().is_none() {
        return Err(SandboxesError::UrlDerivation {
            url: html_url.to_string(),
            reason: "missing <owner>/<repo> path segments".to_string(),
        });
    }

    Ok(SandboxUrls {
        sandbox_url: format!("https://{SANDBOX_HOST}/{path}"),
        alt_sandbox_url: format!("https://{ALT_SANDBOX_HOST}/{path}"),
        repo_url: html_url.to_string(),
    })
}

/// Derive sandbox URLs for a tree node nested under a parent category.
///
/// `<owner>/<repo>` comes from the node's own API URL (the first two path
/// segments after the API's fixed `/repos/` prefix); the full repository path
/// is `<owner>/<repo>/tree/<branch>/<parent_path>/<child_path>`.
pub fn derive_nested(
    api_url: &str,
    branch: &str,
    parent_path: &str,
    child_path: &str,
) -> Result<SandboxUrls, SandboxesError> {
    let (owner, repo) = owner_repo_from_api_url(api_url)?;
    let path = format!("{owner}/{repo}/tree/{branch}/{parent_path}/{child_path}");

    Ok(SandboxUrls {
        sandbox_url: format!("https://{SANDBOX_HOST}/{path}"),
        alt_sandbox_url: format!("https://{ALT_SANDBOX_HOST}/{path}"),
        repo_url: format!("https://{SOURCE_HOST}/{path}"),
    })
}

/// Extract `(owner, repo)` from an API URL containing a `/repos/` segment.
fn owner_repo_from_api_url(api_url: &str) -> Result<(String, String), SandboxesError> {
    let rest = api_url
        .split_once("/repos/")
        .map(|(_, rest)| rest)
        .ok_or_else(|| SandboxesError::UrlDerivation {
            url: api_url.to_string(),
            reason: "no /repos/ segment in API URL".to_string(),
        })?;

    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(owner), Some(repo)) => Ok((owner.to_string(), repo.to_string())),
        _ => Err(SandboxesError::UrlDerivation {
            url: api_url.to_string(),
            reason: "missing <owner>/<repo> after /repos/".to_string(),
        }),
    }
}
