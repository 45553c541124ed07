//! GitHub API client for listing fetches.
//!
//! A thin wrapper over [`reqwest::Client`] that attaches the optional bearer
//! token, parses responses into the tagged [`Listing`] sum type, and caches
//! successful responses in memory.
//!
//! # Cache keying
//!
//! Responses differ between authenticated and anonymous requests (rate-limit
//! headers aside, private resources appear only when authenticated), so the
//! URL alone is not a sufficient cache key. The cache keys on
//! `(url, auth_present)` explicitly instead of mutating the URL with a
//! marker query parameter.

pub mod models;

use dashmap::DashMap;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument};

use crate::constants::USER_AGENT;
use crate::core::SandboxesError;

pub use models::{DirectoryEntry, Listing, TreeListing, TreeNode};

/// Cache key: the request URL plus whether a token was attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    url: String,
    authenticated: bool,
}

/// Client for the listing API.
///
/// Cheap to share by reference across concurrent section fetches; the
/// response cache is concurrent.
pub struct GithubClient {
    http: reqwest::Client,
    token: Option<String>,
    cache: DashMap<CacheKey, Listing>,
}

impl GithubClient {
    /// Create a client, optionally carrying a bearer token.
    ///
    /// The token is attached as an `Authorization: Bearer` header on every
    /// request; the client never generates or validates it.
    pub fn new(token: Option<String>) -> Result<Self, SandboxesError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SandboxesError::Unexpected {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { http, token, cache: DashMap::new() })
    }

    /// Whether requests carry a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch and parse a listing, consulting the in-memory cache first.
    #[instrument(skip(self), fields(authenticated = self.is_authenticated()))]
    pub async fn fetch_listing(&self, url: &str) -> Result<Listing, SandboxesError> {
        let key = CacheKey { url: url.to_string(), authenticated: self.is_authenticated() };
        if let Some(hit) = self.cache.get(&key) {
            debug!("cache hit");
            return Ok(hit.clone());
        }

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(|e| SandboxesError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let status = response.status();

        let body: serde_json::Value =
            response.json().await.map_err(|e| SandboxesError::MalformedResponse {
                reason: format!("response from {url} is not JSON: {e}"),
            })?;

        if !status.is_success() {
            // Prefer the payload's message field over the bare status line.
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(SandboxesError::Api { url: url.to_string(), message });
        }

        let listing = Listing::from_value(body)?;
        debug!("caching response");
        self.cache.insert(key, listing.clone());
        Ok(listing)
    }
}
