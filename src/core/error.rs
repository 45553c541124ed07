//! Error handling for the sandbox listing tool.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! Two main types implement this:
//! - [`SandboxesError`] - enumerated error types for every failure case
//! - [`ErrorContext`] - wrapper that adds a suggestion and extra details
//!
//! # Error Categories
//!
//! The taxonomy mirrors the three ways a listing section can fail, plus the
//! ambient concerns of a CLI tool:
//! - **Network/transport**: [`SandboxesError::Network`]
//! - **API-level rejection**: [`SandboxesError::Api`] (non-2xx with a payload
//!   `message` when the API provides one)
//! - **Malformed response**: [`SandboxesError::MalformedResponse`] (neither a
//!   directory array nor a `{tree: [...]}` object, or a kept entry missing a
//!   required field)
//! - **URL derivation**: [`SandboxesError::UrlDerivation`] (source URL not in
//!   the expected shape — never guessed around)
//! - **Configuration / rendering / filesystem**: ambient failures outside the
//!   listing pipeline itself
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into a
//! displayable context with suggestions before exiting.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for sandbox listing operations.
///
/// Every variant carries owned strings so contexts can be rebuilt from a
/// borrowed error during user-friendly reporting.
#[derive(Error, Debug, Clone)]
pub enum SandboxesError {
    /// Network or transport failure while talking to the listing API.
    #[error("network error while fetching {url}: {reason}")]
    Network {
        /// The request URL that failed
        url: String,
        /// The transport-level failure description
        reason: String,
    },

    /// The API answered with a non-success status.
    ///
    /// `message` is the payload-provided `message` field when present,
    /// otherwise the HTTP status line.
    #[error("API request failed for {url}: {message}")]
    Api {
        /// The request URL that was rejected
        url: String,
        /// The payload message or HTTP status
        message: String,
    },

    /// The response body was not one of the two supported listing shapes,
    /// or a kept entry was missing a required field.
    #[error("malformed API response: {reason}")]
    MalformedResponse {
        /// What was expected and what was found instead
        reason: String,
    },

    /// A source URL could not be parsed into `<owner>/<repo>` form.
    #[error("cannot derive sandbox URLs from '{url}': {reason}")]
    UrlDerivation {
        /// The offending URL
        url: String,
        /// Why derivation failed
        reason: String,
    },

    /// Global configuration file problem.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// The page template failed to render.
    #[error("failed to render page: {reason}")]
    Render {
        /// The template engine's failure description
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("file system error during {operation}: {reason}")]
    FileSystem {
        /// The operation that failed (e.g. "write output")
        operation: String,
        /// The underlying failure description
        reason: String,
    },

    /// Catch-all for errors with no more specific variant.
    #[error("{message}")]
    Unexpected {
        /// The original error's message text
        message: String,
    },
}

/// Wrapper that pairs a [`SandboxesError`] with user-facing guidance.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SandboxesError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: SandboxesError) -> Self {
        Self { error, suggestion: None, details: None }
    }

    /// Add an actionable suggestion, shown in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add context about why the error occurred, shown in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`] with suggestions.
///
/// Known [`SandboxesError`] variants get targeted guidance; common I/O and
/// TOML errors are mapped to their ambient variants; everything else falls
/// back to [`SandboxesError::Unexpected`] with the original message.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(err) = error.downcast_ref::<SandboxesError>() {
        return contextualize(err);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(SandboxesError::FileSystem {
                    operation: "file access".to_string(),
                    reason: io_error.to_string(),
                })
                .with_suggestion("Check file ownership or run with elevated permissions");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(SandboxesError::FileSystem {
                    operation: "file access".to_string(),
                    reason: io_error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(SandboxesError::Config { message: toml_error.to_string() })
            .with_suggestion("Check the TOML syntax in your config.toml (quotes, brackets)")
            .with_details("The global configuration file could not be parsed");
    }

    ErrorContext::new(SandboxesError::Unexpected { message: error.to_string() })
}

/// Attach variant-specific suggestions and details to a typed error.
fn contextualize(error: &SandboxesError) -> ErrorContext {
    match error {
        SandboxesError::Network { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check your internet connection and retry")
            .with_details("The listing API could not be reached at the transport level"),

        SandboxesError::Api { message, .. } => {
            let rate_limited = message.to_lowercase().contains("rate limit");
            let ctx = ErrorContext::new(error.clone());
            if rate_limited {
                ctx.with_suggestion(
                    "Authenticate with 'sandboxes auth set <token>' to raise the GitHub API rate limit",
                )
                .with_details("Unauthenticated requests share a low per-IP rate limit")
            } else {
                ctx.with_suggestion("Verify the repository, path, and ref exist and are public")
            }
        }

        SandboxesError::MalformedResponse { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Re-run with --verbose to log the offending response")
            .with_details(
                "The API is expected to return either a directory array or a {tree: [...]} object",
            ),

        SandboxesError::UrlDerivation { .. } => ErrorContext::new(error.clone()).with_details(
            "Source URLs must be https://github.com/<owner>/<repo>/... links, and tree \
             node API URLs must contain a /repos/<owner>/<repo>/ segment",
        ),

        SandboxesError::Config { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check ~/.sandboxes/config.toml or the path given via --config"),

        SandboxesError::Render { .. } => ErrorContext::new(error.clone())
            .with_details("The embedded page template failed to render; this is a bug"),

        SandboxesError::FileSystem { .. } | SandboxesError::Unexpected { .. } => {
            ErrorContext::new(error.clone())
        }
    }
}
