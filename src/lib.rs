//! sandboxes-cli - builds the InstantSearch sandbox listing page.
//!
//! A small tool that lists runnable "sandbox" projects for the InstantSearch
//! family of search UI libraries: project templates, in-repo examples, and
//! documentation code samples. Listings come from the GitHub REST API and
//! are rendered as a static HTML page of link cards (or as a terminal/JSON
//! listing).
//!
//! # Architecture
//!
//! The heart of the crate is the **listing transformation pipeline**, a set
//! of pure functions in [`listing`] that turn raw API entries into ordered
//! display records:
//!
//! 1. keep only directory/tree entries (and drop ignored ones),
//! 2. derive a category id and a human-readable name from the slug,
//! 3. derive CodeSandbox/StackBlitz/source URLs from the entry's source link
//!    (or reconstruct them from the API URL for nested tree nodes),
//! 4. classify entries as native SDKs (no online sandbox) and as
//!    InstantSearch-family members,
//! 5. sort: non-native before native, family members first within each
//!    group, original order otherwise.
//!
//! Everything around that pipeline is plumbing:
//!
//! - [`api`] - GitHub client with the tagged directory/tree response parser
//!   and an in-memory cache keyed on `(url, auth_present)`
//! - [`sections`] - the section catalog and concurrent, failure-isolated
//!   per-section fetching
//! - [`render`] - HTML (Tera), terminal, and JSON renderers
//! - [`config`] - the global config file holding the optional GitHub token
//! - [`cli`] - the `build`, `list`, and `auth` commands
//! - [`core`] - the error taxonomy and user-friendly error reporting
//!
//! # Example
//!
//! ```
//! use sandboxes_cli::listing::{classify, normalize_name};
//!
//! assert_eq!(normalize_name("react-instantsearch"), "React InstantSearch");
//! assert!(classify("instantsearch-ios").native);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod listing;
pub mod render;
pub mod sections;

pub use core::{ErrorContext, SandboxesError, user_friendly_error};
pub use listing::DisplayRecord;
