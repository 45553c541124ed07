//! Core types shared across the crate.
//!
//! Currently this is the error system; see [`error`] for the full taxonomy
//! and the user-friendly reporting layer used by the CLI entry point.

pub mod error;

pub use error::{ErrorContext, SandboxesError, user_friendly_error};
