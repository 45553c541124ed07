//! The listing transformation pipeline.
//!
//! This is the core of the tool: pure, synchronous, side-effect-free
//! functions that turn raw API listing entries into ordered display records.
//! The pipeline has four stages:
//!
//! - [`naming`] - slug to human-readable display name (and back, lossily)
//! - [`urls`] - sandbox/alternate/source URL derivation
//! - [`classify`] - native-SDK and family-membership tagging
//! - [`assemble`] - filtering, id derivation, and the stable two-key sort
//!
//! [`icons`] holds the static category-to-icon map consumed by the
//! rendering layer.

pub mod assemble;
pub mod classify;
pub mod icons;
pub mod naming;
pub mod urls;

pub use assemble::{DisplayRecord, assemble_flat, assemble_nested, sort_records};
pub use classify::{Classification, classify};
pub use naming::{normalize_name, slugify};
