//! Native/family classification of listing entries.
//!
//! A "native" library is a mobile or desktop SDK with no browser-based
//! sandbox; its card links straight to the source repository. A "family
//! member" belongs to the InstantSearch product family and is only used as a
//! sort tie-break.

/// Libraries with no online sandbox.
///
/// Membership is tested by exact match, and callers probe with either the
/// slug or the human-readable name depending on which form they hold, so
/// both forms of each library are listed.
pub const NATIVE_LIBRARIES: &[&str] = &[
    "instantsearch-android",
    "InstantSearch Android",
    "instantsearch-ios",
    "InstantSearch iOS",
    "react-instantsearch-native",
    "React InstantSearch Native",
];

/// Result of classifying a slug or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// No online sandbox; link straight to source
    pub native: bool,
    /// Belongs to the InstantSearch family (sort tie-break only)
    pub is_family_member: bool,
}

/// Classify a raw slug, path, or human-readable name.
///
/// The family test is a case-sensitive substring check on the raw input, not
/// on the normalized name.
pub fn classify(slug_or_name: &str) -> Classification {
    Classification {
        native: NATIVE_LIBRARIES.contains(&slug_or_name),
        is_family_member: slug_or_name.contains("instantsearch"),
    }
}
