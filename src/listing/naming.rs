//! Slug-to-display-name normalization.
//!
//! Directory slugs like `react-instantsearch` become human-readable names
//! like `React InstantSearch`. The transformation is: split on hyphens,
//! ASCII-uppercase the first character of each word, join with spaces, then
//! apply a fixed table of brand-name substitutions. The substitutions match
//! case-insensitively on word boundaries so they catch whatever casing the
//! capitalization step produced.
//!
//! Normalization is lossy (the `e commerce` substitution restores a hyphen
//! the split removed), so [`slugify`] is only an approximate inverse.

use regex::Regex;
use std::sync::LazyLock;

/// Brand-name fixups applied after word capitalization.
///
/// The `E-commerce` entry restores the hyphen lost by the hyphen split; the
/// match always begins uppercase at that point, and the replacement keeps it.
static SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\binstantsearch\b", "InstantSearch"),
        (r"(?i)\bjavascript\b", "JavaScript"),
        (r"(?i)\bios\b", "iOS"),
        (r"(?i)\be commerce\b", "E-commerce"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Turn a directory slug into a human-readable display name.
///
/// Empty input yields empty output. The result is not a fixed point: running
/// the function on its own output can differ (multi-word merges).
///
/// # Examples
///
/// ```
/// use sandboxes_cli::listing::naming::normalize_name;
///
/// assert_eq!(normalize_name("react-instantsearch"), "React InstantSearch");
/// assert_eq!(normalize_name("e-commerce"), "E-commerce");
/// ```
pub fn normalize_name(slug: &str) -> String {
    let spaced =
        slug.split('-').map(capitalize_first).collect::<Vec<_>>().join(" ");

    SUBSTITUTIONS
        .iter()
        .fold(spaced, |name, (pattern, replacement)| {
            pattern.replace_all(&name, *replacement).into_owned()
        })
}

/// Recover a category id from a human-readable name: spaces become hyphens,
/// everything is lowercased.
///
/// Only an approximate inverse of [`normalize_name`]; used when an id was not
/// separately available.
pub fn slugify(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

/// Uppercase the first character of a word, ASCII-only, leaving the rest
/// unchanged.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_family_slug() {
        assert_eq!(normalize_name("react-instantsearch"), "React InstantSearch");
        assert_eq!(normalize_name("vue-instantsearch"), "Vue InstantSearch");
        assert_eq!(normalize_name("angular-instantsearch"), "Angular InstantSearch");
    }

    #[test]
    fn test_normalize_restores_ecommerce_hyphen() {
        assert_eq!(normalize_name("e-commerce"), "E-commerce");
    }

    #[test]
    fn test_normalize_brand_casing() {
        assert_eq!(normalize_name("instantsearch-ios"), "InstantSearch iOS");
        assert_eq!(normalize_name("instantsearch-android"), "InstantSearch Android");
        assert_eq!(normalize_name("javascript-client"), "JavaScript Client");
        assert_eq!(normalize_name("javascript-helper"), "JavaScript Helper");
    }

    #[test]
    fn test_normalize_dotted_slug() {
        // The dot is a word boundary, so the brand substitution still fires.
        assert_eq!(normalize_name("instantsearch.js"), "InstantSearch.js");
        assert_eq!(normalize_name("autocomplete.js"), "Autocomplete.js");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_normalize_plain_words() {
        assert_eq!(normalize_name("media"), "Media");
        assert_eq!(normalize_name("tourism-agency"), "Tourism Agency");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("React InstantSearch"), "react-instantsearch");
        assert_eq!(slugify("E-commerce"), "e-commerce");
    }

    #[test]
    fn test_round_trip_is_approximate_only() {
        // "E-commerce" slugifies back to "e-commerce", but a merged name like
        // "InstantSearch.js" does not round-trip through a hyphen split.
        assert_eq!(slugify(&normalize_name("e-commerce")), "e-commerce");
        assert_eq!(slugify(&normalize_name("react-native")), "react-native");
    }
}
