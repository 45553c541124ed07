//! Category icon lookup.
//!
//! Maps a record's category id to an icon asset name. Ids without a
//! dedicated asset, and ids not in the map at all, resolve to the fallback —
//! lookup never fails.

/// Asset served when a category has no dedicated icon.
pub const FALLBACK_ICON: &str = "algolia.svg";

/// Category id to icon asset. `None` means the category is known but has no
/// dedicated asset and uses the fallback.
const ICONS: &[(&str, Option<&str>)] = &[
    ("angular-instantsearch", Some("angular-instantsearch.svg")),
    ("autocomplete.js", None),
    ("instantsearch-android", Some("instantsearch-android.svg")),
    ("instantsearch-ios", Some("instantsearch-ios.svg")),
    ("instantsearch.js", Some("instantsearch.js.svg")),
    ("javascript-client", None),
    ("javascript-helper", None),
    ("react-instantsearch-native", Some("react-instantsearch.svg")),
    ("react-instantsearch", Some("react-instantsearch.svg")),
    ("vue-instantsearch", Some("vue-instantsearch.svg")),
];

/// Resolve the icon asset for a category id.
pub fn icon_for(id: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(key, _)| *key == id)
        .and_then(|(_, asset)| *asset)
        .unwrap_or(FALLBACK_ICON)
}
