//! Rendering of section reports.
//!
//! The rendering layer consumes assembled [`SectionReport`]s as-is: it never
//! re-derives URLs and never re-sorts. Its only decisions are presentation
//! ones inherited from the page: a native library's card links straight to
//! source instead of a sandbox, and icons resolve through the category map
//! with its guaranteed fallback.
//!
//! Three targets: a static HTML page (embedded Tera template), a colored
//! terminal listing, and JSON.

use colored::Colorize;
use serde::Serialize;
use tera::{Context, Tera};

use crate::core::SandboxesError;
use crate::listing::DisplayRecord;
use crate::listing::icons::icon_for;
use crate::sections::{SectionOutcome, SectionReport};

/// The embedded page template.
const PAGE_TEMPLATE: &str = include_str!("templates/page.html.tera");

/// Template-facing view of a section.
#[derive(Serialize)]
struct SectionView {
    title: String,
    error: Option<String>,
    cards: Vec<CardView>,
}

/// Template-facing view of one link card.
#[derive(Serialize)]
struct CardView {
    name: String,
    /// Primary link: sandbox, or source for native libraries
    href: String,
    /// Alternate sandbox link
    alt_href: String,
    repo_url: String,
    icon: &'static str,
    native: bool,
}

impl CardView {
    fn from_record(record: &DisplayRecord) -> Self {
        let href = if record.native {
            record.repo_url.clone()
        } else {
            record.sandbox_url.clone()
        };
        Self {
            name: record.name.clone(),
            href,
            alt_href: record.alt_sandbox_url.clone(),
            repo_url: record.repo_url.clone(),
            icon: icon_for(&record.id),
            native: record.native,
        }
    }
}

/// Render the static HTML page.
pub fn render_html(reports: &[SectionReport]) -> Result<String, SandboxesError> {
    let sections: Vec<SectionView> = reports
        .iter()
        .map(|report| match &report.outcome {
            SectionOutcome::Loaded { records } => SectionView {
                title: report.title.clone(),
                error: None,
                cards: records.iter().map(CardView::from_record).collect(),
            },
            SectionOutcome::Failed { error } => SectionView {
                title: report.title.clone(),
                error: Some(error.clone()),
                cards: Vec::new(),
            },
        })
        .collect();

    let mut tera = Tera::default();
    tera.add_raw_template("page.html", PAGE_TEMPLATE)
        .map_err(|e| SandboxesError::Render { reason: e.to_string() })?;

    let mut context = Context::new();
    context.insert("sections", &sections);

    tera.render("page.html", &context)
        .map_err(|e| SandboxesError::Render { reason: e.to_string() })
}

/// Render a colored terminal listing.
pub fn render_terminal(reports: &[SectionReport]) -> String {
    let mut out = String::new();

    for report in reports {
        out.push_str(&format!("{}\n", report.title.bold()));
        match &report.outcome {
            SectionOutcome::Loaded { records } => {
                if records.is_empty() {
                    out.push_str(&format!("  {}\n", "(no entries)".dimmed()));
                }
                for record in records {
                    let link = if record.native { &record.repo_url } else { &record.sandbox_url };
                    let marker = if record.native {
                        format!(" {}", "(native)".dimmed())
                    } else {
                        String::new()
                    };
                    out.push_str(&format!(
                        "  {}{} {}\n",
                        record.name.cyan(),
                        marker,
                        link.underline()
                    ));
                }
            }
            SectionOutcome::Failed { error } => {
                out.push_str(&format!("  {}: {}\n", "error".red().bold(), error));
            }
        }
        out.push('\n');
    }

    out
}

/// Render the reports as pretty-printed JSON.
pub fn render_json(reports: &[SectionReport]) -> Result<String, SandboxesError> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| SandboxesError::Render { reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, native: bool) -> DisplayRecord {
        DisplayRecord {
            id: id.to_string(),
            name: name.to_string(),
            sandbox_url: format!("https://codesandbox.io/s/github/algolia/{id}"),
            alt_sandbox_url: format!("https://stackblitz.com/github/algolia/{id}"),
            repo_url: format!("https://github.com/algolia/{id}"),
            native,
            is_family_member: id.contains("instantsearch"),
        }
    }

    fn loaded(records: Vec<DisplayRecord>) -> SectionReport {
        SectionReport {
            name: "templates".to_string(),
            title: "Templates".to_string(),
            outcome: SectionOutcome::Loaded { records },
        }
    }

    #[test]
    fn test_html_links_native_cards_to_source() {
        let reports = vec![loaded(vec![
            record("react-instantsearch", "React InstantSearch", false),
            record("instantsearch-ios", "InstantSearch iOS", true),
        ])];
        let html = render_html(&reports).unwrap();

        // Web record links to its sandbox, native record straight to source.
        assert!(html.contains(
            r#"href="https://codesandbox.io/s/github/algolia/react-instantsearch""#
        ));
        assert!(html.contains(r#"href="https://github.com/algolia/instantsearch-ios""#));
        // Icons resolve through the category map.
        assert!(html.contains("icons/react-instantsearch.svg"));
        assert!(html.contains("icons/instantsearch-ios.svg"));
    }

    #[test]
    fn test_html_unmapped_id_uses_fallback_icon() {
        let reports = vec![loaded(vec![record("media", "Media", false)])];
        let html = render_html(&reports).unwrap();
        assert!(html.contains("icons/algolia.svg"));
    }

    #[test]
    fn test_html_failed_section_renders_inline_error() {
        let reports = vec![
            SectionReport {
                name: "examples".to_string(),
                title: "Examples".to_string(),
                outcome: SectionOutcome::Failed { error: "Not Found".to_string() },
            },
            loaded(vec![record("vue-instantsearch", "Vue InstantSearch", false)]),
        ];
        let html = render_html(&reports).unwrap();

        // The failed section shows its error; the sibling still renders.
        assert!(html.contains("<code>Not Found</code>"));
        assert!(html.contains("Vue InstantSearch"));
    }

    #[test]
    fn test_json_rendering() {
        let reports = vec![loaded(vec![record("vue-instantsearch", "Vue InstantSearch", false)])];
        let json = render_json(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["status"], "loaded");
        assert_eq!(value[0]["records"][0]["sandboxUrl"],
            "https://codesandbox.io/s/github/algolia/vue-instantsearch");
    }

    #[test]
    fn test_terminal_rendering_marks_natives() {
        colored::control::set_override(false);
        let reports = vec![loaded(vec![record("instantsearch-android", "InstantSearch Android", true)])];
        let out = render_terminal(&reports);
        assert!(out.contains("InstantSearch Android"));
        assert!(out.contains("(native)"));
        assert!(out.contains("https://github.com/algolia/instantsearch-android"));
        colored::control::unset_override();
    }
}
