//! Page formatting for non-interactive output.
//!
//! Pure functions: (Page, OutputFormat) → String.
//! No I/O, no side effects.

use crate::platform::display_link;
use crate::types::{OutputFormat, Page};

/// Format a page for output.
pub fn format_page(page: &Page, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(page),
        OutputFormat::Json => format_json(page),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(page: &Page) -> String {
    let mut out = String::new();

    // Hero
    out.push_str(&format!("{}\n", page.name));
    if !page.tagline.is_empty() {
        out.push_str(&format!("{}\n", page.tagline));
    }
    if !page.typewriter.phrases.is_empty() {
        out.push_str(&format!("> {}\n", page.typewriter.phrases.join(" / ")));
    }
    out.push('\n');

    // About
    if !page.about.body.is_empty() {
        out.push_str(&heading(&page.about.title, "About"));
        out.push_str(&format!("{}\n\n", page.about.body));
    }

    // Projects
    if !page.projects.is_empty() {
        out.push_str(&heading("", "Projects"));
        for project in &page.projects {
            out.push_str(&format!("  * {}\n", project.title));
            if !project.description.is_empty() {
                out.push_str(&format!("    {}\n", project.description));
            }
            if let Some(link) = &project.link {
                out.push_str(&format!("    {}\n", link));
            }
        }
        out.push('\n');
    }

    // Resume
    if let Some(resume) = &page.resume {
        out.push_str(&heading("", "Resume"));
        out.push_str(&format!("  {}: {}\n\n", resume.label, resume.path.display()));
    }

    // Contact
    if !page.contact.links.is_empty() || !page.contact.blurb.is_empty() {
        out.push_str(&heading(&page.contact.title, "Contact"));
        if !page.contact.blurb.is_empty() {
            out.push_str(&format!("{}\n", page.contact.blurb));
        }
        for link in &page.contact.links {
            out.push_str(&format!("  {}: {}\n", link.label, display_link(&link.url)));
        }
    }

    out
}

fn heading(title: &str, fallback: &str) -> String {
    let title = if title.is_empty() { fallback } else { title };
    format!("=== {} ===\n", title)
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(page: &Page) -> String {
    serde_json::to_string_pretty(page).unwrap_or_else(|e| {
        // Page is plain strings and numbers; this cannot fail in practice.
        panic!("Failed to serialize page to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
