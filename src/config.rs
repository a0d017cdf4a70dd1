//! Page configuration: locate, load, validate and write the page file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::typewriter::Typewriter;
use crate::types::{Page, PageSource};

/// File name of the page inside the config directory.
pub const PAGE_FILE: &str = "page.toml";

/// Default page location: `<config_dir>/typefolio/page.toml`.
///
/// Falls back to the current directory when the platform has no config dir.
pub fn default_page_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("typefolio")
        .join(PAGE_FILE)
}

/// A validated page and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub page: Page,
    pub source: PageSource,
}

/// Load the active page.
///
/// - An explicit path must exist and parse.
/// - Otherwise the default path is used if present.
/// - Otherwise the built-in page, with its resume expected next to where
///   the page file would be.
pub fn load(explicit: Option<&Path>) -> Result<LoadedPage, ConfigError> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    let default = default_page_path();
    if default.is_file() {
        return load_file(&default);
    }

    debug!(path = %default.display(), "no page file, using built-in page");
    builtin_in(default.parent().unwrap_or_else(|| Path::new(".")))
}

/// The built-in page with relative paths anchored at `base`.
fn builtin_in(base: &Path) -> Result<LoadedPage, ConfigError> {
    let mut page = Page::builtin();
    page.resolve_relative_to(base);
    validate(&page)?;
    Ok(LoadedPage {
        page,
        source: PageSource::BuiltIn,
    })
}

/// Reload from the same source a page was originally loaded from.
pub fn reload(source: &PageSource) -> Result<LoadedPage, ConfigError> {
    match source {
        PageSource::File(path) => load_file(path),
        PageSource::BuiltIn => load(None),
    }
}

/// Read, parse and validate a page file. Relative paths inside the page
/// are resolved against the file's directory.
pub fn load_file(path: &Path) -> Result<LoadedPage, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut page = parse(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(base) = path.parent() {
        page.resolve_relative_to(base);
    }
    validate(&page)?;

    info!(path = %path.display(), "loaded page");
    Ok(LoadedPage {
        page,
        source: PageSource::File(path.to_path_buf()),
    })
}

/// Parse page TOML. No validation.
pub fn parse(contents: &str) -> Result<Page, toml::de::Error> {
    toml::from_str(contents)
}

/// Reject pages whose typewriter could not be constructed.
pub fn validate(page: &Page) -> Result<(), ConfigError> {
    Typewriter::new(&page.typewriter).map(|_| ())
}

/// Write the built-in page to `path` as a starting point for editing.
pub fn write_builtin(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let contents = toml::to_string_pretty(&Page::builtin())?;

    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;

    info!(path = %path.display(), "wrote page file");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
name = "Ada"

[typewriter]
phrases = ["Engineer", "Tinkerer"]
"#;

    #[test]
    fn default_page_path_is_reasonable() {
        let path = default_page_path();
        assert!(path.ends_with("typefolio/page.toml"));
    }

    #[test]
    fn builtin_resume_is_anchored_at_config_dir() {
        let dir = TempDir::new().unwrap();
        let loaded = builtin_in(dir.path()).unwrap();

        assert_eq!(loaded.source, PageSource::BuiltIn);
        let resume = loaded.page.resume.expect("built-in page has a resume");
        assert_eq!(resume.path, dir.path().join("resume.pdf"));
    }

    #[test]
    fn minimal_page_gets_default_speeds_and_empty_sections() {
        let page = parse(MINIMAL).unwrap();
        assert_eq!(page.name, "Ada");
        assert_eq!(page.typewriter.phrases, ["Engineer", "Tinkerer"]);
        assert_eq!(page.typewriter.typing_speed_ms, 100);
        assert_eq!(page.typewriter.deleting_speed_ms, 50);
        assert_eq!(page.typewriter.pause_ms, 1000);
        assert!(page.projects.is_empty());
        assert!(page.resume.is_none());
        assert!(page.contact.links.is_empty());
    }

    #[test]
    fn full_page_parses_every_section() {
        let page = parse(
            r#"
name = "Ada"
tagline = "Engineer"

[typewriter]
phrases = ["One"]
typing_speed_ms = 80
pause_ms = 1500

[about]
title = "About"
body = "Hello."

[[projects]]
title = "Engine"
description = "Computes."
link = "https://example.com/engine"

[resume]
path = "cv.pdf"

[contact]
title = "Contact"
blurb = "Write me."

[[contact.links]]
label = "Email"
url = "mailto:ada@example.com"
"#,
        )
        .unwrap();

        assert_eq!(page.typewriter.typing_speed_ms, 80);
        assert_eq!(page.typewriter.deleting_speed_ms, 50);
        assert_eq!(page.typewriter.pause_ms, 1500);
        assert_eq!(page.projects[0].link.as_deref(), Some("https://example.com/engine"));
        let resume = page.resume.unwrap();
        assert_eq!(resume.label, "Download Resume");
        assert_eq!(resume.path, PathBuf::from("cv.pdf"));
        assert_eq!(page.contact.links[0].label, "Email");
    }

    #[test]
    fn load_file_resolves_resume_next_to_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PAGE_FILE);
        fs::write(&path, format!("{MINIMAL}\n[resume]\npath = \"cv.pdf\"\n")).unwrap();

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.source, PageSource::File(path.clone()));
        assert_eq!(loaded.page.resume.unwrap().path, dir.path().join("cv.pdf"));
    }

    #[test]
    fn load_file_rejects_empty_phrase_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PAGE_FILE);
        fs::write(&path, "name = \"Ada\"\n").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPhraseList));
    }

    #[test]
    fn load_file_reports_parse_errors_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PAGE_FILE);
        fs::write(&path, "name = ").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("page.toml"));
    }

    #[test]
    fn load_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn write_builtin_round_trips_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(PAGE_FILE);

        write_builtin(&path, false).unwrap();
        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded.page.name, Page::builtin().name);
        assert_eq!(loaded.page.typewriter, Page::builtin().typewriter);

        let err = write_builtin(&path, false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        write_builtin(&path, true).unwrap();
    }

    #[test]
    fn reload_follows_the_original_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PAGE_FILE);
        fs::write(&path, MINIMAL).unwrap();
        let first = load_file(&path).unwrap();

        fs::write(&path, MINIMAL.replace("Ada", "Grace")).unwrap();
        let second = reload(&first.source).unwrap();
        assert_eq!(second.page.name, "Grace");
    }
}
