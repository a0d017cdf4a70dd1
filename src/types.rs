//! Domain types for typefolio.
//!
//! Page content is plain data: one `Page` describes everything the
//! presentation surfaces show. Nothing here does I/O.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ============================================================================
// TYPEWRITER CONFIGURATION
// ============================================================================

pub const DEFAULT_TYPING_SPEED_MS: u64 = 100;
pub const DEFAULT_DELETING_SPEED_MS: u64 = 50;
pub const DEFAULT_PAUSE_MS: u64 = 1000;

/// Configuration for the typewriter headline, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Phrases to cycle through, in order. Must not be empty.
    pub phrases: Vec<String>,
    /// Milliseconds per character while typing.
    pub typing_speed_ms: u64,
    /// Milliseconds per character while deleting.
    pub deleting_speed_ms: u64,
    /// Milliseconds to hold the full phrase before deleting.
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: Vec::new(),
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            deleting_speed_ms: DEFAULT_DELETING_SPEED_MS,
            pause_ms: DEFAULT_PAUSE_MS,
        }
    }
}

impl TypewriterConfig {
    /// Config with default speeds for the given phrases.
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

// ============================================================================
// PAGE CONTENT
// ============================================================================

/// A single portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Hero heading.
    pub name: String,
    /// Static subtitle under the heading.
    #[serde(default)]
    pub tagline: String,
    /// Animated headline under the heading.
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub about: AboutSection,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Downloadable resume. None hides the download action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<Resume>,
    #[serde(default)]
    pub contact: ContactSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub title: String,
    pub body: String,
}

/// A project card in the showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Optional URL opened from the project detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Button label.
    #[serde(default = "default_resume_label")]
    pub label: String,
    /// Resume file. Relative paths are resolved against the page file's directory.
    pub path: PathBuf,
}

fn default_resume_label() -> String {
    "Download Resume".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub title: String,
    pub blurb: String,
    pub links: Vec<ContactLink>,
}

/// A contact button: `mailto:` or web URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

impl Page {
    /// The page shipped with the binary, used when no page file exists.
    pub fn builtin() -> Self {
        let project_blurb =
            "An innovative solution showcasing deep integration of software and hardware.";

        Page {
            name: "Eli Van Tassell".to_string(),
            tagline: "Electrical Engineer • Developer • Innovator".to_string(),
            typewriter: TypewriterConfig::with_phrases([
                "Electrical Engineer",
                "Developer",
                "Innovator",
            ]),
            about: AboutSection {
                title: "About Me".to_string(),
                body: "I'm an Electrical Engineer graduating in Fall 2024, passionate about \
                       embedded systems, power electronics, and innovative technology. My \
                       experience includes projects with Tesla, Anduril, and Ulteig, where \
                       I've combined creativity and engineering excellence."
                    .to_string(),
            },
            projects: vec![
                Project {
                    title: "Embedded Sensor Dashboard".to_string(),
                    description: project_blurb.to_string(),
                    link: None,
                },
                Project {
                    title: "Teensy CNN Classifier".to_string(),
                    description: project_blurb.to_string(),
                    link: None,
                },
            ],
            resume: Some(Resume {
                label: default_resume_label(),
                path: PathBuf::from("resume.pdf"),
            }),
            contact: ContactSection {
                title: "Let's Connect".to_string(),
                blurb: "Interested in collaborating or learning more about my work?".to_string(),
                links: vec![
                    ContactLink {
                        label: "Get in Touch".to_string(),
                        url: "mailto:eli@example.com".to_string(),
                    },
                    ContactLink {
                        label: "LinkedIn".to_string(),
                        url: "https://www.linkedin.com/in/eli-van-tassell".to_string(),
                    },
                ],
            },
        }
    }

    /// Anchor relative file references (the resume) at `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(resume) = &mut self.resume {
            if resume.path.is_relative() {
                resume.path = base.join(&resume.path);
            }
        }
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Where the active page came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// No page file; the built-in page is in use.
    BuiltIn,
    /// Loaded from this file.
    File(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_documented_speeds() {
        let config = TypewriterConfig::default();
        assert_eq!(config.typing_speed_ms, 100);
        assert_eq!(config.deleting_speed_ms, 50);
        assert_eq!(config.pause_ms, 1000);
        assert!(config.phrases.is_empty());
    }

    #[test]
    fn builtin_page_has_phrases_and_sections() {
        let page = Page::builtin();
        assert!(!page.typewriter.phrases.is_empty());
        assert_eq!(page.projects.len(), 2);
        assert_eq!(page.contact.links.len(), 2);
        assert!(page.resume.is_some());
    }

    #[test]
    fn resolve_anchors_relative_resume_only() {
        let mut page = Page::builtin();
        page.resolve_relative_to(Path::new("/srv/site"));
        assert_eq!(
            page.resume.as_ref().map(|r| r.path.clone()),
            Some(PathBuf::from("/srv/site/resume.pdf"))
        );

        let mut absolute = Page::builtin();
        absolute.resume = Some(Resume {
            label: "CV".to_string(),
            path: PathBuf::from("/abs/cv.pdf"),
        });
        absolute.resolve_relative_to(Path::new("/srv/site"));
        assert_eq!(
            absolute.resume.map(|r| r.path),
            Some(PathBuf::from("/abs/cv.pdf"))
        );
    }
}
