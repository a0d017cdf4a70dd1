//! Platform helpers for handing links to the desktop.
//!
//! Structure:
//! - Constants: the opener command per OS
//! - Pure functions: link classification, command construction
//! - Effect functions: spawning the opener

use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Program that opens a URL or file with the user's default handler.
#[cfg(target_os = "macos")]
pub const OPENER: &str = "open";

#[cfg(target_os = "windows")]
pub const OPENER: &str = "explorer";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const OPENER: &str = "xdg-open";

// ============================================================================
// TYPES
// ============================================================================

/// What a contact or project link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `mailto:` address.
    Email,
    /// `http://` or `https://` page.
    Web,
    /// Anything else (file path, custom scheme).
    Other,
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Classify a link by scheme, case-insensitively.
pub fn classify_link(url: &str) -> LinkKind {
    let lower = url.trim().to_ascii_lowercase();
    if lower.starts_with("mailto:") {
        LinkKind::Email
    } else if lower.starts_with("http://") || lower.starts_with("https://") {
        LinkKind::Web
    } else {
        LinkKind::Other
    }
}

/// Human-facing form of a link: `mailto:` stripped from addresses.
pub fn display_link(url: &str) -> &str {
    let trimmed = url.trim();
    match classify_link(trimmed) {
        LinkKind::Email => &trimmed["mailto:".len()..],
        _ => trimmed,
    }
}

/// The command that would open `target`. Not spawned.
pub fn open_command(target: &str) -> Command {
    let mut cmd = Command::new(OPENER);
    cmd.arg(target.trim());
    cmd
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Open `target` with the system handler, detached from the terminal.
///
/// Returns once the opener is spawned; its exit status is not awaited.
pub fn open_target(target: &str) -> io::Result<()> {
    open_command(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_schemes() {
        assert_eq!(classify_link("mailto:eli@example.com"), LinkKind::Email);
        assert_eq!(classify_link("MAILTO:eli@example.com"), LinkKind::Email);
        assert_eq!(classify_link("https://www.linkedin.com/in/x"), LinkKind::Web);
        assert_eq!(classify_link("http://example.com"), LinkKind::Web);
        assert_eq!(classify_link("/resume.pdf"), LinkKind::Other);
    }

    #[test]
    fn display_strips_mailto_only() {
        assert_eq!(display_link("mailto:eli@example.com"), "eli@example.com");
        assert_eq!(display_link(" https://example.com "), "https://example.com");
    }

    #[test]
    fn open_command_uses_platform_opener() {
        let cmd = open_command(" https://example.com ");
        assert_eq!(cmd.get_program(), OPENER);
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["https://example.com"]);
    }
}
