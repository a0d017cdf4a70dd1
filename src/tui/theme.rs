//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Cyan: the live headline and interactive elements (links, hints)
//! - Green: success (downloads, reloads)
//! - Red: failed effects
//! - Dim: de-emphasized (taglines, descriptions, paths)
//! - Bold: headings

use ratatui::style::{Color, Modifier, Style};

/// Glyph drawn after the typewriter text.
pub const CARET: &str = "▌";

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Success status: green.
pub const STYLE_SAFE: Style = Style::new().fg(Color::Green);

/// Failure status: red.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Section heading / hero name.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Active section tab.
pub const STYLE_TAB_ACTIVE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Inactive section tab.
pub const STYLE_TAB: Style = Style::new().fg(Color::DarkGray);

/// Typewriter headline text.
pub const STYLE_HEADLINE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Blinking caret after the headline.
pub const STYLE_CARET: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::SLOW_BLINK);

/// Cursor row in a list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Call-to-action button (resume download).
pub const STYLE_BUTTON: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::White)
    .add_modifier(Modifier::BOLD);

/// URL text.
pub const STYLE_LINK: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::UNDERLINED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_SAFE.fg, Some(Color::Green));
        assert_eq!(STYLE_DANGER.fg, Some(Color::Red));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn caret_blinks() {
        assert!(STYLE_CARET.add_modifier.contains(Modifier::SLOW_BLINK));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }
}
