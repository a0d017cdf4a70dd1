//! TUI state algebra: pure types, zero effects.
//!
//! Screen variants carry only per-screen transient state (cursors). Shared
//! data (the page, the current headline text) lives in App.

use crossterm::event::KeyEvent;

use crate::types::{Page, PageSource};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - The typewriter timer sends `Headline` after every tick
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// New visible text of the typewriter headline, tagged with the
    /// generation of the timer that produced it.
    Headline { generation: u64, text: String },
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen with its cursor state.
    pub screen: Screen,

    /// Content being shown.
    pub page: Page,

    /// Where `page` was loaded from, for reloads.
    pub source: PageSource,

    /// Latest typewriter output. Rendered verbatim plus a caret.
    pub headline: String,

    /// Generation of the headline timer whose output is current. Bumped on
    /// reload; older `Headline` events are dropped.
    pub headline_generation: u64,

    /// One-line feedback from the last effect. Cleared on the next key.
    pub status: Option<Status>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Feedback line shown above the help bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

// ============================================================================
// SECTIONS
// ============================================================================

/// Top-level page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Projects,
    Resume,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Resume,
        Section::Contact,
    ];

    /// 1-based number shown in the tab bar.
    pub fn number(self) -> u8 {
        match self {
            Section::Hero => 1,
            Section::About => 2,
            Section::Projects => 3,
            Section::Resume => 4,
            Section::Contact => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.number() == n)
    }

    /// Next section, wrapping.
    pub fn next(self) -> Section {
        let i = self.number() as usize % Section::ALL.len();
        Section::ALL[i]
    }

    /// Previous section, wrapping.
    pub fn prev(self) -> Section {
        let len = Section::ALL.len();
        let i = (self.number() as usize + len - 2) % len;
        Section::ALL[i]
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Name, typewriter headline, tagline.
    #[default]
    Hero,

    About,

    /// Project cards.
    Projects {
        /// Focused project.
        cursor: usize,
    },

    /// A single project.
    ProjectDetail {
        /// Index into page.projects.
        index: usize,
    },

    /// Resume download button.
    Resume,

    /// Contact links.
    Contact {
        /// Focused link.
        cursor: usize,
    },
}

impl Screen {
    /// Entry screen of a section, cursor at the top.
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Hero => Screen::Hero,
            Section::About => Screen::About,
            Section::Projects => Screen::Projects { cursor: 0 },
            Section::Resume => Screen::Resume,
            Section::Contact => Screen::Contact { cursor: 0 },
        }
    }

    /// Section this screen belongs to (highlighted in the tab bar).
    pub fn section(&self) -> Section {
        match self {
            Screen::Hero => Section::Hero,
            Screen::About => Section::About,
            Screen::Projects { .. } | Screen::ProjectDetail { .. } => Section::Projects,
            Screen::Resume => Section::Resume,
            Screen::Contact { .. } => Section::Contact,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up in a list.
    MoveUp,
    /// Move cursor down in a list.
    MoveDown,
    /// Go to the next section (wraps).
    NextSection,
    /// Go to the previous section (wraps).
    PrevSection,
    /// Jump to a section by number (1-5).
    NumberKey(u8),
    /// Open the focused item.
    Enter,
    /// Leave a detail view / return home.
    Back,
    /// Download the resume.
    Download,
    /// Re-read the page file.
    Reload,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Pure code describes WHAT should happen, the effects boundary decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Stay on this screen and execute a side effect.
    Effect(Screen, Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Copy the resume into the downloads directory.
    DownloadResume,
    /// Hand a URL to the system opener.
    OpenLink { url: String },
    /// Reload the page and restart the typewriter with its phrases.
    ReloadPage,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Landing state: hero screen, empty headline.
    pub fn new(page: Page, source: PageSource) -> Self {
        App {
            screen: Screen::Hero,
            page,
            source,
            headline: String::new(),
            headline_generation: 0,
            status: None,
            should_quit: false,
        }
    }
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_on_hero_with_empty_headline() {
        let app = App::new(Page::builtin(), PageSource::BuiltIn);
        assert_eq!(app.screen, Screen::Hero);
        assert!(app.headline.is_empty());
        assert!(app.status.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn section_numbers_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_number(section.number()), Some(section));
        }
        assert_eq!(Section::from_number(0), None);
        assert_eq!(Section::from_number(6), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Section::Hero.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
        assert_eq!(Section::Projects.prev(), Section::About);
    }

    #[test]
    fn project_detail_belongs_to_projects() {
        assert_eq!(
            Screen::ProjectDetail { index: 1 }.section(),
            Section::Projects
        );
    }

    #[test]
    fn for_section_starts_cursors_at_zero() {
        assert_eq!(
            Screen::for_section(Section::Contact),
            Screen::Contact { cursor: 0 }
        );
        assert_eq!(Screen::for_section(Section::Hero), Screen::Hero);
    }

    #[test]
    fn screen_default_is_hero() {
        assert_eq!(Screen::default(), Screen::Hero);
    }

    #[test]
    fn status_constructors_set_kind() {
        assert_eq!(Status::info("ok").kind, StatusKind::Info);
        assert_eq!(Status::error("bad").kind, StatusKind::Error);
    }
}
