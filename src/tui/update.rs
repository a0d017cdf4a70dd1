//! Pure state transitions: (Screen, Action) → Transition.
//!
//! Fully testable without a terminal. Section navigation, download, reload
//! and quit work everywhere; list screens add cursor movement and Enter.
//! Unhandled actions return the current screen unchanged (no-op).

use crate::types::Page;

use super::state::{Action, App, AppEvent, Effect, Screen, Section, Transition};

/// Pure state transition function.
pub fn update(screen: Screen, action: &Action, page: &Page) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::NextSection => {
            return Transition::Screen(Screen::for_section(screen.section().next()));
        }
        Action::PrevSection => {
            return Transition::Screen(Screen::for_section(screen.section().prev()));
        }
        Action::NumberKey(n) => {
            return match Section::from_number(*n) {
                Some(section) => Transition::Screen(Screen::for_section(section)),
                None => Transition::Screen(screen),
            };
        }
        Action::Download => return download(screen, page),
        Action::Reload => return Transition::Effect(screen, Effect::ReloadPage),
        _ => {}
    }

    match screen {
        Screen::Projects { cursor } => update_projects(cursor, action, page),
        Screen::ProjectDetail { index } => update_project_detail(index, action, page),
        Screen::Contact { cursor } => update_contact(cursor, action, page),
        Screen::Resume => match action {
            Action::Enter => download(screen, page),
            Action::Back => Transition::Screen(Screen::Hero),
            _ => Transition::Screen(screen),
        },
        Screen::Hero | Screen::About => match action {
            Action::Back => Transition::Screen(Screen::Hero),
            _ => Transition::Screen(screen),
        },
    }
}

/// Apply a background (non-key) event to the app.
pub fn handle_background_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Headline { generation, text } => {
            if generation == app.headline_generation {
                app.headline = text;
            }
        }
        // Keys go through map_key → update
        AppEvent::Key(_) => {}
    }
}

/// Clamp cursors after the page changed underneath the screen.
pub fn fit_screen(screen: Screen, page: &Page) -> Screen {
    match screen {
        Screen::Projects { cursor } => Screen::Projects {
            cursor: clamp(cursor, page.projects.len()),
        },
        Screen::ProjectDetail { index } if index >= page.projects.len() => Screen::Projects {
            cursor: clamp(index, page.projects.len()),
        },
        Screen::Contact { cursor } => Screen::Contact {
            cursor: clamp(cursor, page.contact.links.len()),
        },
        other => other,
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Download is only offered when the page has a resume.
fn download(screen: Screen, page: &Page) -> Transition {
    if page.resume.is_some() {
        Transition::Effect(screen, Effect::DownloadResume)
    } else {
        Transition::Screen(screen)
    }
}

/// Projects: cursor movement, drill-down.
fn update_projects(cursor: usize, action: &Action, page: &Page) -> Transition {
    let len = page.projects.len();

    match action {
        Action::MoveUp => Transition::Screen(Screen::Projects {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::Screen(Screen::Projects {
            cursor: step_down(cursor, len),
        }),
        Action::Enter if cursor < len => {
            Transition::Screen(Screen::ProjectDetail { index: cursor })
        }
        Action::Back => Transition::Screen(Screen::Hero),
        _ => Transition::Screen(Screen::Projects { cursor }),
    }
}

/// ProjectDetail: flip between projects, open the project link, back to list.
fn update_project_detail(index: usize, action: &Action, page: &Page) -> Transition {
    let len = page.projects.len();

    match action {
        Action::MoveUp => Transition::Screen(Screen::ProjectDetail {
            index: index.saturating_sub(1),
        }),
        Action::MoveDown => Transition::Screen(Screen::ProjectDetail {
            index: step_down(index, len),
        }),
        Action::Enter => match page.projects.get(index).and_then(|p| p.link.clone()) {
            Some(url) => Transition::Effect(
                Screen::ProjectDetail { index },
                Effect::OpenLink { url },
            ),
            None => Transition::Screen(Screen::ProjectDetail { index }),
        },
        Action::Back => Transition::Screen(Screen::Projects { cursor: index }),
        _ => Transition::Screen(Screen::ProjectDetail { index }),
    }
}

/// Contact: cursor movement, open the focused link.
fn update_contact(cursor: usize, action: &Action, page: &Page) -> Transition {
    let links = &page.contact.links;

    match action {
        Action::MoveUp => Transition::Screen(Screen::Contact {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::Screen(Screen::Contact {
            cursor: step_down(cursor, links.len()),
        }),
        Action::Enter => match links.get(cursor) {
            Some(link) => Transition::Effect(
                Screen::Contact { cursor },
                Effect::OpenLink {
                    url: link.url.clone(),
                },
            ),
            None => Transition::Screen(Screen::Contact { cursor }),
        },
        Action::Back => Transition::Screen(Screen::Hero),
        _ => Transition::Screen(Screen::Contact { cursor }),
    }
}

fn step_down(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (cursor + 1).min(len - 1) }
}

fn clamp(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

// ============================================================================
// TESTS
// ============================================================================
