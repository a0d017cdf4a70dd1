//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches on the current Screen variant. Widget-building functions are
//! pure (state in, widgets out); the only effect is Frame::render_widget().

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::platform::{classify_link, display_link, LinkKind};
use crate::types::Page;

use super::state::{App, Screen, Section, Status, StatusKind};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Tabs at top, content, status line, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // tabs
        Constraint::Min(0),    // content
        Constraint::Length(1), // status
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_tabs(&app.screen), chunks[0]);
    frame.render_widget(render_status(app.status.as_ref()), chunks[2]);
    frame.render_widget(render_help(&app.screen, &app.page), chunks[3]);

    let content_area = chunks[1];
    let page = &app.page;

    match &app.screen {
        Screen::Hero => render_hero(page, &app.headline, frame, content_area),
        Screen::About => render_about(page, frame, content_area),
        Screen::Projects { cursor } => render_projects(page, *cursor, frame, content_area),
        Screen::ProjectDetail { index } => {
            render_project_detail(page, *index, frame, content_area)
        }
        Screen::Resume => render_resume(page, frame, content_area),
        Screen::Contact { cursor } => render_contact(page, *cursor, frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Section tabs with the current section highlighted.
fn render_tabs(screen: &Screen) -> Paragraph<'static> {
    let current = screen.section();
    let mut spans = Vec::new();
    for section in Section::ALL {
        let style = if section == current {
            theme::STYLE_TAB_ACTIVE
        } else {
            theme::STYLE_TAB
        };
        spans.push(Span::styled(
            format!(" {} {} ", section.number(), section.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

fn render_status(status: Option<&Status>) -> Paragraph<'static> {
    let Some(status) = status else {
        return Paragraph::new("");
    };
    let style = match status.kind {
        StatusKind::Info => theme::STYLE_SAFE,
        StatusKind::Error => theme::STYLE_DANGER,
    };
    Paragraph::new(Span::styled(status.message.clone(), style))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen, page: &Page) -> Paragraph<'static> {
    let screen_keys = match screen {
        Screen::Hero | Screen::About => "",
        Screen::Projects { .. } => "[j/k] move  [Enter] details  ",
        Screen::ProjectDetail { .. } => "[j/k] prev/next  [Enter] open link  [Esc] back  ",
        Screen::Resume => "[Enter] download  ",
        Screen::Contact { .. } => "[j/k] move  [Enter] open  ",
    };
    let download = if page.resume.is_some() { "[d] resume  " } else { "" };

    Paragraph::new(Span::styled(
        format!(
            "{}[Tab/1-5] section  {}[r] reload  [q] quit",
            screen_keys, download
        ),
        theme::STYLE_HELP,
    ))
}

// ============================================================================
// SCREEN: HERO
// ============================================================================

fn render_hero(page: &Page, headline: &str, frame: &mut Frame, area: Rect) {
    // Roughly center the three hero lines vertically
    let top_padding = area.height.saturating_sub(5) / 2;

    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(page.name.clone(), theme::STYLE_TITLE)));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(headline.to_string(), theme::STYLE_HEADLINE),
        Span::styled(theme::CARET, theme::STYLE_CARET),
    ]));
    lines.push(Line::from(""));
    if !page.tagline.is_empty() {
        lines.push(Line::from(Span::styled(page.tagline.clone(), theme::STYLE_DIM)));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: ABOUT
// ============================================================================

fn render_about(page: &Page, frame: &mut Frame, area: Rect) {
    let title = if page.about.title.is_empty() {
        "About"
    } else {
        page.about.title.as_str()
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", title), theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(format!("  {}", page.about.body)),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: PROJECTS
// ============================================================================

fn render_projects(page: &Page, cursor: usize, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Featured Projects", theme::STYLE_TITLE)),
        Line::from(""),
    ];

    if page.projects.is_empty() {
        lines.push(Line::from(Span::styled("  No projects yet.", theme::STYLE_DIM)));
    }

    for (i, project) in page.projects.iter().enumerate() {
        let (marker, style) = if i == cursor {
            ("› ", theme::STYLE_CURSOR)
        } else {
            ("  ", theme::STYLE_IMPORTANT)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {}", marker)),
            Span::styled(project.title.clone(), style),
        ]));
        if !project.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("      {}", project.description),
                theme::STYLE_DIM,
            )));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_project_detail(page: &Page, index: usize, frame: &mut Frame, area: Rect) {
    let Some(project) = page.projects.get(index) else {
        frame.render_widget(
            Paragraph::new(Span::styled("  Project not found.", theme::STYLE_DIM)),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", project.title), theme::STYLE_TITLE)),
        Line::from(Span::styled(
            format!("  {} of {}", index + 1, page.projects.len()),
            theme::STYLE_DIM,
        )),
        Line::from(""),
        Line::from(format!("  {}", project.description)),
    ];

    if let Some(link) = &project.link {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(link.clone(), theme::STYLE_LINK),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: RESUME
// ============================================================================

fn render_resume(page: &Page, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("My Resume", theme::STYLE_TITLE)),
        Line::from(""),
    ];

    match &page.resume {
        Some(resume) => {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", resume.label),
                theme::STYLE_BUTTON,
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                resume.path.display().to_string(),
                theme::STYLE_DIM,
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No resume available.",
                theme::STYLE_DIM,
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: CONTACT
// ============================================================================

fn render_contact(page: &Page, cursor: usize, frame: &mut Frame, area: Rect) {
    let contact = &page.contact;
    let title = if contact.title.is_empty() {
        "Contact"
    } else {
        contact.title.as_str()
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", title), theme::STYLE_TITLE)),
        Line::from(""),
    ];
    if !contact.blurb.is_empty() {
        lines.push(Line::from(format!("  {}", contact.blurb)));
        lines.push(Line::from(""));
    }

    for (i, link) in contact.links.iter().enumerate() {
        let icon = match classify_link(&link.url) {
            LinkKind::Email => "✉",
            LinkKind::Web => "↗",
            LinkKind::Other => "•",
        };
        let label_style = if i == cursor {
            theme::STYLE_CURSOR
        } else {
            theme::STYLE_IMPORTANT
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", icon), theme::STYLE_INTERACTIVE),
            Span::styled(link.label.clone(), label_style),
            Span::raw("  "),
            Span::styled(display_link(&link.url).to_string(), theme::STYLE_LINK),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PageSource, Project};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(120, 30);
        Terminal::new(backend).unwrap()
    }

    fn app_on(screen: Screen) -> App {
        let mut app = App::new(Page::builtin(), PageSource::BuiltIn);
        app.screen = screen;
        app
    }

    fn rendered(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn hero_shows_name_headline_and_caret() {
        let mut app = app_on(Screen::Hero);
        app.headline = "Electrical Eng".to_string();
        let content = rendered(&app);
        assert!(content.contains("Eli Van Tassell"));
        assert!(content.contains("Electrical Eng▌"));
        assert!(content.contains("Innovator"), "tagline should render");
    }

    #[test]
    fn hero_with_empty_headline_shows_only_caret() {
        let content = rendered(&app_on(Screen::Hero));
        assert!(content.contains(theme::CARET));
    }

    #[test]
    fn tabs_list_every_section() {
        let content = rendered(&app_on(Screen::About));
        for section in Section::ALL {
            assert!(content.contains(section.label()), "missing {:?}", section);
        }
    }

    #[test]
    fn about_shows_body() {
        let content = rendered(&app_on(Screen::About));
        assert!(content.contains("About Me"));
        assert!(content.contains("Electrical Engineer graduating"));
    }

    #[test]
    fn projects_list_titles_with_cursor() {
        let content = rendered(&app_on(Screen::Projects { cursor: 1 }));
        assert!(content.contains("Embedded Sensor Dashboard"));
        assert!(content.contains("› Teensy CNN Classifier"));
    }

    #[test]
    fn empty_projects_render_placeholder() {
        let mut app = app_on(Screen::Projects { cursor: 0 });
        app.page.projects.clear();
        assert!(rendered(&app).contains("No projects yet."));
    }

    #[test]
    fn project_detail_shows_position_and_link() {
        let mut app = app_on(Screen::ProjectDetail { index: 2 });
        app.page.projects.push(Project {
            title: "Rover".to_string(),
            description: "Drives.".to_string(),
            link: Some("https://example.com/rover".to_string()),
        });
        let content = rendered(&app);
        assert!(content.contains("Rover"));
        assert!(content.contains("3 of 3"));
        assert!(content.contains("https://example.com/rover"));
    }

    #[test]
    fn project_detail_out_of_range_does_not_panic() {
        let content = rendered(&app_on(Screen::ProjectDetail { index: 99 }));
        assert!(content.contains("Project not found."));
    }

    #[test]
    fn resume_shows_button_and_help() {
        let content = rendered(&app_on(Screen::Resume));
        assert!(content.contains("Download Resume"));
        assert!(content.contains("[d] resume"));
    }

    #[test]
    fn resume_missing_hides_download_hint() {
        let mut app = app_on(Screen::Resume);
        app.page.resume = None;
        let content = rendered(&app);
        assert!(content.contains("No resume available."));
        assert!(!content.contains("[d] resume"));
    }

    #[test]
    fn contact_shows_links_without_mailto() {
        let content = rendered(&app_on(Screen::Contact { cursor: 0 }));
        assert!(content.contains("Let's Connect"));
        assert!(content.contains("Get in Touch"));
        assert!(content.contains("eli@example.com"));
        assert!(!content.contains("mailto:"));
        assert!(content.contains("LinkedIn"));
    }

    #[test]
    fn status_line_renders_message() {
        let mut app = app_on(Screen::Hero);
        app.status = Some(Status::error("Failed to open link"));
        assert!(rendered(&app).contains("Failed to open link"));
    }

    #[test]
    fn all_screens_render_without_panic() {
        let mut terminal = make_terminal();
        let screens = vec![
            Screen::Hero,
            Screen::About,
            Screen::Projects { cursor: 0 },
            Screen::ProjectDetail { index: 0 },
            Screen::Resume,
            Screen::Contact { cursor: 1 },
        ];
        for screen in screens {
            let app = app_on(screen);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every screen should render without panic");
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let app = app_on(Screen::Hero);
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
