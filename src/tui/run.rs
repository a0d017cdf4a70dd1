//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only TUI module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: two producers feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Typewriter timer: sends the headline text after every tick
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use humansize::{format_size, BINARY};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use crate::config::{self, LoadedPage};
use crate::driver::{self, Driver, RenderSurface};
use crate::error::DriverError;
use crate::platform::{display_link, open_target};
use crate::resume;
use crate::types::TypewriterConfig;
use crate::typewriter::Typewriter;

use super::state::{Action, App, AppEvent, Effect, Status, Transition};
use super::update::{fit_screen, handle_background_event, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Sections
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextSection),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevSection),
        KeyCode::Char(c @ '1'..='5') => Some(Action::NumberKey(c as u8 - b'0')),

        // Lists
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        // Effects
        KeyCode::Char('d') => Some(Action::Download),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND PRODUCERS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                // Windows reports releases too; only presses are actions
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, releases
                Err(_) => break,
            }
        }
    });
}

/// The headline timer and the generation tag stamped on its renders.
struct Headline<S: RenderSurface> {
    driver: Driver<S>,
    generation: Arc<AtomicU64>,
}

impl<S: RenderSurface> Headline<S> {
    /// Restart with a new config. Returns the generation of the new timer.
    ///
    /// The tag is bumped only after the old timer is joined, so every render
    /// still queued from it carries an older generation.
    fn reconfigure(&mut self, config: &TypewriterConfig) -> Result<u64, DriverError> {
        self.driver.reconfigure(config)?;
        Ok(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    fn stop(self) -> Option<Typewriter> {
        self.driver.stop()
    }
}

/// Start the headline typewriter, rendering into the event channel.
fn start_headline(typewriter: Typewriter, tx: mpsc::Sender<AppEvent>) -> Headline<impl RenderSurface> {
    let generation = Arc::new(AtomicU64::new(0));
    let tag = Arc::clone(&generation);
    let driver = Driver::start(
        typewriter,
        driver::from_fn(move |text: &str| {
            // Receiver gone means the TUI is exiting; the driver is stopped next.
            let _ = tx.send(AppEvent::Headline {
                generation: tag.load(Ordering::SeqCst),
                text: text.to_string(),
            });
        }),
    );
    Headline { driver, generation }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive portfolio until the user quits.
///
/// Downloads land in `download_dir`.
pub fn run(loaded: LoadedPage, download_dir: PathBuf) -> io::Result<()> {
    // Fail before touching the terminal if the phrases are unusable
    let typewriter = Typewriter::new(&loaded.page.typewriter)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(loaded.page, loaded.source);

    let (tx, rx) = mpsc::channel::<AppEvent>();

    spawn_key_reader(tx.clone());
    let mut headline = start_headline(typewriter, tx);

    info!("tui started");

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    app.status = None;
                    let screen = std::mem::take(&mut app.screen);

                    match update(screen, &action, &app.page) {
                        Transition::Screen(new_screen) => {
                            app.screen = new_screen;
                        }
                        Transition::Quit => {
                            app.should_quit = true;
                        }
                        Transition::Effect(screen, effect) => {
                            app.screen = screen;
                            handle_effect(effect, &mut app, &mut headline, &download_dir);
                        }
                    }
                }
            }
            background_event => {
                handle_background_event(&mut app, background_event);
            }
        }
    }

    // No headline tick may reach a torn-down terminal
    headline.stop();
    restore_terminal()?;
    info!("tui exited");
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a side effect requested by a pure transition.
///
/// Failures never leave the TUI; they become the status line.
fn handle_effect<S: RenderSurface>(
    effect: Effect,
    app: &mut App,
    headline: &mut Headline<S>,
    download_dir: &Path,
) {
    app.status = Some(match effect {
        Effect::DownloadResume => match resume::download(app.page.resume.as_ref(), download_dir) {
            Ok(done) => Status::info(format!(
                "Saved {} ({})",
                done.path.display(),
                format_size(done.bytes, BINARY)
            )),
            Err(e) => {
                warn!(error = %e, "resume download failed");
                Status::error(e.to_string())
            }
        },
        Effect::OpenLink { url } => match open_target(&url) {
            Ok(()) => {
                info!(%url, "opened link");
                Status::info(format!("Opened {}", display_link(&url)))
            }
            Err(e) => {
                warn!(%url, error = %e, "failed to open link");
                Status::error(format!("Failed to open {}: {}", display_link(&url), e))
            }
        },
        Effect::ReloadPage => reload_page(app, headline),
    });
}

/// Re-read the page and restart the headline with its phrases.
///
/// The page is only swapped in once the new typewriter is running, so a
/// bad file leaves both the page and the headline untouched.
fn reload_page<S: RenderSurface>(app: &mut App, headline: &mut Headline<S>) -> Status {
    let loaded = match config::reload(&app.source) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!(error = %e, "reload failed");
            return Status::error(format!("Reload failed: {}", e));
        }
    };

    let generation = match headline.reconfigure(&loaded.page.typewriter) {
        Ok(generation) => generation,
        Err(e) => {
            warn!(error = %e, "headline restart failed");
            return Status::error(format!("Reload failed: {}", e));
        }
    };

    let screen = std::mem::take(&mut app.screen);
    app.screen = fit_screen(screen, &loaded.page);
    app.page = loaded.page;
    app.source = loaded.source;
    app.headline_generation = generation;
    app.headline.clear();
    Status::info("Page reloaded")
}

// ============================================================================
// TESTS
// ============================================================================
