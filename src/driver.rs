//! Tick scheduler: runs a [`Typewriter`] on a cancellable timer thread.
//!
//! One thread per driver, one pending tick at a time. The thread waits on a
//! cancel channel with a timeout equal to the next delay: a timeout fires
//! the tick, anything else ends the loop. `stop` signals and joins, so once
//! it returns the render surface is never called again.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use crate::error::DriverError;
use crate::typewriter::Typewriter;
use crate::types::TypewriterConfig;

// ============================================================================
// RENDER SURFACE
// ============================================================================

/// Receives the visible text after every state change.
///
/// Implementations display it verbatim (optionally with a caret) and never
/// feed anything back into the typewriter.
pub trait RenderSurface: Send + 'static {
    fn render(&mut self, text: &str);
}

/// Forwards each text to a channel. Send failures are ignored: a dropped
/// receiver just means nobody is watching any more.
impl RenderSurface for Sender<String> {
    fn render(&mut self, text: &str) {
        let _ = self.send(text.to_string());
    }
}

/// Closure adapter, see [`from_fn`].
pub struct FnSurface<F>(F);

impl<F> RenderSurface for FnSurface<F>
where
    F: FnMut(&str) + Send + 'static,
{
    fn render(&mut self, text: &str) {
        (self.0)(text)
    }
}

/// Use a closure as a render surface.
pub fn from_fn<F>(f: F) -> FnSurface<F>
where
    F: FnMut(&str) + Send + 'static,
{
    FnSurface(f)
}

// ============================================================================
// DRIVER
// ============================================================================

/// Handle to a running typewriter timer.
///
/// Dropping the handle stops the timer.
pub struct Driver<S: RenderSurface> {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<(Typewriter, S)>>,
}

impl<S: RenderSurface> Driver<S> {
    /// Render the initial text and start ticking.
    pub fn start(typewriter: Typewriter, surface: S) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel();

        debug!(
            phrases = typewriter.phrases().len(),
            cycle_ms = typewriter.cycle_duration().as_millis() as u64,
            "starting typewriter"
        );

        let handle = thread::spawn(move || run_ticks(typewriter, surface, cancel_rx));

        Driver {
            cancel: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    /// Cancel the pending tick and wait for the timer thread to exit.
    ///
    /// Returns the typewriter as it was when stopped, or None if the timer
    /// thread panicked.
    pub fn stop(mut self) -> Option<Typewriter> {
        self.shutdown().map(|(typewriter, _)| typewriter)
    }

    /// Swap in a new phrase list / timing.
    ///
    /// The new config is validated first; on error the running timer is
    /// left alone. Otherwise the old timer is cancelled and joined before
    /// the new one is scheduled, so the two never overlap.
    pub fn reconfigure(&mut self, config: &TypewriterConfig) -> Result<(), DriverError> {
        let next = Typewriter::new(config)?;
        let (_, surface) = self.shutdown().ok_or(DriverError::NotRunning)?;
        *self = Driver::start(next, surface);
        Ok(())
    }

    /// True while the timer thread is alive.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn shutdown(&mut self) -> Option<(Typewriter, S)> {
        if let Some(cancel) = self.cancel.take() {
            // Err means the thread already exited; join below still reaps it.
            let _ = cancel.send(());
        }
        let joined = self.handle.take()?.join().ok();
        if let Some((typewriter, _)) = &joined {
            debug!(
                index = typewriter.index(),
                cycles = typewriter.cycles(),
                "typewriter stopped"
            );
        }
        joined
    }
}

impl<S: RenderSurface> Drop for Driver<S> {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// Timer loop. Owns the typewriter and the surface until cancelled.
fn run_ticks<S: RenderSurface>(
    mut typewriter: Typewriter,
    mut surface: S,
    cancel: Receiver<()>,
) -> (Typewriter, S) {
    surface.render(typewriter.visible_text());

    loop {
        match cancel.recv_timeout(typewriter.next_delay()) {
            Err(RecvTimeoutError::Timeout) => {
                typewriter.tick();
                trace!(
                    mode = ?typewriter.mode(),
                    index = typewriter.index(),
                    text = typewriter.visible_text(),
                    "tick"
                );
                surface.render(typewriter.visible_text());
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    (typewriter, surface)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::typewriter::Mode;
    use std::sync::mpsc::TryRecvError;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(2);

    fn fast(phrases: &[&str]) -> TypewriterConfig {
        TypewriterConfig {
            typing_speed_ms: 1,
            deleting_speed_ms: 1,
            pause_ms: 1,
            ..TypewriterConfig::with_phrases(phrases.iter().copied())
        }
    }

    fn fast_typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(&fast(phrases)).unwrap()
    }

    fn take(rx: &Receiver<String>, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| rx.recv_timeout(WAIT).expect("typewriter should keep ticking"))
            .collect()
    }

    #[test]
    fn renders_initial_text_then_every_tick() {
        let (tx, rx) = mpsc::channel();
        let driver = Driver::start(fast_typewriter(&["Go", "Run"]), tx);

        let seen = take(&rx, 14);
        driver.stop();

        assert_eq!(
            seen,
            [
                "", "G", "Go", "Go", "G", "", "R", "Ru", "Run", "Run", "Ru", "R", "", "G"
            ]
        );
    }

    #[test]
    fn stop_prevents_further_renders() {
        let (tx, rx) = mpsc::channel();
        let driver = Driver::start(fast_typewriter(&["Electrical Engineer"]), tx);
        take(&rx, 5);

        let stopped = driver.stop().expect("timer thread should not panic");
        assert!(stopped.current_phrase().starts_with(stopped.visible_text()));

        // Everything rendered before stop is already queued; the surface
        // (the only sender) was dropped with the joined thread.
        let _backlog: Vec<_> = rx.try_iter().collect();
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn drop_stops_the_timer() {
        let (tx, rx) = mpsc::channel();
        {
            let _driver = Driver::start(fast_typewriter(&["abc"]), tx);
            take(&rx, 2);
        }
        let _backlog: Vec<_> = rx.try_iter().collect();
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn slow_pause_is_cancelled_promptly() {
        let config = TypewriterConfig {
            typing_speed_ms: 1,
            pause_ms: 60_000,
            ..TypewriterConfig::with_phrases(["a"])
        };
        let (tx, rx) = mpsc::channel();
        let driver = Driver::start(Typewriter::new(&config).unwrap(), tx);
        assert_eq!(take(&rx, 2), ["", "a"]);

        let stopped = driver.stop().unwrap();
        assert_eq!(stopped.mode(), Mode::Pausing);
    }

    #[test]
    fn closure_surface_receives_text() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let (tx, rx) = mpsc::channel();
        let driver = Driver::start(
            fast_typewriter(&["hi"]),
            from_fn(move |text: &str| {
                sink.lock().unwrap().push(text.to_string());
                let _ = tx.send(());
            }),
        );
        for _ in 0..3 {
            rx.recv_timeout(WAIT).unwrap();
        }
        driver.stop();

        let log = log.lock().unwrap();
        assert_eq!(&log[..3], ["", "h", "hi"]);
    }

    #[test]
    fn reconfigure_rejects_empty_phrases_and_keeps_running() {
        let (tx, rx) = mpsc::channel();
        let mut driver = Driver::start(fast_typewriter(&["abc"]), tx);
        take(&rx, 1);

        let err = driver
            .reconfigure(&TypewriterConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DriverError::Config(ConfigError::EmptyPhraseList)
        ));
        assert!(driver.is_running());
        take(&rx, 3);
    }

    #[test]
    fn reconfigure_never_interleaves_old_and_new_phrases() {
        let (tx, rx) = mpsc::channel();
        let mut driver = Driver::start(fast_typewriter(&["ab"]), tx);
        take(&rx, 3);

        driver.reconfigure(&fast(&["Z"])).unwrap();

        // Old renders all precede new ones in the channel.
        loop {
            let text = rx.recv_timeout(WAIT).unwrap();
            if text == "Z" {
                break;
            }
        }
        for text in take(&rx, 10) {
            assert!(text.is_empty() || text == "Z", "stale render: {text:?}");
        }
        assert!(driver.is_running());
    }
}
