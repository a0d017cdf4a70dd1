//! Typewriter headline: a pure type / pause / delete state machine.
//!
//! No clocks, no threads. `transition` maps one state to the next;
//! `Typewriter` bundles it with the phrase list and the timing table so a
//! scheduler (see [`crate::driver`]) only has to call `tick()` and sleep for
//! the returned delay.

use std::time::Duration;

use crate::error::ConfigError;
use crate::types::TypewriterConfig;

// ============================================================================
// PHRASES
// ============================================================================

/// Non-empty, read-only list of phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrases(Vec<String>);

impl Phrases {
    /// Rejects an empty list: there would be no current phrase to type.
    pub fn new(phrases: Vec<String>) -> Result<Self, ConfigError> {
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhraseList);
        }
        Ok(Phrases(phrases))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Phrase at `index`, wrapping around the list.
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// ============================================================================
// STATE
// ============================================================================

/// What the next tick will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Append one character per tick.
    Typing,
    /// Full phrase shown; the next tick starts deleting.
    Pausing,
    /// Remove one character per tick.
    Deleting,
}

/// The complete mutable state of a typewriter.
///
/// Invariant: `visible_len` is a char boundary of the current phrase and
/// never exceeds its length, so the visible text is always a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverState {
    /// Index of the current phrase.
    pub index: usize,
    /// Length in bytes of the visible prefix.
    pub visible_len: usize,
    pub mode: Mode,
    /// How many times the index wrapped back to 0.
    pub cycles: u64,
}

impl DriverState {
    /// Typing the first phrase, nothing shown yet.
    pub const INITIAL: DriverState = DriverState {
        index: 0,
        visible_len: 0,
        mode: Mode::Typing,
        cycles: 0,
    };

    /// The visible prefix of the current phrase.
    pub fn visible<'a>(&self, phrases: &'a Phrases) -> &'a str {
        &phrases.get(self.index)[..self.visible_len]
    }
}

impl Default for DriverState {
    fn default() -> Self {
        DriverState::INITIAL
    }
}

/// Pure state transition: one tick.
///
/// - Typing appends one character; reaching the full phrase enters Pausing.
/// - Pausing enters Deleting without touching the text.
/// - Deleting removes one character; reaching empty advances to the next
///   phrase (wrapping) and enters Typing.
///
/// An empty phrase is complete as soon as it is typed and empty as soon as
/// it is deleted, so it costs one tick in each mode.
pub fn transition(state: DriverState, phrases: &Phrases) -> DriverState {
    let phrase = phrases.get(state.index);

    match state.mode {
        Mode::Typing => {
            let visible_len = match phrase[state.visible_len..].chars().next() {
                Some(c) => state.visible_len + c.len_utf8(),
                None => state.visible_len,
            };
            let mode = if visible_len == phrase.len() {
                Mode::Pausing
            } else {
                Mode::Typing
            };
            DriverState {
                visible_len,
                mode,
                ..state
            }
        }
        Mode::Pausing => DriverState {
            mode: Mode::Deleting,
            ..state
        },
        Mode::Deleting => {
            let visible_len = match phrase[..state.visible_len].chars().next_back() {
                Some(c) => state.visible_len - c.len_utf8(),
                None => 0,
            };
            if visible_len > 0 {
                return DriverState {
                    visible_len,
                    ..state
                };
            }

            let index = (state.index + 1) % phrases.len();
            let cycles = if index == 0 {
                state.cycles + 1
            } else {
                state.cycles
            };
            DriverState {
                index,
                visible_len: 0,
                mode: Mode::Typing,
                cycles,
            }
        }
    }
}

// ============================================================================
// TIMING
// ============================================================================

/// Delay table, keyed by the mode the machine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
}

impl Timing {
    pub fn from_config(config: &TypewriterConfig) -> Result<Self, ConfigError> {
        Ok(Timing {
            typing: interval(config.typing_speed_ms, "typing_speed_ms")?,
            deleting: interval(config.deleting_speed_ms, "deleting_speed_ms")?,
            pause: interval(config.pause_ms, "pause_ms")?,
        })
    }

    /// How long to wait before the next tick when in `mode`.
    pub fn delay_for(&self, mode: Mode) -> Duration {
        match mode {
            Mode::Typing => self.typing,
            Mode::Pausing => self.pause,
            Mode::Deleting => self.deleting,
        }
    }
}

fn interval(ms: u64, field: &'static str) -> Result<Duration, ConfigError> {
    if ms == 0 {
        return Err(ConfigError::ZeroInterval { field });
    }
    Ok(Duration::from_millis(ms))
}

// ============================================================================
// TYPEWRITER
// ============================================================================

/// Phrase list + timing + state. Advanced only by [`Typewriter::tick`].
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Phrases,
    timing: Timing,
    state: DriverState,
}

impl Typewriter {
    /// Build a typewriter in the initial state. Fails fast on an empty
    /// phrase list or a zero interval.
    pub fn new(config: &TypewriterConfig) -> Result<Self, ConfigError> {
        let phrases = Phrases::new(config.phrases.clone())?;
        let timing = Timing::from_config(config)?;
        Ok(Typewriter {
            phrases,
            timing,
            state: DriverState::INITIAL,
        })
    }

    /// Apply one transition. Returns the delay before the next tick.
    pub fn tick(&mut self) -> Duration {
        self.state = transition(self.state, &self.phrases);
        self.next_delay()
    }

    /// Delay before the next tick, given the current mode.
    pub fn next_delay(&self) -> Duration {
        self.timing.delay_for(self.state.mode)
    }

    pub fn visible_text(&self) -> &str {
        self.state.visible(&self.phrases)
    }

    pub fn current_phrase(&self) -> &str {
        self.phrases.get(self.state.index)
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn cycles(&self) -> u64 {
        self.state.cycles
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn phrases(&self) -> &Phrases {
        &self.phrases
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Wall time of one pass over every phrase. Saturates at `Duration::MAX`.
    pub fn cycle_duration(&self) -> Duration {
        self.phrases.iter().fold(Duration::ZERO, |total, phrase| {
            let ticks = u32::try_from(phrase.chars().count().max(1)).unwrap_or(u32::MAX);
            total
                .saturating_add(self.timing.typing.saturating_mul(ticks))
                .saturating_add(self.timing.pause)
                .saturating_add(self.timing.deleting.saturating_mul(ticks))
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
