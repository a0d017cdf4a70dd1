//! TUI module for the interactive portfolio.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (Screen, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, threads, typewriter timer)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
