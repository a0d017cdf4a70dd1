//! typefolio: a terminal personal portfolio with a typewriter headline.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod platform;
pub mod report;
pub mod resume;
pub mod tui;
pub mod types;
pub mod typewriter;
