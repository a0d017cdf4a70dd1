//! Error types for typefolio.
//!
//! One enum per concern. Library code returns these; the CLI flattens
//! them to strings at the edge.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid or unreadable page / typewriter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("phrase list is empty; the typewriter needs at least one phrase")]
    EmptyPhraseList,

    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize page: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{} already exists (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of the tick scheduler.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The timer thread is gone (stopped or panicked), so its render
    /// surface cannot be handed to a new timer.
    #[error("typewriter timer is not running")]
    NotRunning,
}

/// Failures while copying the resume to the downloads directory.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("no resume configured for this page")]
    NotConfigured,

    #[error("resume file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("no free name for {name} in {} (tried up to ({max}))", dir.display())]
    NoFreeName { dir: PathBuf, name: String, max: u32 },

    #[error("failed to copy resume to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_names_the_field() {
        let err = ConfigError::ZeroInterval { field: "pause_ms" };
        assert_eq!(err.to_string(), "pause_ms must be greater than zero");
    }

    #[test]
    fn driver_error_is_transparent_over_config() {
        let err = DriverError::from(ConfigError::EmptyPhraseList);
        assert_eq!(err.to_string(), ConfigError::EmptyPhraseList.to_string());
    }
}
