//! Logging setup: `tracing` events filtered by `TYPEFOLIO_LOG`.
//!
//! The TUI owns the terminal, so it logs to a file; every other command
//! logs to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "TYPEFOLIO_LOG";

/// Where log events go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to; parent directories are created.
    File(PathBuf),
}

/// `<data_local_dir>/typefolio/typefolio.log`.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("typefolio")
        .join("typefolio.log")
}

/// Filter used when `TYPEFOLIO_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "typefolio=info"
    } else {
        "typefolio=warn"
    }
}

/// Install the global subscriber.
///
/// A second call is a no-op. Fails only if the log file cannot be opened.
pub fn init(target: LogTarget, verbose: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init();
        }
    }

    Ok(())
}
