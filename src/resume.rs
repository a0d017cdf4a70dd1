//! Resume download: copy the configured resume into a downloads folder.
//!
//! Never overwrites. A second download of `resume.pdf` lands as
//! `resume (1).pdf`, the way browsers name repeated downloads.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ResumeError;
use crate::types::Resume;

/// Upper bound on `name (n).ext` probing.
const MAX_DUPLICATE_SUFFIX: u32 = 999;

/// Where downloads go by default: the platform downloads directory,
/// then `~/Downloads`, then the current directory.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Result of a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Copy the page's resume into `dest_dir`.
pub fn download(resume: Option<&Resume>, dest_dir: &Path) -> Result<Downloaded, ResumeError> {
    let resume = resume.ok_or(ResumeError::NotConfigured)?;
    copy_to_dir(&resume.path, dest_dir)
}

/// Copy `source` into `dest_dir` under a free name.
pub fn copy_to_dir(source: &Path, dest_dir: &Path) -> Result<Downloaded, ResumeError> {
    if !source.is_file() {
        return Err(ResumeError::Missing {
            path: source.to_path_buf(),
        });
    }

    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| ResumeError::Io { path, source }
    };

    fs::create_dir_all(dest_dir).map_err(io_err(dest_dir))?;

    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());

    let mut input = File::open(source).map_err(io_err(source))?;
    let (target, mut output) = create_free(dest_dir, &file_name)?;
    let bytes = io::copy(&mut input, &mut output).map_err(io_err(&target))?;

    info!(from = %source.display(), to = %target.display(), bytes, "resume downloaded");
    Ok(Downloaded {
        path: target,
        bytes,
    })
}

/// Create the first free `name`, `name (1)`, `name (2)`, ... in `dir`.
///
/// Creation is exclusive, so a file that appears between probes is skipped
/// rather than overwritten.
fn create_free(dir: &Path, file_name: &str) -> Result<(PathBuf, File), ResumeError> {
    let (stem, ext) = split_extension(file_name);

    for n in 0..=MAX_DUPLICATE_SUFFIX {
        let candidate = match n {
            0 => dir.join(file_name),
            n => dir.join(format!("{} ({}){}", stem, n, ext)),
        };
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(source) => {
                return Err(ResumeError::Io {
                    path: candidate,
                    source,
                });
            }
        }
    }

    Err(ResumeError::NoFreeName {
        dir: dir.to_path_buf(),
        name: file_name.to_string(),
        max: MAX_DUPLICATE_SUFFIX,
    })
}

/// "resume.pdf" → ("resume", ".pdf"); dotfiles and extensionless names keep
/// everything in the stem.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => file_name.split_at(pos),
        _ => (file_name, ""),
    }
}

// ============================================================================
// TESTS
// ============================================================================
