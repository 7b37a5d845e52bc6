//! Print surfaces
//!
//! A print surface takes a rendered document and hands it to something that
//! can print it. Failing to acquire the surface is reported as
//! [`PrintOutcome::Unavailable`] rather than an error: the print is simply
//! abandoned and the caller decides whether to warn.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use chrono::Utc;
use tracing::{debug, warn};

use super::document::ReceiptDocument;
use crate::error::{ReceiptError, ReceiptResult};

/// Result of handing a document to a print surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The document reached the surface
    Dispatched {
        /// Where the document was written, when it went to a file
        location: Option<PathBuf>,
    },
    /// No surface could be opened; the print was abandoned
    Unavailable { reason: String },
}

impl PrintOutcome {
    /// Whether the document reached the surface
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched { .. })
    }
}

/// Something a rendered receipt can be sent to
pub trait PrintSurface {
    /// Open the surface, write the document into it, and trigger printing
    fn dispatch(&self, document: &ReceiptDocument) -> PrintOutcome;
}

impl<S: PrintSurface + ?Sized> PrintSurface for Box<S> {
    fn dispatch(&self, document: &ReceiptDocument) -> PrintOutcome {
        (**self).dispatch(document)
    }
}

impl<S: PrintSurface + ?Sized> PrintSurface for &S {
    fn dispatch(&self, document: &ReceiptDocument) -> PrintOutcome {
        (**self).dispatch(document)
    }
}

/// Writes each document to its own file in a directory
#[derive(Debug)]
pub struct FileSurface {
    dir: PathBuf,
    sequence: AtomicU64,
}

impl FileSurface {
    /// Create a surface writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Directory documents are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the document to a fresh file and return its path
    pub fn write(&self, document: &ReceiptDocument) -> ReceiptResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ReceiptError::Render(format!(
                "Failed to create print directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let file_name = format!(
            "receipt-{}-{}-{}.html",
            document.receipt_no,
            Utc::now().format("%Y%m%dT%H%M%S%3f"),
            seq
        );
        let path = self.dir.join(file_name);

        fs::write(&path, &document.html).map_err(|e| {
            ReceiptError::Render(format!("Failed to write {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "receipt document written");
        Ok(path)
    }
}

impl PrintSurface for FileSurface {
    fn dispatch(&self, document: &ReceiptDocument) -> PrintOutcome {
        match self.write(document) {
            Ok(path) => PrintOutcome::Dispatched {
                location: Some(path),
            },
            Err(e) => {
                warn!(error = %e, "print file could not be written");
                PrintOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Print window files kept on disk by a [`BrowserSurface`]
pub const KEPT_WINDOW_FILES: usize = 16;

/// Writes the document to a file and opens it in the default browser, whose
/// page script brings up the print dialog
///
/// The files only exist for the browser to load, so the directory is pruned
/// down to [`KEPT_WINDOW_FILES`] after every dispatch.
#[derive(Debug)]
pub struct BrowserSurface {
    files: FileSurface,
    open_command: Option<String>,
}

impl BrowserSurface {
    /// Create a browser surface; `open_command` overrides the platform opener
    pub fn new(dir: impl Into<PathBuf>, open_command: Option<String>) -> Self {
        Self {
            files: FileSurface::new(dir),
            open_command,
        }
    }

    /// Remove older print window files, never `current`
    fn prune(&self, current: &Path) {
        let entries = match fs::read_dir(self.files.dir()) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "print directory could not be listed");
                return;
            }
        };

        let mut older: Vec<(std::time::SystemTime, PathBuf)> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path != current && is_window_file(path))
            .map(|path| {
                let modified = fs::metadata(&path)
                    .and_then(|meta| meta.modified())
                    .unwrap_or(std::time::UNIX_EPOCH);
                (modified, path)
            })
            .collect();

        let excess = (older.len() + 1).saturating_sub(KEPT_WINDOW_FILES);
        if excess == 0 {
            return;
        }
        older.sort();
        for (_, path) in older.into_iter().take(excess) {
            if let Err(e) = fs::remove_file(&path) {
                warn!(error = %e, path = %path.display(), "old print window file not removed");
            }
        }
    }

    fn opener(&self, path: &Path) -> Command {
        if let Some(custom) = self.open_command.as_deref() {
            let mut parts = custom.split_whitespace();
            let mut cmd = Command::new(parts.next().unwrap_or(custom));
            cmd.args(parts).arg(path);
            return cmd;
        }
        platform_opener(path)
    }
}

fn is_window_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("receipt-") && name.ends_with(".html"))
}

/// Wait for the opener off the calling thread so it does not linger as a zombie
fn reap(mut child: Child) {
    let spawned = thread::Builder::new()
        .name("print-opener".into())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => warn!(%status, "print opener exited with failure"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "print opener could not be waited on"),
        });
    if let Err(e) = spawned {
        warn!(error = %e, "print opener reaper thread not started");
    }
}

#[cfg(target_os = "macos")]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(windows)]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

impl PrintSurface for BrowserSurface {
    fn dispatch(&self, document: &ReceiptDocument) -> PrintOutcome {
        let path = match self.files.write(document) {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "print window could not be prepared");
                return PrintOutcome::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        let spawned = self
            .opener(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                reap(child);
                self.prune(&path);
                debug!(path = %path.display(), "print window opened");
                PrintOutcome::Dispatched {
                    location: Some(path),
                }
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "print window could not be opened");
                if let Err(e) = fs::remove_file(&path) {
                    debug!(error = %e, "unopened print window file left in place");
                }
                PrintOutcome::Unavailable {
                    reason: format!("Could not open print window: {}", e),
                }
            }
        }
    }
}

/// Writes the document to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSurface;

impl PrintSurface for StdoutSurface {
    fn dispatch(&self, document: &ReceiptDocument) -> PrintOutcome {
        let mut stdout = std::io::stdout().lock();
        match stdout
            .write_all(document.html.as_bytes())
            .and_then(|_| stdout.flush())
        {
            Ok(()) => PrintOutcome::Dispatched { location: None },
            Err(e) => PrintOutcome::Unavailable {
                reason: format!("Could not write to stdout: {}", e),
            },
        }
    }
}
