//! Loading local text files into the editor.
//!
//! A request is validated synchronously against the accepted extension,
//! then read on a background thread. Completed reads arrive over a channel
//! and are drained by the event loop with [`FileImporter::poll`].
//!
//! Loads are not serialized: when several are in flight, each completion is
//! applied as it arrives, so the last one to finish wins.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use thiserror::Error;

/// Extension accepted when none is configured.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Errors raised before a read is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The path has no file name component.
    #[error("no file name in {0}")]
    MissingFileName(PathBuf),
    /// The file name does not end in the accepted extension.
    #[error("{file_name} is not a .{extension} file")]
    UnsupportedExtension {
        file_name: String,
        extension: String,
    },
}

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportTicket(u64);

impl std::fmt::Display for ImportTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a background read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The file was read and decoded.
    Loaded {
        ticket: ImportTicket,
        file_name: String,
        text: String,
    },
    /// The read failed; the message is for logging only.
    Failed {
        ticket: ImportTicket,
        file_name: String,
        error: String,
    },
}

impl ImportOutcome {
    pub const fn ticket(&self) -> ImportTicket {
        match self {
            Self::Loaded { ticket, .. } | Self::Failed { ticket, .. } => *ticket,
        }
    }
}

/// Returns true if `file_name` ends in `.{extension}`.
///
/// The comparison is case-sensitive and requires a non-empty stem.
pub fn is_accepted_name(file_name: &str, extension: &str) -> bool {
    file_name
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .is_some_and(|stem| !stem.is_empty())
}

/// Decode file bytes as UTF-8, replacing invalid sequences.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}')
        .map_or_else(|| text.to_string(), ToOwned::to_owned)
}

/// Spawns file reads and collects their outcomes.
pub struct FileImporter {
    extension: String,
    tx: Sender<ImportOutcome>,
    rx: Receiver<ImportOutcome>,
    next_ticket: u64,
    in_flight: usize,
}

impl FileImporter {
    /// Create an importer accepting files ending in `.{extension}`.
    pub fn new(extension: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            extension: extension.into(),
            tx,
            rx,
            next_ticket: 0,
            in_flight: 0,
        }
    }

    /// The accepted extension, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Number of reads started but not yet drained by [`poll`](Self::poll).
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Validate `path` and start reading it in the background.
    ///
    /// # Errors
    ///
    /// Returns an error without touching the file system if the path has no
    /// file name or the name does not end in the accepted extension.
    pub fn request(&mut self, path: &Path) -> Result<ImportTicket, ImportError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ImportError::MissingFileName(path.to_path_buf()))?;
        if !is_accepted_name(&file_name, &self.extension) {
            tracing::debug!(%file_name, extension = %self.extension, "rejected file");
            return Err(ImportError::UnsupportedExtension {
                file_name,
                extension: self.extension.clone(),
            });
        }

        self.next_ticket += 1;
        let ticket = ImportTicket(self.next_ticket);
        self.in_flight += 1;
        tracing::info!(%ticket, path = %path.display(), "starting file read");
        crate::perf::log_event(
            "import.request",
            format!("ticket={ticket} path={}", path.display()),
        );

        let tx = self.tx.clone();
        let path = path.to_path_buf();
        thread::spawn(move || {
            let outcome = match std::fs::read(&path) {
                Ok(bytes) => ImportOutcome::Loaded {
                    ticket,
                    file_name,
                    text: decode_text(&bytes),
                },
                Err(err) => ImportOutcome::Failed {
                    ticket,
                    file_name,
                    error: err.to_string(),
                },
            };
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(outcome);
        });
        Ok(ticket)
    }

    /// Drain every read that has completed since the last call.
    pub fn poll(&mut self) -> Vec<ImportOutcome> {
        let done: Vec<ImportOutcome> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }

    /// Block until the next read completes.
    ///
    /// Used where the UI has nothing else to do, e.g. loading the file
    /// named on the command line before the first frame.
    pub fn wait(&mut self) -> Option<ImportOutcome> {
        if self.in_flight == 0 {
            return None;
        }
        let outcome = self.rx.recv().ok()?;
        self.in_flight -= 1;
        Some(outcome)
    }
}

impl Default for FileImporter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}

impl std::fmt::Debug for FileImporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileImporter")
            .field("extension", &self.extension)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
