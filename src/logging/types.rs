//! Core logging types: entry records, status, and the [`Log`] trait.
use std::path::{Path, PathBuf};

use super::events::Event;

/// Outcome of one processed entry, kept for the run summary.
#[derive(Debug, Clone)]
pub struct EntryRecord {
    /// Destination path of the entry.
    pub dst: PathBuf,
    /// Final status of the entry.
    pub status: EntryStatus,
}

/// Status of a processed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// A symbolic link was created.
    Linked,
    /// The source was copied.
    Copied,
    /// Nothing was done: source missing or destination kept.
    Skipped,
    /// A filesystem fault aborted the entry.
    Failed,
}

/// Abstraction over the event emitter.
///
/// [`Logger`](super::logger::Logger) forwards to `tracing`; tests swap in a
/// recorder so they can assert on the exact events an operation produced.
pub trait Log {
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (shown only in verbose mode).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Report a structured event at its own severity.
    fn emit(&self, event: &Event);
    /// Record the outcome of one entry for the summary.
    fn record_entry(&self, dst: &Path, status: EntryStatus);
}
