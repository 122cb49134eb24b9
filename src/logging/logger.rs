//! Structured logger with summary collection.
use std::path::Path;
use std::sync::Mutex;

use super::events::{Event, Severity};
use super::types::{EntryRecord, EntryStatus, Log};

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Production event emitter backed by `tracing`.
///
/// Console rendering and verbosity filtering are handled by the subscriber
/// installed with [`init_subscriber`](super::subscriber::init_subscriber).
#[derive(Debug, Default)]
pub struct Logger {
    entries: Mutex<Vec<EntryRecord>>,
}

impl Logger {
    /// Create a new logger with no recorded entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Report a structured event, tagged with its kind.
    pub fn emit(&self, event: &Event) {
        let kind = event.kind();
        match event.severity() {
            Severity::Info => tracing::info!(kind, "{event}"),
            Severity::Warning => tracing::warn!(kind, "{event}"),
            Severity::Error => tracing::error!(kind, "{event}"),
        }
    }

    /// Record the outcome of one entry.
    pub fn record_entry(&self, dst: &Path, status: EntryStatus) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(EntryRecord {
                dst: dst.to_path_buf(),
                status,
            });
        }
    }

    /// Return a clone of all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<EntryRecord> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Count recorded entries with the given status.
    #[must_use]
    pub fn count(&self, status: EntryStatus) -> usize {
        self.entries
            .lock()
            .map_or(0, |guard| guard.iter().filter(|e| e.status == status).count())
    }

    /// Number of entries that failed with a filesystem fault.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(EntryStatus::Failed)
    }

    /// Return `true` if any recorded entry has failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Log the summary of all recorded entries.
    pub fn print_summary(&self) {
        let total = self.entries.lock().map_or(0, |guard| guard.len());
        if total == 0 {
            self.info("no entries processed");
            return;
        }

        let linked = self.count(EntryStatus::Linked);
        let copied = self.count(EntryStatus::Copied);
        let skipped = self.count(EntryStatus::Skipped);
        let failed = self.failure_count();

        self.info(&format!(
            "{total} entries: \x1b[32m{linked} linked\x1b[0m, \x1b[32m{copied} copied\x1b[0m, \x1b[33m{skipped} skipped\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));
    }
}

impl Log for Logger {
    forward_log_methods!(info, debug, warn, error);

    fn emit(&self, event: &Event) {
        self.emit(event);
    }

    fn record_entry(&self, dst: &Path, status: EntryStatus) {
        self.record_entry(dst, status);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn logger_new() {
        let log = Logger::new();
        assert!(log.entries().is_empty(), "expected empty entry list");
        assert!(!log.has_failures());
    }

    #[test]
    fn record_entry_keeps_order() {
        let log = Logger::new();
        log.record_entry(Path::new("dst/a"), EntryStatus::Linked);
        log.record_entry(Path::new("dst/b"), EntryStatus::Skipped);
        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].dst, PathBuf::from("dst/a"));
        assert_eq!(entries[1].status, EntryStatus::Skipped);
    }

    #[test]
    fn failure_count_ignores_skips() {
        let log = Logger::new();
        log.record_entry(Path::new("a"), EntryStatus::Copied);
        log.record_entry(Path::new("b"), EntryStatus::Skipped);
        log.record_entry(Path::new("c"), EntryStatus::Failed);
        log.record_entry(Path::new("d"), EntryStatus::Failed);
        assert_eq!(log.failure_count(), 2);
        assert!(log.has_failures());
        assert_eq!(log.count(EntryStatus::Skipped), 1);
    }

    #[test]
    fn log_trait_delegates_to_logger() {
        let log = Logger::new();
        let log_ref: &dyn Log = &log;
        log_ref.record_entry(Path::new("via-trait"), EntryStatus::Linked);
        log_ref.emit(&Event::SourceMissing {
            src: PathBuf::from("gone"),
        });
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn print_summary_without_subscriber_does_not_panic() {
        let log = Logger::new();
        log.print_summary();
        log.record_entry(Path::new("a"), EntryStatus::Linked);
        log.print_summary();
    }
}
