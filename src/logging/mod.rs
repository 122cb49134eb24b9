//! Event emission and console logging.
//!
//! The engine reports what it does through the [`Log`] trait as structured
//! [`Event`]s; [`Logger`] turns them into `tracing` events and
//! [`init_subscriber`] decides how they look on the console.

mod events;
mod logger;
mod subscriber;
mod types;

pub use events::{Event, Severity};
pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{EntryRecord, EntryStatus, Log};

/// In-memory [`Log`] that keeps every event and entry for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLog {
    events: std::sync::Mutex<Vec<Event>>,
    messages: std::sync::Mutex<Vec<(Severity, String)>>,
    entries: std::sync::Mutex<Vec<(std::path::PathBuf, EntryStatus)>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
impl RecordingLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn kinds(&self) -> Vec<&'static str> {
        self.events().iter().map(Event::kind).collect()
    }

    pub(crate) fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub(crate) fn statuses(&self) -> Vec<EntryStatus> {
        self.entries.lock().unwrap().iter().map(|(_, s)| *s).collect()
    }

    fn push(&self, severity: Severity, msg: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, msg.to_string()));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
impl Log for RecordingLog {
    fn info(&self, msg: &str) {
        self.push(Severity::Info, msg);
    }

    fn debug(&self, msg: &str) {
        self.push(Severity::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Severity::Warning, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Severity::Error, msg);
    }

    fn emit(&self, event: &Event) {
        self.push(event.severity(), &event.to_string());
        self.events.lock().unwrap().push(event.clone());
    }

    fn record_entry(&self, dst: &std::path::Path, status: EntryStatus) {
        self.entries
            .lock()
            .unwrap()
            .push((dst.to_path_buf(), status));
    }
}
