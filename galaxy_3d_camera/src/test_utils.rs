/// Test helpers shared by unit tests (not compiled outside `cfg(test)`)

use std::sync::{Arc, Mutex};
use crate::log::{Logger, LogEntry, LogSeverity};

/// Logger that stores every entry for later inspection
pub(crate) struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    pub(crate) fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: Arc::clone(&entries) }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Entries at `severity` from `source` whose message contains `needle`.
///
/// Other tests may log concurrently, so assertions filter instead of
/// counting every entry.
pub(crate) fn matching(
    entries: &Arc<Mutex<Vec<LogEntry>>>,
    severity: LogSeverity,
    source: &str,
    needle: &str,
) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.severity == severity && e.source == source && e.message.contains(needle))
        .cloned()
        .collect()
}
