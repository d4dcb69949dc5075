// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request log
//!
//! Handlers and middleware describe each request through a [`RequestLog`].
//! The production sink mirrors every entry to the console through `tracing`
//! and appends it to a plain text file, one `[timestamp] message` line per
//! entry.

use std::{
    fmt::Debug,
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, warn};

/// A single request log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Time the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Free form message
    pub message: String,
}

impl LogEntry {
    /// Entry stamped with the current time
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
        }
    }

    /// Line as written to the log file, newline included
    pub fn to_line(&self) -> String {
        format!(
            "[{}] {}\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.message
        )
    }
}

/// Sink for request log entries
///
/// Recording never fails from the caller's point of view; sinks report their
/// own problems.
pub trait RequestLog: Send + Sync + Debug {
    /// Record one entry
    fn record(&self, entry: LogEntry);
}

impl dyn RequestLog + '_ {
    /// Record `message` stamped with the current time
    pub fn log(&self, message: impl Into<String>) {
        self.record(LogEntry::now(message));
    }
}

/// Console and append-only file sink
#[derive(Debug, Clone)]
pub struct FileRequestLog {
    path: PathBuf,
}

impl FileRequestLog {
    /// Append to the file at `path`, creating it on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

impl RequestLog for FileRequestLog {
    fn record(&self, entry: LogEntry) {
        info!(target: "request_log", "{}", entry.message);

        if let Err(error) = self.append(&entry.to_line()) {
            warn!(path = %self.path.display(), %error, "failed to append to request log file");
        }
    }
}

/// In-memory sink
#[derive(Debug, Default)]
pub struct MemoryRequestLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryRequestLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|entry| entry.message).collect()
    }
}

impl RequestLog for MemoryRequestLog {
    fn record(&self, entry: LogEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn line_format() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap(),
            message: "New Request: GET /api/contracts/0x0/basic".to_string(),
        };

        assert_eq!(
            entry.to_line(),
            "[2024-05-01T12:30:45.000Z] New Request: GET /api/contracts/0x0/basic\n"
        );
    }

    #[test]
    fn file_log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.log");
        let log = FileRequestLog::new(&path);

        log.record(LogEntry::now("first"));
        log.record(LogEntry::now("second"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('[') && lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
    }

    #[test]
    fn unwritable_file_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let log = FileRequestLog::new(dir.path());

        log.record(LogEntry::now("dropped"));
    }

    #[test]
    fn memory_log_through_trait_object() {
        let memory = Arc::new(MemoryRequestLog::new());
        let log: Arc<dyn RequestLog> = memory.clone();

        log.log("Checking contract: 0xdead");
        log.log("Request completed in 3ms");

        assert_eq!(
            memory.messages(),
            vec!["Checking contract: 0xdead", "Request completed in 3ms"]
        );
    }
}
