use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, Mutex};
use crate::core::event::QueueEvent;
use serde::{Serialize, Deserialize};

/// Log entry recording one emitted event
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub seq: u64,
    pub event: QueueEvent<T>,
}

impl<T: Display> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.seq, self.event)
    }
}

/// Logger storing all entries
#[derive(Clone, Debug)]
pub struct Logger<T> {
    entries: Vec<LogEntry<T>>,
    next_seq: u64,
}

impl<T: Clone> Logger<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_seq: 1 }
    }

    /// Record an event; entries keep the order the operations completed in
    pub fn record(&mut self, event: QueueEvent<T>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(LogEntry { seq, event });
    }

    /// Every entry recorded so far
    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }
}

impl<T: Clone> Default for Logger<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Append entries to an NDJSON file, one JSON object per line
pub fn append_logs<T: Serialize>(log: &[LogEntry<T>], path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?;
    }
    Ok(())
}

/// Thread-safe wrapper
pub type SafeLogger<T> = Arc<Mutex<Logger<T>>>;
