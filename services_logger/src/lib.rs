//! # Logger Service
//!
//! This crate implements structured logging for the namespace.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! Components never print; they hand [`LogEntry`] values to a [`LogSink`] and
//! the host decides what to show.

use core_types::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    #[default]
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Entity the entry is about (if any)
    pub subject: Option<EntityId>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            subject: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the subject entity
    pub fn with_subject(mut self, subject: EntityId) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Looks up a field by key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)?;
        for (key, value) in &self.fields {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Destination for log entries
pub trait LogSink {
    /// Records an entry
    fn record(&mut self, entry: LogEntry);
}

/// Bounded in-memory log
///
/// Keeps entries at or above `min_level`. When full, the oldest entry is
/// dropped to make room.
#[derive(Debug, Clone)]
pub struct MemoryLog {
    min_level: LogLevel,
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl MemoryLog {
    /// Default number of entries kept
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Creates a log with the given minimum level and capacity
    pub fn new(min_level: LogLevel, capacity: usize) -> Self {
        Self {
            min_level,
            capacity,
            entries: VecDeque::new(),
        }
    }

    /// Returns the minimum level kept
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Iterates entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Iterates entries of exactly one level
    pub fn by_level(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level == level)
    }

    /// Returns the most recent entry
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Counts the entries kept
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is kept
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for MemoryLog {
    fn default() -> Self {
        Self::new(LogLevel::default(), Self::DEFAULT_CAPACITY)
    }
}

impl LogSink for MemoryLog {
    fn record(&mut self, entry: LogEntry) {
        if entry.level < self.min_level || self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_entry_creation() {
        let entry = LogEntry::new(LogLevel::Info, "test message");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message, "test message");
        assert!(entry.subject.is_none());
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn test_log_entry_with_subject() {
        let id = EntityId::new();
        let entry = LogEntry::new(LogLevel::Info, "test").with_subject(id);
        assert_eq!(entry.subject, Some(id));
    }

    #[test]
    fn test_log_entry_with_fields() {
        let entry = LogEntry::new(LogLevel::Info, "test")
            .with_field("path", "C:\\docs")
            .with_field("size", 5);

        assert_eq!(entry.fields.len(), 2);
        assert_eq!(entry.field("path"), Some("C:\\docs"));
        assert_eq!(entry.field("size"), Some("5"));
        assert_eq!(entry.field("missing"), None);
    }

    #[test]
    fn test_log_entry_display() {
        let entry = LogEntry::new(LogLevel::Warn, "create failed").with_field("op", "create");
        assert_eq!(entry.to_string(), "[WARN] create failed op=create");
    }

    #[test]
    fn test_memory_log_filters_level() {
        let mut log = MemoryLog::new(LogLevel::Info, 10);
        log.record(LogEntry::new(LogLevel::Debug, "hidden"));
        log.record(LogEntry::new(LogLevel::Info, "kept"));
        log.record(LogEntry::new(LogLevel::Error, "kept too"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.by_level(LogLevel::Error).count(), 1);
        assert_eq!(log.last().unwrap().message, "kept too");
    }

    #[test]
    fn test_memory_log_drops_oldest() {
        let mut log = MemoryLog::new(LogLevel::Debug, 2);
        log.record(LogEntry::new(LogLevel::Info, "one"));
        log.record(LogEntry::new(LogLevel::Info, "two"));
        log.record(LogEntry::new(LogLevel::Info, "three"));

        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_memory_log_zero_capacity() {
        let mut log = MemoryLog::new(LogLevel::Debug, 0);
        log.record(LogEntry::new(LogLevel::Error, "dropped"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_level_serde() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }
}
