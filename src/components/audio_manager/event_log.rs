// Bounded, newest-first media event log.
use std::collections::VecDeque;

use chrono::Local;

use crate::config::DEFAULT_LOG_CAPACITY;
use crate::diagnostics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Warn => "log-warn",
            LogLevel::Error => "log-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Monotonic sequence number assigned when the entry is pushed.
    pub seq: u64,
    pub timestamp: String,
    pub message: String,
    pub level: LogLevel,
}

impl LogEntry {
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            seq: 0,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
            level,
        }
    }
}

/// Ring buffer of log entries, newest first. Every push is mirrored to the
/// diagnostic channel.
#[derive(Debug, Clone, PartialEq)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_seq: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogEntry::now(LogLevel::Info, message));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(LogEntry::now(LogLevel::Warn, message));
    }

    pub fn push(&mut self, mut entry: LogEntry) {
        entry.seq = self.next_seq;
        self.next_seq += 1;
        diagnostics::mirror(&entry);
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut log = EventLog::default();
        log.info("first");
        log.warn("second");
        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
        assert_eq!(log.newest().map(|e| e.level), Some(LogLevel::Warn));
    }

    #[test]
    fn fifty_first_entry_evicts_the_oldest() {
        let mut log = EventLog::default();
        for n in 0..51 {
            log.info(format!("event {n}"));
        }
        assert_eq!(log.len(), 50);
        assert_eq!(log.newest().unwrap().message, "event 50");
        assert_eq!(log.entries().last().unwrap().message, "event 1");
    }

    #[test]
    fn sequence_numbers_keep_growing_past_eviction() {
        let mut log = EventLog::with_capacity(2);
        for n in 0..5 {
            log.info(format!("event {n}"));
        }
        let seqs: Vec<u64> = log.entries().map(|e| e.seq).collect();
        assert_eq!(seqs, [4, 3]);
    }

    #[test]
    fn timestamps_are_time_of_day_with_seconds() {
        let entry = LogEntry::now(LogLevel::Info, "tick");
        let parts: Vec<&str> = entry.timestamp.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2 && p.parse::<u8>().is_ok()));
    }

    #[test]
    fn zero_capacity_still_keeps_the_latest_entry() {
        let mut log = EventLog::with_capacity(0);
        log.warn("boom");
        log.warn("again");
        assert_eq!(log.len(), 1);
        assert_eq!(log.newest().unwrap().message, "again");
    }

    proptest! {
        #[test]
        fn retains_exactly_the_most_recent_fifty(count in 50usize..400) {
            let mut log = EventLog::default();
            for n in 0..count {
                log.info(n.to_string());
            }
            prop_assert_eq!(log.len(), 50);
            let retained: Vec<usize> = log
                .entries()
                .map(|e| e.message.parse().unwrap())
                .collect();
            let expected: Vec<usize> = (count - 50..count).rev().collect();
            prop_assert_eq!(retained, expected);
        }

        #[test]
        fn never_exceeds_capacity(capacity in 1usize..80, count in 0usize..200) {
            let mut log = EventLog::with_capacity(capacity);
            for n in 0..count {
                log.info(n.to_string());
            }
            prop_assert_eq!(log.len(), count.min(capacity));
        }
    }
}
