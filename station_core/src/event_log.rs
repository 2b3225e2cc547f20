//! Append-only event log.
//!
//! Unbounded by default, so the full history stays visible for the life of
//! the process. With a capacity set it becomes a ring buffer that drops the
//! oldest entry; sequence numbers keep counting either way.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Insertion number, starting at 1.
    pub seq: u64,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: Option<NonZeroUsize>,
    next_seq: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get().min(1024)),
            capacity: Some(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        if let Some(cap) = self.capacity {
            while self.entries.len() >= cap.get() {
                self.entries.pop_front();
            }
        }
        self.next_seq += 1;
        self.entries.push_back(LogEntry {
            seq: self.next_seq,
            message: message.into(),
        });
        self.next_seq
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_keeps_everything_in_order() {
        let mut log = EventLog::new();
        for i in 0..100 {
            log.push(format!("m{i}"));
        }
        assert_eq!(log.len(), 100);
        let msgs = log.messages();
        assert_eq!(msgs.first().map(String::as_str), Some("m0"));
        assert_eq!(msgs.last().map(String::as_str), Some("m99"));
        assert!(log.capacity().is_none());
    }

    #[test]
    fn ring_buffer_drops_oldest_and_keeps_numbering() {
        let cap = NonZeroUsize::new(3).unwrap();
        let mut log = EventLog::with_capacity(cap);
        for m in ["a", "b", "c", "d", "e"] {
            log.push(m);
        }
        assert_eq!(log.messages(), vec!["c", "d", "e"]);
        let seqs: Vec<u64> = log.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![3, 4, 5]);
        assert_eq!(log.push("f"), 6);
    }

    #[test]
    fn push_returns_sequence_number() {
        let mut log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.push("first"), 1);
        assert_eq!(log.push(String::from("second")), 2);
    }
}
