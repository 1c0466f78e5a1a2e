//! Bounded roll history.
//!
//! An in-memory, append-only log of past rolls with strict FIFO eviction
//! once the capacity is reached. The store is handed to tools as an
//! `Arc<HistoryStore>` rather than living in a global, so tests can create
//! isolated stores; an interior mutex serializes concurrent invocations.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use super::roll::RollResult;

/// Default number of entries kept before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default number of entries returned by [`HistoryStore::recent`] callers
/// that do not specify a count.
pub const DEFAULT_RECENT: usize = 10;

/// One recorded roll. Never mutated after insertion.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Monotonic sequence number; lower means older.
    pub sequence: u64,
    /// When the roll was recorded.
    pub rolled_at: DateTime<Utc>,
    /// The roll itself.
    pub result: RollResult,
}

#[derive(Debug, Default)]
struct HistoryInner {
    entries: VecDeque<HistoryEntry>,
    next_sequence: u64,
}

/// Bounded, ordered log of past rolls.
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    inner: Mutex<HistoryInner>,
}

impl HistoryStore {
    /// Create a store that keeps at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(HistoryInner::default()),
        }
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a roll, evicting the oldest entry if the store is full.
    /// Returns the sequence number assigned to the new entry.
    pub fn record(&self, result: RollResult) -> u64 {
        let mut inner = self.lock();

        let sequence = inner.next_sequence;
        inner.next_sequence += 1;

        inner.entries.push_back(HistoryEntry {
            sequence,
            rolled_at: Utc::now(),
            result,
        });

        while inner.entries.len() > self.capacity {
            inner.entries.pop_front();
        }

        sequence
    }

    /// The last `n` entries, most recent first. Returns everything when `n`
    /// exceeds the stored count.
    pub fn recent(&self, n: usize) -> Vec<HistoryEntry> {
        let inner = self.lock();
        inner.entries.iter().rev().take(n).cloned().collect()
    }

    /// Remove all entries, returning how many were removed. Sequence numbers
    /// keep counting from where they were.
    pub fn clear(&self) -> usize {
        let mut inner = self.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        removed
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HistoryInner> {
        // A panic mid-append cannot leave the deque inconsistent, so a
        // poisoned lock is safe to recover.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::dice::notation::parse;
    use crate::domains::dice::roll::roll_standard;

    fn sample_roll() -> RollResult {
        roll_standard(&parse("1d6").unwrap())
    }

    #[test]
    fn test_record_assigns_monotonic_sequences() {
        let store = HistoryStore::default();
        let a = store.record(sample_roll());
        let b = store.record(sample_roll());
        let c = store.record(sample_roll());
        assert!(a < b && b < c);
        assert_eq!(store.len(), 3);

        let entries = store.recent(3);
        assert!(entries.iter().all(|e| e.rolled_at <= Utc::now()));
    }

    #[test]
    fn test_recent_is_most_recent_first() {
        let store = HistoryStore::default();
        for _ in 0..5 {
            store.record(sample_roll());
        }
        let recent = store.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].sequence, 4);
        assert_eq!(recent[1].sequence, 3);
        assert_eq!(recent[2].sequence, 2);
    }

    #[test]
    fn test_recent_beyond_count_returns_all() {
        let store = HistoryStore::default();
        store.record(sample_roll());
        store.record(sample_roll());
        assert_eq!(store.recent(10).len(), 2);
    }

    #[test]
    fn test_fifo_eviction_at_capacity() {
        let store = HistoryStore::new(100);
        for _ in 0..105 {
            store.record(sample_roll());
        }
        assert_eq!(store.len(), 100);

        // The five lowest sequence numbers were evicted.
        let all = store.recent(100);
        assert_eq!(all.first().unwrap().sequence, 104);
        assert_eq!(all.last().unwrap().sequence, 5);
    }

    #[test]
    fn test_clear_empties_store() {
        let store = HistoryStore::default();
        for _ in 0..7 {
            store.record(sample_roll());
        }
        assert_eq!(store.clear(), 7);
        assert!(store.is_empty());
        assert!(store.recent(10).is_empty());
        assert_eq!(store.clear(), 0);
    }

    #[test]
    fn test_sequences_survive_clear() {
        let store = HistoryStore::default();
        store.record(sample_roll());
        store.record(sample_roll());
        store.clear();
        let next = store.record(sample_roll());
        assert_eq!(next, 2);
    }

    #[test]
    fn test_concurrent_records_do_not_drop_entries() {
        use std::sync::Arc;

        let store = Arc::new(HistoryStore::new(1000));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    store.record(roll_standard(&parse("1d6").unwrap()));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 200);
        let sequences: Vec<u64> = store.recent(200).iter().map(|e| e.sequence).collect();
        let mut sorted = sequences.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sequences, sorted);
    }
}
