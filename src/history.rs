//! Bounded undo/redo history of parameter snapshots.
//!
//! Unlike a pair of undo/redo stacks, the history is a single list with a cursor.
//! Pushing truncates everything after the cursor, and once the list is full the
//! oldest entry is dropped while the cursor stays on the last slot.

use crate::constants::MAX_HISTORY;
use crate::types::HistorySnapshot;

/// Cursor-based history of snapshots, holding at most `capacity` entries.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T = HistorySnapshot> {
    entries: Vec<T>,
    /// Index of the current entry; `None` while the buffer is empty
    cursor: Option<usize>,
    capacity: usize,
}

impl<T> Default for HistoryBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryBuffer<T> {
    /// Creates an empty history holding up to [`MAX_HISTORY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Creates an empty history with a custom bound. A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity + 1),
            cursor: None,
            capacity,
        }
    }

    /// Records a new snapshot after the current one.
    ///
    /// Any redo entries past the cursor are discarded. If the buffer overflows, the
    /// oldest entry is dropped and the cursor keeps pointing at the last slot.
    pub fn push(&mut self, snapshot: T) {
        let keep = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push(snapshot);

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        } else {
            self.cursor = Some(keep);
        }
    }

    /// Moves one step back and returns the snapshot there, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1)
            }
            _ => None,
        }
    }

    /// Moves one step forward and returns the snapshot there, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        let next = self.cursor?.checked_add(1)?;
        if next < self.entries.len() {
            self.cursor = Some(next);
            self.entries.get(next)
        } else {
            None
        }
    }

    /// Returns true if [`Self::undo`] would move the cursor.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    /// Returns true if [`Self::redo`] would move the cursor.
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.entries.len())
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    /// Cursor position, `None` while empty.
    pub fn index(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of snapshots retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored snapshots, oldest first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: u32) -> HistoryBuffer<u32> {
        let mut history = HistoryBuffer::new();
        for i in 1..=n {
            history.push(i);
        }
        history
    }

    #[test]
    fn test_new_history_is_empty() {
        let mut history: HistoryBuffer<u32> = HistoryBuffer::new();
        assert!(history.is_empty());
        assert_eq!(history.index(), None);
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_first_push_sets_cursor_to_zero() {
        let history = filled(1);
        assert_eq!(history.index(), Some(0));
        assert_eq!(history.current(), Some(&1));
    }

    #[test]
    fn test_overflow_drops_oldest_and_keeps_cursor_on_last() {
        let mut history = filled(6);
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.index(), Some(MAX_HISTORY - 1));
        assert_eq!(history.entries(), &[2, 3, 4, 5, 6]);

        for expected in [5, 4, 3, 2] {
            assert_eq!(history.undo(), Some(&expected));
        }
        assert_eq!(history.index(), Some(0));
        for expected in [3, 4, 5, 6] {
            assert_eq!(history.redo(), Some(&expected));
        }
        assert_eq!(history.index(), Some(MAX_HISTORY - 1));
        assert_eq!(history.current(), Some(&6));
    }

    #[test]
    fn test_undo_at_oldest_is_noop() {
        let mut history = filled(3);
        history.undo();
        history.undo();
        assert_eq!(history.index(), Some(0));
        assert_eq!(history.undo(), None);
        assert_eq!(history.index(), Some(0));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_redo_at_newest_is_noop() {
        let mut history = filled(3);
        assert_eq!(history.redo(), None);
        assert_eq!(history.index(), Some(2));
        assert_eq!(history.current(), Some(&3));
    }

    #[test]
    fn test_push_truncates_redo_entries() {
        let mut history = filled(4);
        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.push(10);
        assert_eq!(history.entries(), &[1, 2, 10]);
        assert_eq!(history.index(), Some(2));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_full_buffer_stops_growing_undo_depth() {
        let mut history = filled(MAX_HISTORY as u32);
        history.push(99);
        history.push(100);
        let mut steps = 0;
        while history.undo().is_some() {
            steps += 1;
        }
        assert_eq!(steps, MAX_HISTORY - 1);
        assert_eq!(history.current(), Some(&3));
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut history = HistoryBuffer::with_capacity(0);
        history.push("a");
        history.push("b");
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.entries(), &["b"]);
        assert_eq!(history.index(), Some(0));
    }
}
