//! Indexable binary min-heap priority queue.
//!
//! Backs the Dijkstra engine. Entries are `(key, priority)` pairs ordered
//! by priority, with a side index from key to current array slot so that
//! `decrease_key` runs in O(log n) instead of scanning the backing array.

use crate::error::{Error, Result};
use crate::graph::VertexKey;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    priority: f64,
}

/// Binary min-heap over `(key, priority)` entries with decrease-key.
///
/// Each key may hold at most one live entry. The heap order invariant is
/// `entry[parent].priority <= entry[child].priority` for every parent/child
/// pair; the slot index tracks every swap so a key's entry can be found
/// without a scan.
#[derive(Debug, Default)]
pub struct IndexedHeap<K: VertexKey> {
    entries: Vec<Entry<K>>,
    slots: HashMap<K, usize>,
}

impl<K: VertexKey> IndexedHeap<K> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when `key` has a live entry.
    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Current priority of `key`, if it has a live entry.
    pub fn priority(&self, key: &K) -> Option<f64> {
        self.slots.get(key).map(|&slot| self.entries[slot].priority)
    }

    /// Discard all entries. Backing storage is kept for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }

    /// Insert `key` with `priority`.
    ///
    /// A key may appear at most once; inserting a key that already has a
    /// live entry reprioritizes that entry instead of adding a duplicate.
    pub fn insert(&mut self, key: K, priority: f64) {
        if let Some(&slot) = self.slots.get(&key) {
            self.reprioritize(slot, priority);
            return;
        }
        let slot = self.entries.len();
        self.entries.push(Entry { key, priority });
        self.slots.insert(key, slot);
        self.sift_up(slot);
    }

    /// Return the minimum-priority entry without removing it.
    pub fn peek_min(&self) -> Result<(&K, f64)> {
        let entry = self.entries.first().ok_or(Error::Underflow)?;
        Ok((&entry.key, entry.priority))
    }

    /// Remove and return the minimum-priority entry.
    pub fn pop_min(&mut self) -> Result<(K, f64)> {
        if self.entries.is_empty() {
            return Err(Error::Underflow);
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop().ok_or(Error::Underflow)?;
        self.slots.remove(&entry.key);
        if !self.entries.is_empty() {
            self.slots.insert(self.entries[0].key, 0);
            self.sift_down(0);
        }
        Ok((entry.key, entry.priority))
    }

    /// Lower the priority of `key`'s entry and restore heap order.
    ///
    /// Errors with [`Error::KeyNotFound`] if `key` has no live entry. If the
    /// new priority is higher than the current one the entry sifts down
    /// instead, so the order invariant holds either way.
    pub fn decrease_key(&mut self, key: &K, priority: f64) -> Result<()> {
        let slot = *self.slots.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })?;
        self.reprioritize(slot, priority);
        Ok(())
    }

    fn reprioritize(&mut self, slot: usize, priority: f64) {
        let old = self.entries[slot].priority;
        self.entries[slot].priority = priority;
        if priority < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Percolate the entry at `slot` up while it is smaller than its parent.
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].priority >= self.entries[parent].priority {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    /// Percolate the entry at `slot` down, always swapping with the smaller
    /// child, until the local order invariant holds or a leaf is reached.
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.entries[right].priority < self.entries[left].priority {
                child = right;
            }
            if self.entries[child].priority >= self.entries[slot].priority {
                break;
            }
            self.swap_slots(slot, child);
            slot = child;
        }
    }

    /// Swap two entries and keep the key-to-slot index in step.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots.insert(self.entries[a].key, a);
        self.slots.insert(self.entries[b].key, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk every parent/child pair and check both heap order and the
    /// slot index.
    fn assert_heap_valid(heap: &IndexedHeap<i64>) {
        for i in 1..heap.entries.len() {
            let parent = (i - 1) / 2;
            assert!(
                heap.entries[parent].priority <= heap.entries[i].priority,
                "heap order violated at slot {i}"
            );
        }
        assert_eq!(heap.slots.len(), heap.entries.len());
        for (slot, entry) in heap.entries.iter().enumerate() {
            assert_eq!(heap.slots[&entry.key], slot, "stale slot for {}", entry.key);
        }
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: IndexedHeap<i64> = IndexedHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert!(matches!(heap.peek_min(), Err(Error::Underflow)));
        assert!(matches!(heap.pop_min(), Err(Error::Underflow)));
    }

    #[test]
    fn test_insert_and_pop_in_priority_order() {
        let mut heap = IndexedHeap::new();
        for (key, priority) in [(1, 5.0), (2, 3.0), (3, 8.0), (4, 1.0), (5, 4.0)] {
            heap.insert(key, priority);
            assert_heap_valid(&heap);
        }

        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek_min().unwrap(), (&4, 1.0));

        let mut popped = Vec::new();
        while let Ok((key, priority)) = heap.pop_min() {
            popped.push((key, priority));
            assert_heap_valid(&heap);
        }
        assert_eq!(
            popped,
            vec![(4, 1.0), (2, 3.0), (5, 4.0), (1, 5.0), (3, 8.0)]
        );
        assert!(heap.is_empty());
    }

    #[test]
    fn test_decrease_key_moves_entry_to_front() {
        let mut heap = IndexedHeap::new();
        heap.insert(1, 10.0);
        heap.insert(2, 20.0);
        heap.insert(3, 30.0);

        heap.decrease_key(&3, 5.0).unwrap();
        assert_heap_valid(&heap);
        assert_eq!(heap.priority(&3), Some(5.0));
        assert_eq!(heap.pop_min().unwrap(), (3, 5.0));
    }

    #[test]
    fn test_decrease_key_missing_entry() {
        let mut heap = IndexedHeap::new();
        heap.insert(1, 1.0);
        let err = heap.decrease_key(&99, 0.5).unwrap_err();
        assert!(matches!(err, Error::KeyNotFound { .. }));
        // The failed call left the heap untouched.
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.priority(&1), Some(1.0));
    }

    #[test]
    fn test_decrease_key_after_pop() {
        let mut heap = IndexedHeap::new();
        heap.insert(1, 1.0);
        heap.insert(2, 2.0);
        heap.pop_min().unwrap();
        assert!(!heap.contains(&1));
        assert!(matches!(
            heap.decrease_key(&1, 0.0),
            Err(Error::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_priority_increase_sifts_down() {
        let mut heap = IndexedHeap::new();
        heap.insert(1, 1.0);
        heap.insert(2, 2.0);
        heap.insert(3, 3.0);

        heap.decrease_key(&1, 10.0).unwrap();
        assert_heap_valid(&heap);
        assert_eq!(heap.pop_min().unwrap(), (2, 2.0));
    }

    #[test]
    fn test_insert_existing_key_reprioritizes() {
        let mut heap = IndexedHeap::new();
        heap.insert(1, 7.0);
        heap.insert(1, 2.0);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.priority(&1), Some(2.0));
    }

    #[test]
    fn test_clear_allows_reuse() {
        let mut heap = IndexedHeap::new();
        heap.insert(1, 1.0);
        heap.insert(2, 2.0);
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(&1));

        heap.insert(3, 3.0);
        assert_eq!(heap.pop_min().unwrap(), (3, 3.0));
    }

    #[test]
    fn test_interleaved_operations_keep_invariant() {
        let mut heap = IndexedHeap::new();
        for key in 0..20i64 {
            heap.insert(key, (37 * key % 17) as f64);
            assert_heap_valid(&heap);
        }
        for key in (0..20).step_by(3) {
            heap.decrease_key(&key, -(key as f64)).unwrap();
            assert_heap_valid(&heap);
        }
        let mut last = f64::NEG_INFINITY;
        while let Ok((_, priority)) = heap.pop_min() {
            assert_heap_valid(&heap);
            assert!(priority >= last, "pop order not monotonic");
            last = priority;
        }
    }
}
