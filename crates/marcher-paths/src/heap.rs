//! Indexed binary min-heap with decrease-key.
//!
//! Keys are dense integers in `[0, capacity)`. Alongside the array-backed
//! heap the structure keeps `positions[key]`, the slot currently holding
//! `key` (or [`ABSENT`]), and updates it on every swap. That inverse map is
//! what makes `contains`/`priority` O(1) and `decrease_priority` O(log n).

use crate::error::HeapError;

/// Position-map sentinel for keys that are not in the heap.
const ABSENT: usize = usize::MAX;

/// One heap slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry {
    pub key: usize,
    pub priority: f64,
}

/// A min-priority queue over the key space `[0, capacity)` supporting
/// O(log n) push, extract-minimum and decrease-priority.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    slots: Vec<HeapEntry>,
    positions: Vec<usize>,
}

impl IndexedMinHeap {
    /// Create an empty heap accepting keys in `[0, capacity)`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: vec![ABSENT; capacity],
        }
    }

    /// Size of the key space.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Number of keys currently in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remove every key, keeping the allocation.
    pub fn clear(&mut self) {
        for e in self.slots.drain(..) {
            self.positions[e.key] = ABSENT;
        }
    }

    /// Whether `key` is currently in the heap.
    #[inline]
    pub fn contains(&self, key: usize) -> bool {
        self.position_of(key).is_some()
    }

    /// Slot currently holding `key`.
    #[inline]
    pub fn position_of(&self, key: usize) -> Option<usize> {
        match self.positions.get(key) {
            Some(&pos) if pos != ABSENT => Some(pos),
            _ => None,
        }
    }

    /// Current priority of `key`, or `None` if it is not in the heap.
    #[inline]
    pub fn priority(&self, key: usize) -> Option<f64> {
        self.position_of(key).map(|pos| self.slots[pos].priority)
    }

    /// The minimum entry without removing it.
    #[inline]
    pub fn peek(&self) -> Option<HeapEntry> {
        self.slots.first().copied()
    }

    /// Insert `key` with `priority`.
    pub fn push(&mut self, key: usize, priority: f64) -> Result<(), HeapError> {
        if key >= self.capacity() {
            return Err(HeapError::KeyOutOfRange {
                key,
                capacity: self.capacity(),
            });
        }
        if self.contains(key) {
            return Err(HeapError::DuplicateKey(key));
        }
        if priority.is_nan() {
            return Err(HeapError::InvalidPriority { key, priority });
        }

        let pos = self.slots.len();
        self.slots.push(HeapEntry { key, priority });
        self.positions[key] = pos;
        self.sift_up(pos);
        Ok(())
    }

    /// Remove and return the minimum entry.
    pub fn extract_min(&mut self) -> Result<HeapEntry, HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Remove and return the minimum entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<HeapEntry> {
        let last = self.slots.len().checked_sub(1)?;
        self.swap(0, last);
        let min = self.slots.pop()?;
        self.positions[min.key] = ABSENT;
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Lower the priority of a present `key` to `priority`.
    ///
    /// Only strict decreases are accepted; equal or larger priorities are
    /// rejected with [`HeapError::NotDecreasing`] and leave the heap
    /// untouched.
    pub fn decrease_priority(&mut self, key: usize, priority: f64) -> Result<(), HeapError> {
        if priority.is_nan() {
            return Err(HeapError::InvalidPriority { key, priority });
        }
        let pos = self.position_of(key).ok_or(HeapError::NotPresent(key))?;
        let current = self.slots[pos].priority;
        if priority >= current {
            return Err(HeapError::NotDecreasing {
                key,
                current,
                requested: priority,
            });
        }
        self.slots[pos].priority = priority;
        self.sift_up(pos);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Swap two slots and refresh both keys' positions.
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.positions[self.slots[a].key] = a;
        self.positions[self.slots[b].key] = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.slots[pos].priority >= self.slots[parent].priority {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // Always compare against the smaller child.
            let mut smallest = left;
            if right < len && self.slots[right].priority < self.slots[left].priority {
                smallest = right;
            }
            if self.slots[smallest].priority >= self.slots[pos].priority {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    /// Check both heap invariants. Test helper.
    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        let ordered = (1..self.slots.len())
            .all(|i| self.slots[(i - 1) / 2].priority <= self.slots[i].priority);
        let indexed = self
            .slots
            .iter()
            .enumerate()
            .all(|(i, e)| self.positions[e.key] == i);
        let present = self.positions.iter().filter(|&&p| p != ABSENT).count();
        ordered && indexed && present == self.slots.len()
    }
}
