//! Array-backed binary min-heap
//!
//! The storage layer under [`PriorityQueue`](crate::queue::PriorityQueue).
//! Entries are `(priority, item)` pairs kept in a `Vec` in the usual
//! implicit-tree layout: the children of index `i` live at `2i + 1` and
//! `2i + 2`, and every parent's priority is `<=` both of its children's.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use heap_queue::Heap;
//! use heap_queue::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(3, "three");
//! heap.push(1, "one");
//! heap.push(2, "two");
//!
//! assert_eq!(heap.peek(), Some((&1, &"one")));
//! assert_eq!(heap.pop(), Some((1, "one")));
//! assert_eq!(heap.pop(), Some((2, "two")));
//! assert_eq!(heap.pop(), Some((3, "three")));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::traits::Heap;

/// A binary min-heap of `(priority, item)` pairs
///
/// Only `priority` takes part in ordering; `item` is carried along untouched,
/// so it needs no trait bounds at all.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, P: Ord> {
    entries: Vec<(P, T)>,
}

impl<T, P: Ord> Heap<T, P> for BinaryHeap<T, P> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.entries.push((priority, item));
        self.sift_up(self.entries.len() - 1);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.entries.first().map(|(p, t)| (p, t))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        // swap_remove moves the last entry into the root slot
        if self.entries.is_empty() {
            return None;
        }
        let top = self.entries.swap_remove(0);
        if self.entries.len() > 1 {
            self.sift_down(0);
        }
        Some(top)
    }
}

impl<T, P: Ord> BinaryHeap<T, P> {
    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// All entries in heap (not sorted) order
    ///
    /// Only index 0 is guaranteed to hold the minimum.
    pub fn entries(&self) -> &[(P, T)] {
        &self.entries
    }

    /// Consumes the heap, returning its entries in heap order
    pub fn into_entries(self) -> Vec<(P, T)> {
        self.entries
    }

    /// Removes every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 >= self.entries[parent].0 {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            // pick the smaller child; ties go left
            let right = left + 1;
            let child = if right < len && self.entries[right].0 < self.entries[left].0 {
                right
            } else {
                left
            };
            if self.entries[child].0 >= self.entries[index].0 {
                break;
            }
            self.entries.swap(index, child);
            index = child;
        }
    }
}

impl<T, P: Ord> Default for BinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
