//! The heap primitive interface
//!
//! [`Heap`] is the seam between [`PriorityQueue`](crate::queue::PriorityQueue)
//! and its storage. Implementations are min-heaps over `(priority, item)`
//! pairs: the priority alone decides order and the item rides along.

/// Base trait for heap data structures
///
/// The API mirrors `std::collections::BinaryHeap` (`push`, `pop`, `peek`),
/// except that priorities and items are separate and the minimum priority
/// surfaces first.
///
/// # Example
///
/// ```rust
/// use heap_queue::Heap;
/// use heap_queue::binary::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// assert_eq!(heap.len(), 1);
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an item with the given priority
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and its item without removing them
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and its item
    fn pop(&mut self) -> Option<(P, T)>;
}
