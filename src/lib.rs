//! Min/max priority queues over a binary heap
//!
//! This crate provides [`PriorityQueue`], a priority queue whose elements are
//! ordered either by their own comparison or by a key projected from them,
//! and served smallest-first or largest-first depending on a [`Polarity`]
//! chosen at construction.
//!
//! # Features
//!
//! - **One heap for both directions**: max-first queues reverse the
//!   comparator on the stored key instead of negating it, so any orderable
//!   key works (strings, unsigned integers, tuples), not just numbers.
//! - **Key projections**: order records by a field or computed value with
//!   [`PriorityQueue::by_key`]; the element itself needs no ordering.
//! - **Checked insertion**: priorities incomparable with themselves (NaN) are
//!   rejected with [`QueueError::Unorderable`] instead of corrupting the heap.
//! - **Bulk operations**: [`push_all`](PriorityQueue::push_all),
//!   [`pop_k`](PriorityQueue::pop_k) and the non-destructive
//!   [`sorted`](PriorityQueue::sorted) snapshot.
//!
//! # Example
//!
//! ```rust
//! use heap_queue::{Polarity, PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::from_items([1, 2, 3, 4], Polarity::Min).unwrap();
//! assert_eq!(queue.peek(), Ok(&1));
//! assert_eq!(queue.pop_k(3), Ok(vec![1, 2, 3]));
//! assert_eq!(queue.pop_k(2), Err(QueueError::InsufficientSize { requested: 2, available: 1 }));
//! ```
//!
//! The underlying heap is available on its own through the [`Heap`] trait and
//! [`binary::BinaryHeap`].

pub mod binary;
pub mod config;
pub mod error;
pub mod key;
pub mod queue;
pub mod traits;

pub use config::{ParsePolarityError, Polarity, QueueConfig};
pub use error::QueueError;
pub use key::{ByKey, KeyPolicy, Natural};
pub use queue::PriorityQueue;
pub use traits::Heap;
