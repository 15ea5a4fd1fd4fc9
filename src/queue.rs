//! Min/max priority queue over a binary heap
//!
//! [`PriorityQueue`] stores arbitrary elements and serves them in priority
//! order. The priority is either the element itself ([`Natural`]) or a value
//! projected from it ([`ByKey`]), and [`Polarity`] decides whether the
//! smallest or largest priority comes out first. Both polarities share one
//! ascending [`BinaryHeap`]; max-first order comes from a reversed comparator
//! on the stored [`OrderingKey`].
//!
//! # Time Complexity
//!
//! | Operation          | Complexity   |
//! |--------------------|--------------|
//! | `peek`, `len`      | O(1)         |
//! | `push`, `pop`      | O(log n)     |
//! | `push_all`,`pop_k` | O(k log n)   |
//! | `sorted`           | O(n log n)   |
//!
//! # Example
//!
//! ```rust
//! use heap_queue::{Polarity, PriorityQueue};
//!
//! let mut queue = PriorityQueue::from_items([1, 2, 3, 4], Polarity::Max).unwrap();
//! assert_eq!(queue.peek(), Ok(&4));
//! assert_eq!(queue.pop_k(3), Ok(vec![4, 3, 2]));
//! assert_eq!(queue.len(), 1);
//!
//! struct Server {
//!     name: &'static str,
//!     load: f64,
//! }
//!
//! let mut idle = PriorityQueue::by_key(Polarity::Min, |s: &Server| s.load);
//! idle.push(Server { name: "a", load: 0.7 }).unwrap();
//! idle.push(Server { name: "b", load: 0.2 }).unwrap();
//! assert_eq!(idle.peek().unwrap().name, "b");
//! assert!(idle.push(Server { name: "c", load: f64::NAN }).is_err());
//! ```
//!
//! # Concurrency
//!
//! Mutation takes `&mut self`; share a queue across threads by wrapping it in
//! a `Mutex` (or similar) and holding the lock for each call.

use std::fmt;
use std::marker::PhantomData;

use crate::binary::BinaryHeap;
use crate::config::{Polarity, QueueConfig};
use crate::error::QueueError;
use crate::key::{is_orderable, ByKey, KeyPolicy, Natural, OrderingKey};
use crate::traits::Heap;

type Entries<T, K> = BinaryHeap<<K as KeyPolicy<T>>::Payload, OrderingKey<<K as KeyPolicy<T>>::Key>>;

/// A priority queue with configurable polarity and ordering key
///
/// `K` is the [`KeyPolicy`] deciding what the priority of an element is.
/// It defaults to [`Natural`], ordering elements by their own `PartialOrd`.
pub struct PriorityQueue<T, K: KeyPolicy<T> = Natural> {
    heap: Entries<T, K>,
    polarity: Polarity,
    policy: K,
    _marker: PhantomData<fn() -> T>,
}

impl<T: PartialOrd> PriorityQueue<T> {
    /// Creates an empty min-first queue ordered by the elements themselves
    pub fn new() -> Self {
        Self::from_config(QueueConfig::default())
    }

    /// Creates an empty queue ordered by the elements themselves
    pub fn with_polarity(polarity: Polarity) -> Self {
        Self::from_config(QueueConfig::from(polarity))
    }

    pub fn from_config(config: QueueConfig) -> Self {
        Self::with_policy(config, Natural)
    }

    /// Creates a queue holding `items`, ordered by the elements themselves
    ///
    /// Every item is checked before any is inserted: if one is unorderable
    /// the whole construction fails with [`QueueError::Unorderable`].
    pub fn from_items<I>(items: I, polarity: Polarity) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_policy(QueueConfig::from(polarity), Natural).seeded(items)
    }
}

impl<T, P, F> PriorityQueue<T, ByKey<F>>
where
    F: Fn(&T) -> P,
    P: PartialOrd,
{
    /// Creates an empty queue ordered by `projection(element)`
    pub fn by_key(polarity: Polarity, projection: F) -> Self {
        Self::by_key_with_config(QueueConfig::from(polarity), projection)
    }

    pub fn by_key_with_config(config: QueueConfig, projection: F) -> Self {
        Self::with_policy(config, ByKey(projection))
    }

    /// Creates a queue holding `items`, ordered by `projection(element)`
    ///
    /// As with [`from_items`](PriorityQueue::from_items), construction is
    /// all-or-nothing.
    pub fn by_key_from<I>(items: I, polarity: Polarity, projection: F) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::by_key(polarity, projection).seeded(items)
    }
}

impl<T, K: KeyPolicy<T>> PriorityQueue<T, K> {
    /// Creates an empty queue using an arbitrary key policy
    pub fn with_policy(config: QueueConfig, policy: K) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(config.capacity),
            polarity: config.polarity,
            policy,
            _marker: PhantomData,
        }
    }

    fn seeded<I>(mut self, items: I) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut staged = Vec::new();
        for item in items {
            let (key, payload) = self.policy.split(item);
            let key = self.ordering_key(key)?;
            staged.push((key, payload));
        }
        for (key, payload) in staged {
            self.heap.push(key, payload);
        }
        log::debug!(
            "built {} queue with {} elements",
            self.polarity,
            self.heap.len()
        );
        Ok(self)
    }

    fn ordering_key(&self, base: K::Key) -> Result<OrderingKey<K::Key>, QueueError> {
        if !is_orderable(&base) {
            log::debug!("rejected element with unorderable priority");
            return Err(QueueError::Unorderable);
        }
        Ok(OrderingKey::new(self.polarity, base))
    }

    /// Which extreme this queue serves first
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the top element without removing it
    ///
    /// # Errors
    /// [`QueueError::Empty`] if the queue holds nothing.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.heap
            .peek()
            .map(|(key, payload)| K::element(key.base(), payload))
            .ok_or(QueueError::Empty)
    }

    /// Inserts `item`
    ///
    /// # Errors
    /// [`QueueError::Unorderable`] if the item's priority cannot be ordered;
    /// the queue is left unchanged.
    pub fn push(&mut self, item: T) -> Result<(), QueueError> {
        let (key, payload) = self.policy.split(item);
        let key = self.ordering_key(key)?;
        self.heap.push(key, payload);
        Ok(())
    }

    /// Inserts every item of `items` in iteration order
    ///
    /// Unlike construction, this is not atomic. On the first unorderable item
    /// the error is returned and the remaining items are not consumed, but the
    /// items pushed before it stay in the queue.
    pub fn push_all<I>(&mut self, items: I) -> Result<(), QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.len();
        let result = items.into_iter().try_for_each(|item| self.push(item));
        log::trace!("push_all inserted {} elements", self.len() - before);
        result
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// [`QueueError::Empty`] if the queue holds nothing.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        self.heap
            .pop()
            .map(|(key, payload)| K::join(key.into_base(), payload))
            .ok_or(QueueError::Empty)
    }

    /// Removes the top `k` elements, returned top-first
    ///
    /// # Errors
    /// - [`QueueError::InvalidCount`] if `k` is zero
    /// - [`QueueError::InsufficientSize`] if `k` exceeds [`len`](Self::len)
    ///
    /// Both are checked before anything is removed.
    pub fn pop_k(&mut self, k: usize) -> Result<Vec<T>, QueueError> {
        if k == 0 {
            return Err(QueueError::InvalidCount);
        }
        if k > self.len() {
            log::debug!("pop_k({}) on a queue of {}", k, self.len());
            return Err(QueueError::InsufficientSize {
                requested: k,
                available: self.len(),
            });
        }
        let mut removed = Vec::with_capacity(k);
        for _ in 0..k {
            removed.push(self.pop()?);
        }
        log::trace!("pop_k removed {} elements, {} remain", k, self.len());
        Ok(removed)
    }

    /// Every element in priority order, top first, without mutating the queue
    ///
    /// Elements with equal priority appear in an unspecified relative order.
    pub fn sorted(&self) -> Vec<&T> {
        let mut entries: Vec<_> = self.heap.entries().iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
            .into_iter()
            .map(|(key, payload)| K::element(key.base(), payload))
            .collect()
    }

    /// Consumes the queue, returning its elements top first
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut entries = self.heap.into_entries();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
            .into_iter()
            .map(|(key, payload)| K::join(key.into_base(), payload))
            .collect()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Clone for PriorityQueue<T, K>
where
    K: KeyPolicy<T> + Clone,
    K::Key: Clone,
    K::Payload: Clone,
{
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            polarity: self.polarity,
            policy: self.policy.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, K: KeyPolicy<T>> fmt::Debug for PriorityQueue<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements: Vec<&T> = self
            .heap
            .entries()
            .iter()
            .map(|(key, payload)| K::element(key.base(), payload))
            .collect();
        f.debug_struct("PriorityQueue")
            .field("polarity", &self.polarity)
            .field("elements", &elements)
            .finish()
    }
}
