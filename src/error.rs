use thiserror::Error;

/// Errors returned by [`PriorityQueue`](crate::queue::PriorityQueue) operations
///
/// Every failing operation leaves the queue as it was before the call, with
/// one exception: [`push_all`](crate::queue::PriorityQueue::push_all) keeps
/// the items it inserted before hitting an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// An element's priority has no defined ordering (e.g. a NaN float)
    #[error("element priority is not orderable")]
    Unorderable,
    /// `peek` or `pop` on a queue with no elements
    #[error("queue is empty")]
    Empty,
    /// `pop_k` asked for zero elements
    #[error("cannot pop a non-positive number of elements")]
    InvalidCount,
    /// `pop_k` asked for more elements than the queue holds
    #[error("cannot pop {requested} elements from a queue of {available}")]
    InsufficientSize { requested: usize, available: usize },
}
