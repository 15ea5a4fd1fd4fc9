//! From user elements to heap entries
//!
//! A queue never compares elements directly. Each element is split by a
//! [`KeyPolicy`] into a *base key* (what the priority is computed from) and a
//! *payload* (whatever has to be kept to hand the element back). The base key
//! is then wrapped in an [`OrderingKey`] carrying the queue's polarity, and
//! that wrapper is what the underlying min-heap orders.
//!
//! Max polarity reverses the comparator instead of negating the key, so it
//! works for any orderable key type: strings, tuples, unsigned integers.

use std::cmp::Ordering;

use crate::config::Polarity;

/// Splits elements into an ordering key and a payload, and joins them back
///
/// Two policies ship with the crate:
///
/// - [`Natural`]: the element is its own key and the payload is `()`.
/// - [`ByKey`]: a projection computes the key and the element is the payload.
pub trait KeyPolicy<T> {
    /// The value priorities are compared by
    type Key: PartialOrd;
    /// What is stored alongside the key
    type Payload;

    /// Breaks an element into its key and payload
    fn split(&self, item: T) -> (Self::Key, Self::Payload);

    /// Reassembles an element from what [`split`](Self::split) produced
    fn join(key: Self::Key, payload: Self::Payload) -> T;

    /// Borrows the element back out of a stored entry
    fn element<'a>(key: &'a Self::Key, payload: &'a Self::Payload) -> &'a T;
}

/// Orders elements by their own `PartialOrd` implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: PartialOrd> KeyPolicy<T> for Natural {
    type Key = T;
    type Payload = ();

    fn split(&self, item: T) -> (T, ()) {
        (item, ())
    }

    fn join(key: T, _: ()) -> T {
        key
    }

    fn element<'a>(key: &'a T, _: &'a ()) -> &'a T {
        key
    }
}

/// Orders elements by the value a projection computes from them
///
/// The projection must be pure: it is called once per insertion and the
/// result is cached with the element, so a projection that changes its answer
/// over time silently produces an inconsistent order.
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, P, F> KeyPolicy<T> for ByKey<F>
where
    F: Fn(&T) -> P,
    P: PartialOrd,
{
    type Key = P;
    type Payload = T;

    fn split(&self, item: T) -> (P, T) {
        ((self.0)(&item), item)
    }

    fn join(_: P, item: T) -> T {
        item
    }

    fn element<'a>(_: &'a P, item: &'a T) -> &'a T {
        item
    }
}

impl<F> std::fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ByKey(..)")
    }
}

/// Whether `value` has a defined place in its own ordering
///
/// This is a best-effort probe: it rejects values incomparable with
/// themselves (NaN) but cannot prove a `PartialOrd` impl is total.
pub fn is_orderable<P: PartialOrd>(value: &P) -> bool {
    value.partial_cmp(value) == Some(Ordering::Equal)
}

/// A base key tagged with the polarity it is compared under
///
/// `Min` keys compare ascending, `Max` keys compare with their operands
/// swapped. A single queue only ever holds one variant; the cross-variant
/// arms exist to keep `Ord` total.
#[derive(Debug, Clone, Copy)]
pub enum OrderingKey<P> {
    Min(P),
    Max(P),
}

impl<P> OrderingKey<P> {
    pub fn new(polarity: Polarity, base: P) -> Self {
        match polarity {
            Polarity::Min => OrderingKey::Min(base),
            Polarity::Max => OrderingKey::Max(base),
        }
    }

    /// The unadjusted key
    pub fn base(&self) -> &P {
        match self {
            OrderingKey::Min(base) | OrderingKey::Max(base) => base,
        }
    }

    pub fn into_base(self) -> P {
        match self {
            OrderingKey::Min(base) | OrderingKey::Max(base) => base,
        }
    }
}

// Keys reach the heap only after passing `is_orderable`, so treating an
// incomparable pair as equal is not observable for well-behaved types.
fn compare<P: PartialOrd>(a: &P, b: &P) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<P: PartialOrd> Ord for OrderingKey<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (OrderingKey::Min(a), OrderingKey::Min(b)) => compare(a, b),
            (OrderingKey::Max(a), OrderingKey::Max(b)) => compare(b, a),
            (OrderingKey::Min(_), OrderingKey::Max(_)) => Ordering::Less,
            (OrderingKey::Max(_), OrderingKey::Min(_)) => Ordering::Greater,
        }
    }
}

impl<P: PartialOrd> PartialOrd for OrderingKey<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd> PartialEq for OrderingKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: PartialOrd> Eq for OrderingKey<P> {}
