//! Scenario tests for PriorityQueue
//!
//! Every test builds its own queues; nothing is shared between tests.

use heap_queue::{ByKey, Polarity, PriorityQueue, QueueError};

#[derive(Debug, Clone, PartialEq)]
struct Dummy {
    val: i32,
    name: &'static str,
}

fn dummy(val: i32, name: &'static str) -> Dummy {
    Dummy { val, name }
}

fn min_queue() -> PriorityQueue<i32> {
    PriorityQueue::from_items([1, 2, 3, 4], Polarity::Min).unwrap()
}

fn max_queue() -> PriorityQueue<i32> {
    PriorityQueue::from_items([1, 2, 3, 4], Polarity::Max).unwrap()
}

type ClassQueue = PriorityQueue<Dummy, ByKey<fn(&Dummy) -> i32>>;

fn class_queue() -> ClassQueue {
    ClassQueue::by_key_from(
        [dummy(1, "one"), dummy(2, "two"), dummy(3, "three")],
        Polarity::Min,
        |d| d.val,
    )
    .unwrap()
}

#[test]
fn test_len() {
    assert_eq!(PriorityQueue::<i32>::new().len(), 0);
    assert_eq!(min_queue().len(), 4);
    assert_eq!(max_queue().len(), 4);
    assert_eq!(class_queue().len(), 3);
}

#[test]
fn test_peek() {
    assert_eq!(PriorityQueue::<i32>::new().peek(), Err(QueueError::Empty));

    let min = min_queue();
    assert_eq!(min.peek(), Ok(&1));
    assert_eq!(min.len(), 4);

    let max = max_queue();
    assert_eq!(max.peek(), Ok(&4));
    assert_eq!(max.len(), 4);

    let class = class_queue();
    assert_eq!(class.peek().unwrap().name, "one");
    assert_eq!(class.len(), 3);
}

#[test]
fn test_peek_is_idempotent() {
    let queue = max_queue();
    for _ in 0..5 {
        assert_eq!(queue.peek(), Ok(&4));
    }
    assert_eq!(queue.len(), 4);
}

#[test]
fn test_push() {
    let mut empty = PriorityQueue::new();
    empty.push_all([9, 6, 7]).unwrap();
    assert_eq!(empty.len(), 3);
    empty.push(10).unwrap();
    assert_eq!(empty.len(), 4);

    let mut min = min_queue();
    min.push_all([9, 6, 7]).unwrap();
    assert_eq!(min.len(), 7);
    assert_eq!(min.peek(), Ok(&1));

    let mut max = max_queue();
    max.push_all([9, 6, 7]).unwrap();
    assert_eq!(max.len(), 7);
    assert_eq!(max.peek(), Ok(&9));
}

#[test]
fn test_push_projected() {
    let mut class = class_queue();
    class
        .push_all([dummy(9, "nine"), dummy(6, "six"), dummy(7, "seven")])
        .unwrap();
    assert_eq!(class.len(), 6);
    assert_eq!(class.peek().unwrap().name, "one");

    class.push(dummy(-100, "hunnit")).unwrap();
    assert_eq!(class.peek().unwrap().name, "hunnit");
}

#[test]
fn test_unorderable_rejections() {
    // construction checks everything first
    let built = PriorityQueue::from_items(vec![0.5, 1.5, f64::NAN], Polarity::Max);
    assert!(matches!(built, Err(QueueError::Unorderable)));

    // push leaves the queue untouched
    let mut queue = PriorityQueue::with_polarity(Polarity::Max);
    queue.push(1.0).unwrap();
    assert_eq!(queue.push(f64::NAN), Err(QueueError::Unorderable));
    assert_eq!(queue.len(), 1);

    // push_all keeps what it inserted before the failure
    assert_eq!(
        queue.push_all([2.0, f64::NAN, 3.0]),
        Err(QueueError::Unorderable)
    );
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek(), Ok(&2.0));
}

#[test]
fn test_unorderable_projection() {
    struct Reading {
        sensor: u8,
        value: f32,
    }

    let mut readings = PriorityQueue::by_key(Polarity::Max, |r: &Reading| r.value);
    readings.push(Reading { sensor: 1, value: 0.25 }).unwrap();
    assert_eq!(
        readings.push(Reading { sensor: 2, value: f32::NAN }),
        Err(QueueError::Unorderable)
    );
    readings.push(Reading { sensor: 3, value: 0.75 }).unwrap();
    assert_eq!(readings.pop().map(|r| r.sensor), Ok(3));
    assert_eq!(readings.pop().map(|r| r.sensor), Ok(1));
}

#[test]
fn test_pop() {
    let mut empty: PriorityQueue<i32> = PriorityQueue::new();
    assert_eq!(empty.pop(), Err(QueueError::Empty));
    assert_eq!(empty.pop_k(0), Err(QueueError::InvalidCount));

    let mut min = min_queue();
    assert_eq!(min.pop(), Ok(1));
    assert_eq!(min.len(), 3);
    assert_eq!(min.pop_k(3), Ok(vec![2, 3, 4]));

    let mut max = max_queue();
    assert_eq!(max.pop(), Ok(4));
    assert_eq!(max.len(), 3);
    assert_eq!(max.pop_k(3), Ok(vec![3, 2, 1]));

    assert_eq!(
        empty.pop_k(1),
        Err(QueueError::InsufficientSize {
            requested: 1,
            available: 0
        })
    );

    let mut class = class_queue();
    assert_eq!(class.pop().unwrap().name, "one");
    assert_eq!(class.len(), 2);
}

#[test]
fn test_pop_k_scenarios() {
    let mut min = min_queue();
    assert_eq!(min.peek(), Ok(&1));
    assert_eq!(min.pop_k(3), Ok(vec![1, 2, 3]));
    assert_eq!(min.len(), 1);

    let mut max = max_queue();
    assert_eq!(max.peek(), Ok(&4));
    assert_eq!(max.pop_k(3), Ok(vec![4, 3, 2]));
    assert_eq!(max.len(), 1);
}

#[test]
fn test_pop_k_boundaries() {
    let mut queue = min_queue();
    assert_eq!(queue.pop_k(0), Err(QueueError::InvalidCount));
    assert_eq!(
        queue.pop_k(5),
        Err(QueueError::InsufficientSize {
            requested: 5,
            available: 4
        })
    );
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.pop_k(4), Ok(vec![1, 2, 3, 4]));
    assert!(queue.is_empty());
}

#[test]
fn test_sorted() {
    assert!(PriorityQueue::<i32>::new().sorted().is_empty());
    assert_eq!(min_queue().sorted(), vec![&1, &2, &3, &4]);
    assert_eq!(max_queue().sorted(), vec![&4, &3, &2, &1]);

    let class = class_queue();
    let dummies = class.sorted();
    for (i, d) in dummies.iter().enumerate() {
        assert_eq!(d.val, i as i32 + 1);
    }
    assert_eq!(class.len(), 3);
}

#[test]
fn test_sorted_matches_popping_a_clone() {
    let mut queue = PriorityQueue::with_polarity(Polarity::Max);
    queue.push_all([5, 0, 4, 1, 2, 3]).unwrap();

    let snapshot: Vec<i32> = queue.sorted().into_iter().copied().collect();
    let mut copy = queue.clone();
    let popped = copy.pop_k(copy.len()).unwrap();

    assert_eq!(snapshot, popped);
    assert_eq!(snapshot, vec![5, 4, 3, 2, 1, 0]);
    assert_eq!(queue.len(), 6);
}

#[test]
fn test_max_over_non_numeric_keys() {
    let mut words = PriorityQueue::from_items(
        ["Alex", "Tyler", "Shou-San", "David"],
        Polarity::Max,
    )
    .unwrap();
    assert_eq!(words.peek(), Ok(&"Tyler"));

    let names = PriorityQueue::by_key_from(
        [dummy(1, "bravo"), dummy(2, "alpha"), dummy(3, "charlie")],
        Polarity::Max,
        |d: &Dummy| d.name,
    )
    .unwrap();
    assert_eq!(names.peek().unwrap().val, 3);

    words.push("Zed").unwrap();
    assert_eq!(words.pop_k(2), Ok(vec!["Zed", "Tyler"]));
}

#[test]
fn test_unsigned_max_extremes() {
    let queue = PriorityQueue::from_items([0u64, u64::MAX, 7], Polarity::Max).unwrap();
    assert_eq!(queue.into_sorted_vec(), vec![u64::MAX, 7, 0]);
}

#[test]
fn test_queue_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let queue = Arc::new(Mutex::new(PriorityQueue::with_polarity(Polarity::Min)));
    let workers: Vec<_> = (0..4)
        .map(|w| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..25 {
                    queue.lock().unwrap().push(w * 25 + i).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let queue = Arc::try_unwrap(queue).unwrap().into_inner().unwrap();
    assert_eq!(queue.into_sorted_vec(), (0..100).collect::<Vec<_>>());
}
