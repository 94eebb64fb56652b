//! Flat, status-returning operations over an optional queue.
//!
//! Every function here accepts `None` in place of a queue and treats it as a
//! failed or empty call, never as an error. Results are plain `bool`s and
//! counts, so a caller driving the queue from a command loop can report
//! outcomes without matching on [`QueueError`](crate::QueueError).

use crate::queue::{Queue, QueueBox};
use crate::raw::{Global, RawAlloc};

/// Returns a new empty queue, or `None` if its container could not be
/// allocated.
pub fn create() -> Option<QueueBox> {
    create_in(Global)
}

pub fn create_in<A: RawAlloc + Clone>(alloc: A) -> Option<QueueBox<A>> {
    QueueBox::try_new_in(alloc).ok()
}

/// Releases every element and then the queue itself. `None` is a no-op.
pub fn destroy<A: RawAlloc + Clone>(queue: Option<QueueBox<A>>) {
    drop(queue)
}

pub fn insert_head<A: RawAlloc>(queue: Option<&mut Queue<A>>, value: &str) -> bool {
    match queue {
        Some(q) => q.insert_head(value).is_ok(),
        None => false,
    }
}

pub fn insert_tail<A: RawAlloc>(queue: Option<&mut Queue<A>>, value: &str) -> bool {
    match queue {
        Some(q) => q.insert_tail(value).is_ok(),
        None => false,
    }
}

/// Removes the head element into `buf` (see [`Queue::remove_head`]).
/// Fails if the queue is absent or empty, or if no buffer is given.
pub fn remove_head<A: RawAlloc>(queue: Option<&mut Queue<A>>, buf: Option<&mut [u8]>) -> bool {
    match (queue, buf) {
        (Some(q), Some(buf)) => q.remove_head(buf),
        _ => false,
    }
}

pub fn size<A: RawAlloc>(queue: Option<&Queue<A>>) -> usize {
    queue.map_or(0, Queue::len)
}

pub fn reverse<A: RawAlloc>(queue: Option<&mut Queue<A>>) {
    if let Some(q) = queue {
        q.reverse()
    }
}

pub fn sort<A: RawAlloc>(queue: Option<&mut Queue<A>>) {
    if let Some(q) = queue {
        q.sort()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::raw::{FailPolicy, FaultyAlloc};

    #[test]
    fn test_sort_scenario() {
        let mut q = create();
        for v in &["b", "a", "c"] {
            assert!(insert_tail(q.as_deref_mut(), v));
        }
        sort(q.as_deref_mut());
        let values: Vec<&str> = q.as_deref().unwrap().iter().collect();
        assert_eq!(values, ["a", "b", "c"]);
        assert_eq!(size(q.as_deref()), 3);
        destroy(q);
    }

    #[test]
    fn test_one_byte_buffer() {
        let mut q = create();
        assert!(insert_head(q.as_deref_mut(), "x"));
        assert!(insert_tail(q.as_deref_mut(), "y"));

        let mut buf = [b'?'; 1];
        assert!(remove_head(q.as_deref_mut(), Some(&mut buf[..])));
        assert_eq!(buf, [0]);
        assert_eq!(size(q.as_deref()), 1);
        assert_eq!(q.as_deref().unwrap().front(), Some("y"));
    }

    #[test]
    fn test_remove_from_fresh_queue() {
        let mut q = create();
        let mut buf = [0u8; 8];
        assert!(!remove_head(q.as_deref_mut(), Some(&mut buf[..])));
        assert_eq!(size(q.as_deref()), 0);

        assert!(insert_tail(q.as_deref_mut(), "z"));
        assert!(!remove_head(q.as_deref_mut(), None));
        assert_eq!(size(q.as_deref()), 1);
    }

    #[test]
    fn test_insert_under_allocation_failure() {
        let alloc = FaultyAlloc::new();
        let mut q = create_in(&alloc);
        assert!(insert_tail(q.as_deref_mut(), "first"));
        assert!(insert_tail(q.as_deref_mut(), "last"));

        alloc.set_policy(FailPolicy::Always);
        assert!(!insert_head(q.as_deref_mut(), "new"));
        alloc.set_policy(FailPolicy::Nth(2));
        assert!(!insert_head(q.as_deref_mut(), "new"));

        let queue = q.as_deref().unwrap();
        assert_eq!(size(Some(queue)), 2);
        assert_eq!(queue.front(), Some("first"));
        assert_eq!(queue.back(), Some("last"));

        destroy(q);
        assert_eq!(alloc.live_blocks(), 0);
    }

    #[test]
    fn test_absent_queue() {
        let mut buf = [0u8; 4];
        assert!(!insert_head::<Global>(None, "a"));
        assert!(!insert_tail::<Global>(None, "a"));
        assert!(!remove_head::<Global>(None, Some(&mut buf[..])));
        assert_eq!(size::<Global>(None), 0);
        reverse::<Global>(None);
        sort::<Global>(None);
        destroy::<Global>(None);
    }

    #[test]
    fn test_destroy() {
        destroy(create());

        let q = create();
        destroy(q);
        destroy::<Global>(None);

        let alloc = FaultyAlloc::new();
        let mut q = create_in(&alloc);
        for i in 0..10 {
            assert!(insert_head(q.as_deref_mut(), &i.to_string()));
        }
        reverse(q.as_deref_mut());
        destroy(q);
        assert_eq!(alloc.live_blocks(), 0);

        alloc.set_policy(FailPolicy::Always);
        assert!(create_in(&alloc).is_none());
    }
}
