use crate::error::{QueueError, QueueResult};
use crate::raw::{RawAlloc, RawStr};

use std::alloc::Layout;
use std::ptr::NonNull;

pub(crate) type Link = Option<NonNull<Node>>;

pub(crate) struct Node {
    pub(crate) value: RawStr,
    pub(crate) next: Link,
}

impl Node {
    /// Allocates a detached node holding a copy of `value`.
    ///
    /// The node block is requested before the value block; if the value copy
    /// is refused the node block is released again, so a failure leaves
    /// nothing allocated.
    pub(crate) fn alloc<A: RawAlloc + ?Sized>(
        alloc: &A,
        value: &str,
    ) -> QueueResult<NonNull<Self>> {
        let layout = Layout::new::<Node>();
        let ptr = alloc
            .allocate(layout)
            .map_err(QueueError::ElementAlloc)?
            .cast::<Node>();

        let value = match RawStr::alloc(alloc, value) {
            Ok(value) => value,
            Err(e) => {
                unsafe { alloc.deallocate(ptr.cast(), layout) };
                return Err(QueueError::ValueAlloc(e));
            }
        };

        unsafe { ptr.as_ptr().write(Self { value, next: None }) };
        Ok(ptr)
    }

    // cond: ptr came from `Node::alloc` on `alloc` and is unlinked
    pub(crate) unsafe fn dealloc<A: RawAlloc + ?Sized>(alloc: &A, ptr: NonNull<Self>) {
        let mut node = ptr.as_ptr().read();
        node.value.dealloc(alloc);
        alloc.deallocate(ptr.cast(), Layout::new::<Node>());
    }

    pub(crate) unsafe fn value<'a>(ptr: NonNull<Self>) -> &'a str {
        (*ptr.as_ptr()).value.as_str()
    }

    pub(crate) unsafe fn next(ptr: NonNull<Self>) -> Link {
        (*ptr.as_ptr()).next
    }

    pub(crate) unsafe fn set_next(ptr: NonNull<Self>, next: Link) {
        (*ptr.as_ptr()).next = next;
    }
}

#[cfg(test)]
mod test {
    use super::Node;
    use crate::error::QueueError;
    use crate::raw::{FailPolicy, FaultyAlloc};

    #[test]
    fn test_node_alloc() {
        let alloc = FaultyAlloc::new();
        let node = Node::alloc(&alloc, "value").unwrap();
        assert_eq!(alloc.live_blocks(), 2);
        unsafe {
            assert_eq!(Node::value(node), "value");
            assert!(Node::next(node).is_none());
            Node::dealloc(&alloc, node);
        }
        assert_eq!(alloc.live_blocks(), 0);
    }

    #[test]
    fn test_value_refused_releases_node() {
        let alloc = FaultyAlloc::with_policy(FailPolicy::Nth(2));
        match Node::alloc(&alloc, "value") {
            Err(QueueError::ValueAlloc(e)) => assert_eq!(e.size, 5),
            _ => panic!("value allocation should have been refused"),
        }
        assert_eq!(alloc.allocations(), 1);
        assert_eq!(alloc.live_blocks(), 0);
    }

    #[test]
    fn test_node_refused() {
        let alloc = FaultyAlloc::with_policy(FailPolicy::Nth(1));
        assert!(matches!(
            Node::alloc(&alloc, "value"),
            Err(QueueError::ElementAlloc(_))
        ));
        assert_eq!(alloc.allocations(), 0);
    }
}
