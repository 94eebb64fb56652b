use super::linked_queue::Queue;
use crate::error::{QueueError, QueueResult};
use crate::raw::{Global, RawAlloc};

use std::alloc::Layout;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

/// A [`Queue`] whose own container storage is taken from its allocator, so
/// creating one can fail the same way inserting into one can.
pub struct QueueBox<A: RawAlloc + Clone = Global> {
    ptr: NonNull<Queue<A>>,
}

unsafe impl<A: RawAlloc + Clone + Send> Send for QueueBox<A> {}
unsafe impl<A: RawAlloc + Clone + Sync> Sync for QueueBox<A> {}

impl QueueBox {
    pub fn try_new() -> QueueResult<Self> {
        Self::try_new_in(Global)
    }
}

impl<A: RawAlloc + Clone> QueueBox<A> {
    pub fn try_new_in(alloc: A) -> QueueResult<Self> {
        let layout = Layout::new::<Queue<A>>();
        let ptr = match alloc.allocate(layout) {
            Ok(ptr) => ptr.cast::<Queue<A>>(),
            Err(e) => {
                log::debug!("queue container allocation failed: {}", e);
                return Err(QueueError::ContainerAlloc(e));
            }
        };
        unsafe { ptr.as_ptr().write(Queue::new_in(alloc)) };
        Ok(Self { ptr })
    }
}

impl<A: RawAlloc + Clone> Deref for QueueBox<A> {
    type Target = Queue<A>;

    fn deref(&self) -> &Queue<A> {
        unsafe { self.ptr.as_ref() }
    }
}

impl<A: RawAlloc + Clone> DerefMut for QueueBox<A> {
    fn deref_mut(&mut self) -> &mut Queue<A> {
        unsafe { self.ptr.as_mut() }
    }
}

impl<A: RawAlloc + Clone> Drop for QueueBox<A> {
    fn drop(&mut self) {
        unsafe {
            let queue = self.ptr.as_ptr().read();
            let alloc = queue.allocator().clone();
            // elements go first, then the container
            drop(queue);
            alloc.deallocate(self.ptr.cast(), Layout::new::<Queue<A>>());
        }
    }
}

impl<A: RawAlloc + Clone> fmt::Debug for QueueBox<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
