use super::iter::{IntoIter, Iter};
use super::node::{Link, Node};
use crate::error::{QueueError, QueueResult};
use crate::raw::{Global, RawAlloc};

use std::fmt;
use std::ptr::NonNull;

/// Outcome of [`Queue::remove_head_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removed {
    copied: usize,
    len: usize,
}

impl Removed {
    /// Bytes written to the buffer, not counting the terminator.
    pub fn copied(&self) -> usize {
        self.copied
    }

    /// Length of the removed value.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_truncated(&self) -> bool {
        self.copied < self.len
    }
}

/// FIFO queue of strings over a singly linked list.
///
/// `head` and `tail` are both `None` exactly when `len == 0`. Otherwise
/// following `next` from `head` reaches `tail` in `len - 1` steps and
/// `tail.next` is `None`.
pub struct Queue<A: RawAlloc = Global> {
    head: Link,
    tail: Link,
    len: usize,
    alloc: A,
}

unsafe impl<A: RawAlloc + Send> Send for Queue<A> {}
unsafe impl<A: RawAlloc + Sync> Sync for Queue<A> {}

impl Queue {
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: RawAlloc> Queue<A> {
    pub fn new_in(alloc: A) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            alloc,
        }
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front(&self) -> Option<&str> {
        self.head.map(|ptr| unsafe { Node::value(ptr) })
    }

    pub fn back(&self) -> Option<&str> {
        self.tail.map(|ptr| unsafe { Node::value(ptr) })
    }

    fn alloc_node(&self, value: &str) -> QueueResult<NonNull<Node>> {
        Node::alloc(&self.alloc, value).map_err(|e| {
            log::warn!("insert of {} byte value failed: {}", value.len(), e);
            e
        })
    }

    /// Copies `value` into a new element in front of the current head.
    ///
    /// On error the queue is left exactly as it was.
    pub fn insert_head(&mut self, value: &str) -> QueueResult<()> {
        let node = self.alloc_node(value)?;
        unsafe { Node::set_next(node, self.head) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Copies `value` into a new element after the current tail.
    ///
    /// On error the queue is left exactly as it was.
    pub fn insert_tail(&mut self, value: &str) -> QueueResult<()> {
        let node = self.alloc_node(value)?;
        match self.tail {
            None => self.head = Some(node),
            Some(tail) => unsafe { Node::set_next(tail, Some(node)) },
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Inserts every value at the tail, stopping at the first failure.
    /// Values inserted before the failure stay in the queue.
    pub fn try_extend<'a, I>(&mut self, values: I) -> QueueResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for value in values {
            self.insert_tail(value)?;
        }
        Ok(())
    }

    fn detach_head(&mut self) -> Option<NonNull<Node>> {
        let head = self.head?;
        self.head = unsafe { Node::next(head) };
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(head)
    }

    /// Removes the head element, copying at most `buf.len() - 1` bytes of it
    /// into `buf` followed by a NUL terminator.
    ///
    /// Returns `false` without touching the queue if it is empty or `buf` has
    /// no room for the terminator. A value longer than the buffer is cut
    /// short without notice; use [`Queue::remove_head_into`] to find out.
    pub fn remove_head(&mut self, buf: &mut [u8]) -> bool {
        self.remove_head_into(buf).is_ok()
    }

    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> QueueResult<Removed> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        if buf.is_empty() {
            return Err(QueueError::ZeroCapacity);
        }
        let node = self.detach_head().ok_or(QueueError::Empty)?;

        let value = unsafe { Node::value(node) }.as_bytes();
        let copied = value.len().min(buf.len() - 1);
        buf[..copied].copy_from_slice(&value[..copied]);
        buf[copied] = 0;
        let removed = Removed {
            copied,
            len: value.len(),
        };

        unsafe { Node::dealloc(&self.alloc, node) };
        Ok(removed)
    }

    /// Removes the head element and returns its value as an owned `String`.
    pub fn pop_front(&mut self) -> Option<String> {
        self.detach_head().map(|node| unsafe {
            let value = String::from(Node::value(node));
            Node::dealloc(&self.alloc, node);
            value
        })
    }

    /// Reverses the queue in place by turning every link around.
    /// Allocates and frees nothing.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut prev: Link = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            unsafe {
                cur = Node::next(node);
                Node::set_next(node, prev);
            }
            prev = Some(node);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
        log::trace!("reversed queue of {} elements", self.len);
    }

    pub(crate) fn head_link(&self) -> Link {
        self.head
    }

    // cond: head..tail hold the same `len` nodes as before, relinked
    pub(crate) unsafe fn relink(&mut self, head: Link, tail: Link) {
        self.head = head;
        self.tail = tail;
    }

    /// Releases every element, head to tail.
    pub fn clear(&mut self) {
        if self.len != 0 {
            log::trace!("releasing {} elements", self.len);
        }
        let mut cur = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(node) = cur {
            unsafe {
                cur = Node::next(node);
                Node::dealloc(&self.alloc, node);
            }
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head, self.len)
    }
}

impl<A: RawAlloc> Drop for Queue<A> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<A: RawAlloc> fmt::Debug for Queue<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, A: RawAlloc> IntoIterator for &'a Queue<A> {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<A: RawAlloc> IntoIterator for Queue<A> {
    type Item = String;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> IntoIter<A> {
        IntoIter::new(self)
    }
}
