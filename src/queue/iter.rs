use super::linked_queue::Queue;
use super::node::{Link, Node};
use crate::raw::RawAlloc;

use std::iter::FusedIterator;
use std::marker::PhantomData;

// ------------------------------------------
// begin: Iter

pub struct Iter<'a> {
    next: Link,
    len: usize,
    _marker: PhantomData<&'a Node>,
}

unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: Link, len: usize) -> Self {
        Self {
            next: head,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let node = self.next?;
        self.len -= 1;
        unsafe {
            self.next = Node::next(node);
            Some(Node::value(node))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.len
    }
}

impl FusedIterator for Iter<'_> {}

// end: Iter
// ------------------------------------------

// ------------------------------------------
// begin: IntoIter

pub struct IntoIter<A: RawAlloc>(Queue<A>);

impl<A: RawAlloc> IntoIter<A> {
    pub(crate) fn new(queue: Queue<A>) -> Self {
        Self(queue)
    }
}

impl<A: RawAlloc> Iterator for IntoIter<A> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<A: RawAlloc> ExactSizeIterator for IntoIter<A> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<A: RawAlloc> FusedIterator for IntoIter<A> {}

// end: IntoIter
// ------------------------------------------
