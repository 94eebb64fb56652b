use super::linked_queue::Queue;
use super::node::{Link, Node};
use crate::raw::RawAlloc;

use std::ptr::NonNull;

impl<A: RawAlloc> Queue<A> {
    /// Sorts the queue in ascending byte-wise order.
    ///
    /// Stable merge sort over the links themselves; values are never copied.
    pub fn sort(&mut self) {
        if self.len() < 2 {
            return;
        }
        unsafe {
            let head = merge_sort(self.head_link());
            let mut tail = head;
            while let Some(next) = tail.and_then(|node| Node::next(node)) {
                tail = Some(next);
            }
            self.relink(head, tail);
        }
        log::trace!("sorted queue of {} elements", self.len());
    }
}

unsafe fn merge_sort(head: Link) -> Link {
    let head = match head {
        Some(node) if Node::next(node).is_some() => node,
        short => return short,
    };
    let right = split(head);
    merge(merge_sort(Some(head)), merge_sort(right))
}

// cond: the list at head has at least two nodes
// Cuts the list after its middle node and returns the second half.
// slow never passes fast, so it has a successor whenever fast does.
unsafe fn split(head: NonNull<Node>) -> Link {
    let mut slow = head;
    let mut fast = Node::next(head);
    while let Some(after) = fast.and_then(|node| Node::next(node)) {
        slow = Node::next(slow).unwrap_unchecked();
        fast = Node::next(after);
    }
    let right = Node::next(slow);
    Node::set_next(slow, None);
    right
}

// Ties take from `left`, which keeps the sort stable.
unsafe fn merge(mut left: Link, mut right: Link) -> Link {
    let mut head: Link = None;
    let mut last: Option<NonNull<Node>> = None;

    loop {
        let taken = match (left, right) {
            (Some(l), Some(r)) => {
                if Node::value(l).as_bytes() <= Node::value(r).as_bytes() {
                    left = Node::next(l);
                    l
                } else {
                    right = Node::next(r);
                    r
                }
            }
            (rest, None) | (None, rest) => {
                match last {
                    Some(node) => Node::set_next(node, rest),
                    None => head = rest,
                }
                return head;
            }
        };
        match last {
            Some(node) => Node::set_next(node, Some(taken)),
            None => head = Some(taken),
        }
        last = Some(taken);
    }
}
