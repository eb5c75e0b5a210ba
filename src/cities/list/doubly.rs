//! Doubly linked list: each node links forward and backward.
//!
//! For every adjacent pair `a, b`: `a.next == b` exactly when `b.prev == a`.
//! Every mutation re-establishes this before returning.

use log::{debug, trace};

use super::arena::{Arena, Link};
use super::iter::{Iter, Linked};
use super::CityList;
use crate::cities::types::models::City;

#[derive(Debug)]
struct Node<'a> {
    city: &'a City,
    prev: Link,
    next: Link,
}

impl<'a> Linked<'a> for Node<'a> {
    fn city(&self) -> &'a City {
        self.city
    }

    fn next(&self) -> Link {
        self.next
    }
}

/// A doubly linked list of cities.
#[derive(Debug, Default)]
pub struct DoublyLinkedList<'a> {
    nodes: Arena<Node<'a>>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<'a> DoublyLinkedList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backward traversal from the tail along `prev` links.
    pub fn iter_rev(&self) -> impl ExactSizeIterator<Item = &'a City> + '_ {
        Iter::new(&self.nodes, self.tail, self.len, |node: &Node<'a>| node.prev)
    }

    /// Find the node at 1-based position `n`, walking from whichever end is closer.
    fn locate(&self, n: usize) -> Option<usize> {
        if n == 0 || n > self.len {
            return None;
        }
        if n <= self.len / 2 + 1 {
            let mut current = self.head?;
            for _ in 1..n {
                current = self.nodes[current].next?;
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in n..self.len {
                current = self.nodes[current].prev?;
            }
            Some(current)
        }
    }

    /// Detach `idx` from its neighbors, re-linking them to each other.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &self.nodes[idx];
            (node.prev, node.next)
        };

        match prev {
            None => self.head = next,
            Some(prev_idx) => self.nodes[prev_idx].next = next,
        }
        match next {
            None => self.tail = prev,
            Some(next_idx) => self.nodes[next_idx].prev = prev,
        }

        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = None;
    }

    /// Link a detached node in front of the current head.
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let node = &mut self.nodes[idx];
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            None => self.tail = Some(idx),
            Some(head_idx) => self.nodes[head_idx].prev = Some(idx),
        }
        self.head = Some(idx);
    }
}

impl<'a> CityList<'a> for DoublyLinkedList<'a> {
    const DEBUG_NAME: &'static str = "doubly";

    fn append(&mut self, city: &'a City) {
        let idx = self.nodes.alloc(Node {
            city,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            None => self.head = Some(idx),
            Some(tail_idx) => self.nodes[tail_idx].next = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        trace!("Appended {} at position {}", city.name, self.len);
    }

    fn len(&self) -> usize {
        self.len
    }

    fn delete_at(&mut self, n: usize) -> Option<&'a City> {
        let idx = self.locate(n)?;
        self.unlink(idx);

        let node = self.nodes.release(idx)?;
        self.len -= 1;
        debug_assert_eq!(self.nodes.live(), self.len);
        debug!("Deleted position {}: {}", n, node.city.name);
        Some(node.city)
    }

    fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(idx) = current {
            let node = &mut self.nodes[idx];
            std::mem::swap(&mut node.prev, &mut node.next);
            // The old `next` now sits in `prev`.
            current = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
        debug!("Reversed {} nodes", self.len);
    }

    fn move_to_front(&mut self, n: usize) -> bool {
        if n <= 1 {
            return false;
        }
        let Some(idx) = self.locate(n) else {
            return false;
        };

        self.unlink(idx);
        self.link_front(idx);

        debug!("Moved position {} to front: {}", n, self.nodes[idx].city.name);
        true
    }

    fn iter(&self) -> impl ExactSizeIterator<Item = &'a City> + '_ {
        Iter::forward(&self.nodes, self.head, self.len)
    }
}
