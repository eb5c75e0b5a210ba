//! Singly linked list: each node links forward only.

use log::{debug, trace};

use super::arena::{Arena, Link};
use super::iter::{Iter, Linked};
use super::CityList;
use crate::cities::types::models::City;

#[derive(Debug)]
struct Node<'a> {
    city: &'a City,
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

/// A singly linked list of cities.
///
/// Keeps a tail link so [`append`](CityList::append) is O(1). Positional
/// operations walk from the head.
#[derive(Debug, Default)]
pub struct SinglyLinkedList<'a> {
    nodes: Arena<Node<'a>>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<'a> SinglyLinkedList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the node at 1-based position `n` together with its predecessor.
    fn locate(&self, n: usize) -> Option<(Link, usize)> {
        if n == 0 || n > self.len {
            return None;
        }
        let mut prev = None;
        let mut current = self.head?;
        for _ in 1..n {
            prev = Some(current);
            current = self.nodes[current].next?;
        }
        Some((prev, current))
    }
}

impl<'a> CityList<'a> for SinglyLinkedList<'a> {
    const DEBUG_NAME: &'static str = "singly";

    fn append(&mut self, city: &'a City) {
        let idx = self.nodes.alloc(Node { city, next: None });
        match self.tail {
            None => self.head = Some(idx),
            Some(tail) => self.nodes[tail].next = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        trace!("Appended {} at position {}", city.name, self.len);
    }

    fn len(&self) -> usize {
        self.len
    }

    fn delete_at(&mut self, n: usize) -> Option<&'a City> {
        let (prev, idx) = self.locate(n)?;
        let next = self.nodes[idx].next;

        // Only the predecessor's forward link needs rewiring.
        match prev {
            None => self.head = next,
            Some(prev) => self.nodes[prev].next = next,
        }
        if self.tail == Some(idx) {
            self.tail = prev;
        }

        let node = self.nodes.release(idx)?;
        self.len -= 1;
        debug_assert_eq!(self.nodes.live(), self.len);
        debug!("Deleted position {}: {}", n, node.city.name);
        Some(node.city)
    }

    fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let next = self.nodes[idx].next;
            self.nodes[idx].next = prev;
            prev = Some(idx);
            current = next;
        }
        self.tail = self.head;
        self.head = prev;
        debug!("Reversed {} nodes", self.len);
    }

    fn move_to_front(&mut self, n: usize) -> bool {
        if n <= 1 {
            return false;
        }
        let Some((Some(prev), idx)) = self.locate(n) else {
            return false;
        };

        self.nodes[prev].next = self.nodes[idx].next;
        if self.tail == Some(idx) {
            self.tail = Some(prev);
        }
        self.nodes[idx].next = self.head;
        self.head = Some(idx);

        debug!("Moved position {} to front: {}", n, self.nodes[idx].city.name);
        true
    }

    fn iter(&self) -> impl ExactSizeIterator<Item = &'a City> + '_ {
        Iter::forward(&self.nodes, self.head, self.len)
    }
}
