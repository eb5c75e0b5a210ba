//! Traversal over arena-linked nodes.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::arena::{Arena, Link};
use crate::cities::types::models::City;

/// Common view of a list node used by [`Iter`].
pub(crate) trait Linked<'a> {
    fn city(&self) -> &'a City;
    fn next(&self) -> Link;
}

/// Walks a chain of nodes from `cursor`, following `step` at each node.
///
/// `remaining` is the number of nodes left in the chain; it backs the exact
/// size hint.
pub(crate) struct Iter<'l, 'a, N> {
    nodes: &'l Arena<N>,
    cursor: Link,
    remaining: usize,
    step: fn(&N) -> Link,
    _city: PhantomData<&'a City>,
}

impl<'l, 'a, N: Linked<'a>> Iter<'l, 'a, N> {
    /// Forward traversal along `next` links.
    pub(crate) fn forward(nodes: &'l Arena<N>, head: Link, len: usize) -> Self {
        Self::new(nodes, head, len, N::next)
    }

    pub(crate) fn new(nodes: &'l Arena<N>, start: Link, len: usize, step: fn(&N) -> Link) -> Self {
        Self {
            nodes,
            cursor: start,
            remaining: len,
            step,
            _city: PhantomData,
        }
    }
}

impl<'l, 'a, N: Linked<'a>> Iterator for Iter<'l, 'a, N> {
    type Item = &'a City;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = &self.nodes[idx];
        self.cursor = (self.step)(node);
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.city())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l, 'a, N: Linked<'a>> ExactSizeIterator for Iter<'l, 'a, N> {}

impl<'l, 'a, N: Linked<'a>> FusedIterator for Iter<'l, 'a, N> {}
