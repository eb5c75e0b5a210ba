//! Slot arena backing both list variants.
//!
//! Nodes are addressed by stable indices instead of pointers. Released slots
//! are pushed onto a free stack and reused by the next allocation.

use std::ops::{Index, IndexMut};

/// Index of a node in the arena, `None` marks the end of a chain.
pub(crate) type Link = Option<usize>;

#[derive(Debug)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    // Indices of vacant slots, most recently released on top.
    free: Vec<usize>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<N> Arena<N> {
    /// Store `node` and return its index.
    pub(crate) fn alloc(&mut self, node: N) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacate the slot at `idx` and hand back its node.
    ///
    /// Returns `None` if the slot is already vacant, so a slot is never freed twice.
    pub(crate) fn release(&mut self, idx: usize) -> Option<N> {
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<N> Index<usize> for Arena<N> {
    type Output = N;

    fn index(&self, idx: usize) -> &N {
        self.slots[idx]
            .as_ref()
            .expect("link points at a released arena slot")
    }
}

impl<N> IndexMut<usize> for Arena<N> {
    fn index_mut(&mut self, idx: usize) -> &mut N {
        self.slots[idx]
            .as_mut()
            .expect("link points at a released arena slot")
    }
}
