//! Position-indexed linked lists of borrowed cities.
//!
//! Two interchangeable implementations share the [`CityList`] trait:
//!
//! - [`SinglyLinkedList`]: forward links only
//! - [`DoublyLinkedList`]: forward and backward links kept mutually consistent
//!
//! Nodes live in an arena and link to each other by index, so deleting or
//! relocating a node can never leave a dangling reference behind.
//!
//! # Positions
//!
//! Every positional operation counts from **1**: position 1 is the head.
//! Positions outside `1..=len()` are silently ignored (no-op), never an error.
//!
//! # Example
//! ```
//! use citylist::{City, CityList, SinglyLinkedList};
//!
//! let cities = [
//!     City::new("CityA", "ST", 900),
//!     City::new("CityB", "ST", 800),
//!     City::new("CityC", "ST", 700),
//! ];
//! let mut list = SinglyLinkedList::from_ranked(&cities);
//! list.delete_at(2);
//! list.reverse();
//! list.move_to_front(2);
//! let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["CityA", "CityC"]);
//! ```

mod arena;
pub mod doubly;
mod iter;
pub mod singly;

use std::fmt;

pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;

use super::types::models::City;

/// Behavior shared by both list variants.
///
/// The lifetime `'a` is the lifetime of the [`CityStore`](crate::CityStore)
/// the cities are borrowed from.
pub trait CityList<'a>: Default {
    /// A short name used for logging.
    const DEBUG_NAME: &'static str;

    /// Insert `city` at the tail.
    fn append(&mut self, city: &'a City);

    /// Number of live nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the node at 1-based position `n` and return its city.
    ///
    /// Returns `None` and leaves the list untouched if `n` is 0 or greater
    /// than [`len`](CityList::len).
    fn delete_at(&mut self, n: usize) -> Option<&'a City>;

    /// Reverse the list in place. The former tail becomes the head.
    fn reverse(&mut self);

    /// Move the node at 1-based position `n` to the head, keeping every other
    /// node in its relative order.
    ///
    /// Returns `false` (no-op) if `n <= 1` or `n > len()`.
    fn move_to_front(&mut self, n: usize) -> bool;

    /// Forward traversal from the head.
    fn iter(&self) -> impl ExactSizeIterator<Item = &'a City> + '_;

    /// The first `min(n, len())` cities in forward order.
    ///
    /// Lazy and side-effect free; every call starts again from the head.
    fn top(&self, n: usize) -> impl ExactSizeIterator<Item = &'a City> + '_ {
        self.iter().take(n)
    }

    /// The city at 1-based position `n`, if any.
    fn get(&self, n: usize) -> Option<&'a City> {
        let offset = n.checked_sub(1)?;
        self.iter().nth(offset)
    }

    /// Build a list by appending `cities` in order.
    fn from_ranked<I>(cities: I) -> Self
    where
        I: IntoIterator<Item = &'a City>,
    {
        let mut list = Self::default();
        for city in cities {
            list.append(city);
        }
        list
    }
}

/// Selects which [`CityList`] implementation a session runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListVariant {
    #[default]
    Singly,
    Doubly,
}

impl fmt::Display for ListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListVariant::Singly => SinglyLinkedList::DEBUG_NAME,
            ListVariant::Doubly => DoublyLinkedList::DEBUG_NAME,
        };
        f.write_str(name)
    }
}
