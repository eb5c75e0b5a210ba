//! # citylist
//!
//! Loads a CSV export of city records, ranks the most populous ones and keeps
//! them in a linked list that can be edited interactively.
//!
//! Two list implementations are provided (singly and doubly linked). Both sit
//! behind the [`CityList`] trait and behave identically for the same sequence
//! of operations. All list positions are **1-based**.
pub mod cities;

// Re-export the main types for convenience
pub use cities::{
    list::{CityList, DoublyLinkedList, ListVariant, SinglyLinkedList},
    session::{parse_position, Command, Flow, Input, Session, Verb},
    store::{top_k, CityStore},
    types::{
        error::{CityError, Result},
        models::{City, ColumnLayout, LoadOptions, MalformedRowPolicy},
    },
};
