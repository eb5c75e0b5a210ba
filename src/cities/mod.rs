//! Core city ranking and list editing module.
//!
//! # Module Organization
//!
//! - [`types`]: Error type, the [`City`](types::models::City) record and load options
//! - [`format`]: CSV field splitting and row decoding
//! - [`store`]: Loads records and selects the top K by population
//! - [`list`]: Arena-backed singly and doubly linked lists
//! - [`session`]: Line-oriented command dispatcher driving a list
//!
//! ```text
//! CSV file ──► format::row ──► CityStore ──► top_k ──► CityList
//!                                                          ▲
//!                                             stdin ──► Session
//! ```

pub mod format;
pub mod list;
pub mod session;
pub mod store;
pub mod types;
