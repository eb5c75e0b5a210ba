//! Foundational data structures, error types, and load options.

pub mod error;
pub mod models;
