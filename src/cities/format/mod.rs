//! CSV parsing layer for city exports.
//!
//! - [`fields`]: Quote-aware field splitting and numeric normalization
//! - [`row`]: Decodes one data row into a [`City`](crate::City)

pub mod fields;
pub mod row;
