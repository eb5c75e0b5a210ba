//! Data structures shared by the store, the lists and the session.

use std::fmt;

/// A single city parsed from one CSV row.
///
/// Cities are immutable once parsed. They are owned by the
/// [`CityStore`](crate::CityStore) and lists only borrow them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    /// Short region code, e.g. a state abbreviation.
    pub region: String,
    pub population: u64,
}

impl City {
    pub fn new(name: impl Into<String>, region: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            population,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, population {}", self.name, self.region, self.population)
    }
}

/// Zero-based field indices of the columns a row is decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub region: usize,
    pub population: usize,
}

impl ColumnLayout {
    /// Minimum number of fields a row must carry for this layout.
    pub fn min_fields(&self) -> usize {
        self.name.max(self.region).max(self.population) + 1
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name: 0,
            region: 2,
            population: 8,
        }
    }
}

/// What to do with a data row that cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedRowPolicy {
    /// Log a warning and drop the row.
    #[default]
    Skip,
    /// Stop loading and return the parse error.
    Abort,
}

/// Options controlling how a CSV source is loaded.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub columns: ColumnLayout,
    /// Maximum number of data rows to accept, `None` for unlimited.
    pub max_rows: Option<usize>,
    pub on_malformed: MalformedRowPolicy,
}

impl LoadOptions {
    /// Default cap on accepted data rows.
    pub const DEFAULT_MAX_ROWS: usize = 1000;
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            columns: ColumnLayout::default(),
            max_rows: Some(Self::DEFAULT_MAX_ROWS),
            on_malformed: MalformedRowPolicy::Skip,
        }
    }
}
