//! Record store: loads cities from CSV and ranks them by population.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use super::format::row;
use super::types::error::{CityError, Result};
use super::types::models::{City, LoadOptions, MalformedRowPolicy};

/// Owns every city parsed from a source for the lifetime of the program.
///
/// Lists built from [`CityStore::top_k`] borrow from the store, so the store
/// must outlive them.
#[derive(Debug, Default)]
pub struct CityStore {
    cities: Vec<City>,
    skipped_rows: usize,
}

impl CityStore {
    /// Load cities from the CSV file at `path`.
    ///
    /// # Errors
    /// Returns [`CityError::Open`] if the file cannot be opened, otherwise
    /// the same errors as [`CityStore::from_reader`].
    pub fn open(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening city file: {}", path.display());
        let file = File::open(path).map_err(|source| CityError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), options)
    }

    /// Load cities from any buffered CSV source.
    ///
    /// The first line is the header and is skipped. Blank lines are ignored.
    /// Malformed rows are handled according to `options.on_malformed`.
    ///
    /// # Errors
    /// - [`CityError::MissingHeader`] if the source is empty
    /// - [`CityError::Parse`] for a malformed row under [`MalformedRowPolicy::Abort`]
    /// - [`CityError::Io`] if reading fails
    pub fn from_reader(mut reader: impl BufRead, options: &LoadOptions) -> Result<Self> {
        let mut buf = Vec::new();
        if !read_raw_line(&mut reader, &mut buf)? {
            return Err(CityError::MissingHeader);
        }
        debug!("Skipping header row: {}", String::from_utf8_lossy(&buf));

        let mut store = Self::default();
        // Header is line 1.
        let mut line_no = 1;
        while read_raw_line(&mut reader, &mut buf)? {
            line_no += 1;
            if buf.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            if options.max_rows.is_some_and(|max| store.cities.len() >= max) {
                info!("Row limit of {} reached at line {}", store.cities.len(), line_no);
                break;
            }

            let parsed = std::str::from_utf8(&buf)
                .map_err(|e| CityError::Parse {
                    line: line_no,
                    reason: format!("row is not valid UTF-8: {}", e),
                })
                .and_then(|line| row::parse_row(line, line_no, &options.columns));
            match parsed {
                Ok(city) => store.cities.push(city),
                Err(e) => match options.on_malformed {
                    MalformedRowPolicy::Abort => return Err(e),
                    MalformedRowPolicy::Skip => {
                        warn!("Skipping row: {}", e);
                        store.skipped_rows += 1;
                    }
                },
            }
        }

        info!(
            "Loaded {} cities ({} malformed rows skipped)",
            store.cities.len(),
            store.skipped_rows
        );
        Ok(store)
    }

    /// All loaded cities, in input order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of loaded cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of malformed rows dropped under [`MalformedRowPolicy::Skip`].
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// The `k` most populous cities. See [`top_k`].
    pub fn top_k(&self, k: usize) -> Result<Vec<&City>> {
        top_k(&self.cities, k)
    }
}

/// Read one raw line into `buf` without its `\n` / `\r\n` terminator.
///
/// Returns `false` at end of input. The bytes are left undecoded.
fn read_raw_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Select the `k` most populous cities, largest first.
///
/// The sort is stable: cities with equal population keep their input order.
///
/// # Errors
/// Returns [`CityError::InsufficientData`] if fewer than `k` cities exist.
pub fn top_k(cities: &[City], k: usize) -> Result<Vec<&City>> {
    if cities.len() < k {
        return Err(CityError::InsufficientData {
            requested: k,
            available: cities.len(),
        });
    }

    let mut ranked: Vec<&City> = cities.iter().collect();
    ranked.sort_by(|a, b| b.population.cmp(&a.population));
    ranked.truncate(k);

    debug!("Selected top {} of {} cities", k, cities.len());
    Ok(ranked)
}
