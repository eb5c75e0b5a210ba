//! Data row decoding.

use log::trace;

use super::fields::{parse_population, split_fields};
use crate::cities::types::error::{CityError, Result};
use crate::cities::types::models::{City, ColumnLayout};

/// Decode one data row into a [`City`].
///
/// `line_no` is the 1-based line number in the source, used for error reports.
///
/// # Errors
/// Returns [`CityError::Parse`] if:
/// - The line is not valid CSV (unterminated or misplaced quotes)
/// - The row has fewer fields than `columns` requires
/// - The population field is empty or not a non-negative integer
pub fn parse_row(line: &str, line_no: usize, columns: &ColumnLayout) -> Result<City> {
    let malformed = |reason: String| CityError::Parse {
        line: line_no,
        reason,
    };

    let fields = split_fields(line).map_err(malformed)?;

    let required = columns.min_fields();
    if fields.len() < required {
        return Err(malformed(format!(
            "expected at least {} fields, found {}",
            required,
            fields.len()
        )));
    }

    let population = parse_population(&fields[columns.population]).map_err(malformed)?;
    let name = fields[columns.name].trim().to_string();
    let region = fields[columns.region].trim().to_string();

    trace!("Line {}: {} {} ({})", line_no, name, region, population);

    Ok(City {
        name,
        region,
        population,
    })
}
