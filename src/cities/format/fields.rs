//! Field-level CSV utilities.
//!
//! City exports quote every field, escape embedded quotes by doubling them and
//! write populations with thousands separators (`"1,234,567"`). The helpers
//! here undo those quirks before a value is interpreted.

/// Split a single CSV line into its fields.
///
/// Quoted fields may contain commas. Inside a quoted field a doubled quote
/// (`""`) is unescaped to a single `"`. Unquoted fields are taken verbatim.
///
/// Returns a human-readable reason if the line is structurally invalid
/// (unterminated quote, or stray characters after a closing quote).
pub fn split_fields(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let mut field = String::new();

        if chars.peek() == Some(&'"') {
            chars.next();
            let mut closed = false;
            while let Some(c) = chars.next() {
                if c != '"' {
                    field.push(c);
                } else if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(format!("unterminated quoted field {}", fields.len()));
            }
            match chars.next() {
                None => {
                    fields.push(field);
                    return Ok(fields);
                }
                Some(',') => {}
                Some(c) => {
                    return Err(format!(
                        "unexpected '{}' after closing quote in field {}",
                        c,
                        fields.len()
                    ))
                }
            }
        } else {
            loop {
                match chars.next() {
                    None => {
                        fields.push(field);
                        return Ok(fields);
                    }
                    Some(',') => break,
                    Some(c) => field.push(c),
                }
            }
        }

        fields.push(field);
    }
}

/// Remove thousands separators and surrounding whitespace from a numeric field.
pub fn strip_thousands(raw: &str) -> String {
    raw.trim().chars().filter(|&c| c != ',').collect()
}

/// Parse a population value such as `8,804,190` into a number.
pub fn parse_population(raw: &str) -> Result<u64, String> {
    let digits = strip_thousands(raw);
    if digits.is_empty() {
        return Err("population field is empty".to_string());
    }
    digits
        .parse::<u64>()
        .map_err(|e| format!("invalid population {:?}: {}", raw, e))
}
