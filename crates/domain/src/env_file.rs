//! `.env` file format.
//!
//! Encoding writes one `KEY=VALUE` line per variable, joined with `\n` and
//! without a trailing newline. Nothing is escaped or quoted.
//!
//! Decoding accepts the common dialect:
//!
//! ```text
//! # comment
//! export DATABASE_URL=postgres://localhost/app
//! GREETING="hello\nworld"
//! RAW='no $expansion here'
//! ```
//!
//! Everything after the first `=` of an unquoted line is the value, spaces
//! and `#` included, so any map whose keys and values hold no newline
//! decodes back to itself (values that start with a quote excepted).
//! Lines without `=` or with an invalid name are skipped, never an error.
//! `$VAR` references are kept literally.

use crate::value_objects::EnvironmentMap;

const BOM: char = '\u{feff}';

/// Encode `environment` as `.env` bytes, in key order.
///
/// An empty map encodes to an empty byte vector.
pub fn encode(environment: &EnvironmentMap) -> Vec<u8> {
    environment
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
        .into_bytes()
}

/// Decode `.env` bytes into an environment map.
///
/// Invalid UTF-8 is replaced rather than rejected. When a key repeats,
/// the last occurrence wins.
pub fn decode(bytes: &[u8]) -> EnvironmentMap {
    let text = String::from_utf8_lossy(bytes);
    let text = text.strip_prefix(BOM).unwrap_or(&text);

    let mut environment = EnvironmentMap::new();
    for line in text.split('\n') {
        if let Some((key, value)) = parse_line(line) {
            // parse_line only yields keys that pass validation
            let _ = environment.insert(key, value);
        }
    }
    environment
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let statement = line.trim_start();
    if statement.is_empty() || statement.starts_with('#') {
        return None;
    }

    let statement = statement
        .strip_prefix("export ")
        .map(str::trim_start)
        .unwrap_or(statement);

    // Keys never contain whitespace, so trimming the key loses nothing.
    let (raw_key, raw_value) = statement.split_once('=')?;
    let key = raw_key.trim();
    EnvironmentMap::validate_key(key).ok()?;

    Some((key.to_string(), parse_value(raw_value)))
}

fn parse_value(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix('"') {
        if let Some(value) = parse_double_quoted(rest) {
            return value;
        }
    } else if let Some(rest) = raw.strip_prefix('\'') {
        if let Some(end) = rest.find('\'') {
            return rest[..end].to_string();
        }
    }
    raw.to_string()
}

/// Contents of a double-quoted value up to the closing quote, with escapes
/// expanded. `None` if the quote is never closed.
fn parse_double_quoted(rest: &str) -> Option<String> {
    let mut value = String::with_capacity(rest.len());
    let mut chars = rest.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(value),
            '\\' => match chars.next()? {
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                other @ ('"' | '\\') => value.push(other),
                other => {
                    value.push('\\');
                    value.push(other);
                }
            },
            other => value.push(other),
        }
    }
    None
}
