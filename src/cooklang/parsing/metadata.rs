//! Metadata lines
//!
//! `>> key : value`, with any amount of whitespace around the key and the
//! colon. The key stops at the first colon; the value may contain more.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static METADATA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*>>(?P<key>[^:]*):(?P<value>.*)$").unwrap());

/// Extract the trimmed key and value of a metadata line.
///
/// Returns `None` for lines without a colon or with an empty key; such lines
/// are dropped by the parser.
pub fn parse_metadata_line(line: &str) -> Option<(String, String)> {
    let Some(captures) = METADATA_REGEX.captures(line) else {
        debug!("metadata line without separator dropped: {:?}", line);
        return None;
    };
    let key = captures["key"].trim();
    if key.is_empty() {
        debug!("metadata line with empty key dropped: {:?}", line);
        return None;
    }
    let value = captures["value"].trim();
    Some((key.to_string(), value.to_string()))
}
