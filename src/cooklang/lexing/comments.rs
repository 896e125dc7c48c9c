//! Comment stripping
//!
//! Runs over the whole source before lines are classified. Both comment
//! forms are matched by one leftmost-first pattern, so whichever opener
//! comes first wins: a `--` inside a block comment is swallowed by the
//! block, and a `[-` after a `--` is part of the line comment.
//!
//! An unterminated `[-` does not match the block form and is kept as text.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// `[- ... -]` (may span lines, non-nesting) or `--` up to end of line.
static COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[-.*?-\]|--[^\n]*").unwrap());

static LINE_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"--[^\n]*").unwrap());

const BLOCK_OPEN: &str = "[-";

/// Remove comments from `source`. Block comments are only removed when
/// `block_comments` is set.
pub fn strip_comments(source: &str, block_comments: bool) -> Cow<'_, str> {
    let pattern = if block_comments {
        &COMMENT_REGEX
    } else {
        &LINE_COMMENT_REGEX
    };
    let cleaned = pattern.replace_all(source, "");
    if block_comments && cleaned.contains(BLOCK_OPEN) {
        debug!("unterminated block comment kept as text");
    }
    cleaned
}
