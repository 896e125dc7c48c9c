//! Line Classification and Grouping
//!
//! Cuts comment-free text into units. Each line is classified on its own;
//! content lines are then grouped according to the configured
//! [`StepGranularity`]. Blank lines never produce a unit.
use crate::cooklang::config::StepGranularity;

/// Prefix of a metadata line.
pub const METADATA_MARKER: &str = ">>";

/// Type of a single line after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Blank,
    /// Begins with `>>`.
    Metadata,
    Content,
}

/// A classified group of lines. Lines are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit<'a> {
    Metadata(&'a str),
    /// The lines making up one step, never empty.
    Step(Vec<&'a str>),
}

/// Determine the type of a line.
pub fn classify_line(line: &str) -> LineType {
    let line = line.trim();
    if line.is_empty() {
        LineType::Blank
    } else if line.starts_with(METADATA_MARKER) {
        LineType::Metadata
    } else {
        LineType::Content
    }
}

/// Group cleaned text into metadata and step units.
///
/// With [`StepGranularity::Line`] every content line is its own step. With
/// [`StepGranularity::Paragraph`] consecutive content lines are collected
/// until a blank line or a metadata line ends the paragraph.
pub fn split_units(text: &str, granularity: StepGranularity) -> Vec<Unit<'_>> {
    let mut units = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        match classify_line(trimmed) {
            LineType::Blank => flush_paragraph(&mut paragraph, &mut units),
            LineType::Metadata => {
                flush_paragraph(&mut paragraph, &mut units);
                units.push(Unit::Metadata(trimmed));
            }
            LineType::Content => match granularity {
                StepGranularity::Line => units.push(Unit::Step(vec![trimmed])),
                StepGranularity::Paragraph => paragraph.push(trimmed),
            },
        }
    }
    // Input may end without a trailing blank line
    flush_paragraph(&mut paragraph, &mut units);
    units
}

fn flush_paragraph<'a>(paragraph: &mut Vec<&'a str>, units: &mut Vec<Unit<'a>>) {
    if !paragraph.is_empty() {
        units.push(Unit::Step(std::mem::take(paragraph)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lines() {
        assert_eq!(classify_line("   "), LineType::Blank);
        assert_eq!(classify_line(">> time: 5"), LineType::Metadata);
        assert_eq!(classify_line("  >>servings"), LineType::Metadata);
        assert_eq!(classify_line("> quote"), LineType::Content);
        assert_eq!(classify_line("# heading"), LineType::Content);
    }

    #[test]
    fn test_line_granularity() {
        let units = split_units("first\nsecond\n\n>> a: b\n  third  ", StepGranularity::Line);
        assert_eq!(
            units,
            vec![
                Unit::Step(vec!["first"]),
                Unit::Step(vec!["second"]),
                Unit::Metadata(">> a: b"),
                Unit::Step(vec!["third"]),
            ]
        );
    }

    #[test]
    fn test_paragraph_granularity() {
        let units = split_units(
            "first\nsecond\n\n\nthird\n>> a: b\nfourth",
            StepGranularity::Paragraph,
        );
        assert_eq!(
            units,
            vec![
                Unit::Step(vec!["first", "second"]),
                Unit::Step(vec!["third"]),
                Unit::Metadata(">> a: b"),
                Unit::Step(vec!["fourth"]),
            ]
        );
    }

    #[test]
    fn test_blank_text_has_no_units() {
        assert!(split_units("", StepGranularity::Line).is_empty());
        assert!(split_units(" \n\t\n", StepGranularity::Paragraph).is_empty());
    }
}
