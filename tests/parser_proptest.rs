//! Property-based tests for the recipe parser
//!
//! These tests ensure that parsing is total and that stripping markup only
//! ever removes markers and quantity blocks, never the words around them.

use cooklang_parser::parse;
use proptest::prelude::*;

/// Generate a lowercase word usable as a component name
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// Generate a line without comment openers or metadata markers
fn markup_line_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 @#~{}%./,!]{0,40}"
}

/// Generate text with no markers at all
fn plain_line_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z ,.!?']{0,40}"
}

/// A word optionally turned into an ingredient or cookware reference
fn marked_word_strategy() -> impl Strategy<Value = (String, String)> {
    (prop_oneof![Just(""), Just("@"), Just("#")], word_strategy())
        .prop_map(|(marker, word)| (marker.to_string(), word))
}

proptest! {
    #[test]
    fn test_parse_never_panics(source in any::<String>()) {
        let _ = parse(&source);
    }

    #[test]
    fn test_one_step_per_content_line(lines in prop::collection::vec(markup_line_strategy(), 0..10)) {
        let source = lines.join("\n");
        let expected = lines.iter().filter(|line| !line.trim().is_empty()).count();
        let doc = parse(&source);
        prop_assert_eq!(doc.steps.len(), expected);
        prop_assert!(doc.metadata.is_empty());
    }

    #[test]
    fn test_plain_text_is_verbatim(line in plain_line_strategy()) {
        let doc = parse(&line);
        prop_assert!(doc.ingredients.is_empty());
        prop_assert_eq!(doc.steps, vec![line.trim().to_string()]);
    }

    #[test]
    fn test_stripping_markers_keeps_every_word(words in prop::collection::vec(marked_word_strategy(), 1..12)) {
        let source = words
            .iter()
            .map(|(marker, word)| format!("{}{}", marker, word))
            .collect::<Vec<_>>()
            .join(" ");
        let expected = words
            .iter()
            .map(|(_, word)| word.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let doc = parse(&source);
        prop_assert_eq!(doc.steps.len(), 1);
        prop_assert_eq!(doc.steps[0].split_whitespace().count(), words.len());
        prop_assert_eq!(&doc.steps[0], &expected);
    }

    #[test]
    fn test_ingredients_keep_first_appearance_order(names in prop::collection::vec(word_strategy(), 1..10)) {
        let source = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("Add @{}{{{}%g}} now", name, i + 1))
            .collect::<Vec<_>>()
            .join("\n");

        let mut expected: Vec<&str> = Vec::new();
        for name in &names {
            if !expected.contains(&name.as_str()) {
                expected.push(name);
            }
        }

        let doc = parse(&source);
        let actual: Vec<&str> = doc.ingredients.iter().map(|i| i.name.as_str()).collect();
        prop_assert_eq!(actual, expected);
        let markup_removed = doc
            .steps
            .iter()
            .all(|step| !step.contains('{') && !step.contains('@'));
        prop_assert!(markup_removed);
    }
}
