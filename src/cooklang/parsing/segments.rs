//! Segment scanner
//!
//! A single forward scan over the tokens of a content line. At each marker
//! the scanner tries the component forms in order and falls back to plain
//! text when none applies:
//!
//! ```text
//! @name words{amount%unit}   ingredient, braced form
//! @word                      ingredient, single-word form
//! #name words{...}           cookware, braced form (body discarded)
//! #word                      cookware, single-word form
//! ~{content}                 timer
//! ```
//!
//! Braced names run from the marker up to `{` and may hold punctuation, but
//! not another marker or a `}`. Single-word names are letters, digits and
//! underscores only. Either way the name starts right after the marker, so
//! `@ text` and `# heading` stay text.

use log::{debug, trace};
use std::ops::Range;

use crate::cooklang::ast::Quantity;
use crate::cooklang::lexing::tokens::{tokenize, Token};
use crate::cooklang::parsing::quantity::parse_quantity;

/// Type alias for token with span
type TokenSpan = (Token, Range<usize>);

/// An ingredient reference as written in a step.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRef {
    pub name: String,
    /// `None` for `@word` and `@name{}`; the quantity was left unspecified.
    pub quantity: Option<Quantity>,
}

/// Piece of a content line.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    PlainText(String),
    Ingredient(IngredientRef),
    Cookware(String),
    Timer(String),
}

impl Segment {
    /// Text this segment contributes to the rendered step.
    pub fn display_text(&self) -> &str {
        match self {
            Segment::PlainText(text) => text,
            Segment::Ingredient(ingredient) => &ingredient.name,
            Segment::Cookware(name) => name,
            Segment::Timer(content) => content,
        }
    }
}

/// Scan one content line into segments. Adjacent plain text is merged.
pub fn scan_line(line: &str) -> Vec<Segment> {
    let tokens = tokenize(line);
    let mut segments = SegmentBuffer::default();

    let mut i = 0;
    while i < tokens.len() {
        let (token, span) = &tokens[i];
        let component = match token {
            Token::IngredientMarker => scan_ingredient(line, &tokens, i),
            Token::CookwareMarker => scan_cookware(line, &tokens, i),
            Token::TimerMarker => scan_timer(line, &tokens, i),
            _ => None,
        };
        match component {
            Some((segment, next)) => {
                segments.push(segment);
                i = next;
            }
            None => {
                segments.push_text(&line[span.clone()]);
                i += 1;
            }
        }
    }

    segments.finish()
}

/// Concatenate the display text of `segments` into a step.
pub fn render_step(segments: &[Segment]) -> String {
    let text: String = segments.iter().map(Segment::display_text).collect();
    text.trim().to_string()
}

/// `@`: braced form with a valid quantity, else single-word form.
fn scan_ingredient(source: &str, tokens: &[TokenSpan], marker: usize) -> Option<(Segment, usize)> {
    if let Some(braced) = braced_component(source, tokens, marker) {
        let body = &source[braced.body.clone()];
        let quantity = if body.trim().is_empty() {
            Some(None)
        } else {
            match parse_quantity(body) {
                Ok(quantity) => Some(Some(quantity)),
                Err(err) => {
                    debug!("quantity block {{{}}} ignored: {}", body, err);
                    None
                }
            }
        };
        if let Some(quantity) = quantity {
            let name = source[braced.name].trim().to_string();
            trace!("ingredient {:?} {:?}", name, quantity);
            return Some((
                Segment::Ingredient(IngredientRef { name, quantity }),
                braced.next,
            ));
        }
    }

    let (name, next) = single_word(source, tokens, marker)?;
    Some((
        Segment::Ingredient(IngredientRef {
            name,
            quantity: None,
        }),
        next,
    ))
}

/// `#`: the brace body carries nothing for cookware and is dropped.
fn scan_cookware(source: &str, tokens: &[TokenSpan], marker: usize) -> Option<(Segment, usize)> {
    if let Some(braced) = braced_component(source, tokens, marker) {
        let name = source[braced.name].trim().to_string();
        return Some((Segment::Cookware(name), braced.next));
    }
    let (name, next) = single_word(source, tokens, marker)?;
    Some((Segment::Cookware(name), next))
}

/// `~{content}` with non-blank content.
fn scan_timer(source: &str, tokens: &[TokenSpan], marker: usize) -> Option<(Segment, usize)> {
    let open = marker + 1;
    if !matches!(tokens.get(open), Some((Token::OpenBrace, _))) {
        return None;
    }
    let close = closing_brace(tokens, open)?;
    let content = source[tokens[open].1.end..tokens[close].1.start].trim();
    if content.is_empty() {
        return None;
    }
    Some((Segment::Timer(content.to_string()), close + 1))
}

/// Byte ranges of a `marker name{body}` component.
struct Braced {
    name: Range<usize>,
    body: Range<usize>,
    /// Index of the first token after the closing brace.
    next: usize,
}

/// The name may hold any token but a marker or brace, and must start
/// right after the marker.
fn braced_component(source: &str, tokens: &[TokenSpan], marker: usize) -> Option<Braced> {
    let first = marker + 1;
    if !matches!(tokens.get(first), Some((Token::Word | Token::Symbol, _))) {
        return None;
    }

    let mut open = first;
    loop {
        match tokens.get(open) {
            Some((Token::OpenBrace, _)) => break,
            Some((token, _)) if token.is_marker() || *token == Token::CloseBrace => return None,
            Some(_) => open += 1,
            None => return None,
        }
    }
    let close = closing_brace(tokens, open)?;

    let name = tokens[first].1.start..tokens[open].1.start;
    if source[name.clone()].trim().is_empty() {
        return None;
    }
    Some(Braced {
        name,
        body: tokens[open].1.end..tokens[close].1.start,
        next: close + 1,
    })
}

/// Index of the `}` closing the brace at `open`. Braces do not nest.
fn closing_brace(tokens: &[TokenSpan], open: usize) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(open + 1)
        .find(|(_, (token, _))| token.is_brace())
        .and_then(|(idx, (token, _))| (*token == Token::CloseBrace).then_some(idx))
}

fn single_word(source: &str, tokens: &[TokenSpan], marker: usize) -> Option<(String, usize)> {
    match tokens.get(marker + 1) {
        Some((Token::Word, span)) => Some((source[span.clone()].to_string(), marker + 2)),
        _ => None,
    }
}

/// Collects segments, merging consecutive plain text.
#[derive(Default)]
struct SegmentBuffer {
    buffer: String,
    segments: Vec<Segment>,
}

impl SegmentBuffer {
    fn push_text(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        self.segments.push(Segment::PlainText(text));
    }

    fn push(&mut self, segment: Segment) {
        self.flush_buffer();
        self.segments.push(segment);
    }

    fn finish(mut self) -> Vec<Segment> {
        self.flush_buffer();
        self.segments
    }
}
