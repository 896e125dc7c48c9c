//! Lexing
//!
//! The lexical passes run before any structure is recognised:
//! 1. [`comments`] strips `--` and `[- -]` comments from the whole text.
//! 2. [`lines`] cuts the cleaned text into metadata and content units.
//! 3. [`tokens`] tokenizes a content line for the segment scanner.

pub mod comments;
pub mod lines;
pub mod tokens;

pub use comments::strip_comments;
pub use lines::{classify_line, split_units, LineType, Unit};
pub use tokens::{tokenize, Token};
