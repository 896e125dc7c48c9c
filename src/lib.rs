//! # cooklang-parser
//!
//! A parser for the cooklang recipe markup format.
//!
//! File Layout
//!
//! The library follows the shape of the parse itself:
//! src/cooklang
//!   ├── ast        Document, ingredients, quantities (the output values)
//!   ├── lexing     Comment stripping, logos tokens and line classification
//!   ├── parsing    Metadata, quantity grammar, segment scanner, aggregation
//!   └── parser     The RecipeParser entry point tying the passes together
//!
//! Most callers only need [`parse`]:
//!
//! ```text
//! let doc = cooklang_parser::parse("Place @sugar{42%grams} in the pan");
//! assert_eq!(doc.steps, vec!["Place sugar in the pan"]);
//! ```

#![allow(rustdoc::invalid_html_tags)]

pub mod cooklang;

pub use cooklang::{
    parse, Amount, Cookware, Document, Fraction, Ingredient, ParseOptions, Quantity,
    RecipeParser, StepGranularity,
};
