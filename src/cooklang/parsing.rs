//! Parsing
//!
//! Turns classified units into document parts:
//! - [`metadata`]: `>> key: value` lines
//! - [`segments`]: the forward scanner that splits a content line into
//!   plain text and components, and renders the step text
//! - [`quantity`]: the grammar for `{amount%unit}` blocks
//! - [`aggregation`]: folds component references into the document lists

pub mod aggregation;
pub mod metadata;
pub mod quantity;
pub mod segments;

pub use aggregation::{CookwareList, IngredientList};
pub use metadata::parse_metadata_line;
pub use quantity::{parse_amount, parse_quantity};
pub use segments::{render_step, scan_line, IngredientRef, Segment};
