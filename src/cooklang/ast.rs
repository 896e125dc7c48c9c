//! Output values of the parser
//!
//! Everything here is a plain immutable value: the parser builds a
//! [`Document`] once and hands it to the caller.

pub mod document;
pub mod quantity;

pub use document::{Cookware, Document, Ingredient};
pub use quantity::{Amount, Fraction, Quantity, DEFAULT_UNIT};
