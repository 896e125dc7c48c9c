//! Error types
//!
//! Parsing a document never fails. These errors describe why a single
//! quantity block was rejected; the scanner logs them and keeps the text.

use thiserror::Error;

/// Why the body of a `{...}` block is not a quantity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The amount is not an integer, decimal or `n/d` literal.
    #[error("invalid amount literal '{0}'")]
    InvalidAmount(String),

    /// A fraction with a zero denominator.
    #[error("zero denominator in '{0}'")]
    ZeroDenominator(String),

    /// The literal is well formed but does not fit the numeric type.
    #[error("amount '{0}' is out of range")]
    OutOfRange(String),
}
