//! Main module for cooklang library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod lexing;
pub mod parser;
pub mod parsing;

pub use ast::{Amount, Cookware, Document, Fraction, Ingredient, Quantity};
pub use config::{OptionsLoader, ParseOptions, StepGranularity};
pub use error::QuantityError;
pub use parser::{parse, RecipeParser};
