//! Document element
//!
//! The document is the result of a parse: metadata, the ingredients and
//! cookware referenced by the steps, and the steps themselves with all
//! markup stripped.

use serde::Serialize;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

use super::quantity::{Amount, Quantity};

/// A parsed recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub metadata: BTreeMap<String, String>,
    pub ingredients: Vec<Ingredient>,
    pub cookware: Vec<Cookware>,
    pub steps: Vec<String>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
            && self.ingredients.is_empty()
            && self.cookware.is_empty()
            && self.steps.is_empty()
    }

    /// Returns the first ingredient with the given name.
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.name == name)
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// Parsing never fails; unrecognized markup is kept as text.
impl FromStr for Document {
    type Err = Infallible;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Ok(crate::cooklang::parser::parse(source))
    }
}

/// An ingredient referenced with `@`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: Quantity,
}

impl Ingredient {
    /// An ingredient with the default quantity (`1 units`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Quantity::default(),
        }
    }

    pub fn with_quantity(name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn amount(&self) -> Amount {
        self.quantity.amount
    }

    pub fn unit(&self) -> &str {
        &self.quantity.unit
    }
}

/// A piece of equipment referenced with `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cookware {
    pub name: String,
}

impl Cookware {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_empty() {
        assert!(Document::default().is_empty());
    }

    #[test]
    fn ingredient_defaults() {
        let ingredient = Ingredient::new("stuff");
        assert_eq!(ingredient.amount(), Amount::Integer(1));
        assert_eq!(ingredient.unit(), "units");
    }

    #[test]
    fn from_str_parses() {
        let doc: Document = "Add @salt".parse().unwrap();
        assert_eq!(doc.ingredient("salt"), Some(&Ingredient::new("salt")));
        assert_eq!(doc.steps, vec!["Add salt"]);
    }
}
