//! Folding component references into document lists
//!
//! With aggregation enabled, an ingredient referenced several times ends up
//! as one entry at the position of its first reference:
//! - a reference without a quantity adds nothing to an existing entry
//! - an explicit quantity sums into the entry with the same unit
//! - an explicit quantity replaces an entry that only has the default
//! - an explicit quantity in a new unit opens a second entry
//!
//! Without aggregation every reference is its own entry.

use crate::cooklang::ast::{Cookware, Ingredient, Quantity};
use crate::cooklang::parsing::segments::IngredientRef;

struct Entry {
    ingredient: Ingredient,
    /// The quantity was written out rather than defaulted.
    explicit: bool,
}

/// Ingredients in first-reference order.
pub struct IngredientList {
    aggregate: bool,
    entries: Vec<Entry>,
}

impl IngredientList {
    pub fn new(aggregate: bool) -> Self {
        Self {
            aggregate,
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, reference: IngredientRef) {
        let IngredientRef { name, quantity } = reference;
        let explicit = quantity.is_some();
        if !self.aggregate {
            self.push(name, quantity.unwrap_or_default(), explicit);
            return;
        }

        let Some(quantity) = quantity else {
            if !self.entries.iter().any(|entry| entry.ingredient.name == name) {
                self.push(name, Default::default(), false);
            }
            return;
        };

        let same_unit = self.entries.iter().position(|entry| {
            entry.explicit
                && entry.ingredient.name == name
                && entry.ingredient.quantity.unit == quantity.unit
        });
        if let Some(idx) = same_unit {
            let existing = &mut self.entries[idx].ingredient.quantity;
            existing.amount = existing.amount + quantity.amount;
            return;
        }

        let implicit = self
            .entries
            .iter()
            .position(|entry| !entry.explicit && entry.ingredient.name == name);
        match implicit {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.ingredient.quantity = quantity;
                entry.explicit = true;
            }
            None => self.push(name, quantity, true),
        }
    }

    pub fn into_ingredients(self) -> Vec<Ingredient> {
        self.entries.into_iter().map(|entry| entry.ingredient).collect()
    }

    fn push(&mut self, name: String, quantity: Quantity, explicit: bool) {
        self.entries.push(Entry {
            ingredient: Ingredient::with_quantity(name, quantity),
            explicit,
        });
    }
}

/// Cookware in first-reference order, deduplicated by name when
/// aggregating.
pub struct CookwareList {
    aggregate: bool,
    items: Vec<Cookware>,
}

impl CookwareList {
    pub fn new(aggregate: bool) -> Self {
        Self {
            aggregate,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, name: String) {
        if self.aggregate && self.items.iter().any(|item| item.name == name) {
            return;
        }
        self.items.push(Cookware::new(name));
    }

    pub fn into_cookware(self) -> Vec<Cookware> {
        self.items
    }
}
