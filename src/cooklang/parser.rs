//! Recipe parser
//!
//! Ties the passes together:
//!
//! ```text
//! source ─ strip_comments ─ split_units ─┬─ Metadata ─ parse_metadata_line ─┐
//!                                        └─ Step ───── scan_line ───────────┴─ Document
//! ```
//!
//! Every pass is a pure function of its input and the parser holds nothing
//! but its options, so one parser can be shared between threads.

use log::trace;

use crate::cooklang::ast::Document;
use crate::cooklang::config::ParseOptions;
use crate::cooklang::lexing::{split_units, strip_comments, Unit};
use crate::cooklang::parsing::{
    parse_metadata_line, render_step, scan_line, CookwareList, IngredientList, Segment,
};

/// Parse `source` with the default options.
pub fn parse(source: &str) -> Document {
    RecipeParser::default().parse(source)
}

/// A configured parser. Cheap to copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeParser {
    options: ParseOptions,
}

impl RecipeParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a recipe. Never fails: unrecognized markup stays in the steps.
    pub fn parse(&self, source: &str) -> Document {
        let cleaned = strip_comments(source, self.options.block_comments);
        let units = split_units(&cleaned, self.options.granularity);

        let mut document = Document::default();
        let mut ingredients = IngredientList::new(self.options.aggregate_ingredients);
        let mut cookware = CookwareList::new(self.options.aggregate_ingredients);

        for unit in units {
            match unit {
                Unit::Metadata(line) => {
                    if let Some((key, value)) = parse_metadata_line(line) {
                        document.metadata.insert(key, value);
                    }
                }
                Unit::Step(lines) => {
                    let rendered: Vec<String> = lines
                        .into_iter()
                        .map(|line| {
                            let segments = scan_line(line);
                            collect_components(&segments, &mut ingredients, &mut cookware);
                            render_step(&segments)
                        })
                        .collect();
                    document.steps.push(rendered.join(" "));
                }
            }
        }

        document.ingredients = ingredients.into_ingredients();
        document.cookware = cookware.into_cookware();
        trace!(
            "parsed {} metadata entries, {} ingredients, {} cookware, {} steps",
            document.metadata.len(),
            document.ingredients.len(),
            document.cookware.len(),
            document.steps.len()
        );
        document
    }
}

fn collect_components(
    segments: &[Segment],
    ingredients: &mut IngredientList,
    cookware: &mut CookwareList,
) {
    for segment in segments {
        match segment {
            Segment::Ingredient(reference) => ingredients.add(reference.clone()),
            Segment::Cookware(name) => cookware.add(name.clone()),
            Segment::PlainText(_) | Segment::Timer(_) => {}
        }
    }
}
