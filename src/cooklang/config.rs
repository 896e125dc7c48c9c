//! Parser options and their loader.
//!
//! `defaults/cooklang.default.toml` is embedded so that the documented
//! defaults and runtime behavior stay in sync. Callers layer user files,
//! `COOKLANG__*` environment variables and explicit overrides on top via
//! [`OptionsLoader`] before deserializing into [`ParseOptions`].

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/cooklang.default.toml");

/// How cleaned text is cut into steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepGranularity {
    /// Every non-blank line is one step.
    #[default]
    Line,
    /// Consecutive content lines form one step, split on blank lines.
    Paragraph,
}

/// Knobs for [`RecipeParser`](crate::cooklang::RecipeParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub granularity: StepGranularity,
    /// Strip `[- ... -]` comments in addition to `--` comments.
    pub block_comments: bool,
    /// Fold repeated references to one ingredient into a single entry.
    pub aggregate_ingredients: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            granularity: StepGranularity::Line,
            block_comments: true,
            aggregate_ingredients: true,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct OptionsLoader {
    builder: ConfigBuilder<DefaultState>,
}

impl OptionsLoader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `COOKLANG__<KEY>` environment variables, e.g.
    /// `COOKLANG__GRANULARITY=paragraph`.
    pub fn with_env(mut self) -> Self {
        self.builder = self.builder.add_source(
            Environment::with_prefix("COOKLANG")
                .separator("__")
                .try_parsing(true),
        );
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting options.
    pub fn build(self) -> Result<ParseOptions, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for OptionsLoader {
    fn default() -> Self {
        Self::new()
    }
}
