//! Configuration loading for bf.
//!
//! `defaults/bf.default.toml` is embedded into the library so that the documented
//! defaults and runtime behavior stay in sync. Callers layer user files and single
//! key overrides on top via [`Loader`] before deserializing into [`BfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/bf.default.toml");

/// Top-level configuration consumed by bf applications.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BfConfig {
    pub generation: GenerationConfig,
}

/// Knobs of the built-in random strategy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationConfig {
    /// Fixed RNG seed; `None` seeds from system entropy
    #[serde(default)]
    pub seed: Option<u64>,
    pub max_depth: usize,
    pub max_size: usize,
    pub leaf_probability: f64,
    pub alias_probability: f64,
    #[serde(default)]
    pub no_alias: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: 8,
            max_size: 5,
            leaf_probability: 0.1,
            alias_probability: 0.0,
            no_alias: Vec::new(),
        }
    }
}

/// Builds a [`BfConfig`] from the embedded defaults plus any user sources.
///
/// Later sources win: a `bf.toml` in the working directory overrides the defaults,
/// and single keys set from the command line override both.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only `defaults/bf.default.toml`
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist, e.g. one passed with `--config`
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that may be absent, e.g. a project-local `bf.toml`
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key such as `generation.seed` or `generation.max_depth`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<BfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The generation settings bf ships with
pub fn load_defaults() -> Result<BfConfig, ConfigError> {
    Loader::new().build()
}
