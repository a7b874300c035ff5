//! Configuration for rout
//!
//!     Settings come from four layers, later ones winning:
//!
//!         1. `defaults/rout.default.toml`, embedded in the binary
//!         2. one TOML file (`--config`)
//!         3. `ROUT_*` environment variables, `__` between sections and keys
//!            (`ROUT_LEXER__CATALOG=legacy`, `ROUT_OUTPUT__FORMAT=json`)
//!         4. explicit values, usually command-line flags
//!
//!     [`Settings`] names the layers to use; [`Settings::load`] merges them with the `config`
//!     crate and deserializes the result into [`RoutConfig`].
//!
//! Keys
//!
//!     lexer.catalog    name of the catalog to tokenize with: `full`, `legacy` or a
//!                      catalog declared under `[[catalogs]]`
//!     lexer.recovery   `lenient` or `strict`
//!     output.format    a registered format name
//!     output.extras    include whitespace runs in the output
//!     catalogs         user catalogs; each has a `name` and `[[catalogs.rules]]` rows of
//!                      `kind`, `pattern`, `precedence` and an optional `literal` flag

use crate::rout::catalog::{Catalog, CatalogError, CatalogRegistry, Pattern, Rule};
use crate::rout::lexing::{RecoveryMode, Tokenizer};
use crate::rout::token::TokenKind;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_TOML: &str = include_str!("../../defaults/rout.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct RoutConfig {
    pub lexer: LexerConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub catalogs: Vec<CatalogConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexerConfig {
    pub catalog: String,
    pub recovery: RecoveryMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    #[serde(default)]
    pub extras: bool,
}

/// A catalog declared in a configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub name: String,
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub kind: TokenKind,
    pub pattern: String,
    pub precedence: i32,
    /// Match `pattern` verbatim instead of as a regular expression
    #[serde(default)]
    pub literal: bool,
}

impl RuleConfig {
    pub fn build(&self) -> Result<Rule, CatalogError> {
        let pattern = if self.literal {
            Pattern::literal(&self.pattern)?
        } else {
            Pattern::regex(&self.pattern)?
        };
        Ok(Rule::new(self.kind, pattern, self.precedence))
    }
}

impl CatalogConfig {
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        let rules = self
            .rules
            .iter()
            .map(RuleConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(self.name.clone(), rules)
    }
}

impl RoutConfig {
    /// The embedded defaults alone.
    pub fn defaults() -> Result<Self, ConfigError> {
        Settings::default().load()
    }

    /// The built-in catalogs plus every configured one. A configured catalog may shadow a
    /// built-in one by reusing its name.
    pub fn registry(&self) -> Result<CatalogRegistry, CatalogError> {
        let mut registry = CatalogRegistry::with_defaults();
        for catalog in &self.catalogs {
            registry.register(catalog.build()?);
        }
        Ok(registry)
    }

    /// A tokenizer for `lexer.catalog` and `lexer.recovery`.
    pub fn tokenizer(&self) -> Result<Tokenizer, CatalogError> {
        let registry = self.registry()?;
        let catalog = registry.resolve(&self.lexer.catalog)?;
        Ok(Tokenizer::new(catalog.clone(), self.lexer.recovery))
    }
}

/// The layers a [`RoutConfig`] is merged from. The embedded defaults are always included.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// A TOML file that must exist
    pub file: Option<PathBuf>,
    /// Read `ROUT_*` environment variables
    pub environment: bool,
    pub catalog: Option<String>,
    pub recovery: Option<RecoveryMode>,
    pub format: Option<String>,
    pub extras: Option<bool>,
}

impl Settings {
    pub fn load(&self) -> Result<RoutConfig, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));

        if let Some(path) = &self.file {
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
        }
        if self.environment {
            builder = builder.add_source(
                Environment::with_prefix("ROUT")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder
            .set_override_option("lexer.catalog", self.catalog.clone())?
            .set_override_option("lexer.recovery", self.recovery.map(|m| m.to_string()))?
            .set_override_option("output.format", self.format.clone())?
            .set_override_option("output.extras", self.extras)?
            .build()?
            .try_deserialize()
    }
}
