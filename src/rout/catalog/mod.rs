//! Token Catalog
//!
//!     A catalog is the ordered list of rules the lexer consults at every position. Each rule
//!     pairs a token kind with a compiled pattern and a precedence. Catalogs are values: the
//!     lexer borrows whichever one it is handed, so the two grammars below, or one read from
//!     a configuration file, can be swapped without touching the engine.
//!
//! Built-in Catalogs
//!
//!     full    The production grammar. Nine kinds over five precedence tiers, with
//!             punctuation, punctuated words and digit-letter runs split out of `Normal`.
//!             See [standard](standard) for the table.
//!
//!     legacy  The earlier, reduced grammar. Six kinds over four tiers; everything that is
//!             not a number, boolean or infinity is `Normal`, and `Normal` may not start with
//!             a digit or `-`.
//!
//! Declaration Order
//!
//!     Order only matters as the last tie-break: when two rules match the same length at the
//!     same precedence, the one declared first wins. The built-in catalogs have no such ties,
//!     but injected catalogs may rely on it.

pub mod pattern;
pub mod registry;
pub mod rule;
pub mod standard;

pub use pattern::Pattern;
pub use registry::CatalogRegistry;
pub use rule::Rule;

use crate::rout::token::TokenKind;
use thiserror::Error;

/// Errors raised while building or looking up catalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_automata::dfa::dense::BuildError,
    },
    #[error("catalog '{0}' has no rules")]
    Empty(String),
    #[error("catalog '{0}' not found")]
    NotFound(String),
}

/// An ordered, immutable list of rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    name: String,
    rules: Vec<Rule>,
}

impl Catalog {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Result<Self, CatalogError> {
        let name = name.into();
        if rules.is_empty() {
            return Err(CatalogError::Empty(name));
        }
        tracing::debug!(catalog = %name, rules = rules.len(), "catalog built");
        Ok(Catalog { name, rules })
    }

    /// Build a catalog from `(kind, regex, precedence)` rows, in declaration order.
    pub fn from_table(
        name: impl Into<String>,
        table: &[(TokenKind, &str, i32)],
    ) -> Result<Self, CatalogError> {
        let rules = table
            .iter()
            .map(|&(kind, source, precedence)| -> Result<Rule, CatalogError> {
                Ok(Rule::new(kind, Pattern::regex(source)?, precedence))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(name, rules)
    }

    /// The full grammar, built once per process.
    pub fn standard() -> &'static Catalog {
        &standard::FULL
    }

    /// The reduced legacy grammar, built once per process.
    pub fn legacy() -> &'static Catalog {
        &standard::LEGACY
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The distinct kinds this catalog can produce, in first-declared order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        let mut kinds: Vec<TokenKind> = Vec::new();
        for rule in &self.rules {
            if !kinds.contains(&rule.kind()) {
                kinds.push(rule.kind());
            }
        }
        kinds
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
