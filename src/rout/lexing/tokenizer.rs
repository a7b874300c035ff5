//! A configured tokenizer: a catalog plus a recovery policy.

use super::common::{LexError, RecoveryMode};
use super::{lexemes, lexemes_strict, tokenize_strict, tokenize_with};
use crate::rout::catalog::Catalog;
use crate::rout::token::{Lexeme, Token};

#[derive(Debug, Clone)]
pub struct Tokenizer {
    catalog: Catalog,
    recovery: RecoveryMode,
}

impl Tokenizer {
    pub fn new(catalog: Catalog, recovery: RecoveryMode) -> Self {
        Tokenizer { catalog, recovery }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recovery(&self) -> RecoveryMode {
        self.recovery
    }

    /// Tokenize `source`. Only fails in strict mode.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let result = match self.recovery {
            RecoveryMode::Lenient => Ok(tokenize_with(&self.catalog, source)),
            RecoveryMode::Strict => tokenize_strict(&self.catalog, source),
        };

        match &result {
            Ok(tokens) => tracing::debug!(
                catalog = self.catalog.name(),
                recovery = %self.recovery,
                bytes = source.len(),
                tokens = tokens.len(),
                "tokenized"
            ),
            Err(err) => tracing::debug!(
                catalog = self.catalog.name(),
                recovery = %self.recovery,
                error = %err,
                "tokenization failed"
            ),
        }

        result
    }

    /// Tokens and the whitespace between them. Only fails in strict mode.
    pub fn lexemes(&self, source: &str) -> Result<Vec<Lexeme>, LexError> {
        match self.recovery {
            RecoveryMode::Lenient => Ok(lexemes(&self.catalog, source)),
            RecoveryMode::Strict => lexemes_strict(&self.catalog, source),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(Catalog::standard().clone(), RecoveryMode::Lenient)
    }
}
