//! Lexer
//!
//!     This module turns Rout source text into a flat token stream. There is no parsing
//!     stage after it: the grammar is a repeated choice over token kinds, so the token stream
//!     is the whole result.
//!
//! The Lexing Passes
//!
//!     1. Extras pass using the logos lexer. See [base_tokenization](base_tokenization).
//!        The source is split into whitespace runs and non-whitespace runs.
//!
//!     2. Disambiguation. See [engine](engine).
//!        Each non-whitespace run is carved into tokens by evaluating every catalog rule at
//!        the cursor and keeping the longest match, then the highest precedence, then the
//!        first declared rule.
//!
//! Coverage
//!
//!     Every byte of the source ends up in exactly one token or one whitespace run. With the
//!     full catalog that holds by construction, since `Normal` matches any non-whitespace
//!     character. Other catalogs can leave characters unmatched; those are emitted as
//!     one-character `Normal` tokens, or reported by the strict entry points as
//!     [`LexError::Unmatched`] with no partial output.
//!
//! Entry Points
//!
//!     [`tokenize`] is what most callers want. [`tokenize_with`] and [`tokenize_strict`]
//!     take an explicit catalog, [`lexemes`] and [`lexemes_strict`] keep the whitespace, and
//!     [`Lexer`] is the lazy iterator all of them are built on.

pub mod base_tokenization;
pub mod common;
pub mod engine;
pub mod tokenizer;

pub use common::{LexError, RecoveryMode};
pub use engine::{candidates, select, Candidate, Lexer};
pub use tokenizer::Tokenizer;

use crate::rout::catalog::Catalog;
use crate::rout::token::{Lexeme, Token};
use engine::Step;

/// Tokenize `source` with the full catalog.
///
/// Never fails: unmatched characters (which the full catalog cannot produce) would become
/// one-character `Normal` tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Tokenize `source` with `catalog`, recovering from unmatched characters.
pub fn tokenize_with(catalog: &Catalog, source: &str) -> Vec<Token> {
    Lexer::with_catalog(catalog, source).collect()
}

/// Tokenize `source` with `catalog`, failing on the first character no rule matches.
pub fn tokenize_strict(catalog: &Catalog, source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::with_catalog(catalog, source);
    let mut tokens = Vec::new();

    while let Some(step) = lexer.step() {
        match step {
            Step::Matched(token) => tokens.push(token),
            Step::Recovered(token) => return Err(LexError::Unmatched { offset: token.start }),
            Step::Extra(_) => {}
        }
    }

    Ok(tokens)
}

/// Tokens and skipped whitespace, in source order.
pub fn lexemes(catalog: &Catalog, source: &str) -> Vec<Lexeme> {
    let mut lexer = Lexer::with_catalog(catalog, source);
    std::iter::from_fn(|| lexer.next_lexeme()).collect()
}

/// Like [`lexemes`], failing on the first character no rule matches.
pub fn lexemes_strict(catalog: &Catalog, source: &str) -> Result<Vec<Lexeme>, LexError> {
    let mut lexer = Lexer::with_catalog(catalog, source);
    let mut lexemes = Vec::new();

    while let Some(step) = lexer.step() {
        match step {
            Step::Matched(token) => lexemes.push(Lexeme::Token(token)),
            Step::Recovered(token) => return Err(LexError::Unmatched { offset: token.start }),
            Step::Extra(range) => lexemes.push(Lexeme::extra(range.start, &source[range])),
        }
    }

    Ok(lexemes)
}
