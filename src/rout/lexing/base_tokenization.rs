//! Base tokenization for the rout lexer
//!
//! This module splits the source into whitespace runs (extras) and non-whitespace runs
//! using the logos lexer library. It is the first of the two passes: rules are only ever
//! evaluated inside a run, which is what keeps whitespace out of every token.
//!
//! This is NOT the tokenizer - a single run such as `abc::` still holds several tokens.
//! The engine carves runs into tokens.

use logos::Logos;

/// The two kinds of stretch a source is made of.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Whitespace, skipped between tokens
    #[regex(r"\s+")]
    Extra,

    /// Non-whitespace text, carved into tokens by the engine
    #[regex(r"\S+")]
    Run,
}
