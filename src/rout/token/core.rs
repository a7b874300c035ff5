//! Tokens and lexemes
//!
//!     A `Token` is what the lexer hands out: a kind, the byte range it covers in the source
//!     and its text. Offsets are byte offsets into the original source, never into a run or
//!     a resumed slice, so tokens from different passes over the same source compare equal.
//!
//!     A `Lexeme` is a token or a skipped whitespace run. The token stream alone drops the
//!     whitespace; the lexeme stream keeps it, which is what round-tripping needs.

use super::kind::TokenKind;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A classified, positioned span of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Token {
    /// Build a token starting at `start`; the end offset follows from the text.
    pub fn new(kind: TokenKind, start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Token {
            kind,
            start,
            end: start + text.len(),
            text,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One element of the full lexical view of a source: a token or skipped whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Lexeme {
    Token(Token),
    Extra {
        start: usize,
        end: usize,
        text: String,
    },
}

impl Lexeme {
    /// A whitespace run starting at `start`.
    pub fn extra(start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Lexeme::Extra {
            start,
            end: start + text.len(),
            text,
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            Lexeme::Token(token) => token.span(),
            Lexeme::Extra { start, end, .. } => *start..*end,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Lexeme::Token(token) => &token.text,
            Lexeme::Extra { text, .. } => text,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Lexeme::Token(token) => Some(token),
            Lexeme::Extra { .. } => None,
        }
    }

    pub fn is_extra(&self) -> bool {
        matches!(self, Lexeme::Extra { .. })
    }
}

impl From<Token> for Lexeme {
    fn from(token: Token) -> Self {
        Lexeme::Token(token)
    }
}
