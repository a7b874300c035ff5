//! Catalog rules

use super::pattern::Pattern;
use crate::rout::token::TokenKind;

/// A token kind, the pattern that recognizes it and its tie-breaking weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    kind: TokenKind,
    pattern: Pattern,
    precedence: i32,
}

impl Rule {
    pub fn new(kind: TokenKind, pattern: Pattern, precedence: i32) -> Self {
        Rule {
            kind,
            pattern,
            precedence,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    /// See [`Pattern::match_len`].
    pub fn match_len(&self, text: &str) -> Option<usize> {
        self.pattern.match_len(text)
    }
}
