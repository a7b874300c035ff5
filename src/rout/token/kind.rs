//! Token kinds
//!
//!     The kinds are the only vocabulary callers need to understand a token stream. Their
//!     serialized names are stable: formats, configuration files and editor queries refer to
//!     them by name, so renaming a variant is a breaking change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The classification attached to every token.
///
/// The legacy catalog only ever produces `Normal`, `Number`, `NegNumber`, `True`, `False`
/// and `Inf`; the remaining kinds belong to the full catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Any other non-whitespace text
    Normal,
    /// `12`, `1.5`, `2e-3`
    Number,
    /// `-12`, `-1.5e3`
    NegNumber,
    /// A lone `:`, `$`, `%` or `#`
    Punct,
    /// A word followed by a single punctuation character, `x:` or `done.`
    WordPunct,
    /// Digits running into letters, `123abc`
    NotNumber,
    True,
    False,
    /// `Inf` and `-Inf`
    Inf,
}

impl TokenKind {
    /// Every kind, in the order the full catalog declares them.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Normal,
        TokenKind::Punct,
        TokenKind::WordPunct,
        TokenKind::NotNumber,
        TokenKind::Number,
        TokenKind::NegNumber,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Inf,
    ];

    /// The stable serialized name (`neg-number`, `word-punct`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Normal => "normal",
            TokenKind::Number => "number",
            TokenKind::NegNumber => "neg-number",
            TokenKind::Punct => "punct",
            TokenKind::WordPunct => "word-punct",
            TokenKind::NotNumber => "not-number",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Inf => "inf",
        }
    }

    /// The grammar rule name editors use in highlight queries.
    pub fn rule_name(self) -> &'static str {
        match self {
            TokenKind::Normal => "routNormal",
            TokenKind::Number => "routNumber",
            TokenKind::NegNumber => "routNegNum",
            TokenKind::Punct => "routPunct",
            TokenKind::WordPunct => "routWPunct",
            TokenKind::NotNumber => "routNotNum",
            TokenKind::True => "routTrue",
            TokenKind::False => "routFalse",
            TokenKind::Inf => "routInf",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that is not a token kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.rule_name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
