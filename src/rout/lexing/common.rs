//! Common lexer module
//!
//! Errors and the recovery policy shared by every entry point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Strict mode only: no rule matches at this byte offset
    #[error("no rule matches the input at byte offset {offset}")]
    Unmatched { offset: usize },
    /// A resume offset past the end of the source or inside a UTF-8 sequence
    #[error("cannot start lexing at byte offset {offset}: not a character boundary")]
    InvalidOffset { offset: usize },
}

/// What the lexer does at a position where no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryMode {
    /// Emit the next character as a one-character `Normal` token and keep going.
    #[default]
    Lenient,
    /// Fail the whole pass with [`LexError::Unmatched`]; no tokens are returned.
    Strict,
}

impl fmt::Display for RecoveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryMode::Lenient => f.write_str("lenient"),
            RecoveryMode::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for RecoveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(RecoveryMode::Lenient),
            "strict" => Ok(RecoveryMode::Strict),
            other => Err(format!(
                "unknown recovery mode '{other}' (expected 'lenient' or 'strict')"
            )),
        }
    }
}
