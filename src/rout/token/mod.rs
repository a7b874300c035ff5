//! Core token types and helpers shared across the lexer, the formats and tooling.

pub mod core;
pub mod formatting;
pub mod kind;

pub use self::core::{Lexeme, Token};
pub use formatting::detokenize;
pub use kind::{TokenKind, UnknownKind};
