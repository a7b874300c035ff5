//! # rout
//!
//! A tokenizer for the Rout format: the text R prints to its console. Rout is a flat,
//! whitespace-delimited stream, so there is no tree to build. Every run of non-whitespace
//! text is split into tokens tagged as numbers, negative numbers, booleans, infinities,
//! punctuation, punctuated words or plain words.
//!
//! File Layout
//!
//!     src/rout
//!       ├── token       Token kinds, tokens and lexemes (tokens + skipped whitespace)
//!       ├── catalog     Patterns, rules and the ordered rule catalogs (full and legacy)
//!       ├── lexing      The extras pass and the disambiguation engine
//!       ├── formats     Token stream serializers (tag, simple, json, yaml)
//!       └── config      Layered configuration for the binary and embedders
//!
//! The one entry point most callers need is [`tokenize`].

pub mod rout;

pub use rout::catalog::{Catalog, Rule};
pub use rout::lexing::{tokenize, tokenize_strict, tokenize_with, LexError, Lexer};
pub use rout::token::{Token, TokenKind};
