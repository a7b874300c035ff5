//! Built-in catalog definitions
//!
//! Both grammars are declared as `(kind, pattern, precedence)` tables and compiled into
//! static references using `once_cell::sync::Lazy`.
//!
//! Character Classes
//!
//!     Word characters and digits are ASCII (`[0-9A-Za-z_]`, `[0-9]`). Whitespace is Unicode
//!     (`\s`), the same definition the extras pass splits on. `Normal` must stay within
//!     `\S`, otherwise it could swallow the whitespace between tokens.

use super::Catalog;
use crate::rout::token::TokenKind;
use once_cell::sync::Lazy;

/// The full grammar, in declaration order.
///
/// | kind       | matches                                              | prec |
/// |------------|------------------------------------------------------|------|
/// | Normal     | non-whitespace run not ending in `: $ % #`, or any single non-whitespace char | 1 |
/// | Punct      | one of `: $ % #`                                     | 7    |
/// | WordPunct  | word chars then one of `. , ! ? = : $ % #`           | 7    |
/// | NotNumber  | digits, a letter, then word chars                    | 9    |
/// | Number     | digits, optional fraction, optional exponent         | 8    |
/// | NegNumber  | `-` then a Number                                    | 8    |
/// | True       | `TRUE`                                               | 9    |
/// | False      | `FALSE`                                              | 9    |
/// | Inf        | `Inf` or `-Inf`                                      | 9    |
pub const FULL_RULES: &[(TokenKind, &str, i32)] = &[
    (TokenKind::Normal, r"\S*[^\s:$%#]|\S", 1),
    (TokenKind::Punct, r"[:$%#]", 7),
    (TokenKind::WordPunct, r"[0-9A-Za-z_]+[.,!?=:$%#]", 7),
    (TokenKind::NotNumber, r"[0-9]+[A-Za-z][0-9A-Za-z_]*", 9),
    (
        TokenKind::Number,
        r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?",
        8,
    ),
    (
        TokenKind::NegNumber,
        r"-[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?",
        8,
    ),
    (TokenKind::True, r"TRUE", 9),
    (TokenKind::False, r"FALSE", 9),
    (TokenKind::Inf, r"-?Inf", 9),
];

/// The legacy grammar, in declaration order.
///
/// `Normal` sits below every other rule and cannot start with a digit or `-`, so numbers
/// are never folded into words. A lone `-` matches nothing and falls to recovery.
pub const LEGACY_RULES: &[(TokenKind, &str, i32)] = &[
    (TokenKind::Normal, r"[^\s0-9\-]\S*", 0),
    (
        TokenKind::Number,
        r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?",
        3,
    ),
    (
        TokenKind::NegNumber,
        r"-[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?",
        3,
    ),
    (TokenKind::True, r"TRUE", 5),
    (TokenKind::False, r"FALSE", 6),
    (TokenKind::Inf, r"-?Inf", 6),
];

pub static FULL: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_table("full", FULL_RULES).expect("built-in full catalog must compile")
});

pub static LEGACY: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_table("legacy", LEGACY_RULES).expect("built-in legacy catalog must compile")
});
