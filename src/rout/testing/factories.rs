//! Factories for building expected tokens in tests

use crate::rout::token::{Token, TokenKind};

/// Make a token from its kind, start offset and text
pub fn mk_token(kind: TokenKind, start: usize, text: &str) -> Token {
    Token::new(kind, start, text)
}

/// Make a vector of tokens from a list of (kind, start, text)
pub fn mk_tokens(specs: &[(TokenKind, usize, &str)]) -> Vec<Token> {
    specs
        .iter()
        .map(|&(kind, start, text)| mk_token(kind, start, text))
        .collect()
}

/// Strip positions, keeping (kind, text) pairs
pub fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}
