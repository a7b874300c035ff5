//! Detokenizer
//!
//!     Turns a lexeme stream back into source text. Lexing is lossless: every byte of the
//!     source lands in exactly one token or extra, so `detokenize(&lexemes(catalog, source))`
//!     reproduces `source` for every catalog and recovery policy that produced a stream.

use super::core::Lexeme;

pub fn detokenize(lexemes: &[Lexeme]) -> String {
    let capacity = lexemes.last().map_or(0, |lexeme| lexeme.span().end);
    let mut out = String::with_capacity(capacity);
    for lexeme in lexemes {
        out.push_str(lexeme.text());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rout::token::{Token, TokenKind};

    #[test]
    fn test_detokenize_joins_tokens_and_extras() {
        let lexemes = vec![
            Lexeme::Token(Token::new(TokenKind::Normal, 0, "[1]")),
            Lexeme::Extra {
                start: 3,
                end: 4,
                text: " ".to_string(),
            },
            Lexeme::Token(Token::new(TokenKind::Number, 4, "42")),
            Lexeme::Extra {
                start: 6,
                end: 7,
                text: "\n".to_string(),
            },
        ];

        assert_eq!(detokenize(&lexemes), "[1] 42\n");
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&[]), "");
    }
}
