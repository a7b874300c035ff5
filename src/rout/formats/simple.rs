//! Simple format: one `kind<TAB>start..end<TAB>text` line per lexeme.
//!
//! Token text never contains whitespace and is written as is. Extras are written as `extra`
//! lines with their text quoted and escaped, as in `" \n"`.

use super::registry::{FormatError, Formatter};
use crate::rout::token::Lexeme;
use std::fmt::Write;

pub fn render_simple(lexemes: &[Lexeme]) -> String {
    let mut out = String::new();
    for lexeme in lexemes {
        let span = lexeme.span();
        // Writing to a String cannot fail
        let _ = match lexeme {
            Lexeme::Token(token) => writeln!(
                out,
                "{}\t{}..{}\t{}",
                token.kind, span.start, span.end, token.text
            ),
            Lexeme::Extra { text, .. } => {
                writeln!(out, "extra\t{}..{}\t{:?}", span.start, span.end, text)
            }
        };
    }
    out
}

pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn description(&self) -> &'static str {
        "Tab-separated kind, byte span and text, one lexeme per line"
    }

    fn render(&self, lexemes: &[Lexeme]) -> Result<String, FormatError> {
        Ok(render_simple(lexemes))
    }
}
