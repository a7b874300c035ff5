//! Tag format
//!
//!     Renders a lexeme stream as a `<document>` element holding one element per lexeme,
//!     named after the token kind, or `extra` for whitespace:
//!
//!         <document>
//!           <normal>[1]</normal>
//!           <extra> </extra>
//!           <number>3.14</number>
//!         </document>
//!
//!     Text is escaped (`&`, `<`, `>`), since R output routinely contains all three. Line
//!     breaks and tabs inside extras become character references so that every element
//!     stays on its own line.

use super::registry::{FormatError, Formatter};
use crate::rout::token::Lexeme;

pub fn render_tag(lexemes: &[Lexeme]) -> String {
    let mut out = String::from("<document>\n");
    for lexeme in lexemes {
        let name = match lexeme {
            Lexeme::Token(token) => token.kind.name(),
            Lexeme::Extra { .. } => "extra",
        };
        out.push_str("  <");
        out.push_str(name);
        out.push('>');
        push_escaped(&mut out, lexeme.text());
        out.push_str("</");
        out.push_str(name);
        out.push_str(">\n");
    }
    out.push_str("</document>\n");
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c => out.push(c),
        }
    }
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn description(&self) -> &'static str {
        "One element per token, named after its kind"
    }

    fn render(&self, lexemes: &[Lexeme]) -> Result<String, FormatError> {
        Ok(render_tag(lexemes))
    }
}
