//! JSON and YAML formats, straight from the serde derives on [`Lexeme`].
//!
//! Each entry carries a `type` field, `token` or `extra`, next to its span and text.

use super::registry::{FormatError, Formatter};
use crate::rout::token::Lexeme;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn description(&self) -> &'static str {
        "Pretty-printed JSON array of lexemes"
    }

    fn render(&self, lexemes: &[Lexeme]) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(lexemes).map_err(|e| FormatError::Render {
            format: "json",
            message: e.to_string(),
        })?;
        out.push('\n');
        Ok(out)
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn description(&self) -> &'static str {
        "YAML sequence of lexemes"
    }

    fn render(&self, lexemes: &[Lexeme]) -> Result<String, FormatError> {
        serde_yaml::to_string(lexemes).map_err(|e| FormatError::Render {
            format: "yaml",
            message: e.to_string(),
        })
    }
}
