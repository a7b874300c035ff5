//! Named output formats
//!
//!     Every format renders a lexeme stream. A caller that wants tokens only drops the extras
//!     before rendering, so one implementation serves both views of a source.
//!
//!     Formats are kept in registration order, which is the order `--list-formats` shows.
//!     Registering a name that is already taken swaps the format in place.

use crate::rout::token::Lexeme;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown format '{name}' (available: {available})")]
    Unknown { name: String, available: String },
    #[error("cannot render {format}: {message}")]
    Render {
        format: &'static str,
        message: String,
    },
}

/// A way of writing a lexeme stream out as text.
pub trait Formatter: Send + Sync {
    fn name(&self) -> &'static str;

    /// One line for `--list-formats`
    fn description(&self) -> &'static str;

    fn render(&self, lexemes: &[Lexeme]) -> Result<String, FormatError>;
}

pub struct FormatRegistry {
    formats: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn empty() -> Self {
        FormatRegistry {
            formats: Vec::new(),
        }
    }

    /// `tag`, `simple`, `json` and `yaml`, in that order.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(super::TagFormatter);
        registry.register(super::SimpleFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    pub fn register(&mut self, format: impl Formatter + 'static) {
        let name = format.name();
        match self.formats.iter().position(|f| f.name() == name) {
            Some(index) => self.formats[index] = Box::new(format),
            None => self.formats.push(Box::new(format)),
        }
    }

    pub fn find(&self, name: &str) -> Option<&dyn Formatter> {
        self.formats
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Formatter> + '_ {
        self.formats.iter().map(|f| f.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.name()).collect()
    }

    /// Render `lexemes` with the format called `name`.
    pub fn render(&self, name: &str, lexemes: &[Lexeme]) -> Result<String, FormatError> {
        let format = self.find(name).ok_or_else(|| FormatError::Unknown {
            name: name.to_string(),
            available: self.names().join(", "),
        })?;
        format.render(lexemes)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
