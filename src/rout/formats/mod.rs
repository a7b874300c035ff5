//! Output formats for lexeme streams
//!
//! - tag: one XML-ish element per lexeme, named after its kind
//! - simple: one tab-separated `kind  start..end  text` line per lexeme
//! - json, yaml: the lexemes as serde structures

pub mod registry;
pub mod serde_formats;
pub mod simple;
pub mod tag;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use simple::{render_simple, SimpleFormatter};
pub use tag::{render_tag, TagFormatter};
