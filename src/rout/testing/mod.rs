//! Testing utilities
//!
//! Shared helpers for unit and integration tests. Expected token streams are written as
//! `(kind, start, text)` rows; the end offset follows from the text, so a typo in a row
//! shows up as a span mismatch rather than going unnoticed.

pub mod factories;
