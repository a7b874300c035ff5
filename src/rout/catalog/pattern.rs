//! Compiled patterns
//!
//!     A pattern is data, not code: every rule is evaluated the same way, by asking its
//!     pattern how many bytes it matches at the start of a slice.
//!
//!     Sources compile to a dense DFA from `regex-automata`, searched anchored at the start of
//!     the slice with `MatchKind::All`. The search runs until the automaton dies and reports
//!     the last match end it passed, so a rule's length is its longest match. Alternation
//!     order and lazy repetition make no difference: `N|NULL` matches all of `NULL`.

use super::CatalogError;
use regex_automata::dfa::{dense, Automaton, StartKind};
use regex_automata::{Anchored, Input, MatchKind};

#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    dfa: dense::DFA<Vec<u32>>,
}

impl Pattern {
    /// Compile a regular expression. Matches are anchored at the start of the slice.
    pub fn regex(source: &str) -> Result<Self, CatalogError> {
        let config = dense::Config::new()
            .match_kind(MatchKind::All)
            .start_kind(StartKind::Anchored);
        let dfa = dense::Builder::new()
            .configure(config)
            .build(source)
            .map_err(|err| CatalogError::InvalidPattern {
                pattern: source.to_string(),
                source: err,
            })?;
        Ok(Pattern {
            source: source.to_string(),
            dfa,
        })
    }

    /// A pattern matching `text` verbatim.
    pub fn literal(text: &str) -> Result<Self, CatalogError> {
        Pattern::regex(&regex::escape(text))
    }

    /// The uncompiled source.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Length in bytes of the longest match at the start of `text`.
    ///
    /// Empty matches are reported as no match, so a rule can never stall the cursor.
    pub fn match_len(&self, text: &str) -> Option<usize> {
        let input = Input::new(text).anchored(Anchored::Yes);
        // A fully built DFA without quit bytes cannot fail a search
        self.dfa
            .try_search_fwd(&input)
            .ok()
            .flatten()
            .map(|m| m.offset())
            .filter(|&len| len > 0)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}
