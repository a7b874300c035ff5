//! Lexer engine
//!
//!     The engine walks the segments produced by [base_tokenization](super::base_tokenization).
//!     Extras are passed over. Each run is carved into tokens from left to right; at every
//!     cursor position all catalog rules are tried against the rest of the run and a single
//!     winner is picked:
//!
//!         1. Every rule that matches at the cursor is a candidate, with its match length.
//!         2. The longest candidate wins.
//!         3. Among equally long candidates, the highest precedence wins.
//!         4. Among those, the rule declared first in the catalog wins.
//!
//!     The winner's kind and length become the token and the cursor moves past it. When no
//!     rule matches, the next character is handed out as a one-character `Normal` token; the
//!     strict entry points turn that into an error instead.
//!
//!     The cursor is the only state. Nothing carries over from one token to the next, so a
//!     lexer started at any token boundary produces exactly the tokens an earlier pass
//!     produced from that point on.

use super::base_tokenization::Segment;
use super::common::LexError;
use crate::rout::catalog::{Catalog, Rule};
use crate::rout::token::{Lexeme, Token, TokenKind};
use logos::Logos;
use std::ops::Range;

/// A rule that matched at the cursor.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'c> {
    pub rule: &'c Rule,
    /// Position of the rule in its catalog
    pub index: usize,
    /// Match length in bytes
    pub len: usize,
}

impl Candidate<'_> {
    /// Longer wins, then higher precedence. Anything else is not strictly better, which
    /// leaves the earlier-declared rule in place.
    fn beats(&self, other: &Candidate<'_>) -> bool {
        self.len > other.len
            || (self.len == other.len && self.rule.precedence() > other.rule.precedence())
    }
}

/// Every rule matching at the start of `text`, in declaration order.
pub fn candidates<'c>(
    catalog: &'c Catalog,
    text: &'c str,
) -> impl Iterator<Item = Candidate<'c>> + 'c {
    catalog
        .iter()
        .enumerate()
        .filter_map(move |(index, rule)| {
            rule.match_len(text).map(|len| Candidate { rule, index, len })
        })
}

/// The winning rule at the start of `text`, or `None` when nothing matches.
pub fn select<'c>(catalog: &'c Catalog, text: &'c str) -> Option<Candidate<'c>> {
    candidates(catalog, text).reduce(|best, next| if next.beats(&best) { next } else { best })
}

/// One move of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Matched(Token),
    /// No rule matched; the token holds the single character that was skipped over
    Recovered(Token),
    Extra(Range<usize>),
}

/// A lazy token iterator over one source.
///
/// Iterating yields tokens only, recovering from unmatched input with one-character
/// `Normal` tokens. Use [`next_lexeme`](Lexer::next_lexeme) to see the skipped
/// whitespace as well.
pub struct Lexer<'a> {
    catalog: &'a Catalog,
    source: &'a str,
    segments: logos::Lexer<'a, Segment>,
    /// Offset of the slice `segments` runs over
    base: usize,
    cursor: usize,
    run_end: usize,
    recovered: usize,
}

impl<'a> Lexer<'a> {
    /// A lexer over `source` using the full catalog.
    pub fn new(source: &'a str) -> Self {
        Lexer::with_catalog(Catalog::standard(), source)
    }

    pub fn with_catalog(catalog: &'a Catalog, source: &'a str) -> Self {
        Lexer {
            catalog,
            source,
            segments: Segment::lexer(source),
            base: 0,
            cursor: 0,
            run_end: 0,
            recovered: 0,
        }
    }

    /// A lexer that starts at `offset` instead of the beginning of `source`.
    ///
    /// Token offsets stay relative to the whole source. Any character boundary is accepted;
    /// starting at a boundary an earlier pass emitted reproduces that pass's remaining tokens.
    pub fn starting_at(
        catalog: &'a Catalog,
        source: &'a str,
        offset: usize,
    ) -> Result<Self, LexError> {
        if !source.is_char_boundary(offset) {
            return Err(LexError::InvalidOffset { offset });
        }
        Ok(Lexer {
            catalog,
            source,
            segments: Segment::lexer(&source[offset..]),
            base: offset,
            cursor: offset,
            run_end: offset,
            recovered: 0,
        })
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Byte offset of the next unread character.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// How many characters so far matched no rule.
    pub fn recovered(&self) -> usize {
        self.recovered
    }

    /// The next token or skipped whitespace run.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        self.step().map(|step| match step {
            Step::Matched(token) | Step::Recovered(token) => Lexeme::Token(token),
            Step::Extra(range) => Lexeme::extra(range.start, &self.source[range]),
        })
    }

    pub(crate) fn step(&mut self) -> Option<Step> {
        loop {
            if self.cursor < self.run_end {
                return Some(self.carve());
            }

            let segment = self.segments.next()?;
            let span = self.segments.span();
            let range = (self.base + span.start)..(self.base + span.end);
            match segment {
                Ok(Segment::Extra) => {
                    self.cursor = range.end;
                    return Some(Step::Extra(range));
                }
                Ok(Segment::Run) | Err(()) => {
                    self.cursor = range.start;
                    self.run_end = range.end;
                }
            }
        }
    }

    /// Cut one token off the front of the current run.
    fn carve(&mut self) -> Step {
        let (catalog, source) = (self.catalog, self.source);
        let start = self.cursor;
        let rest = &source[start..self.run_end];

        match select(catalog, rest) {
            Some(winner) => {
                self.cursor += winner.len;
                Step::Matched(Token::new(winner.rule.kind(), start, &rest[..winner.len]))
            }
            None => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                self.cursor += len;
                self.recovered += 1;
                tracing::trace!(offset = start, "no rule matched, recovering one character");
                Step::Recovered(Token::new(TokenKind::Normal, start, &rest[..len]))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            match self.step()? {
                Step::Matched(token) | Step::Recovered(token) => return Some(token),
                Step::Extra(_) => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rout::catalog::Pattern;

    fn kinds(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_candidates_in_declaration_order() {
        let found: Vec<_> = candidates(Catalog::standard(), "123")
            .map(|c| (c.rule.kind(), c.len))
            .collect();
        assert_eq!(
            found,
            vec![(TokenKind::Normal, 3), (TokenKind::Number, 3)]
        );
    }

    #[test]
    fn test_longest_match_wins() {
        let winner = select(Catalog::standard(), "abc:").unwrap();
        assert_eq!(winner.rule.kind(), TokenKind::WordPunct);
        assert_eq!(winner.len, 4);
    }

    #[test]
    fn test_precedence_breaks_length_ties() {
        let winner = select(Catalog::standard(), ":").unwrap();
        assert_eq!(winner.rule.kind(), TokenKind::Punct);
    }

    #[test]
    fn test_declaration_order_breaks_full_ties() {
        let catalog = Catalog::new(
            "tied",
            vec![
                Rule::new(TokenKind::Normal, Pattern::regex("[a-z]+").unwrap(), 2),
                Rule::new(TokenKind::WordPunct, Pattern::regex("[a-z]+").unwrap(), 2),
            ],
        )
        .unwrap();
        let winner = select(&catalog, "abc").unwrap();
        assert_eq!(winner.index, 0);
        assert_eq!(winner.rule.kind(), TokenKind::Normal);
    }

    #[test]
    fn test_injected_rule_is_measured_by_its_longest_match() {
        let catalog = Catalog::new(
            "constants",
            vec![
                Rule::new(TokenKind::Normal, Pattern::regex("N|NULL").unwrap(), 5),
                Rule::new(TokenKind::Number, Pattern::regex("NU").unwrap(), 3),
            ],
        )
        .unwrap();
        let tokens: Vec<_> = Lexer::with_catalog(&catalog, "NULL").collect();
        assert_eq!(tokens, vec![Token::new(TokenKind::Normal, 0, "NULL")]);
    }

    #[test]
    fn test_lower_precedence_longer_match_still_wins() {
        let winner = select(Catalog::standard(), "TRUEX").unwrap();
        assert_eq!(winner.rule.kind(), TokenKind::Normal);
        assert_eq!(winner.len, 5);
    }

    #[test]
    fn test_run_is_carved_into_several_tokens() {
        assert_eq!(
            kinds("x::"),
            vec![
                (TokenKind::WordPunct, "x:".to_string()),
                (TokenKind::Punct, ":".to_string()),
            ]
        );
    }

    #[test]
    fn test_offsets_are_absolute() {
        let tokens: Vec<_> = Lexer::new("  a  bb").collect();
        assert_eq!(tokens[0].span(), 2..3);
        assert_eq!(tokens[1].span(), 5..7);
    }

    #[test]
    fn test_recovery_emits_single_characters() {
        let mut lexer = Lexer::with_catalog(Catalog::legacy(), "-é");
        let tokens: Vec<_> = lexer.by_ref().collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Normal, 0, "-"),
                Token::new(TokenKind::Normal, 1, "é"),
            ]
        );
        assert_eq!(lexer.recovered(), 1);
    }

    #[test]
    fn test_lexemes_include_extras() {
        let mut lexer = Lexer::new("a \n");
        assert_eq!(
            lexer.next_lexeme(),
            Some(Lexeme::Token(Token::new(TokenKind::Normal, 0, "a")))
        );
        assert_eq!(
            lexer.next_lexeme(),
            Some(Lexeme::Extra {
                start: 1,
                end: 3,
                text: " \n".to_string()
            })
        );
        assert_eq!(lexer.next_lexeme(), None);
    }

    #[test]
    fn test_starting_at_mid_run() {
        let lexer = Lexer::starting_at(Catalog::standard(), "x:: 1", 2).unwrap();
        let tokens: Vec<_> = lexer.collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Punct, 2, ":"),
                Token::new(TokenKind::Number, 4, "1"),
            ]
        );
    }

    #[test]
    fn test_starting_at_rejects_bad_offsets() {
        assert_eq!(
            Lexer::starting_at(Catalog::standard(), "é", 1).err(),
            Some(LexError::InvalidOffset { offset: 1 })
        );
        assert_eq!(
            Lexer::starting_at(Catalog::standard(), "ab", 3).err(),
            Some(LexError::InvalidOffset { offset: 3 })
        );
        assert!(Lexer::starting_at(Catalog::standard(), "ab", 2).is_ok());
    }

    #[test]
    fn test_cursor_tracks_progress() {
        let mut lexer = Lexer::new("12 ab");
        assert_eq!(lexer.cursor(), 0);
        lexer.next();
        assert_eq!(lexer.cursor(), 2);
        lexer.next();
        assert_eq!(lexer.cursor(), 5);
        assert_eq!(lexer.next(), None);
    }
}
