//! Property-based tests for the rout lexer
//!
//! These tests check the structural guarantees of the token stream on generated input:
//! nothing is lost, tokens never overlap or hold whitespace, and lexing can resume at any
//! token boundary.

use proptest::prelude::*;
use rout::rout::lexing::lexemes;
use rout::rout::token::detokenize;
use rout::{tokenize, tokenize_strict, tokenize_with, Catalog, Lexer, Token};

/// Rout-like text: words, numbers, R punctuation and mixed whitespace
fn rout_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_.,:$%#!?=()\\[\\]<>+\\- \t\n]{0,60}",
        "((-?[0-9]{1,4}(\\.[0-9]{1,3})?([eE][+-]?[0-9]{1,2})?|TRUE|FALSE|-?Inf|[a-z]{1,5}[:,.]?|NA|\\[[0-9]\\])( {1,3}|\n)){0,12}",
        any::<String>(),
    ]
}

fn catalogs() -> [&'static Catalog; 2] {
    [Catalog::standard(), Catalog::legacy()]
}

fn assert_well_formed(source: &str, tokens: &[Token]) {
    let mut previous_end = 0;
    for token in tokens {
        assert!(token.start >= previous_end, "overlapping token {:?}", token);
        assert!(token.end > token.start, "empty token {:?}", token);
        assert_eq!(&source[token.span()], token.text);
        assert!(
            !token.text.chars().any(char::is_whitespace),
            "whitespace inside token {:?}",
            token
        );
        previous_end = token.end;
    }
}

proptest! {
    #[test]
    fn test_lexemes_reproduce_input(source in rout_text()) {
        for catalog in catalogs() {
            prop_assert_eq!(detokenize(&lexemes(catalog, &source)), source.clone());
        }
    }

    #[test]
    fn test_tokens_are_ordered_and_disjoint(source in rout_text()) {
        for catalog in catalogs() {
            assert_well_formed(&source, &tokenize_with(catalog, &source));
        }
    }

    #[test]
    fn test_restart_at_token_boundary(source in rout_text()) {
        for catalog in catalogs() {
            let tokens = tokenize_with(catalog, &source);
            for (i, token) in tokens.iter().enumerate() {
                let resumed: Vec<Token> = Lexer::starting_at(catalog, &source, token.start)
                    .expect("token starts are character boundaries")
                    .collect();
                prop_assert_eq!(&resumed[..], &tokens[i..]);
            }
        }
    }

    #[test]
    fn test_strict_matches_lenient_on_full_catalog(source in rout_text()) {
        prop_assert_eq!(
            tokenize_strict(Catalog::standard(), &source),
            Ok(tokenize(&source))
        );
    }

    #[test]
    fn test_strict_fails_exactly_when_recovery_happens(source in rout_text()) {
        let mut lexer = Lexer::with_catalog(Catalog::legacy(), &source);
        let lenient: Vec<Token> = lexer.by_ref().collect();

        match tokenize_strict(Catalog::legacy(), &source) {
            Ok(tokens) => {
                prop_assert_eq!(lexer.recovered(), 0);
                prop_assert_eq!(tokens, lenient);
            }
            Err(_) => prop_assert!(lexer.recovered() > 0),
        }
    }
}
