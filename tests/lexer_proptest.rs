//! Property-based tests for the page flow lexer and parser
//!
//! These ensure the tokenizer is total over arbitrary input (every code
//! point either starts a token or raises an error, and nothing panics) and
//! that generated well-formed documents always parse into one page per
//! source page.

use proptest::prelude::*;

use pageflow::flow::error::LexError;
use pageflow::flow::lexer::{tokenize, Token};
use pageflow::flow::parser::parse;

const GERMAN_LETTERS: &str = "äöüÄÖÜß";

/// The code points that may start a token (or are skipped outright)
fn starts_a_token(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_ascii_alphabetic()
        || GERMAN_LETTERS.contains(c)
        || matches!(
            c,
            ' ' | '\t'
                | '\u{b}'
                | '\u{c}'
                | '\r'
                | '\n'
                | '='
                | '-'
                | '['
                | '{'
                | '<'
                | '('
                | '.'
                | '\\'
        )
}

/// Arbitrary strings, including code points the lexer rejects
fn arbitrary_input() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..64).prop_map(|chars| chars.into_iter().collect())
}

/// Strings over the recognized character set, without escapes
fn unescaped_input() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'z', 'A', 'Z', 'ä', 'ß', '0', '9', ' ', '\t', '\n', '\r', '=', '-', '[', ']',
            '{', '}', '<', '>', '.', ':', ',', '!', '?',
        ]),
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

prop_compose! {
    /// One well-formed page block, returning its id alongside the text
    fn page_strategy()(
        id in 0u16..1000,
        caption in "[A-Za-z]{1,12}",
        paragraphs in prop::collection::vec("[A-Za-z][A-Za-z .]{0,20}", 1..4),
        label in "[A-Za-z]{1,10}",
    ) -> (i64, String) {
        let mut page = format!("{}. {}\n====\n", id, caption);
        for paragraph in &paragraphs {
            page.push_str(paragraph);
            page.push('\n');
        }
        page.push('[');
        page.push_str(&label);
        page.push_str("]\n");
        (i64::from(id), page)
    }
}

proptest! {
    #[test]
    fn tokenizer_never_panics(input in arbitrary_input()) {
        let _ = tokenize(&input);
    }

    #[test]
    fn unclassifiable_leading_code_point_is_an_error(
        c in any::<char>().prop_filter("must not start a token", |c| !starts_a_token(*c))
    ) {
        match tokenize(&c.to_string()) {
            Err(LexError::InvalidCharacter { character, code_point }) => {
                prop_assert_eq!(character, c);
                prop_assert_eq!(code_point, c as u32);
            }
            other => prop_assert!(false, "expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn text_runs_stop_at_delimiters(input in unescaped_input()) {
        // Without escapes, a text run can never contain a line break or `(`
        if let Ok(tokens) = tokenize(&input) {
            for token in tokens {
                if let Token::Text(text) = token {
                    prop_assert!(!text.contains('('));
                    prop_assert!(!text.contains('\n'));
                    prop_assert!(!text.contains('\r'));
                }
            }
        }
    }

    #[test]
    fn well_formed_documents_parse(pages in prop::collection::vec(page_strategy(), 1..5)) {
        let source: String = pages.iter().map(|(_, block)| block.as_str()).collect();
        let document = parse(&source).unwrap();
        prop_assert_eq!(document.pages.len(), pages.len());
        for (page, (id, _)) in document.pages.iter().zip(&pages) {
            prop_assert_eq!(page.id, *id);
        }
    }
}
