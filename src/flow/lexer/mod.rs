//! Lexer module for the page flow format
//!
//! This module contains the tokenization logic for page flow scripts,
//! including token definitions and the lexer implementation. The lexer
//! consumes the decoded input one code point at a time and produces a
//! finite, non-restartable token sequence that the parser consumes through
//! its lookahead buffer.
//!
//! Tokenization is priority ordered and scans left to right with no
//! backtracking; order matters where prefixes overlap (`.` and `\` reach
//! the text rule only because the letter and digit rules are tried first).

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::FlowLexer;
pub use tokens::{Token, TokenKind};

use crate::flow::error::LexError;

/// Tokenize a whole source string, collecting every token up to (but not
/// including) the end-of-input marker.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = FlowLexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token == Token::EndOfInput {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collects_until_end() {
        let tokens = tokenize("1. Hi\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(1),
                Token::Text("Hi".to_string()),
                Token::LineBreak,
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_tokenize_propagates_errors() {
        assert!(tokenize("%").is_err());
    }
}
