//! Error taxonomy for the page flow converter
//!
//! All errors are terminal for the current parse: the first failure aborts
//! and propagates to the caller with no partial result and no retry. The
//! core never logs or prints; reporting and process exit codes belong to
//! the binary.

use std::fmt;

use crate::flow::lexer::tokens::{Token, TokenKind};
use crate::flow::parser::ast::InteractionKind;

/// Errors raised while turning the character stream into tokens
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A code point that no token rule recognizes
    InvalidCharacter { character: char, code_point: u32 },
    /// A required literal character was missing at the cursor
    UnexpectedCharacter { expected: char, found: Option<char> },
    /// A digit run that does not fit the numeric payload
    InvalidNumber(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidCharacter {
                character,
                code_point,
            } => {
                write!(f, "Invalid character '{}' (code point {})", character, code_point)
            }
            LexError::UnexpectedCharacter {
                expected,
                found: Some(found),
            } => {
                write!(f, "Expecting '{}' but found '{}'", expected, found)
            }
            LexError::UnexpectedCharacter {
                expected,
                found: None,
            } => {
                write!(f, "Expecting '{}' but found end of input", expected)
            }
            LexError::InvalidNumber(digits) => write!(f, "Invalid number literal '{}'", digits),
        }
    }
}

impl std::error::Error for LexError {}

/// Errors raised while building the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The grammar required one token kind and found another
    UnexpectedToken { expected: TokenKind, found: Token },
    /// Unconsumed tokens remained after the last page (strict mode only)
    TrailingInput { found: Token },
    /// A page carried two interactions of the same kind (strict mode only)
    DuplicateInteraction { kind: InteractionKind },
    /// A tokenization failure surfaced through the token source
    Lex(LexError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "Expecting {} but found {}", expected, found)
            }
            ParseError::TrailingInput { found } => {
                write!(f, "Trailing input after the last page: {}", found)
            }
            ParseError::DuplicateInteraction { kind } => {
                write!(f, "Duplicate {} interaction on a single page", kind)
            }
            ParseError::Lex(error) => write!(f, "Tokenization failed: {}", error),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        ParseError::Lex(error)
    }
}

/// Errors surfaced by the high-level pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Parse(ParseError),
    Serialize(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Parse(error) => write!(f, "Parse error: {}", error),
            PipelineError::Serialize(message) => write!(f, "Serialization failed: {}", message),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ParseError> for PipelineError {
    fn from(error: ParseError) -> Self {
        PipelineError::Parse(error)
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::Serialize(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let error = LexError::InvalidCharacter {
            character: '?',
            code_point: 63,
        };
        assert_eq!(error.to_string(), "Invalid character '?' (code point 63)");

        let error = LexError::UnexpectedCharacter {
            expected: ']',
            found: Some('1'),
        };
        assert_eq!(error.to_string(), "Expecting ']' but found '1'");

        let error = LexError::UnexpectedCharacter {
            expected: '.',
            found: None,
        };
        assert_eq!(error.to_string(), "Expecting '.' but found end of input");
    }

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::UnexpectedToken {
            expected: TokenKind::Line,
            found: Token::Text("Hello".to_string()),
        };
        assert_eq!(error.to_string(), "Expecting line but found <text:Hello>");
    }

    #[test]
    fn test_error_layering() {
        let lex = LexError::InvalidNumber("9".repeat(40));
        let parse: ParseError = lex.clone().into();
        assert_eq!(parse, ParseError::Lex(lex));

        let pipeline: PipelineError = parse.clone().into();
        assert_eq!(pipeline, PipelineError::Parse(parse));
    }
}
