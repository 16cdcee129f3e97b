//! Parser module for the page flow format
//!
//! The parser is recursive descent over the token stream, with one token of
//! lookahead provided by [`TokenSource`]'s fixed-depth ring buffer. Every
//! production either consumes tokens and returns a fully formed tree
//! fragment or fails; there is no error recovery.

pub mod ast;
pub mod parser_impl;
pub mod token_source;

pub use ast::{Document, Interaction, InteractionKind, Page};
pub use parser_impl::{FlowParser, Strictness};
pub use token_source::TokenSource;

use crate::flow::error::ParseError;
use crate::flow::lexer::FlowLexer;

/// Parse a source string into a document with the default (strict)
/// trailing-input handling.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let lexer = FlowLexer::new(source);
    let parser = FlowParser::new(lexer)?;
    parser.parse()
}
