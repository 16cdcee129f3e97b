//! Recursive-descent parser for page flow documents
//!
//! One method per grammar production:
//!
//! ```text
//! document     := page (LB* page)*
//! page         := head line body interactions
//! head         := Number text condition? LB*
//! line         := Line LB*
//! body         := text LB* (text LB*)*
//! interactions := LB* interaction LB* (interaction LB*)?
//! interaction  := Button | Image | Action
//! ```
//!
//! A parser instance binds to one input; `parse` consumes it. The
//! strictness flag decides whether input remaining after the last page (and
//! a repeated interaction kind) is an error or tolerated.

use crate::flow::error::{LexError, ParseError};
use crate::flow::lexer::tokens::{Token, TokenKind};
use crate::flow::lexer::FlowLexer;
use crate::flow::parser::ast::{Document, Interaction, Page};
use crate::flow::parser::token_source::TokenSource;

/// How to treat input the grammar does not account for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Trailing tokens after the last page and duplicate interaction kinds
    /// are errors
    Strict,
    /// The document loop stops at the first token that cannot start a page
    /// and ignores the remainder
    Lenient,
}

/// Recursive-descent parser over a buffered token stream
pub struct FlowParser {
    tokens: TokenSource,
    strictness: Strictness,
}

impl FlowParser {
    pub fn new(lexer: FlowLexer) -> Result<Self, LexError> {
        Self::with_strictness(lexer, Strictness::Strict)
    }

    pub fn with_strictness(lexer: FlowLexer, strictness: Strictness) -> Result<Self, LexError> {
        Ok(FlowParser {
            tokens: TokenSource::new(lexer)?,
            strictness,
        })
    }

    /// Build the document tree, consuming the parser
    pub fn parse(mut self) -> Result<Document, ParseError> {
        let document = self.pages()?;
        if self.strictness == Strictness::Strict && !self.tokens.peek(TokenKind::EndOfInput) {
            return Err(ParseError::TrailingInput {
                found: self.tokens.lookahead(0).clone(),
            });
        }
        Ok(document)
    }

    fn pages(&mut self) -> Result<Document, ParseError> {
        let mut pages = vec![self.page()?];
        self.linebreaks()?;
        while self.tokens.peek(TokenKind::Number) {
            pages.push(self.page()?);
            self.linebreaks()?;
        }
        Ok(Document { pages })
    }

    fn page(&mut self) -> Result<Page, ParseError> {
        let (id, caption, condition) = self.head()?;
        self.line()?;
        let body = self.body()?;
        let interactions = self.interactions()?;
        Ok(Page {
            id,
            caption,
            condition,
            body,
            interactions,
        })
    }

    fn head(&mut self) -> Result<(i64, String, Option<String>), ParseError> {
        let id = self.number()?;
        let caption = self.text()?;
        let condition = if self.tokens.peek(TokenKind::Condition) {
            Some(self.condition()?)
        } else {
            None
        };
        self.linebreaks()?;
        Ok((id, caption, condition))
    }

    fn line(&mut self) -> Result<(), ParseError> {
        self.tokens.expect(TokenKind::Line)?;
        self.linebreaks()?;
        Ok(())
    }

    fn body(&mut self) -> Result<Vec<String>, ParseError> {
        let mut paragraphs = vec![self.text()?];
        self.linebreaks()?;
        while self.tokens.peek(TokenKind::Text) {
            paragraphs.push(self.text()?);
            self.linebreaks()?;
        }
        Ok(paragraphs)
    }

    fn interactions(&mut self) -> Result<Vec<Interaction>, ParseError> {
        self.linebreaks()?;
        let mut interactions = vec![self.interaction()?];
        self.linebreaks()?;
        if self.tokens.lookahead(0).is_interaction() {
            let second = self.interaction()?;
            if self.strictness == Strictness::Strict && second.kind() == interactions[0].kind() {
                return Err(ParseError::DuplicateInteraction {
                    kind: second.kind(),
                });
            }
            interactions.push(second);
            self.linebreaks()?;
        }
        Ok(interactions)
    }

    fn interaction(&mut self) -> Result<Interaction, ParseError> {
        match self.tokens.next()? {
            Token::Button(label) => Ok(Interaction::Button(label)),
            Token::Image(label) => Ok(Interaction::Image(label)),
            Token::Action(label) => Ok(Interaction::Action(label)),
            found => Err(ParseError::UnexpectedToken {
                expected: TokenKind::Button,
                found,
            }),
        }
    }

    fn number(&mut self) -> Result<i64, ParseError> {
        match self.tokens.expect(TokenKind::Number)? {
            Token::Number(value) => Ok(value),
            found => Err(ParseError::UnexpectedToken {
                expected: TokenKind::Number,
                found,
            }),
        }
    }

    fn text(&mut self) -> Result<String, ParseError> {
        match self.tokens.expect(TokenKind::Text)? {
            Token::Text(value) => Ok(value),
            found => Err(ParseError::UnexpectedToken {
                expected: TokenKind::Text,
                found,
            }),
        }
    }

    fn condition(&mut self) -> Result<String, ParseError> {
        match self.tokens.expect(TokenKind::Condition)? {
            Token::Condition(name) => Ok(name),
            found => Err(ParseError::UnexpectedToken {
                expected: TokenKind::Condition,
                found,
            }),
        }
    }

    fn linebreaks(&mut self) -> Result<(), ParseError> {
        while self.tokens.peek(TokenKind::LineBreak) {
            self.tokens.next()?;
        }
        Ok(())
    }
}
