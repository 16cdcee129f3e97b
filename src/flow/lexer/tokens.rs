//! Token definitions for the page flow format
//!
//! This module defines all the tokens that the page flow lexer can produce.
//! Tokens carry their raw payload untouched; trimming and case mapping are
//! serialization-time transforms and never happen here.

use std::fmt;

use serde::Serialize;

/// All possible tokens in a page flow script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Token {
    /// A page id: a digit run terminated by a literal `.`
    Number(i64),
    /// Free prose up to the next line break or unescaped `(`
    Text(String),
    /// A separator line; the payload is `'='` (thick) or `'-'` (thin)
    Line(char),
    /// A single `\r` or `\n`
    LineBreak,
    /// A `[label]` interaction marker
    Button(String),
    /// A `{label}` interaction marker
    Image(String),
    /// A `<label>` interaction marker
    Action(String),
    /// A `(:name)` guard attached to a page heading
    Condition(String),
    /// The end-of-input marker; repeated calls keep producing it
    EndOfInput,
}

/// The discriminant of a [`Token`], used by the parser's `peek`/`expect`.
///
/// This is deliberately separate from any serialized string representation;
/// the wire names live at the JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Text,
    Line,
    LineBreak,
    Button,
    Image,
    Action,
    Condition,
    EndOfInput,
}

impl Token {
    /// The discriminant of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Text(_) => TokenKind::Text,
            Token::Line(_) => TokenKind::Line,
            Token::LineBreak => TokenKind::LineBreak,
            Token::Button(_) => TokenKind::Button,
            Token::Image(_) => TokenKind::Image,
            Token::Action(_) => TokenKind::Action,
            Token::Condition(_) => TokenKind::Condition,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Check whether this token has the given kind
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// Check if this token marks an interaction (button, image or action)
    pub fn is_interaction(&self) -> bool {
        matches!(self, Token::Button(_) | Token::Image(_) | Token::Action(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "<number:{}>", value),
            Token::Text(text) => write!(f, "<text:{}>", text),
            Token::Line(rule) => write!(f, "<line:{}>", rule),
            Token::LineBreak => write!(f, "<linebreak>"),
            Token::Button(label) => write!(f, "<button:{}>", label),
            Token::Image(label) => write!(f, "<image:{}>", label),
            Token::Action(label) => write!(f, "<action:{}>", label),
            Token::Condition(name) => write!(f, "<condition:{}>", name),
            Token::EndOfInput => write!(f, "<end-of-input>"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Number => "number",
            TokenKind::Text => "text",
            TokenKind::Line => "line",
            TokenKind::LineBreak => "line break",
            TokenKind::Button => "button",
            TokenKind::Image => "image",
            TokenKind::Action => "action",
            TokenKind::Condition => "condition",
            TokenKind::EndOfInput => "end of input",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds() {
        assert_eq!(Token::Number(1).kind(), TokenKind::Number);
        assert_eq!(Token::Text("a".to_string()).kind(), TokenKind::Text);
        assert_eq!(Token::Line('=').kind(), TokenKind::Line);
        assert_eq!(Token::LineBreak.kind(), TokenKind::LineBreak);
        assert_eq!(Token::Button("a".to_string()).kind(), TokenKind::Button);
        assert_eq!(Token::Image("a".to_string()).kind(), TokenKind::Image);
        assert_eq!(Token::Action("a".to_string()).kind(), TokenKind::Action);
        assert_eq!(Token::Condition("a".to_string()).kind(), TokenKind::Condition);
        assert_eq!(Token::EndOfInput.kind(), TokenKind::EndOfInput);
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Number(1).is(TokenKind::Number));
        assert!(!Token::Number(1).is(TokenKind::Text));

        assert!(Token::Button("a".to_string()).is_interaction());
        assert!(Token::Image("a".to_string()).is_interaction());
        assert!(Token::Action("a".to_string()).is_interaction());
        assert!(!Token::Text("a".to_string()).is_interaction());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Number(12).to_string(), "<number:12>");
        assert_eq!(Token::Text("Hello".to_string()).to_string(), "<text:Hello>");
        assert_eq!(Token::Line('=').to_string(), "<line:=>");
        assert_eq!(Token::LineBreak.to_string(), "<linebreak>");
        assert_eq!(Token::Condition("start".to_string()).to_string(), "<condition:start>");
        assert_eq!(Token::EndOfInput.to_string(), "<end-of-input>");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Line.to_string(), "line");
        assert_eq!(TokenKind::LineBreak.to_string(), "line break");
        assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
    }
}
