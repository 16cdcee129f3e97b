//! Implementation of the page flow lexer
//!
//! The lexer keeps the full decoded input, a cursor position and the code
//! point at the cursor. `consume` advances by exactly one code point;
//! `match_char` consumes the current code point iff it equals the expected
//! one. `next_token` dispatches on the leading character in a fixed
//! priority order, first match wins.

use crate::flow::error::LexError;
use crate::flow::lexer::tokens::Token;

const GERMAN_LETTERS: &str = "äöüÄÖÜß";

/// Character-level tokenizer for page flow scripts
pub struct FlowLexer {
    input: Vec<char>,
    position: usize,
    current: Option<char>,
}

impl FlowLexer {
    /// Create a lexer over an already decoded source string
    pub fn new(source: &str) -> Self {
        let input: Vec<char> = source.chars().collect();
        let current = input.first().copied();
        FlowLexer {
            input,
            position: 0,
            current,
        }
    }

    /// Produce the next token, or `EndOfInput` once the cursor has passed
    /// the last code point. Calling again after `EndOfInput` keeps
    /// returning `EndOfInput`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        while let Some(current) = self.current {
            if Self::is_space(current) {
                self.skip_whitespace();
                continue;
            }
            if Self::is_linebreak(current) {
                self.consume();
                return Ok(Token::LineBreak);
            }
            return match current {
                '=' => self.line('='),
                '-' => self.line('-'),
                c if Self::is_letter(c) => Ok(self.text()),
                c if c.is_ascii_digit() => self.number(),
                '[' => Ok(Token::Button(self.wrapped('[', ']')?)),
                '{' => Ok(Token::Image(self.wrapped('{', '}')?)),
                '<' => Ok(Token::Action(self.wrapped('<', '>')?)),
                '(' => self.condition(),
                '.' | '\\' => Ok(self.text()),
                c => Err(LexError::InvalidCharacter {
                    character: c,
                    code_point: c as u32,
                }),
            };
        }
        Ok(Token::EndOfInput)
    }

    fn consume(&mut self) {
        self.position += 1;
        self.current = self.input.get(self.position).copied();
    }

    fn match_char(&mut self, expected: char) -> Result<(), LexError> {
        match self.current {
            Some(c) if c == expected => {
                self.consume();
                Ok(())
            }
            found => Err(LexError::UnexpectedCharacter { expected, found }),
        }
    }

    fn read_while<F: Fn(char) -> bool>(&mut self, predicate: F) -> String {
        let mut buffer = String::new();
        while let Some(c) = self.current {
            if !predicate(c) {
                break;
            }
            buffer.push(c);
            self.consume();
        }
        buffer
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(c) if Self::is_space(c)) {
            self.consume();
        }
    }

    /// A separator line: the rule character twice, then any further run of it
    fn line(&mut self, rule: char) -> Result<Token, LexError> {
        self.match_char(rule)?;
        self.match_char(rule)?;
        while self.current == Some(rule) {
            self.consume();
        }
        Ok(Token::Line(rule))
    }

    /// A digit run terminated by a literal `.`
    fn number(&mut self) -> Result<Token, LexError> {
        let digits = self.read_while(|c| c.is_ascii_digit());
        self.match_char('.')?;
        let value = digits
            .parse::<i64>()
            .map_err(|_| LexError::InvalidNumber(digits))?;
        Ok(Token::Number(value))
    }

    /// A bracketed interaction label: letters and embedded spaces between
    /// the head and tail delimiters
    fn wrapped(&mut self, head: char, tail: char) -> Result<String, LexError> {
        self.match_char(head)?;
        let buffer = self.read_while(|c| Self::is_letter(c) || c == ' ');
        self.match_char(tail)?;
        Ok(buffer)
    }

    /// A condition guard: `(`, `:`, a run of letters, `)`
    fn condition(&mut self) -> Result<Token, LexError> {
        self.match_char('(')?;
        self.match_char(':')?;
        let buffer = self.read_while(Self::is_letter);
        self.match_char(')')?;
        Ok(Token::Condition(buffer))
    }

    /// A maximal prose run. The run stops at the first unescaped line break
    /// or `(`; a `\` consumes exactly one following character into the run
    /// unconditionally, so delimiter characters can appear literally.
    fn text(&mut self) -> Token {
        let mut buffer = String::new();
        while let Some(c) = self.current {
            if Self::is_linebreak(c) || c == '(' {
                break;
            }
            if c == '\\' {
                self.consume();
                if let Some(escaped) = self.current {
                    buffer.push(escaped);
                    self.consume();
                }
                continue;
            }
            buffer.push(c);
            self.consume();
        }
        Token::Text(buffer)
    }

    fn is_letter(c: char) -> bool {
        c.is_ascii_alphabetic() || GERMAN_LETTERS.contains(c)
    }

    fn is_linebreak(c: char) -> bool {
        c == '\r' || c == '\n'
    }

    /// Non-breaking whitespace: space, tab, vertical tab, form feed
    fn is_space(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\u{b}' | '\u{c}')
    }
}
