//! Tokenizer for map files.
//!
//! Splits source text into identifiers, the `=` symbol and newlines. Spaces,
//! tabs and carriage returns are skipped; newlines are significant because
//! every line declares exactly one city.

use std::fmt;

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of visible characters other than `=`.
    Identifier,
    /// The `=` symbol.
    Equals,
    Newline,
    /// A single character that can start no other token.
    Unknown,
    Eof,
}

/// A token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// Position of the first character
    pub start: Position,
    /// Position immediately after the last character
    pub end: Position,
}

/// Lazy tokenizer over a borrowed source string.
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    source: &'src str,
    /// Current byte offset in source
    offset: usize,
    position: Position,
    finished: bool,
}

/// Characters allowed in an identifier: anything visible in ASCII except
/// `=`, plus letters from any script.
pub fn is_identifier_char(c: char) -> bool {
    c != '=' && (c.is_ascii_graphic() || c.is_alphabetic())
}

fn is_skipped_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::START,
            finished: false,
        }
    }

    /// Position immediately after the last consumed character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns an [`TokenKind::Eof`] token positioned at the end of input.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        let begin = self.offset;
        let start = self.position;

        let Some(c) = self.peek() else {
            return Token {
                kind: TokenKind::Eof,
                text: "",
                start,
                end: start,
            };
        };

        let kind = match c {
            '\n' => {
                self.advance();
                TokenKind::Newline
            }
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            c if is_identifier_char(c) => {
                while self.peek().is_some_and(is_identifier_char) {
                    self.advance();
                }
                TokenKind::Identifier
            }
            _ => {
                self.advance();
                TokenKind::Unknown
            }
        };

        Token {
            kind,
            text: &self.source[begin..self.offset],
            start,
            end: self.position,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_skipped_whitespace) {
            self.advance();
        }
    }
}

/// Yields every token up to, but not including, end of input.
impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}
