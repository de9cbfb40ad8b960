//! Lexer for type descriptors.
//!
//! The lexer converts descriptor text such as
//! `struct<a: int32, b: list<item: string>>` into a stream of tokens.

use crate::token::{Bracket, Parameters, Span, Token, TokenKind};

/// Lexer for descriptor strings.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::new(start, start, start_column));
        };

        let kind = match c {
            '<' => {
                self.advance();
                TokenKind::LAngle
            }
            '>' => {
                self.advance();
                TokenKind::RAngle
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            ':' => {
                self.advance();
                TokenKind::Colon
            }
            '[' => self.scan_params(Bracket::Square),
            '(' => self.scan_params(Bracket::Round),
            '`' | '"' => self.scan_quoted(c),
            ']' | ')' => {
                self.advance();
                TokenKind::Error(format!("unbalanced '{c}'"))
            }
            _ => self.scan_ident(),
        };

        Token::new(kind, Span::new(start, self.position, start_column))
    }

    /// Tokenizes all source, ending with an `Eof` token.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            self.column += 1;
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans a bare word.
    fn scan_ident(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if !is_ident_char(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Ident(text)
    }

    /// Scans a quoted name. A doubled quote character stands for itself.
    fn scan_quoted(&mut self, quote: char) -> TokenKind {
        self.advance(); // opening quote
        let mut text = String::new();
        loop {
            match self.peek_char() {
                None => return TokenKind::Error("unterminated quoted name".to_string()),
                Some(c) if c == quote => {
                    self.advance();
                    if self.peek_char() == Some(quote) {
                        text.push(quote);
                        self.advance();
                    } else {
                        return TokenKind::Quoted(text);
                    }
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Scans a bracketed parameter list, keeping nested brackets verbatim.
    fn scan_params(&mut self, bracket: Bracket) -> TokenKind {
        let (open, close) = (bracket.open(), bracket.close());
        self.advance(); // opening bracket
        let mut depth = 1usize;
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            self.advance();
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    return TokenKind::Params(Parameters::new(text.trim(), bracket));
                }
            }
            text.push(c);
        }
        TokenKind::Error(format!("unterminated '{open}'"))
    }
}

/// Returns true if the character can appear in a bare word.
fn is_ident_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '<' | '>' | ',' | ':' | '[' | ']' | '(' | ')' | '`' | '"')
}
