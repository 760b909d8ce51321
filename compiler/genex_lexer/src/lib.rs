//! Lexer for generator expressions.
//!
//! Splits a raw property value into a flat token stream. `$<` always opens
//! an expression; `:`, `,` and `>` are structural only while at least one
//! expression is open and are literal text everywhere else. The lexer is
//! purely mechanical: an expression that is never closed is not an error,
//! it is the parser's job to degrade it back to text.
//!
//! The concatenated text of all tokens is always the input, byte for byte.

mod cursor;
mod scan;

use cursor::Cursor;
use genex_ir::{Span, Token, TokenKind, TokenList};

pub use scan::{find_expression, find_expression_from, matching_close, starts_with_expression};

/// Tokenize `input`.
pub fn tokenize(input: &str) -> TokenList<'_> {
    let mut lexer = Lexer::new(input);
    lexer.run();
    TokenList::new(input, lexer.tokens, lexer.saw_expression)
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    /// Start of the pending text run.
    text_start: usize,
    /// Number of currently open `$<`.
    open: usize,
    saw_expression: bool,
    len: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(input.as_bytes()),
            tokens: Vec::new(),
            text_start: 0,
            open: 0,
            saw_expression: false,
            len: input.len(),
        }
    }

    fn run(&mut self) {
        loop {
            let next = if self.open == 0 {
                self.cursor.next_dollar()
            } else {
                self.cursor.next_structural()
            };
            let Some(at) = next else {
                break;
            };
            match self.cursor.byte_at(at) {
                Some(b'$') if self.cursor.byte_at(at + 1) == Some(b'<') => {
                    self.emit(TokenKind::BeginExpression, at, 2);
                    self.open += 1;
                    self.saw_expression = true;
                }
                Some(b'>') if self.open > 0 => {
                    self.emit(TokenKind::EndExpression, at, 1);
                    self.open -= 1;
                }
                Some(b':') if self.open > 0 => self.emit(TokenKind::Colon, at, 1),
                Some(b',') if self.open > 0 => self.emit(TokenKind::Comma, at, 1),
                // A lone `$` is text.
                _ => self.cursor.seek(at + 1),
            }
        }
        self.cursor.seek(self.len);
        self.flush_text(self.cursor.pos());
    }

    /// Flush pending text before `at`, then push a structural token of
    /// `width` bytes.
    fn emit(&mut self, kind: TokenKind, at: usize, width: usize) {
        self.flush_text(at);
        self.tokens.push(Token::new(kind, Span::new(at, at + width)));
        self.cursor.seek(at + width);
        self.text_start = self.cursor.pos();
    }

    fn flush_text(&mut self, end: usize) {
        if end > self.text_start {
            self.tokens
                .push(Token::new(TokenKind::Text, Span::new(self.text_start, end)));
        }
        self.text_start = end;
    }
}
