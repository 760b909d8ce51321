//! Token cursor for the parser.

use genex_ir::{Token, TokenKind, TokenList};

/// Position in a token stream.
pub struct Cursor<'t, 'src> {
    tokens: &'t TokenList<'src>,
    pos: usize,
}

impl<'t, 'src> Cursor<'t, 'src> {
    pub fn new(tokens: &'t TokenList<'src>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Source text of `token`.
    #[inline]
    pub fn text(&self, token: &Token) -> &'src str {
        self.tokens.text(token)
    }
}
