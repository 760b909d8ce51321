//! Lexer output.

use std::fmt;

use crate::Span;

/// Kind of a lexed token.
///
/// Tokens carry no nesting information; the parser resolves structure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// A run of literal text.
    Text,
    /// `$<`
    BeginExpression,
    /// `:` inside an open expression.
    Colon,
    /// `,` inside an open expression.
    Comma,
    /// `>` closing an open expression.
    EndExpression,
}

impl TokenKind {
    /// Whether this token separates or closes expression parts.
    #[inline]
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::Colon | TokenKind::Comma | TokenKind::EndExpression
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text => write!(f, "text"),
            TokenKind::BeginExpression => write!(f, "`$<`"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::EndExpression => write!(f, "`>`"),
        }
    }
}

/// A token and its location in the source string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token stream for one source string.
#[derive(Clone, Debug)]
pub struct TokenList<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    saw_expression: bool,
}

impl<'src> TokenList<'src> {
    /// Wrap lexer output.
    pub fn new(source: &'src str, tokens: Vec<Token>, saw_expression: bool) -> Self {
        TokenList {
            source,
            tokens,
            saw_expression,
        }
    }

    /// The string these tokens were produced from.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// True iff at least one `$<` was recognized.
    #[inline]
    pub fn saw_expression(&self) -> bool {
        self.saw_expression
    }

    /// Source text covered by `token`.
    #[inline]
    pub fn text(&self, token: &Token) -> &'src str {
        self.source.get(token.span.to_range()).unwrap_or_default()
    }
}
