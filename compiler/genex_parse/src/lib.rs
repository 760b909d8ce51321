//! Genex Parser - builds evaluator trees from lexer tokens.
//!
//! The grammar is small enough that the parser never reports errors:
//!
//! ```text
//! content    := (TEXT | expression)*
//! expression := '$<' identifier (':' parameters)? '>'
//! identifier := (TEXT | expression | ',')*
//! parameters := param (',' param)*
//! param      := (TEXT | expression | ':')*
//! ```
//!
//! A comma inside the identifier and any colon after the first belong to
//! the surrounding text. An expression that runs out of input before its
//! `>` is rebuilt as literal text (see [`recovery`]).
//!
//! Recursion depth is bounded twice: [`ParseOptions::max_nesting_depth`]
//! refuses pathological input up front, and every nested expression runs
//! under [`genex_stack::ensure_sufficient_stack`].

mod cursor;
mod recovery;

use genex_ir::{
    ExprNode, ExpressionTree, NestingOverflow, OperationName, OperationNode, Span, TokenKind,
    TokenList,
};
use tracing::debug;

use cursor::Cursor;
use recovery::{push_text, rebuild_unterminated};

/// Default bound on `$<` nesting.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Parser configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest `$<` nesting accepted. Deeper input yields a tree that
    /// fails at evaluation time instead of being parsed.
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Parse `source` with default options.
pub fn parse(source: &str) -> ExpressionTree {
    parse_with(source, &ParseOptions::default())
}

/// Parse `source`.
///
/// Input without `$<` short-circuits to a plain tree whose evaluation is
/// the identity.
pub fn parse_with(source: &str, options: &ParseOptions) -> ExpressionTree {
    let tokens = genex_lexer::tokenize(source);
    if !tokens.saw_expression() {
        return ExpressionTree::plain(source);
    }

    let depth = max_nesting(&tokens);
    if depth > options.max_nesting_depth {
        debug!(
            depth,
            limit = options.max_nesting_depth,
            "expression nests past limit"
        );
        return ExpressionTree::overflowed(
            source,
            NestingOverflow {
                depth,
                limit: options.max_nesting_depth,
            },
        );
    }

    ExpressionTree::new(source, parse_tokens(&tokens))
}

/// Parse an already-lexed token stream into a forest.
pub fn parse_tokens(tokens: &TokenList<'_>) -> Vec<ExprNode> {
    let mut parser = Parser {
        cursor: Cursor::new(tokens),
    };
    let mut out = Vec::new();
    while !parser.cursor.is_at_end() {
        parser.parse_content(&mut out);
    }
    out
}

/// Deepest simultaneous `$<` nesting in `tokens`.
fn max_nesting(tokens: &TokenList<'_>) -> usize {
    let mut open = 0usize;
    let mut deepest = 0usize;
    for token in tokens.tokens() {
        match token.kind {
            TokenKind::BeginExpression => {
                open += 1;
                deepest = deepest.max(open);
            }
            TokenKind::EndExpression => open = open.saturating_sub(1),
            TokenKind::Text | TokenKind::Colon | TokenKind::Comma => {}
        }
    }
    deepest
}

struct Parser<'t, 'src> {
    cursor: Cursor<'t, 'src>,
}

impl Parser<'_, '_> {
    /// Consume one text token or one whole expression into `out`.
    fn parse_content(&mut self, out: &mut Vec<ExprNode>) {
        let Some(token) = self.cursor.current() else {
            return;
        };
        self.cursor.advance();
        if token.kind == TokenKind::BeginExpression {
            genex_stack::ensure_sufficient_stack(|| {
                self.parse_expression(out, token.span.start);
            });
        } else {
            // Structural tokens only reach here outside any expression,
            // where the lexer already treats them as text.
            push_text(out, self.cursor.text(&token));
        }
    }

    /// Parse after a consumed `$<` that started at byte `start`.
    fn parse_expression(&mut self, out: &mut Vec<ExprNode>, start: usize) {
        let mut identifier = Vec::new();
        loop {
            match self.cursor.current_kind() {
                None | Some(TokenKind::Colon | TokenKind::EndExpression) => break,
                Some(TokenKind::Comma) => {
                    push_text(&mut identifier, ",");
                    self.cursor.advance();
                }
                Some(TokenKind::Text | TokenKind::BeginExpression) => {
                    self.parse_content(&mut identifier);
                }
            }
        }

        match self.cursor.current() {
            None => {
                rebuild_unterminated(out, identifier, None);
                return;
            }
            Some(token) if token.kind == TokenKind::EndExpression => {
                self.cursor.advance();
                out.push(operation(identifier, Vec::new(), start, token.span.end));
                return;
            }
            Some(_) => self.cursor.advance(),
        }

        let mut parameters: Vec<Vec<ExprNode>> = vec![Vec::new()];
        loop {
            let Some(token) = self.cursor.current() else {
                rebuild_unterminated(out, identifier, Some(parameters));
                return;
            };
            match token.kind {
                TokenKind::EndExpression => {
                    self.cursor.advance();
                    out.push(operation(identifier, parameters, start, token.span.end));
                    return;
                }
                TokenKind::Comma => {
                    self.cursor.advance();
                    parameters.push(Vec::new());
                }
                TokenKind::Colon => {
                    self.cursor.advance();
                    if let Some(last) = parameters.last_mut() {
                        push_text(last, ":");
                    }
                }
                TokenKind::Text | TokenKind::BeginExpression => {
                    if let Some(last) = parameters.last_mut() {
                        self.parse_content(last);
                    }
                }
            }
        }
    }
}

fn operation(
    identifier: Vec<ExprNode>,
    parameters: Vec<Vec<ExprNode>>,
    start: usize,
    end: usize,
) -> ExprNode {
    ExprNode::Operation(OperationNode::new(
        operation_name(identifier),
        parameters,
        Span::new(start, end),
    ))
}

/// A name made only of text is static; anything else is resolved when
/// the expression is evaluated.
fn operation_name(identifier: Vec<ExprNode>) -> OperationName {
    match identifier.as_slice() {
        [] => OperationName::Static(String::new()),
        [ExprNode::Text(name)] => OperationName::Static(name.clone()),
        _ => OperationName::Computed(identifier),
    }
}

#[cfg(test)]
mod tests;
