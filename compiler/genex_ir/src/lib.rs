//! Genex IR - shared data types for the generator-expression engine.
//!
//! Every phase crate depends on this one and nothing else from the
//! workspace, so external tooling (highlighters, linters for property
//! values) can consume tokens and trees without pulling in the evaluator.
//!
//! - [`Token`] / [`TokenList`]: lexer output, flat and nesting-free
//! - [`ExprNode`] / [`ExpressionTree`]: parser output, immutable after parse
//! - [`TargetId`]: opaque target identity used as a map key
//! - [`Arity`]: parameter-count contract of a named operation

mod arity;
mod node;
mod span;
mod target;
mod token;

pub use arity::Arity;
pub use node::{ExprNode, ExpressionTree, NestingOverflow, OperationName, OperationNode};
pub use span::{Span, SpanError};
pub use target::TargetId;
pub use token::{Token, TokenKind, TokenList};

/// Opening marker of a generator expression.
pub const EXPRESSION_START: &str = "$<";
