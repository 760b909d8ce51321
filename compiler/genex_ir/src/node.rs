//! Evaluator tree produced by the parser.
//!
//! The tree is an ordered forest: literal text interleaved with operation
//! nodes. Each operation owns its parameters, and each parameter is itself
//! a forest, so `$<A:$<B:x>,y>` nests without any arena indirection.
//!
//! Trees are never mutated after parse and are shared through `Arc`
//! between every compiled expression built from the same string.

use std::sync::Arc;

use crate::Span;

/// A node of the evaluator tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprNode {
    /// Emitted unchanged.
    Text(String),
    /// A `$<...>` span dispatched through the operation registry.
    Operation(OperationNode),
}

impl ExprNode {
    pub fn text(value: impl Into<String>) -> Self {
        ExprNode::Text(value.into())
    }

    /// Literal value, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExprNode::Text(value) => Some(value),
            ExprNode::Operation(_) => None,
        }
    }

    pub fn as_operation(&self) -> Option<&OperationNode> {
        match self {
            ExprNode::Operation(op) => Some(op),
            ExprNode::Text(_) => None,
        }
    }
}

/// Name of an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationName {
    /// Name spelled out literally: `$<CONFIG:...>`.
    Static(String),
    /// Name produced by nested expressions, resolved per evaluation:
    /// `$<$<CONFIG:Debug>:-g>` dispatches to `0` or `1`.
    Computed(Vec<ExprNode>),
}

impl OperationName {
    /// Literal name, if known without evaluation.
    pub fn as_static(&self) -> Option<&str> {
        match self {
            OperationName::Static(name) => Some(name),
            OperationName::Computed(_) => None,
        }
    }
}

/// One `$<NAME:p0,p1,...>` span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationNode {
    pub name: OperationName,
    /// `$<NAME>` has no parameters; `$<NAME:>` has one empty parameter.
    pub parameters: Vec<Vec<ExprNode>>,
    /// Location of the whole expression, `$<` through `>`.
    pub span: Span,
}

impl OperationNode {
    pub fn new(name: OperationName, parameters: Vec<Vec<ExprNode>>, span: Span) -> Self {
        OperationNode {
            name,
            parameters,
            span,
        }
    }
}

/// Recorded when input nests deeper than the parser's configured limit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NestingOverflow {
    pub depth: usize,
    pub limit: usize,
}

/// Parsed, immutable form of one property value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionTree {
    source: Arc<str>,
    nodes: Vec<ExprNode>,
    needs_evaluation: bool,
    nesting_overflow: Option<NestingOverflow>,
}

impl ExpressionTree {
    /// Tree for a string with no expression syntax: evaluation is identity.
    pub fn plain(source: &str) -> Self {
        let nodes = if source.is_empty() {
            Vec::new()
        } else {
            vec![ExprNode::text(source)]
        };
        ExpressionTree {
            source: Arc::from(source),
            nodes,
            needs_evaluation: false,
            nesting_overflow: None,
        }
    }

    pub fn new(source: &str, nodes: Vec<ExprNode>) -> Self {
        ExpressionTree {
            source: Arc::from(source),
            nodes,
            needs_evaluation: true,
            nesting_overflow: None,
        }
    }

    /// Tree for input that nests past the configured limit. It keeps the
    /// raw text as a single literal and fails when evaluated.
    pub fn overflowed(source: &str, overflow: NestingOverflow) -> Self {
        ExpressionTree {
            source: Arc::from(source),
            nodes: vec![ExprNode::text(source)],
            needs_evaluation: true,
            nesting_overflow: Some(overflow),
        }
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn nodes(&self) -> &[ExprNode] {
        &self.nodes
    }

    /// False when the input contained no `$<` at all.
    #[inline]
    pub fn needs_evaluation(&self) -> bool {
        self.needs_evaluation
    }

    #[inline]
    pub fn nesting_overflow(&self) -> Option<NestingOverflow> {
        self.nesting_overflow
    }

    /// Source text of `span`, e.g. the original spelling of an operation.
    pub fn slice(&self, span: Span) -> &str {
        self.source.get(span.to_range()).unwrap_or_default()
    }

    /// Number of operation nodes, counting nested ones.
    pub fn operation_count(&self) -> usize {
        fn count(nodes: &[ExprNode]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    ExprNode::Text(_) => 0,
                    ExprNode::Operation(op) => {
                        let name = match &op.name {
                            OperationName::Static(_) => 0,
                            OperationName::Computed(parts) => count(parts),
                        };
                        1 + name + op.parameters.iter().map(|p| count(p)).sum::<usize>()
                    }
                })
                .sum()
        }
        count(&self.nodes)
    }
}

#[cfg(test)]
mod tests;
