//! Text merging and unterminated-expression recovery.
//!
//! A `$<` that never reaches its matching `>` is not a parse error. The
//! opening marker, the name, and the separators that were consumed are
//! turned back into literal text; nested expressions that did complete
//! stay evaluable.

use genex_ir::{ExprNode, EXPRESSION_START};

/// Append literal text, extending a trailing text node.
pub(crate) fn push_text(out: &mut Vec<ExprNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(ExprNode::Text(last)) = out.last_mut() {
        last.push_str(text);
        return;
    }
    out.push(ExprNode::text(text));
}

/// Append `nodes`, merging text at the seam.
pub(crate) fn extend_nodes(out: &mut Vec<ExprNode>, nodes: Vec<ExprNode>) {
    for node in nodes {
        match node {
            ExprNode::Text(text) => push_text(out, &text),
            operation @ ExprNode::Operation(_) => out.push(operation),
        }
    }
}

/// Rebuild an unterminated expression as text around its parsed parts.
///
/// `parameters` is `None` when input ended before the `:` separator.
pub(crate) fn rebuild_unterminated(
    out: &mut Vec<ExprNode>,
    identifier: Vec<ExprNode>,
    parameters: Option<Vec<Vec<ExprNode>>>,
) {
    push_text(out, EXPRESSION_START);
    extend_nodes(out, identifier);
    let Some(parameters) = parameters else {
        return;
    };
    push_text(out, ":");
    for (index, parameter) in parameters.into_iter().enumerate() {
        if index > 0 {
            push_text(out, ",");
        }
        extend_nodes(out, parameter);
    }
}
