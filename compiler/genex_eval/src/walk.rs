//! Tree walk.
//!
//! Nodes are evaluated left to right and concatenated. The first error
//! aborts the walk: there is no partial output.

use std::borrow::Cow;

use genex_diagnostic::{EvalError, EvalResult};
use genex_ir::{ExprNode, ExpressionTree, OperationName, OperationNode};
use smallvec::SmallVec;
use tracing::trace;

use crate::{DagChecker, EvalContext, OperationDefinition};

/// Evaluate a whole tree.
pub(crate) fn evaluate_tree(
    tree: &ExpressionTree,
    ctx: &mut EvalContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> EvalResult {
    if let Some(overflow) = tree.nesting_overflow() {
        return Err(EvalError::nesting_too_deep(overflow.depth, overflow.limit)
            .in_expression(tree.source()));
    }
    evaluate_nodes(tree, tree.nodes(), ctx, dag)
}

fn evaluate_nodes(
    tree: &ExpressionTree,
    nodes: &[ExprNode],
    ctx: &mut EvalContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> EvalResult {
    // Single-node forests are the common case: avoid the extra copy.
    if let [node] = nodes {
        return evaluate_node(tree, node, ctx, dag);
    }
    let mut out = String::new();
    for node in nodes {
        out.push_str(&evaluate_node(tree, node, ctx, dag)?);
    }
    Ok(out)
}

fn evaluate_node(
    tree: &ExpressionTree,
    node: &ExprNode,
    ctx: &mut EvalContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> EvalResult {
    match node {
        ExprNode::Text(text) => Ok(text.clone()),
        ExprNode::Operation(op) => genex_stack::ensure_sufficient_stack(|| {
            let expression = tree.slice(op.span);
            ctx.enter().map_err(|err| err.in_expression(expression))?;
            let result = evaluate_operation(tree, op, ctx, dag)
                .map_err(|err| err.in_expression(expression));
            ctx.leave();
            result
        }),
    }
}

fn evaluate_operation(
    tree: &ExpressionTree,
    op: &OperationNode,
    ctx: &mut EvalContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> EvalResult {
    let name: Cow<'_, str> = match &op.name {
        OperationName::Static(name) => Cow::Borrowed(name),
        OperationName::Computed(parts) => Cow::Owned(evaluate_nodes(tree, parts, ctx, dag)?),
    };

    let engine = ctx.engine();
    let Some(definition) = engine.registry().get(&name) else {
        return Err(EvalError::unknown_operation(name));
    };
    trace!(operation = definition.name(), params = op.parameters.len(), "dispatch");

    let arity = definition.arity();
    let count = effective_count(definition, op.parameters.len());
    if !definition.generates_content() {
        if count == 0 && arity.min() > 0 {
            return Err(EvalError::invalid_parameter(
                definition.name(),
                format!("$<{}> expression requires a parameter.", definition.name()),
            ));
        }
        return Ok(String::new());
    }
    if !arity.accepts(count) {
        return Err(EvalError::arity(definition.name(), arity, count));
    }

    let params = evaluate_parameters(tree, definition, &op.parameters, ctx, dag)?;
    definition.evaluate(&params, ctx, dag, tree.slice(op.span))
}

/// Parameter count as the operation sees it, after arbitrary content is
/// folded into the last declared parameter.
fn effective_count(definition: &dyn OperationDefinition, written: usize) -> usize {
    match definition.arity().max() {
        Some(max) if max > 0 && definition.accepts_arbitrary_content() => written.min(max),
        _ => written,
    }
}

fn evaluate_parameters(
    tree: &ExpressionTree,
    definition: &dyn OperationDefinition,
    parameters: &[Vec<ExprNode>],
    ctx: &mut EvalContext<'_>,
    dag: Option<&DagChecker<'_>>,
) -> Result<SmallVec<[String; 4]>, EvalError> {
    let mut values: SmallVec<[String; 4]> = SmallVec::with_capacity(parameters.len());
    let joined_from = effective_count(definition, parameters.len()).saturating_sub(1);

    for (index, parameter) in parameters.iter().enumerate() {
        if index > 0 && !definition.should_evaluate_next_parameter(&values) {
            values.push(String::new());
            continue;
        }
        let value = evaluate_nodes(tree, parameter, ctx, dag)?;
        if definition.accepts_arbitrary_content() && index > joined_from {
            if let Some(last) = values.last_mut() {
                last.push(',');
                last.push_str(&value);
                continue;
            }
        }
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests;
