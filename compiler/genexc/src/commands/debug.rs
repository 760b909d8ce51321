//! `lex` and `parse`: inspect the front end.

use genex_ir::{ExprNode, OperationName};
use genex_lexer::tokenize;
use genex_parse::{parse_with, ParseOptions};

use super::Report;

/// Token stream of `input`, one token per line.
pub fn lex(input: &str) -> Report {
    let tokens = tokenize(input);
    let mut lines = vec![format!("{} tokens", tokens.len())];
    for token in tokens.tokens() {
        lines.push(format!(
            "  {} @ {} {:?}",
            token.kind,
            token.span,
            tokens.text(token)
        ));
    }
    Report::success(lines.join("\n"))
}

/// Indented evaluator tree of `input`.
pub fn parse(input: &str, max_depth: Option<usize>) -> Report {
    let mut options = ParseOptions::default();
    if let Some(depth) = max_depth {
        options.max_nesting_depth = depth;
    }
    let tree = parse_with(input, &options);
    if let Some(overflow) = tree.nesting_overflow() {
        return Report::failure(vec![format!(
            "expression nests {} levels deep, more than the limit of {}",
            overflow.depth, overflow.limit
        )]);
    }

    let mut lines = vec![format!(
        "{} nodes, {} operations",
        tree.nodes().len(),
        tree.operation_count()
    )];
    write_nodes(tree.nodes(), 1, &mut lines);
    Report::success(lines.join("\n"))
}

fn write_nodes(nodes: &[ExprNode], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        let op = match node {
            ExprNode::Text(text) => {
                lines.push(format!("{indent}text {text:?}"));
                continue;
            }
            ExprNode::Operation(op) => op,
        };
        match &op.name {
            OperationName::Static(name) => {
                lines.push(format!("{indent}op {name} @ {}", op.span));
            }
            OperationName::Computed(parts) => {
                lines.push(format!("{indent}op <computed> @ {}", op.span));
                lines.push(format!("{indent}  name"));
                write_nodes(parts, depth + 2, lines);
            }
        }
        for (index, parameter) in op.parameters.iter().enumerate() {
            lines.push(format!("{indent}  param {index}"));
            write_nodes(parameter, depth + 2, lines);
        }
    }
}
