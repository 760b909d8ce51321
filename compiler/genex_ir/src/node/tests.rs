use super::*;
use pretty_assertions::assert_eq;

fn op(name: &str, parameters: Vec<Vec<ExprNode>>) -> ExprNode {
    ExprNode::Operation(OperationNode::new(
        OperationName::Static(name.to_string()),
        parameters,
        Span::DUMMY,
    ))
}

#[test]
fn test_plain_tree_is_identity_shaped() {
    let tree = ExpressionTree::plain("a;b;c");
    assert!(!tree.needs_evaluation());
    assert_eq!(tree.nodes(), &[ExprNode::text("a;b;c")]);
    assert_eq!(tree.source(), "a;b;c");
}

#[test]
fn test_plain_empty_tree_has_no_nodes() {
    assert!(ExpressionTree::plain("").nodes().is_empty());
}

#[test]
fn test_operation_count_includes_nested() {
    let nodes = vec![
        ExprNode::text("x"),
        op(
            "A",
            vec![vec![op("B", vec![vec![ExprNode::text("x")]])], vec![]],
        ),
    ];
    let tree = ExpressionTree::new("x$<A:$<B:x>,>", nodes);
    assert_eq!(tree.operation_count(), 2);
}

#[test]
fn test_slice_returns_original_spelling() {
    let tree = ExpressionTree::new("pre$<X>post", Vec::new());
    assert_eq!(tree.slice(Span::new(3, 7)), "$<X>");
    assert_eq!(tree.slice(Span::new(30, 70)), "");
}

#[test]
fn test_overflowed_tree_keeps_text() {
    let overflow = NestingOverflow { depth: 9, limit: 4 };
    let tree = ExpressionTree::overflowed("$<$<", overflow);
    assert!(tree.needs_evaluation());
    assert_eq!(tree.nesting_overflow(), Some(overflow));
    assert_eq!(tree.nodes()[0].as_text(), Some("$<$<"));
}
