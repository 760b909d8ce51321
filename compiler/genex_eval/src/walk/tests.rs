use crate::tests::Fixture;
use crate::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn plain_text_is_identity() {
    let f = Fixture::new();
    assert_eq!(f.ok("no expressions here"), "no expressions here");
    assert_eq!(f.ok(""), "");
}

#[test]
fn nodes_concatenate_in_order() {
    let f = Fixture::new();
    assert_eq!(f.ok("a$<1:b>c$<0:d>e$<BOOL:on>"), "abce1");
}

#[test]
fn unterminated_expression_is_literal() {
    let f = Fixture::new();
    assert_eq!(f.ok("text $<UNCLOSED"), "text $<UNCLOSED");
    assert_eq!(f.ok("$<BOOL:1> $<UNCLOSED:x"), "1 $<UNCLOSED:x");
}

#[test]
fn computed_operation_name() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<$<IF:1,UPPER,LOWER>_CASE:Ab>"), "AB");
    assert_eq!(f.ok("$<$<IF:0,UPPER,LOWER>_CASE:Ab>"), "ab");
}

#[test]
fn unknown_operation_names_the_expression() {
    let f = Fixture::new();
    let err = f.eval("x $<NOPE:y> z").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UnknownOperation { ref name } if name == "NOPE"));
    assert_eq!(err.expression.as_deref(), Some("$<NOPE:y>"));
}

#[test]
fn arity_error_rendering() {
    let f = Fixture::new();
    let err = f.eval("$<BOOL>").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error evaluating generator expression:\n\n  $<BOOL>\n\n\
         $<BOOL> expression requires exactly one parameter."
    );
    assert_eq!(
        f.err("$<STREQUAL:a>"),
        "$<STREQUAL> expression requires 2 comma separated parameters, but got 1."
    );
}

#[test]
fn innermost_expression_is_reported() {
    let f = Fixture::new();
    let err = f.eval("x$<UPPER_CASE:$<BOOL>>").unwrap_err();
    assert_eq!(err.expression.as_deref(), Some("$<BOOL>"));
}

#[test]
fn arbitrary_content_keeps_commas() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<1:a,$<COMMA>,b>"), "a,,,b");
    assert_eq!(f.ok("$<BUILD_INTERFACE:x,y,z>"), "x,y,z");
}

#[test]
fn colon_after_first_is_text() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<1:a:b>"), "a:b");
}

#[test]
fn parse_time_nesting_limit() {
    let f = Fixture::with(|b| b.max_nesting_depth(2));
    assert_eq!(f.ok("$<1:$<1:x>>"), "x");
    let err = f.eval("$<1:$<1:$<1:x>>>").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NestingTooDeep { limit: 2, .. }));
}

#[test]
fn evaluation_depth_counts_property_lookups() {
    let f = Fixture::with(|b| b.max_nesting_depth(3));
    f.model.set_property("a", "P", "$<1:$<1:x>>");
    // Each tree alone nests at most two levels; together they nest four.
    assert_eq!(f.ok("$<TARGET_PROPERTY:a,P>"), "x");
    let err = f.eval("$<1:$<TARGET_PROPERTY:a,P>>").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NestingTooDeep { limit: 3, .. }));
}

#[test]
fn deep_nesting_within_limit() {
    let f = Fixture::new();
    let depth = 200;
    let input = format!("{}x{}", "$<1:".repeat(depth), ">".repeat(depth));
    assert_eq!(f.ok(&input), "x");
}
