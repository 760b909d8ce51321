use super::*;
use pretty_assertions::assert_eq;

fn expand(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    expand_list(input, &mut out);
    out
}

// === expand_list ===

#[test]
fn expand_splits_and_drops_empty() {
    assert_eq!(expand("a;;b;"), vec!["a", "b"]);
    assert!(expand("").is_empty());
    assert!(expand(";;").is_empty());
}

#[test]
fn expand_honours_escaped_separator() {
    assert_eq!(expand("a\\;b;c"), vec!["a;b", "c"]);
}

#[test]
fn expand_keeps_other_backslashes() {
    assert_eq!(expand("C:\\dir;x"), vec!["C:\\dir", "x"]);
}

#[test]
fn expand_does_not_split_inside_brackets() {
    assert_eq!(expand("[a;b];c"), vec!["[a;b]", "c"]);
    assert_eq!(expand("[[a;b]];c"), vec!["[[a;b]]", "c"]);
}

#[test]
fn expand_appends_to_existing_output() {
    let mut out = vec!["first".to_string()];
    expand_list("second", &mut out);
    assert_eq!(out, vec!["first", "second"]);
}

// === strip_empty_list_elements ===

#[test]
fn strip_collapses_runs_and_trailing() {
    assert_eq!(strip_empty_list_elements("a;;b;"), "a;b");
    assert_eq!(strip_empty_list_elements("a;;;b"), "a;b");
}

#[test]
fn strip_drops_leading_separators() {
    assert_eq!(strip_empty_list_elements(";;a;b"), "a;b");
}

#[test]
fn strip_without_separator_borrows() {
    assert!(matches!(strip_empty_list_elements("abc"), Cow::Borrowed("abc")));
}

#[test]
fn strip_all_separators_is_empty() {
    assert_eq!(strip_empty_list_elements(";;;"), "");
}
