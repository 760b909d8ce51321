use super::*;

#[test]
fn parses_once_and_shares() {
    let cache = ExpressionCache::new();
    let options = ParseOptions::default();
    let first = cache.get_or_parse("$<CONFIG>", &options);
    let second = cache.get_or_parse("$<CONFIG>", &options);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn invalidate_forces_reparse() {
    let cache = ExpressionCache::new();
    let options = ParseOptions::default();
    let first = cache.get_or_parse("a$<1:b>", &options);
    assert!(cache.invalidate("a$<1:b>"));
    assert!(!cache.invalidate("a$<1:b>"));
    let second = cache.get_or_parse("a$<1:b>", &options);
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
}

#[test]
fn clear_empties() {
    let cache = ExpressionCache::new();
    let options = ParseOptions::default();
    cache.get_or_parse("x", &options);
    cache.get_or_parse("y", &options);
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn nesting_limit_is_part_of_the_key() {
    let cache = ExpressionCache::new();
    let source = "$<1:$<1:$<1:x>>>";
    let shallow = cache.get_or_parse(source, &ParseOptions { max_nesting_depth: 2 });
    assert!(shallow.nesting_overflow().is_some());

    let options = ParseOptions::default();
    let deep = cache.get_or_parse(source, &options);
    assert!(deep.nesting_overflow().is_none());
    assert!(Arc::ptr_eq(&deep, &cache.get_or_parse(source, &options)));
    assert_eq!(cache.len(), 1);
}
