use super::*;

#[test]
fn earliest_of_prefers_minimum() {
    assert_eq!(earliest_of(Some(4), Some(2)), Some(2));
    assert_eq!(earliest_of(None, Some(2)), Some(2));
    assert_eq!(earliest_of(Some(4), None), Some(4));
    assert_eq!(earliest_of(None, None), None);
}

#[test]
fn next_dollar_skips_structural_bytes() {
    let cursor = Cursor::new(b"a:b,c>d$<");
    assert_eq!(cursor.next_dollar(), Some(7));
}

#[test]
fn next_structural_finds_comma_before_other_bytes() {
    let cursor = Cursor::new(b"ab,c:d");
    assert_eq!(cursor.next_structural(), Some(2));
}

#[test]
fn positions_are_absolute_after_seek() {
    let mut cursor = Cursor::new(b"x>y>z");
    cursor.seek(2);
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.next_structural(), Some(3));
}

#[test]
fn seek_clamps_to_end() {
    let mut cursor = Cursor::new(b"abc");
    cursor.seek(99);
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.next_dollar(), None);
    assert_eq!(cursor.byte_at(3), None);
}
