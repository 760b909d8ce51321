//! Nesting-aware scanning over raw strings.
//!
//! List splitting and interface preprocessing work on whole strings rather
//! than token streams, but must agree with the lexer on where an expression
//! starts and ends. They share these helpers.

use genex_ir::EXPRESSION_START;
use memchr::memmem;

/// Whether `input` begins with `$<`.
#[inline]
pub fn starts_with_expression(input: &str) -> bool {
    input.starts_with(EXPRESSION_START)
}

/// Offset of the first `$<` in `input` from `from` onward.
pub fn find_expression_from(input: &str, from: usize) -> Option<usize> {
    let haystack = input.as_bytes().get(from..)?;
    memmem::find(haystack, EXPRESSION_START.as_bytes()).map(|offset| from + offset)
}

/// Offset of the first `$<` that is followed by a `>` somewhere later.
///
/// This is the cheap "could this string need evaluation at all" check used
/// before building a compiled expression.
pub fn find_expression(input: &str) -> Option<usize> {
    let open = find_expression_from(input, 0)?;
    let after = input.as_bytes().get(open..)?;
    memchr::memchr(b'>', after).map(|_| open)
}

/// Offset of the `>` closing an expression whose `$<` ends right before
/// `from`. Nested `$<` increments the depth before the next `>` is allowed
/// to decrement it. Returns `None` when the expression is unterminated.
pub fn matching_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = from;
    while let Some(&b) = bytes.get(i) {
        if b == b'$' && bytes.get(i + 1) == Some(&b'<') {
            depth += 1;
            i += 2;
            continue;
        }
        if b == b'>' {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}
