//! Byte cursor over the raw property value.
//!
//! The lexer only stops on a handful of bytes: `$` while outside any
//! expression, and `$ > : ,` while inside one. Everything in between is
//! literal text, so the cursor jumps straight to the next candidate with
//! `memchr` instead of stepping byte by byte.

use memchr::{memchr, memchr3};

/// Returns the earliest (minimum) of two optional positions.
///
/// `memchr3` handles at most three needles; the fourth structural byte is
/// searched separately and the results combined here.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Move to `pos`, clamped to the end of input.
    #[inline]
    pub(crate) fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }

    #[inline]
    pub(crate) fn byte_at(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    #[inline]
    fn rest(&self) -> &'a [u8] {
        self.bytes.get(self.pos..).unwrap_or_default()
    }

    /// Absolute position of the next `$` at or after the cursor.
    pub(crate) fn next_dollar(&self) -> Option<usize> {
        memchr(b'$', self.rest()).map(|offset| self.pos + offset)
    }

    /// Absolute position of the next `$`, `>`, `:` or `,` at or after the
    /// cursor.
    pub(crate) fn next_structural(&self) -> Option<usize> {
        let rest = self.rest();
        earliest_of(memchr3(b'$', b'>', b':', rest), memchr(b',', rest))
            .map(|offset| self.pos + offset)
    }
}

#[cfg(test)]
mod tests;
