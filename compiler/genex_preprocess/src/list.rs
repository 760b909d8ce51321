//! Plain `;`-separated list handling.

use std::borrow::Cow;

/// Split `input` on `;` and append the non-empty elements to `output`.
///
/// `\;` is an escaped separator and becomes a literal `;`. Separators
/// inside `[...]` (at any bracket depth) do not split.
pub fn expand_list(input: &str, output: &mut Vec<String>) {
    if input.is_empty() {
        return;
    }
    let mut element = String::new();
    let mut square_depth = 0usize;
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.peek() == Some(&';') {
                    chars.next();
                    element.push(';');
                } else {
                    element.push('\\');
                }
            }
            '[' => {
                square_depth += 1;
                element.push('[');
            }
            ']' => {
                square_depth = square_depth.saturating_sub(1);
                element.push(']');
            }
            ';' if square_depth == 0 => {
                if !element.is_empty() {
                    output.push(std::mem::take(&mut element));
                }
            }
            other => element.push(other),
        }
    }
    if !element.is_empty() {
        output.push(element);
    }
}

/// Drop empty list elements: leading separators, runs of separators, and
/// one trailing separator.
///
/// ```
/// use genex_preprocess::strip_empty_list_elements;
/// assert_eq!(strip_empty_list_elements("a;;b;"), "a;b");
/// ```
pub fn strip_empty_list_elements(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b';', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    // Set after a separator and at the start, so a `;` seen while set
    // begins an empty element.
    let mut after_separator = true;
    for (i, byte) in input.bytes().enumerate() {
        if byte == b';' {
            if after_separator {
                result.push_str(&input[last..i]);
                last = i + 1;
            }
            after_separator = true;
        } else {
            after_separator = false;
        }
    }
    result.push_str(&input[last..]);
    if result.ends_with(';') {
        result.pop();
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests;
