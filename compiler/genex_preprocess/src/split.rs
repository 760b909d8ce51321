//! List splitting that respects expression boundaries.

use genex_lexer::{find_expression_from, matching_close};
use memchr::memchr;

use crate::list::expand_list;

/// Split a `;`-separated list without breaking any `$<...>` apart.
///
/// Text glued to an expression on either side, back to the previous `;`
/// and forward to the next one, belongs to the expression's element:
///
/// ```
/// use genex_preprocess::split;
/// assert_eq!(split("a;$<X:b;c>;d"), ["a", "$<X:b;c>", "d"]);
/// assert_eq!(split("-I$<X:inc>/sub;e"), ["-I$<X:inc>/sub", "e"]);
/// ```
pub fn split(input: &str) -> Vec<String> {
    let mut output = Vec::new();
    split_into(input, &mut output);
    output
}

/// [`split`], appending to `output`.
pub fn split_into(input: &str, output: &mut Vec<String>) {
    let bytes = input.as_bytes();
    let mut last = 0;
    while let Some(pos) = find_expression_from(input, last) {
        let mut part = &input[last..pos];
        let mut prefix = "";
        if !part.is_empty() {
            match input[..pos].rfind(';') {
                None => {
                    prefix = part;
                    part = "";
                }
                Some(semi) if semi + 1 != pos && semi >= last => {
                    part = &input[last..semi];
                    prefix = &input[semi + 1..pos];
                }
                Some(_) => {}
            }
            expand_list(part, output);
        }

        // An unterminated expression runs to the end of input; a closed
        // one extends to the next separator.
        let end = matching_close(bytes, pos + 2).map_or(input.len(), |close| {
            memchr(b';', &bytes[close..]).map_or(input.len(), |offset| close + offset)
        });

        let mut element = String::with_capacity(prefix.len() + end - pos);
        element.push_str(prefix);
        element.push_str(&input[pos..end]);
        output.push(element);
        last = end;
    }
    if last < input.len() {
        expand_list(&input[last..], output);
    }
}
