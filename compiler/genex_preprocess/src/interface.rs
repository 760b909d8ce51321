//! Whole-string expression stripping for exported interfaces.

use genex_lexer::{find_expression, find_expression_from, matching_close};
use memchr::memmem;

use crate::list::strip_empty_list_elements;
use crate::path::is_full_path;
use crate::split::split;

/// Prefix given to relative install-interface items by [`preprocess`].
pub const DEFAULT_IMPORT_PREFIX: &str = "${_IMPORT_PREFIX}/";

const BUILD_INTERFACE: &str = "$<BUILD_INTERFACE:";
const INSTALL_INTERFACE: &str = "$<INSTALL_INTERFACE:";

/// Which transform [`preprocess`] applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PreprocessMode {
    /// Remove every expression, keeping only surrounding text.
    StripAll,
    /// Keep `$<BUILD_INTERFACE:...>` contents, drop install-only ones.
    BuildInterface,
    /// Keep `$<INSTALL_INTERFACE:...>` contents, drop build-only ones.
    InstallInterface,
}

/// Apply `mode` to `input` with [`DEFAULT_IMPORT_PREFIX`].
pub fn preprocess(input: &str, mode: PreprocessMode, resolve_relative: bool) -> String {
    preprocess_with_prefix(input, mode, resolve_relative, DEFAULT_IMPORT_PREFIX)
}

/// Apply `mode` to `input`.
///
/// With `resolve_relative`, each relative item kept from an
/// install interface is prefixed with `prefix`. Unterminated spans are
/// kept as literal text. The result never contains empty list elements.
pub fn preprocess_with_prefix(
    input: &str,
    mode: PreprocessMode,
    resolve_relative: bool,
    prefix: &str,
) -> String {
    let result = match mode {
        PreprocessMode::StripAll => strip_all(input),
        PreprocessMode::BuildInterface | PreprocessMode::InstallInterface => {
            strip_interface(input, mode, resolve_relative, prefix)
        }
    };
    strip_empty_list_elements(&result).into_owned()
}

fn strip_all(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    while let Some(pos) = find_expression_from(input, last) {
        result.push_str(&input[last..pos]);
        if let Some(close) = matching_close(bytes, pos + 2) {
            last = close + 1;
        } else {
            result.push_str(&input[pos..]);
            last = input.len();
        }
    }
    result.push_str(&input[last..]);
    result
}

fn strip_interface(
    input: &str,
    mode: PreprocessMode,
    resolve_relative: bool,
    prefix: &str,
) -> String {
    let bytes = input.as_bytes();
    let build = memmem::Finder::new(BUILD_INTERFACE);
    let install = memmem::Finder::new(INSTALL_INTERFACE);

    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    loop {
        let rest = &bytes[last..];
        let (pos, is_install) = match (build.find(rest), install.find(rest)) {
            (None, None) => break,
            (Some(b), None) => (last + b, false),
            (None, Some(i)) => (last + i, true),
            (Some(b), Some(i)) if b < i => (last + b, false),
            (Some(_), Some(i)) => (last + i, true),
        };
        result.push_str(&input[last..pos]);

        let marker = if is_install {
            INSTALL_INTERFACE
        } else {
            BUILD_INTERFACE
        };
        let body = pos + marker.len();
        let Some(close) = matching_close(bytes, body) else {
            result.push_str(&input[pos..]);
            last = input.len();
            break;
        };

        let content = &input[body..close];
        match (mode, is_install) {
            (PreprocessMode::BuildInterface, false) => result.push_str(content),
            (PreprocessMode::InstallInterface, true) if resolve_relative => {
                prefix_items(content, &mut result, prefix);
            }
            (PreprocessMode::InstallInterface, true) => result.push_str(content),
            _ => {}
        }
        last = close + 1;
    }
    result.push_str(&input[last..]);
    result
}

/// Append the items of `content`, prefixing those that are neither
/// absolute paths nor expressions.
fn prefix_items(content: &str, result: &mut String, prefix: &str) {
    for (index, item) in split(content).iter().enumerate() {
        if index > 0 {
            result.push(';');
        }
        if !is_full_path(item) && find_expression(item) != Some(0) {
            result.push_str(prefix);
        }
        result.push_str(item);
    }
}
