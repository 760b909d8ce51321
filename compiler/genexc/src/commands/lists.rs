//! Text-level commands that never evaluate.

use genex_preprocess::{preprocess_with_prefix, strip_empty_list_elements, DEFAULT_IMPORT_PREFIX};

use super::Report;
use crate::PreprocessArgs;

/// One list element per line.
pub fn split(input: &str) -> Report {
    Report::success(genex_preprocess::split(input).join("\n"))
}

pub fn strip_empty(input: &str) -> Report {
    Report::success(strip_empty_list_elements(input))
}

pub fn preprocess(args: &PreprocessArgs) -> Report {
    let prefix = args.prefix.as_deref().unwrap_or(DEFAULT_IMPORT_PREFIX);
    Report::success(preprocess_with_prefix(
        &args.input,
        args.mode.into(),
        args.resolve_relative,
        prefix,
    ))
}
