//! Genex Preprocess - whole-string transforms over property values.
//!
//! These run before (or instead of) evaluation, on raw text:
//!
//! - [`split`]: `;`-list splitting that keeps each `$<...>` in one element
//! - [`expand_list`] / [`strip_empty_list_elements`]: plain list handling
//! - [`preprocess`]: strip every expression, or keep only the build or
//!   install side of `$<BUILD_INTERFACE:...>` / `$<INSTALL_INTERFACE:...>`
//!
//! Expression boundaries are found with the same nesting scan the lexer
//! uses, so an unterminated `$<` is carried through as literal text.

mod interface;
mod list;
mod path;
mod split;

pub use interface::{preprocess, preprocess_with_prefix, PreprocessMode, DEFAULT_IMPORT_PREFIX};
pub use list::{expand_list, strip_empty_list_elements};
pub use path::{is_full_path, is_valid_target_name};
pub use split::{split, split_into};
