//! Built-in operations.
//!
//! Each operation is a zero-sized type registered as a static in
//! [`crate::registry`]. Grouped by concern:
//!
//! - `logic`: `0`, `1`, `BOOL`, `AND`, `OR`, `NOT`, `IF`
//! - `compare`: `STREQUAL`, `EQUAL`, `IN_LIST`
//! - `text`: escapes, case mapping, list joins
//! - `config`: `CONFIG`, `COMPILE_LANGUAGE`
//! - `target`: property lookup and target queries
//! - `interface`: `BUILD_INTERFACE`, `INSTALL_INTERFACE`
//! - `features`: `COMPILE_FEATURES`

mod compare;
mod config;
mod features;
mod interface;
mod logic;
mod target;
mod text;

pub(crate) use compare::{EqualOp, InListOp, StrEqualOp};
pub(crate) use config::{CompileLanguageOp, ConfigOp};
pub(crate) use features::CompileFeaturesOp;
pub(crate) use interface::{BuildInterfaceOp, InstallInterfaceOp};
pub(crate) use logic::{AndOp, BoolOp, IfOp, NotOp, OneOp, OrOp, ZeroOp};
pub(crate) use target::{TargetExistsOp, TargetNameIfExistsOp, TargetObjectsOp, TargetPropertyOp};
pub(crate) use text::{
    AngleROp, CommaOp, JoinOp, LowerCaseOp, RemoveDuplicatesOp, SemicolonOp, UpperCaseOp,
};

/// `"1"` or `"0"`.
#[inline]
pub(crate) fn bool_str(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

/// Parse a strict `"0"`/`"1"` parameter.
#[inline]
pub(crate) fn strict_bool(value: &str) -> Option<bool> {
    match value {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
