use genex_diagnostic::{EvalError, EvalResult};
use genex_ir::Arity;

use super::bool_str;
use crate::{DagChecker, EvalContext, EvalFlags, OperationDefinition};

fn is_config_name(name: &str) -> bool {
    name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// `$<CONFIG>` is the active configuration; `$<CONFIG:cfgs>` is `1`
/// when any listed name matches it, ignoring case.
pub struct ConfigOp;

impl OperationDefinition for ConfigOp {
    fn name(&self) -> &'static str {
        "CONFIG"
    }

    fn arity(&self) -> Arity {
        Arity::ZERO_OR_MORE
    }

    fn evaluate(
        &self,
        params: &[String],
        ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        ctx.accumulators.flags |= EvalFlags::CONTEXT_SENSITIVE;
        if params.is_empty() {
            return Ok(ctx.config.to_string());
        }
        if let Some(bad) = params.iter().find(|p| !is_config_name(p)) {
            return Err(EvalError::invalid_parameter(
                "CONFIG",
                format!("Expression syntax not recognized: \"{bad}\" is not a configuration name."),
            ));
        }
        Ok(bool_str(
            params.iter().any(|p| p.eq_ignore_ascii_case(ctx.config)),
        ))
    }
}

/// `$<COMPILE_LANGUAGE>` is the language being compiled;
/// `$<COMPILE_LANGUAGE:langs>` is `1` when it is one of `langs`.
pub struct CompileLanguageOp;

impl OperationDefinition for CompileLanguageOp {
    fn name(&self) -> &'static str {
        "COMPILE_LANGUAGE"
    }

    fn arity(&self) -> Arity {
        Arity::ZERO_OR_MORE
    }

    fn evaluate(
        &self,
        params: &[String],
        ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let Some(language) = ctx.language else {
            return Err(EvalError::invalid_parameter(
                "COMPILE_LANGUAGE",
                "$<COMPILE_LANGUAGE:...> may only be used while a compile language is being evaluated.",
            ));
        };
        if params.is_empty() {
            return Ok(language.to_string());
        }
        Ok(bool_str(params.iter().any(|p| p == language)))
    }
}
