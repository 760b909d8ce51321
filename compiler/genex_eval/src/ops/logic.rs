use genex_diagnostic::{EvalError, EvalResult};
use genex_ir::Arity;

use super::{bool_str, strict_bool};
use crate::{DagChecker, EvalContext, OperationDefinition};

/// `$<0:...>`: always empty.
pub struct ZeroOp;

impl OperationDefinition for ZeroOp {
    fn name(&self) -> &'static str {
        "0"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn accepts_arbitrary_content(&self) -> bool {
        true
    }

    fn generates_content(&self) -> bool {
        false
    }

    fn evaluate(
        &self,
        _params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        Ok(String::new())
    }
}

/// `$<1:...>`: its content.
pub struct OneOp;

impl OperationDefinition for OneOp {
    fn name(&self) -> &'static str {
        "1"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn accepts_arbitrary_content(&self) -> bool {
        true
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        Ok(params.first().cloned().unwrap_or_default())
    }
}

/// Whether `value` is a false constant: empty, `0`, `OFF`, `NO`,
/// `FALSE`, `N`, `IGNORE`, `NOTFOUND`, or ending in `-NOTFOUND`
/// (case-insensitive).
pub(crate) fn is_off(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let upper = value.to_ascii_uppercase();
    matches!(
        upper.as_str(),
        "0" | "OFF" | "NO" | "FALSE" | "N" | "IGNORE" | "NOTFOUND"
    ) || upper.ends_with("-NOTFOUND")
}

/// `$<BOOL:v>`: `0` for false constants, `1` otherwise.
pub struct BoolOp;

impl OperationDefinition for BoolOp {
    fn name(&self) -> &'static str {
        "BOOL"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let value = params.first().map_or("", String::as_str);
        Ok(bool_str(!is_off(value)))
    }
}

/// Shared body of `AND` and `OR`: the first parameter equal to
/// `short_circuit` decides the result.
fn fold_logic(name: &str, params: &[String], short_circuit: bool) -> EvalResult {
    for param in params {
        match strict_bool(param) {
            Some(value) if value == short_circuit => return Ok(bool_str(short_circuit)),
            Some(_) => {}
            None => {
                return Err(EvalError::invalid_parameter(
                    name,
                    format!("Parameters to $<{name}> must resolve to either '0' or '1'."),
                ))
            }
        }
    }
    Ok(bool_str(!short_circuit))
}

/// `$<AND:c,...>`. Stops evaluating at the first `0`.
pub struct AndOp;

impl OperationDefinition for AndOp {
    fn name(&self) -> &'static str {
        "AND"
    }

    fn arity(&self) -> Arity {
        Arity::ONE_OR_MORE
    }

    fn should_evaluate_next_parameter(&self, evaluated: &[String]) -> bool {
        !evaluated.iter().any(|p| p == "0")
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        fold_logic("AND", params, false)
    }
}

/// `$<OR:c,...>`. Stops evaluating at the first `1`.
pub struct OrOp;

impl OperationDefinition for OrOp {
    fn name(&self) -> &'static str {
        "OR"
    }

    fn arity(&self) -> Arity {
        Arity::ONE_OR_MORE
    }

    fn should_evaluate_next_parameter(&self, evaluated: &[String]) -> bool {
        !evaluated.iter().any(|p| p == "1")
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        fold_logic("OR", params, true)
    }
}

/// `$<NOT:c>`.
pub struct NotOp;

impl OperationDefinition for NotOp {
    fn name(&self) -> &'static str {
        "NOT"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let value = params.first().map_or("", String::as_str);
        strict_bool(value).map(|v| bool_str(!v)).ok_or_else(|| {
            EvalError::invalid_parameter(
                "NOT",
                "$<NOT> parameter must resolve to exactly one '0' or '1' value.",
            )
        })
    }
}

/// `$<IF:c,then,else>`. Only the selected branch is evaluated.
pub struct IfOp;

impl OperationDefinition for IfOp {
    fn name(&self) -> &'static str {
        "IF"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(3)
    }

    fn should_evaluate_next_parameter(&self, evaluated: &[String]) -> bool {
        !matches!(
            (evaluated.first().map(String::as_str), evaluated.len()),
            (Some("0"), 1) | (Some("1"), 2)
        )
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let [condition, then, otherwise] = params else {
            return Err(EvalError::arity("IF", self.arity(), params.len()));
        };
        match strict_bool(condition) {
            Some(true) => Ok(then.clone()),
            Some(false) => Ok(otherwise.clone()),
            None => Err(EvalError::invalid_parameter(
                "IF",
                "First parameter to $<IF> must resolve to exactly one '0' or '1' value.",
            )),
        }
    }
}
