use genex_diagnostic::{EvalError, EvalResult};
use genex_ir::Arity;
use genex_preprocess::expand_list;

use super::bool_str;
use crate::{DagChecker, EvalContext, OperationDefinition};

/// `$<STREQUAL:a,b>`: byte-wise equality.
pub struct StrEqualOp;

impl OperationDefinition for StrEqualOp {
    fn name(&self) -> &'static str {
        "STREQUAL"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(2)
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        match params {
            [a, b] => Ok(bool_str(a == b)),
            _ => Err(EvalError::arity(self.name(), self.arity(), params.len())),
        }
    }
}

/// Parse an integer with optional sign and `0x`/`0b` prefix.
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (2, bin)
    } else {
        (10, digits)
    };
    // `from_str_radix` would accept a second sign here.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

/// `$<EQUAL:a,b>`: numeric equality.
pub struct EqualOp;

impl OperationDefinition for EqualOp {
    fn name(&self) -> &'static str {
        "EQUAL"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(2)
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let mut values = [0i64; 2];
        for (slot, param) in values.iter_mut().zip(params) {
            *slot = parse_integer(param).ok_or_else(|| {
                EvalError::invalid_parameter(
                    "EQUAL",
                    format!("$<EQUAL> parameter {param} is not a valid integer."),
                )
            })?;
        }
        Ok(bool_str(values[0] == values[1]))
    }
}

/// `$<IN_LIST:item,list>`.
pub struct InListOp;

impl OperationDefinition for InListOp {
    fn name(&self) -> &'static str {
        "IN_LIST"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(2)
    }

    fn evaluate(
        &self,
        params: &[String],
        _ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let [item, list] = params else {
            return Err(EvalError::arity(self.name(), self.arity(), params.len()));
        };
        let mut elements = Vec::new();
        expand_list(list, &mut elements);
        Ok(bool_str(elements.iter().any(|element| element == item)))
    }
}
