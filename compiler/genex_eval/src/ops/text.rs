use genex_diagnostic::{EvalError, EvalResult};
use genex_ir::Arity;
use genex_preprocess::expand_list;
use rustc_hash::FxHashSet;

use crate::{DagChecker, EvalContext, OperationDefinition};

/// Operations that expand to a fixed character the parser would
/// otherwise treat as structure.
macro_rules! literal_op {
    ($ty:ident, $name:literal, $value:literal) => {
        #[doc = concat!("`$<", $name, ">`: `", $value, "`.")]
        pub struct $ty;

        impl OperationDefinition for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn arity(&self) -> Arity {
                Arity::NONE
            }

            fn evaluate(
                &self,
                _params: &[String],
                _ctx: &mut EvalContext<'_>,
                _dag: Option<&DagChecker<'_>>,
                _expression: &str,
            ) -> EvalResult {
                Ok($value.to_string())
            }
        }
    };
}

literal_op!(AngleROp, "ANGLE-R", ">");
literal_op!(CommaOp, "COMMA", ",");
literal_op!(SemicolonOp, "SEMICOLON", ";");

fn single(params: &[String]) -> &str {
    params.first().map_or("", String::as_str)
}

/// `$<LOWER_CASE:s>`.
pub struct LowerCaseOp;

impl OperationDefinition for LowerCaseOp {
    fn name(&self) -> &'static str {
        "LOWER_CASE"
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
        Ok(single(params).to_ascii_lowercase())
    }
}

/// `$<UPPER_CASE:s>`.
pub struct UpperCaseOp;

impl OperationDefinition for UpperCaseOp {
    fn name(&self) -> &'static str {
        "UPPER_CASE"
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
        Ok(single(params).to_ascii_uppercase())
    }
}

/// `$<JOIN:list,glue>`.
pub struct JoinOp;

impl OperationDefinition for JoinOp {
    fn name(&self) -> &'static str {
        "JOIN"
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
        let [list, glue] = params else {
            return Err(EvalError::arity(self.name(), self.arity(), params.len()));
        };
        let mut elements = Vec::new();
        expand_list(list, &mut elements);
        Ok(elements.join(glue))
    }
}

/// `$<REMOVE_DUPLICATES:list>`: first occurrence of each element, in
/// order.
pub struct RemoveDuplicatesOp;

impl OperationDefinition for RemoveDuplicatesOp {
    fn name(&self) -> &'static str {
        "REMOVE_DUPLICATES"
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
        let mut elements = Vec::new();
        expand_list(single(params), &mut elements);
        let mut seen = FxHashSet::default();
        elements.retain(|element| seen.insert(element.clone()));
        Ok(elements.join(";"))
    }
}
