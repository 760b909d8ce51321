//! Interface selectors as seen while building: build content is kept,
//! install content is dropped. Exported files are handled beforehand by
//! `genex_preprocess`.

use genex_diagnostic::EvalResult;
use genex_ir::Arity;

use crate::{DagChecker, EvalContext, OperationDefinition};

/// `$<BUILD_INTERFACE:...>`: its content.
pub struct BuildInterfaceOp;

impl OperationDefinition for BuildInterfaceOp {
    fn name(&self) -> &'static str {
        "BUILD_INTERFACE"
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

/// `$<INSTALL_INTERFACE:...>`: empty. Its content is never evaluated.
pub struct InstallInterfaceOp;

impl OperationDefinition for InstallInterfaceOp {
    fn name(&self) -> &'static str {
        "INSTALL_INTERFACE"
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
