//! Operation contract.

use genex_diagnostic::EvalResult;
use genex_ir::Arity;

use crate::{DagChecker, EvalContext};

/// A named operation: `$<NAME:...>`.
///
/// Built-ins are zero-sized statics; hosts register boxed extensions
/// through [`crate::EngineBuilder::operation`].
pub trait OperationDefinition: Send + Sync {
    /// Name as written after `$<`.
    fn name(&self) -> &'static str;

    /// Accepted parameter count, checked before `evaluate` is called.
    fn arity(&self) -> Arity;

    /// Whether parameters past the last declared one are joined back into
    /// it with `,`, so `$<1:a,b>` passes `a,b`.
    fn accepts_arbitrary_content(&self) -> bool {
        false
    }

    /// False when the result is always empty. Parameters are then not
    /// evaluated at all.
    fn generates_content(&self) -> bool {
        true
    }

    /// Called before each parameter after the first with the values
    /// evaluated so far. Returning false skips that parameter, which is
    /// passed as an empty string.
    fn should_evaluate_next_parameter(&self, _evaluated: &[String]) -> bool {
        true
    }

    /// Compute the result from evaluated parameters.
    ///
    /// `expression` is the original spelling of the whole `$<...>`.
    fn evaluate(
        &self,
        params: &[String],
        ctx: &mut EvalContext<'_>,
        dag: Option<&DagChecker<'_>>,
        expression: &str,
    ) -> EvalResult;
}
