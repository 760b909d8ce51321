//! Per-evaluation state.

use genex_diagnostic::EvalError;
use genex_ir::TargetId;

use crate::{Accumulators, Engine};

/// What an expression is evaluated for.
///
/// The current target defaults to the head target.
#[derive(Copy, Clone, Debug, Default)]
pub struct EvalInputs<'a> {
    pub config: &'a str,
    pub head_target: Option<&'a TargetId>,
    pub current_target: Option<&'a TargetId>,
    pub language: Option<&'a str>,
}

impl<'a> EvalInputs<'a> {
    pub fn new(config: &'a str) -> Self {
        EvalInputs {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn head_target(mut self, target: &'a TargetId) -> Self {
        self.head_target = Some(target);
        self
    }

    #[must_use]
    pub fn current_target(mut self, target: &'a TargetId) -> Self {
        self.current_target = Some(target);
        self
    }

    #[must_use]
    pub fn language(mut self, language: &'a str) -> Self {
        self.language = Some(language);
        self
    }
}

/// State threaded through one evaluation.
///
/// Created fresh for every evaluation. Operations read the inputs and
/// write the accumulators.
pub struct EvalContext<'e> {
    engine: &'e Engine,
    pub config: &'e str,
    pub language: Option<&'e str>,
    pub head_target: Option<&'e TargetId>,
    /// Target owning the property value being evaluated. Builtins read
    /// `head_target`; this is for host extensions.
    pub current_target: Option<&'e TargetId>,
    pub quiet: bool,
    pub for_buildsystem: bool,
    /// Operations currently being evaluated, across nested property
    /// evaluations.
    depth: usize,
    pub accumulators: Accumulators,
}

impl<'e> EvalContext<'e> {
    pub fn new(engine: &'e Engine, inputs: &EvalInputs<'e>) -> Self {
        let options = engine.options();
        EvalContext {
            engine,
            config: inputs.config,
            language: inputs.language,
            head_target: inputs.head_target,
            current_target: inputs.current_target.or(inputs.head_target),
            quiet: options.quiet,
            for_buildsystem: options.for_buildsystem,
            depth: 0,
            accumulators: Accumulators::new(),
        }
    }

    #[inline]
    pub fn engine(&self) -> &'e Engine {
        self.engine
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for evaluating `current`'s property values on behalf of
    /// the same head target. Its accumulators start empty; fold them back
    /// with [`Accumulators::merge_from`].
    pub fn derive<'x>(&self, current: &'x TargetId) -> EvalContext<'x>
    where
        'e: 'x,
    {
        EvalContext {
            engine: self.engine,
            config: self.config,
            language: self.language,
            head_target: self.head_target,
            current_target: Some(current),
            quiet: self.quiet,
            for_buildsystem: self.for_buildsystem,
            depth: self.depth,
            accumulators: Accumulators::new(),
        }
    }

    /// Enter an operation, failing past the configured nesting limit.
    pub(crate) fn enter(&mut self) -> Result<(), EvalError> {
        let limit = self.engine.options().max_nesting_depth;
        if self.depth >= limit {
            return Err(EvalError::nesting_too_deep(self.depth + 1, limit));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        debug_assert!(self.depth > 0, "leave() without enter()");
        self.depth = self.depth.saturating_sub(1);
    }
}
