//! Parsed, repeatedly evaluable property values.

use std::sync::Arc;

use genex_diagnostic::EvalError;
use genex_ir::{ExpressionTree, TargetId};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::instrument;

use crate::accumulators::SeenProperty;
use crate::walk::evaluate_tree;
use crate::{Accumulators, DagChecker, Engine, EvalContext, EvalFlags, EvalInputs};

/// A property value parsed once and evaluated per target, configuration
/// and language.
///
/// Holds the output and accumulator snapshot of the latest evaluation.
/// These are a point-in-time result: give each thread its own instance
/// (the tree itself is shared).
#[derive(Clone, Debug)]
pub struct CompiledExpression {
    tree: Arc<ExpressionTree>,
    output: String,
    snapshot: Accumulators,
    quiet: bool,
    for_buildsystem: bool,
    last_error: Option<EvalError>,
}

impl CompiledExpression {
    pub fn new(tree: Arc<ExpressionTree>) -> Self {
        let output = if tree.needs_evaluation() {
            String::new()
        } else {
            tree.source().to_string()
        };
        CompiledExpression {
            tree,
            output,
            snapshot: Accumulators::new(),
            quiet: false,
            for_buildsystem: false,
            last_error: None,
        }
    }

    /// Parse `input` with default options.
    pub fn parse(input: &str) -> Self {
        Self::new(Arc::new(genex_parse::parse(input)))
    }

    #[inline]
    pub fn input(&self) -> &str {
        self.tree.source()
    }

    #[inline]
    pub fn tree(&self) -> &Arc<ExpressionTree> {
        &self.tree
    }

    /// False when the input has no `$<`: evaluation returns the input.
    #[inline]
    pub fn needs_evaluation(&self) -> bool {
        self.tree.needs_evaluation()
    }

    /// Suppress error reporting to the engine's sink.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn set_evaluate_for_buildsystem(&mut self, for_buildsystem: bool) {
        self.for_buildsystem = for_buildsystem;
    }

    /// Evaluate against a fresh context.
    ///
    /// Returns the output, which is empty if evaluation failed.
    pub fn evaluate(
        &mut self,
        engine: &Engine,
        inputs: &EvalInputs<'_>,
        dag: Option<&DagChecker<'_>>,
    ) -> &str {
        if !self.needs_evaluation() {
            return &self.output;
        }
        let mut ctx = EvalContext::new(engine, inputs);
        ctx.quiet |= self.quiet;
        ctx.for_buildsystem |= self.for_buildsystem;
        self.evaluate_with_context(&mut ctx, dag)
    }

    /// Evaluate against a caller-provided context. Accumulators written
    /// to `ctx` are also folded into this expression's snapshot.
    #[instrument(level = "debug", skip_all, fields(input = %self.tree.source()))]
    pub fn evaluate_with_context(
        &mut self,
        ctx: &mut EvalContext<'_>,
        dag: Option<&DagChecker<'_>>,
    ) -> &str {
        if !self.needs_evaluation() {
            return &self.output;
        }
        match evaluate_tree(&self.tree, ctx, dag) {
            Ok(output) => {
                self.output = output;
                self.absorb(&ctx.accumulators);
                self.last_error = None;
            }
            Err(err) => {
                ctx.accumulators.flags |= EvalFlags::HAD_ERROR;
                self.output.clear();
                if !ctx.quiet {
                    ctx.engine().sink().report_error(&err.to_string());
                }
                self.last_error = Some(err);
            }
        }
        &self.output
    }

    /// Take a successful evaluation's accumulators: seen properties are
    /// unioned, everything else replaced.
    fn absorb(&mut self, accumulators: &Accumulators) {
        let mut seen = std::mem::take(&mut self.snapshot.seen_target_properties);
        seen.extend(accumulators.seen_target_properties.iter().cloned());
        self.snapshot = accumulators.clone();
        self.snapshot.seen_target_properties = seen;
        self.snapshot.flags.remove(EvalFlags::HAD_ERROR);
    }

    /// Output of the latest evaluation.
    #[inline]
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn had_error(&self) -> bool {
        self.last_error.is_some()
    }

    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    /// Accumulators of the latest successful evaluation.
    pub fn snapshot(&self) -> &Accumulators {
        &self.snapshot
    }

    pub fn had_context_sensitive_condition(&self) -> bool {
        self.snapshot.had_context_sensitive_condition()
    }

    pub fn had_head_sensitive_condition(&self) -> bool {
        self.snapshot.had_head_sensitive_condition()
    }

    /// Every `(target, property)` read by any successful evaluation.
    pub fn seen_target_properties(&self) -> &FxHashSet<SeenProperty> {
        &self.snapshot.seen_target_properties
    }

    pub fn depend_targets(&self) -> &FxHashSet<TargetId> {
        &self.snapshot.depend_targets
    }

    pub fn all_targets_seen(&self) -> &FxHashSet<TargetId> {
        &self.snapshot.all_targets_seen
    }

    /// Highest standard required per language for `target`.
    pub fn max_language_standard(&self, target: &TargetId) -> Option<&FxHashMap<String, String>> {
        self.snapshot.max_language_standard.get(target)
    }
}
