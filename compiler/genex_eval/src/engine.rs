//! Evaluation engine.

mod builder;

use std::sync::Arc;

use genex_diagnostic::{DiagnosticSink, EvalResult, SharedSink, TracingSink};
use genex_ir::ExpressionTree;
use genex_lexer::find_expression;
use genex_parse::{parse_with, ParseOptions, DEFAULT_MAX_NESTING_DEPTH};

use crate::{CompiledExpression, DagChecker, EvalInputs, InMemoryModel, OperationRegistry, TargetModel};

pub use builder::EngineBuilder;

/// Engine-wide settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Bound on `$<` nesting, enforced by the parser and again on
    /// operation depth during evaluation (property lookups included).
    pub max_nesting_depth: usize,
    /// Default for suppressing error reports.
    pub quiet: bool,
    /// Default for operations that only make sense inside generated
    /// build files.
    pub for_buildsystem: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            quiet: false,
            for_buildsystem: false,
        }
    }
}

impl EngineOptions {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_nesting_depth: self.max_nesting_depth,
        }
    }
}

/// Everything an evaluation needs besides its inputs: operations, the
/// target model, and where errors go.
///
/// `Engine` is `Send + Sync`; share one across threads and give each
/// thread its own [`CompiledExpression`]s.
pub struct Engine {
    registry: OperationRegistry,
    model: Arc<dyn TargetModel>,
    sink: SharedSink,
    options: EngineOptions,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    #[inline]
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    #[inline]
    pub fn model(&self) -> &dyn TargetModel {
        self.model.as_ref()
    }

    #[inline]
    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    #[inline]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse caller-supplied `source`. The tree is not cached.
    pub fn parse(&self, source: &str) -> Arc<ExpressionTree> {
        Arc::new(parse_with(source, &self.options.parse_options()))
    }

    /// Parse a property value read from the model, through the model's
    /// cache when it has one.
    ///
    /// Only stored values go through the cache: the model invalidates an
    /// entry when it replaces the value, so nothing else would ever evict it.
    pub fn parse_property_value(&self, value: &str) -> Arc<ExpressionTree> {
        let options = self.options.parse_options();
        match self.model.expression_cache() {
            Some(cache) => cache.get_or_parse(value, &options),
            None => Arc::new(parse_with(value, &options)),
        }
    }

    /// Compiled expression for `source` carrying this engine's defaults.
    pub fn compile(&self, source: &str) -> CompiledExpression {
        self.compile_tree(self.parse(source))
    }

    /// Like [`Engine::compile`] for a value stored in the model.
    pub fn compile_property_value(&self, value: &str) -> CompiledExpression {
        self.compile_tree(self.parse_property_value(value))
    }

    fn compile_tree(&self, tree: Arc<ExpressionTree>) -> CompiledExpression {
        let mut compiled = CompiledExpression::new(tree);
        compiled.set_quiet(self.options.quiet);
        compiled.set_evaluate_for_buildsystem(self.options.for_buildsystem);
        compiled
    }

    /// One-shot evaluation of `input`.
    ///
    /// Input without a complete `$<...>` is returned unchanged without
    /// parsing. Errors are reported to the sink (unless quiet) and
    /// returned.
    pub fn evaluate_str(
        &self,
        input: &str,
        inputs: &EvalInputs<'_>,
        dag: Option<&DagChecker<'_>>,
    ) -> EvalResult {
        if find_expression(input).is_none() {
            return Ok(input.to_string());
        }
        let mut compiled = self.compile(input);
        let output = compiled.evaluate(self, inputs, dag).to_string();
        match compiled.last_error() {
            Some(err) => Err(err.clone()),
            None => Ok(output),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            registry: OperationRegistry::new(),
            model: Arc::new(InMemoryModel::new()),
            sink: Arc::new(TracingSink),
            options: EngineOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests;
