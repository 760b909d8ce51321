//! Evaluate property values on behalf of one head target.

use genex_ir::TargetId;

use crate::{CompiledExpression, DagChecker, Engine, EvalInputs};

/// Evaluates expressions found in a head target's properties.
///
/// Each evaluation seeds the cycle chain with the property being
/// evaluated, so a value that reads its own property fails instead of
/// recursing.
pub struct PropertyInterpreter<'e> {
    engine: &'e Engine,
    head_target: TargetId,
    config: String,
    language: Option<String>,
    compiled: Option<CompiledExpression>,
}

impl<'e> PropertyInterpreter<'e> {
    pub fn new(engine: &'e Engine, head_target: TargetId, config: impl Into<String>) -> Self {
        PropertyInterpreter {
            engine,
            head_target,
            config: config.into(),
            language: None,
            compiled: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn head_target(&self) -> &TargetId {
        &self.head_target
    }

    pub fn config(&self) -> &str {
        &self.config
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Evaluate `expression` as the value of `property`.
    pub fn evaluate(&mut self, expression: &str, property: &str) -> &str {
        let compiled = self.engine.compile(expression);
        self.run(compiled, expression, property)
    }

    /// Evaluate the head target's stored value of `property`, or `None`
    /// when it has none in this configuration. The parsed value is shared
    /// through the model's cache.
    pub fn evaluate_property(&mut self, property: &str) -> Option<&str> {
        let value = self
            .engine
            .model()
            .property(&self.head_target, property, &self.config)?;
        let compiled = self.engine.compile_property_value(&value);
        Some(self.run(compiled, &value, property))
    }

    fn run(&mut self, compiled: CompiledExpression, expression: &str, property: &str) -> &str {
        // Flags and options share a cycle-checking identity.
        let property = if property == "COMPILE_FLAGS" {
            "COMPILE_OPTIONS"
        } else {
            property
        };
        let dag = DagChecker::root(self.head_target.clone(), property, expression);

        let mut inputs = EvalInputs::new(&self.config).head_target(&self.head_target);
        if let Some(language) = &self.language {
            inputs = inputs.language(language);
        }

        let compiled = self.compiled.insert(compiled);
        compiled.evaluate(self.engine, &inputs, Some(&dag))
    }

    /// The expression compiled by the latest [`Self::evaluate`] call.
    pub fn compiled(&self) -> Option<&CompiledExpression> {
        self.compiled.as_ref()
    }
}
