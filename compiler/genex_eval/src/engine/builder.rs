//! `EngineBuilder` for creating engines with non-default collaborators.

use std::sync::Arc;

use genex_diagnostic::{SharedSink, TracingSink};

use super::{Engine, EngineOptions};
use crate::{InMemoryModel, OperationDefinition, OperationRegistry, RegistryError, TargetModel};

/// Builder for [`Engine`].
///
/// Defaults: an empty [`InMemoryModel`], errors to `tracing`, and
/// [`EngineOptions::default`].
#[derive(Default)]
pub struct EngineBuilder {
    model: Option<Arc<dyn TargetModel>>,
    sink: Option<SharedSink>,
    options: EngineOptions,
    operations: Vec<Box<dyn OperationDefinition>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target model.
    #[must_use]
    pub fn model(mut self, model: Arc<dyn TargetModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the diagnostic sink.
    #[must_use]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace all options.
    #[must_use]
    pub fn options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.options.max_nesting_depth = depth;
        self
    }

    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.options.quiet = quiet;
        self
    }

    #[must_use]
    pub fn for_buildsystem(mut self, for_buildsystem: bool) -> Self {
        self.options.for_buildsystem = for_buildsystem;
        self
    }

    /// Add a host operation. Name clashes are reported by [`Self::build`].
    #[must_use]
    pub fn operation(mut self, op: Box<dyn OperationDefinition>) -> Self {
        self.operations.push(op);
        self
    }

    pub fn build(self) -> Result<Engine, RegistryError> {
        let mut registry = OperationRegistry::new();
        for op in self.operations {
            registry.register(op)?;
        }
        Ok(Engine {
            registry,
            model: self
                .model
                .unwrap_or_else(|| Arc::new(InMemoryModel::new())),
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink)),
            options: self.options,
        })
    }
}
