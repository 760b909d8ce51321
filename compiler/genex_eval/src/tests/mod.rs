#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Shared fixtures and end-to-end scenarios.


use std::sync::Arc;

use crate::{BufferSink, Engine, EngineBuilder, EvalInputs, EvalResult, InMemoryModel};

/// Engine over an in-memory model with errors captured in a buffer.
pub(crate) struct Fixture {
    pub model: Arc<InMemoryModel>,
    pub sink: Arc<BufferSink>,
    pub engine: Engine,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with(|builder| builder)
    }

    pub fn with(configure: impl FnOnce(EngineBuilder) -> EngineBuilder) -> Self {
        let model = Arc::new(InMemoryModel::new());
        let sink = Arc::new(BufferSink::new());
        let engine = configure(
            Engine::builder()
                .model(model.clone())
                .sink(sink.clone()),
        )
        .build()
        .unwrap();
        Fixture {
            model,
            sink,
            engine,
        }
    }

    /// Evaluate for `Debug` with no head target.
    pub fn eval(&self, input: &str) -> EvalResult {
        self.eval_for(input, "Debug", None)
    }

    pub fn eval_for(&self, input: &str, config: &str, head: Option<&str>) -> EvalResult {
        let head = head.map(|name| self.model.add_target(name));
        let mut inputs = EvalInputs::new(config);
        if let Some(head) = &head {
            inputs = inputs.head_target(head);
        }
        self.engine.evaluate_str(input, &inputs, None)
    }

    /// Evaluate and expect success.
    pub fn ok(&self, input: &str) -> String {
        self.eval(input).unwrap()
    }

    /// Evaluate and expect failure, returning the kind's message.
    pub fn err(&self, input: &str) -> String {
        self.eval(input).unwrap_err().kind.to_string()
    }
}
