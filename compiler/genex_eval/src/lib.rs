//! Genex Eval - context-sensitive evaluation of generator expressions.
//!
//! An [`Engine`] owns the operation registry, the [`TargetModel`], and
//! the diagnostic sink. Property values are compiled once into a
//! [`CompiledExpression`] and evaluated per target, configuration and
//! language:
//!
//! ```
//! use std::sync::Arc;
//! use genex_eval::{Engine, EvalInputs, InMemoryModel};
//!
//! let model = Arc::new(InMemoryModel::new());
//! model.set_property("app", "DEFS", "APP_$<UPPER_CASE:$<CONFIG>>");
//! let engine = Engine::builder().model(model.clone()).build().unwrap();
//!
//! let app = model.add_target("app");
//! let inputs = EvalInputs::new("Debug").head_target(&app);
//! let out = engine
//!     .evaluate_str("-D$<TARGET_PROPERTY:DEFS>", &inputs, None)
//!     .unwrap();
//! assert_eq!(out, "-DAPP_DEBUG");
//! ```
//!
//! # Evaluation
//!
//! Each evaluation gets a fresh [`EvalContext`]. Operations read its
//! inputs and write its [`Accumulators`]. `$<TARGET_PROPERTY>` evaluates
//! the looked-up value as another expression on a derived context,
//! chained through a [`DagChecker`] so that properties referring to each
//! other fail with a cycle error instead of recursing.
//!
//! Errors abort the walk; the compiled expression's output is then
//! empty, its previous snapshot is kept, and the message goes to the
//! sink unless the expression is quiet.

mod accumulators;
mod cache;
mod compiled;
mod context;
mod dag;
mod definition;
mod engine;
mod interpreter;
mod model;
mod ops;
mod registry;
mod walk;

pub use accumulators::{Accumulators, EvalFlags, SeenProperty};
pub use cache::ExpressionCache;
pub use compiled::CompiledExpression;
pub use context::{EvalContext, EvalInputs};
pub use dag::DagChecker;
pub use definition::OperationDefinition;
pub use engine::{Engine, EngineBuilder, EngineOptions};
pub use interpreter::PropertyInterpreter;
pub use model::{InMemoryModel, TargetModel};
pub use registry::{BuiltinOp, OperationRegistry, RegistryError};

pub use genex_diagnostic::{
    BufferSink, CycleError, CycleKind, DiagnosticSink, EvalError, EvalErrorKind, EvalResult,
    SharedSink, SilentSink, TracingSink,
};

#[cfg(test)]
mod tests;
