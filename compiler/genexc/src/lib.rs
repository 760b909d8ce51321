//! Command line driver for generator expressions.
//!
//! Every command returns a [`Report`] instead of printing, so the binary
//! and the integration tests share one code path.

mod cli;
pub mod commands;
mod model_file;
mod trace;

pub use cli::{Cli, Command, EngineArgs, EvalArgs, EvalModelArgs, Mode, PreprocessArgs};
pub use commands::{run, DriverError, Report};
pub use model_file::{ModelError, ModelFile, PropertyValue, TargetTable};
pub use trace::init_tracing;
