//! Command handlers.
//!
//! Handlers never print: they return a [`Report`] for `main` to render.

mod debug;
mod eval;
mod lists;

use genex_eval::RegistryError;

use crate::{Cli, Command, ModelError};

pub use debug::{lex, parse};
pub use eval::{eval, eval_model};
pub use lists::{preprocess, split, strip_empty};

/// Configuration used when none is given.
pub const DEFAULT_CONFIG: &str = "Debug";

/// Failure that prevents a command from running at all.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("no target `{0}` in the model")]
    UnknownTarget(String),
}

/// Outcome of a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Text for stdout.
    pub output: String,
    /// Messages for stderr.
    pub diagnostics: Vec<String>,
    /// Whether anything failed to evaluate.
    pub failed: bool,
}

impl Report {
    pub fn success(output: impl Into<String>) -> Self {
        Report {
            output: output.into(),
            ..Report::default()
        }
    }

    pub fn failure(diagnostics: Vec<String>) -> Self {
        Report {
            diagnostics,
            failed: true,
            ..Report::default()
        }
    }
}

/// Run the selected command.
pub fn run(cli: &Cli) -> Result<Report, DriverError> {
    match &cli.command {
        Command::Lex { input } => Ok(lex(input)),
        Command::Parse { input, max_depth } => Ok(parse(input, *max_depth)),
        Command::Eval(args) => eval(args),
        Command::Split { input } => Ok(split(input)),
        Command::StripEmpty { input } => Ok(strip_empty(input)),
        Command::Preprocess(args) => Ok(preprocess(args)),
        Command::EvalModel(args) => eval_model(args),
    }
}

#[cfg(test)]
mod tests;
