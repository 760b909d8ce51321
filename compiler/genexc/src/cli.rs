//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use genex_eval::EngineOptions;
use genex_preprocess::PreprocessMode;

/// Inspect, evaluate and rewrite generator expressions.
#[derive(Debug, Parser)]
#[command(name = "genexc", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the token stream of an expression.
    Lex { input: String },
    /// Print the evaluator tree of an expression.
    Parse {
        input: String,
        /// Maximum `$<` nesting depth.
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Evaluate an expression.
    Eval(EvalArgs),
    /// Split a list into elements, keeping expressions whole.
    Split { input: String },
    /// Remove empty elements from a `;`-separated list.
    StripEmpty { input: String },
    /// Rewrite an expression for export.
    Preprocess(PreprocessArgs),
    /// Evaluate every property of every target in a model file.
    EvalModel(EvalModelArgs),
}

/// Engine settings shared by the evaluating commands.
#[derive(Debug, Default, Args)]
pub struct EngineArgs {
    /// Maximum `$<` nesting depth, property lookups included.
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Do not report evaluation errors.
    #[arg(long)]
    pub quiet: bool,
    /// Allow operations that only make sense in generated build files.
    #[arg(long)]
    pub for_buildsystem: bool,
}

impl EngineArgs {
    pub fn options(&self) -> EngineOptions {
        let mut options = EngineOptions {
            quiet: self.quiet,
            for_buildsystem: self.for_buildsystem,
            ..EngineOptions::default()
        };
        if let Some(depth) = self.max_depth {
            options.max_nesting_depth = depth;
        }
        options
    }
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    pub input: String,
    /// Active configuration.
    #[arg(long, default_value = "Debug")]
    pub config: String,
    /// Head target.
    #[arg(long)]
    pub target: Option<String>,
    /// Language being compiled.
    #[arg(long)]
    pub language: Option<String>,
    /// TOML model file providing targets and properties.
    #[arg(long)]
    pub model: Option<PathBuf>,
    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Debug, Args)]
pub struct PreprocessArgs {
    pub input: String,
    #[arg(long, value_enum, default_value_t = Mode::StripAll)]
    pub mode: Mode,
    /// Prefix relative install paths.
    #[arg(long)]
    pub resolve_relative: bool,
    /// Prefix used with `--resolve-relative`.
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Command line spelling of [`PreprocessMode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    StripAll,
    BuildInterface,
    InstallInterface,
}

impl From<Mode> for PreprocessMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::StripAll => PreprocessMode::StripAll,
            Mode::BuildInterface => PreprocessMode::BuildInterface,
            Mode::InstallInterface => PreprocessMode::InstallInterface,
        }
    }
}

#[derive(Debug, Args)]
pub struct EvalModelArgs {
    /// TOML model file.
    pub model: PathBuf,
    /// Configurations to evaluate; repeatable. Defaults to the model's
    /// `configurations`, then `Debug`.
    #[arg(long = "config")]
    pub configs: Vec<String>,
    /// Language being compiled.
    #[arg(long)]
    pub language: Option<String>,
    #[command(flatten)]
    pub engine: EngineArgs,
}
