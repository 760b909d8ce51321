//! `eval` and `eval-model`.

use std::sync::Arc;

use genex_eval::{
    BufferSink, CompiledExpression, Engine, EvalError, EvalInputs, InMemoryModel,
    PropertyInterpreter, SilentSink, TargetModel,
};
use genex_ir::TargetId;
use rayon::prelude::*;
use tracing::{debug, info};

use super::{DriverError, Report, DEFAULT_CONFIG};
use crate::{EvalArgs, EvalModelArgs, ModelFile};

/// Evaluate one expression.
///
/// Without `--model`, `--target` names a fresh target with no
/// properties.
pub fn eval(args: &EvalArgs) -> Result<Report, DriverError> {
    let model = Arc::new(match &args.model {
        Some(path) => ModelFile::load(path)?.into_model(),
        None => InMemoryModel::new(),
    });
    let head = match &args.target {
        Some(name) if args.model.is_none() => Some(model.add_target(name)),
        Some(name) => Some(
            model
                .find_target(name)
                .ok_or_else(|| DriverError::UnknownTarget(name.clone()))?,
        ),
        None => None,
    };

    let sink = Arc::new(BufferSink::new());
    let engine = Engine::builder()
        .model(model)
        .sink(sink.clone())
        .options(args.engine.options())
        .build()?;

    let mut inputs = EvalInputs::new(&args.config);
    if let Some(head) = &head {
        inputs = inputs.head_target(head);
    }
    if let Some(language) = &args.language {
        inputs = inputs.language(language);
    }

    Ok(match engine.evaluate_str(&args.input, &inputs, None) {
        Ok(output) => Report::success(output),
        Err(_) => Report::failure(sink.take()),
    })
}

/// One `(target, property, configuration)` evaluation.
#[derive(Clone, Debug)]
struct Task {
    target: TargetId,
    property: String,
    config: String,
}

/// Evaluate every property of every target, for each configuration.
///
/// Tasks run in parallel against one shared engine; each builds its own
/// compiled expression. Output is ordered by target, property, then
/// configuration.
pub fn eval_model(args: &EvalModelArgs) -> Result<Report, DriverError> {
    let file = ModelFile::load(&args.model)?;
    let configs = if args.configs.is_empty() && file.configurations.is_empty() {
        vec![DEFAULT_CONFIG.to_string()]
    } else if args.configs.is_empty() {
        file.configurations.clone()
    } else {
        args.configs.clone()
    };

    let model = Arc::new(file.into_model());
    // Errors are attributed per task below rather than through the sink.
    let engine = Engine::builder()
        .model(model.clone())
        .sink(Arc::new(SilentSink))
        .options(args.engine.options())
        .build()?;

    let config_names = &configs;
    let tasks: Vec<Task> = model
        .targets()
        .into_iter()
        .flat_map(|target| {
            let properties = model.property_names(&target);
            properties.into_iter().flat_map(move |property| {
                let target = target.clone();
                config_names.iter().map(move |config| Task {
                    target: target.clone(),
                    property: property.clone(),
                    config: config.clone(),
                })
            })
        })
        .collect();
    info!(tasks = tasks.len(), configs = configs.len(), "evaluating model");

    let language = args.language.as_deref();
    let results: Vec<(Task, Option<Result<String, EvalError>>)> = tasks
        .into_par_iter()
        .map(|task| {
            let result = evaluate_task(&engine, &task, language);
            (task, result)
        })
        .collect();

    let mut report = Report::default();
    let mut lines = Vec::with_capacity(results.len());
    for (task, result) in results {
        let label = format!("{}.{} [{}]", task.target, task.property, task.config);
        match result {
            None => {}
            Some(Ok(value)) => lines.push(format!("{label} = {value}")),
            Some(Err(err)) => {
                report.failed = true;
                if !args.engine.quiet {
                    report.diagnostics.push(format!("{label}: {err}"));
                }
            }
        }
    }
    report.output = lines.join("\n");
    Ok(report)
}

/// `None` when the property has no value in the task's configuration.
fn evaluate_task(
    engine: &Engine,
    task: &Task,
    language: Option<&str>,
) -> Option<Result<String, EvalError>> {
    let mut interpreter =
        PropertyInterpreter::new(engine, task.target.clone(), task.config.as_str());
    if let Some(language) = language {
        interpreter = interpreter.with_language(language);
    }
    let output = interpreter.evaluate_property(&task.property)?.to_string();
    let error = interpreter
        .compiled()
        .and_then(CompiledExpression::last_error)
        .cloned();
    debug!(target_name = %task.target, property = %task.property, failed = error.is_some(), "evaluated");
    Some(match error {
        Some(err) => Err(err),
        None => Ok(output),
    })
}
