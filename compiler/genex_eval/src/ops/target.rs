//! Target queries.
//!
//! `$<TARGET_PROPERTY>` is the only operation that evaluates another
//! property value as an expression, and therefore the only one that
//! pushes a [`DagChecker`] frame.

use genex_diagnostic::{EvalError, EvalErrorKind, EvalResult};
use genex_ir::{Arity, TargetId};
use genex_lexer::find_expression;
use genex_preprocess::is_valid_target_name;

use super::bool_str;
use crate::walk::evaluate_tree;
use crate::{DagChecker, EvalContext, EvalFlags, OperationDefinition};

/// Property holding a target's object files.
pub(crate) const OBJECTS_PROPERTY: &str = "OBJECTS";

fn is_property_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Validate `name` and resolve it through the model.
fn resolve_target(operation: &str, name: &str, ctx: &EvalContext<'_>) -> Result<TargetId, EvalError> {
    if !is_valid_target_name(name) {
        return Err(EvalError::invalid_parameter(
            operation,
            format!("$<{operation}:tgt> expression requires a non-empty valid target name."),
        ));
    }
    ctx.engine()
        .model()
        .find_target(name)
        .ok_or_else(|| EvalError::target_not_found(name))
}

/// `$<TARGET_PROPERTY:tgt,prop>` or `$<TARGET_PROPERTY:prop>` (head
/// target). The value is itself evaluated, with `tgt` as current target.
pub struct TargetPropertyOp;

impl OperationDefinition for TargetPropertyOp {
    fn name(&self) -> &'static str {
        "TARGET_PROPERTY"
    }

    fn arity(&self) -> Arity {
        Arity::range(1, 2)
    }

    fn evaluate(
        &self,
        params: &[String],
        ctx: &mut EvalContext<'_>,
        dag: Option<&DagChecker<'_>>,
        expression: &str,
    ) -> EvalResult {
        let engine = ctx.engine();
        let (target, property) = match params {
            [property] => {
                let Some(head) = ctx.head_target else {
                    return Err(EvalError::invalid_parameter(
                        "TARGET_PROPERTY",
                        "$<TARGET_PROPERTY:prop> may only be used with binary targets.",
                    ));
                };
                ctx.accumulators.flags |= EvalFlags::HEAD_SENSITIVE;
                (head.clone(), property.as_str())
            }
            [name, property] => {
                if name.is_empty() {
                    let message = if property.is_empty() {
                        "$<TARGET_PROPERTY:tgt,prop> expression requires a non-empty target name and property name."
                    } else {
                        "$<TARGET_PROPERTY:tgt,prop> expression requires a non-empty target name."
                    };
                    return Err(EvalError::invalid_parameter("TARGET_PROPERTY", message));
                }
                if !is_valid_target_name(name) {
                    return Err(EvalError::invalid_parameter(
                        "TARGET_PROPERTY",
                        "Target name not supported.",
                    ));
                }
                let target = engine
                    .model()
                    .find_target(name)
                    .ok_or_else(|| EvalError::target_not_found(name.as_str()))?;
                ctx.accumulators.all_targets_seen.insert(target.clone());
                ctx.accumulators.depend_targets.insert(target.clone());
                (target, property.as_str())
            }
            _ => return Err(EvalError::arity(self.name(), self.arity(), params.len())),
        };

        if property.is_empty() {
            return Err(EvalError::invalid_parameter(
                "TARGET_PROPERTY",
                "$<TARGET_PROPERTY:...> expression requires a non-empty property name.",
            ));
        }
        if !is_property_name(property) {
            return Err(EvalError::invalid_parameter(
                "TARGET_PROPERTY",
                "Property name not supported.",
            ));
        }
        ctx.accumulators.see_property(&target, property);

        let frame = DagChecker::new(target.clone(), property, expression, dag);
        frame.check()?;

        let Some(value) = engine.model().property(&target, property, ctx.config) else {
            return Ok(String::new());
        };
        if find_expression(&value).is_none() {
            return Ok(value);
        }

        let tree = engine.parse_property_value(&value);
        let mut nested = ctx.derive(&target);
        let result = evaluate_tree(&tree, &mut nested, Some(&frame));
        ctx.accumulators.merge_from(nested.accumulators);
        result
    }
}

/// `$<TARGET_EXISTS:tgt>`.
pub struct TargetExistsOp;

impl OperationDefinition for TargetExistsOp {
    fn name(&self) -> &'static str {
        "TARGET_EXISTS"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn evaluate(
        &self,
        params: &[String],
        ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let name = params.first().map_or("", String::as_str);
        match resolve_target(self.name(), name, ctx) {
            Ok(_) => Ok(bool_str(true)),
            Err(err) if matches!(err.kind, EvalErrorKind::TargetNotFound { .. }) => {
                Ok(bool_str(false))
            }
            Err(err) => Err(err),
        }
    }
}

/// `$<TARGET_NAME_IF_EXISTS:tgt>`: `tgt`, or empty.
pub struct TargetNameIfExistsOp;

impl OperationDefinition for TargetNameIfExistsOp {
    fn name(&self) -> &'static str {
        "TARGET_NAME_IF_EXISTS"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn evaluate(
        &self,
        params: &[String],
        ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let name = params.first().map_or("", String::as_str);
        match resolve_target(self.name(), name, ctx) {
            Ok(target) => Ok(target.name().to_string()),
            Err(err) if matches!(err.kind, EvalErrorKind::TargetNotFound { .. }) => {
                Ok(String::new())
            }
            Err(err) => Err(err),
        }
    }
}

/// `$<TARGET_OBJECTS:tgt>`: the target's object files. Only meaningful
/// inside generated build files.
pub struct TargetObjectsOp;

impl OperationDefinition for TargetObjectsOp {
    fn name(&self) -> &'static str {
        "TARGET_OBJECTS"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn evaluate(
        &self,
        params: &[String],
        ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        if !ctx.for_buildsystem {
            return Err(EvalError::invalid_parameter(
                "TARGET_OBJECTS",
                "The evaluation of the TARGET_OBJECTS generator expression is only suitable \
                 for consumption by the build system.  It is not suitable for writing out \
                 elsewhere.",
            ));
        }
        let name = params.first().map_or("", String::as_str);
        let target = resolve_target(self.name(), name, ctx)?;
        ctx.accumulators.depend_targets.insert(target.clone());
        ctx.accumulators.all_targets_seen.insert(target.clone());
        Ok(ctx
            .engine()
            .model()
            .property(&target, OBJECTS_PROPERTY, ctx.config)
            .unwrap_or_default())
    }
}
