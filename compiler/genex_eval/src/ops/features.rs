use genex_diagnostic::{EvalError, EvalResult};
use genex_ir::Arity;

use super::bool_str;
use crate::{DagChecker, EvalContext, EvalFlags, OperationDefinition};

const C_STANDARDS: &[&str] = &["90", "99", "11", "17", "23"];
const CXX_STANDARDS: &[&str] = &["98", "11", "14", "17", "20", "23", "26"];

/// Standards of `language`, oldest first.
fn standards(language: &str) -> Option<&'static [&'static str]> {
    match language {
        "C" | "OBJC" => Some(C_STANDARDS),
        "CXX" | "CUDA" | "HIP" | "OBJCXX" => Some(CXX_STANDARDS),
        _ => None,
    }
}

/// Position of `standard` in `language`'s ordering.
fn rank(language: &str, standard: &str) -> Option<usize> {
    standards(language)?.iter().position(|s| *s == standard)
}

/// `cxx_std_17` -> `("CXX", "17", rank)`.
fn parse_feature(feature: &str) -> Option<(String, &str, usize)> {
    let (language, standard) = feature.split_once("_std_")?;
    let language = language.to_ascii_uppercase();
    let rank = rank(&language, standard)?;
    Some((language, standard, rank))
}

/// `$<COMPILE_FEATURES:f,...>`: `1` when the head target's configured
/// language standards satisfy every listed `<lang>_std_<N>` feature.
pub struct CompileFeaturesOp;

impl OperationDefinition for CompileFeaturesOp {
    fn name(&self) -> &'static str {
        "COMPILE_FEATURES"
    }

    fn arity(&self) -> Arity {
        Arity::ONE_OR_MORE
    }

    fn evaluate(
        &self,
        params: &[String],
        ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        let Some(head) = ctx.head_target else {
            return Err(EvalError::invalid_parameter(
                "COMPILE_FEATURES",
                "$<COMPILE_FEATURES> may only be used with binary targets.",
            ));
        };
        ctx.accumulators.flags |= EvalFlags::HEAD_SENSITIVE;
        let model = ctx.engine().model();

        let mut satisfied = true;
        for feature in params {
            let Some((language, standard, required)) = parse_feature(feature) else {
                return Err(EvalError::invalid_parameter(
                    "COMPILE_FEATURES",
                    format!("Feature \"{feature}\" is not known."),
                ));
            };

            let recorded = ctx
                .accumulators
                .max_language_standard
                .entry(head.clone())
                .or_default();
            let newer = recorded
                .get(&language)
                .and_then(|current| rank(&language, current))
                .map_or(true, |current| current < required);
            if newer {
                recorded.insert(language.clone(), standard.to_string());
            }

            let configured = model.property(head, &format!("{language}_STANDARD"), ctx.config);
            if let Some(configured) = configured {
                if let Some(have) = rank(&language, &configured) {
                    satisfied &= have >= required;
                }
            }
        }
        Ok(bool_str(satisfied))
    }
}
