use std::sync::Arc;

use super::*;
use crate::tests::Fixture;
use crate::{EvalContext, OperationDefinition, RegistryError};
use genex_diagnostic::{BufferSink, EvalError};
use genex_ir::Arity;
use pretty_assertions::assert_eq;

/// `$<GREET:name>`: host extension used by these tests.
struct Greet;

impl OperationDefinition for Greet {
    fn name(&self) -> &'static str {
        "GREET"
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
        match params {
            [name] if name.is_empty() => Err(EvalError::custom("GREET needs a name")),
            [name] => Ok(format!("hello {name} ({})", ctx.config)),
            _ => Err(EvalError::arity(self.name(), self.arity(), params.len())),
        }
    }
}

/// `$<OWNER>`: the target whose property is being evaluated.
struct Owner;

impl OperationDefinition for Owner {
    fn name(&self) -> &'static str {
        "OWNER"
    }

    fn arity(&self) -> Arity {
        Arity::NONE
    }

    fn evaluate(
        &self,
        _params: &[String],
        ctx: &mut EvalContext<'_>,
        _dag: Option<&DagChecker<'_>>,
        _expression: &str,
    ) -> EvalResult {
        Ok(ctx
            .current_target
            .map(|target| target.name().to_string())
            .unwrap_or_default())
    }
}

#[test]
fn default_engine_evaluates_builtins() {
    let engine = Engine::default();
    let out = engine
        .evaluate_str("$<UPPER_CASE:$<CONFIG>>", &EvalInputs::new("RelWithDebInfo"), None)
        .unwrap();
    assert_eq!(out, "RELWITHDEBINFO");
    assert_eq!(engine.options(), &EngineOptions::default());
}

#[test]
fn text_without_expression_skips_parsing() {
    let f = Fixture::new();
    assert_eq!(f.ok("a;b;$<"), "a;b;$<");
    assert!(f.model.expression_cache().unwrap().is_empty());
}

#[test]
fn host_extension_dispatches() {
    let f = Fixture::with(|b| b.operation(Box::new(Greet)));
    assert!(f.engine.registry().contains("GREET"));
    assert_eq!(f.ok("$<GREET:$<LOWER_CASE:WORLD>>"), "hello world (Debug)");
    assert_eq!(f.err("$<GREET:>"), "GREET needs a name");
    assert_eq!(
        f.err("$<GREET:a,b>"),
        "$<GREET> expression requires exactly one parameter."
    );
}

#[test]
fn builder_rejects_builtin_names() {
    struct Shadow;
    impl OperationDefinition for Shadow {
        fn name(&self) -> &'static str {
            "BOOL"
        }
        fn arity(&self) -> Arity {
            Arity::exactly(1)
        }
        fn evaluate(
            &self,
            _params: &[String],
            _ctx: &mut EvalContext<'_>,
            _dag: Option<&DagChecker<'_>>,
            _expression: &str,
        ) -> EvalResult {
            Ok(String::new())
        }
    }
    let result = Engine::builder().operation(Box::new(Shadow)).build();
    assert!(matches!(result, Err(RegistryError::BuiltinName(name)) if name == "BOOL"));
}

#[test]
fn quiet_engine_reports_nothing() {
    let sink = Arc::new(BufferSink::new());
    let engine = Engine::builder()
        .sink(sink.clone())
        .quiet(true)
        .build()
        .unwrap();
    assert!(engine
        .evaluate_str("$<NOPE>", &EvalInputs::new("Debug"), None)
        .is_err());
    assert!(sink.is_empty());
}

#[test]
fn property_values_are_parsed_once() {
    let f = Fixture::new();
    f.model.set_property("a", "P", "$<1:v>");
    assert_eq!(f.ok("$<TARGET_PROPERTY:a,P>$<TARGET_PROPERTY:a,P>"), "vv");
    let cache = f.model.expression_cache().unwrap();
    // Only the stored value; the top-level input is not cached.
    assert_eq!(cache.len(), 1);
}

#[test]
fn one_off_inputs_do_not_grow_the_cache() {
    let f = Fixture::new();
    for i in 0..100 {
        assert_eq!(f.ok(&format!("x{i}$<CONFIG>")), format!("x{i}Debug"));
    }
    let _ = f.engine.compile("$<1:kept by the caller>");
    assert!(f.model.expression_cache().unwrap().is_empty());
}

#[test]
fn replacing_a_value_evicts_its_tree() {
    let f = Fixture::new();
    f.model.set_property("a", "P", "$<1:old>");
    assert_eq!(f.ok("$<TARGET_PROPERTY:a,P>"), "old");
    f.model.set_property("a", "P", "$<1:new>");
    assert_eq!(f.ok("$<TARGET_PROPERTY:a,P>"), "new");
    assert_eq!(f.model.expression_cache().unwrap().len(), 1);
}

#[test]
fn engine_is_shareable_across_threads() {
    let f = Fixture::new();
    f.model.set_property("a", "P", "$<CONFIG>");
    let configs = ["Debug", "Release", "MinSizeRel", "RelWithDebInfo"];
    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = configs
            .iter()
            .map(|config| {
                let engine = &f.engine;
                scope.spawn(move || {
                    engine
                        .evaluate_str("$<TARGET_PROPERTY:a,P>", &EvalInputs::new(config), None)
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(outputs, configs);
}

#[test]
fn extensions_see_the_owning_target() {
    let f = Fixture::with(|b| b.operation(Box::new(Owner)));
    f.model.set_property("lib", "IFACE", "$<OWNER>");
    f.model.set_property("app", "DEPS", "$<TARGET_PROPERTY:lib,IFACE>");
    assert_eq!(
        f.eval_for("$<OWNER>/$<TARGET_PROPERTY:DEPS>", "Debug", Some("app"))
            .unwrap(),
        "app/lib"
    );
    assert_eq!(f.ok("[$<OWNER>]"), "[]");
}
