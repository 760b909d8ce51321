use crate::tests::Fixture;
use pretty_assertions::assert_eq;

// === Logic ===

#[test]
fn zero_and_one() {
    let f = Fixture::new();
    assert_eq!(f.ok("a$<0:b>c"), "ac");
    assert_eq!(f.ok("a$<1:b>c"), "abc");
    assert_eq!(f.ok("$<1:x,y,z>"), "x,y,z");
    assert_eq!(f.ok("$<1:>"), "");
}

#[test]
fn zero_does_not_evaluate_content() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<0:$<NOT_AN_OPERATION>>"), "");
    assert_eq!(f.err("$<0>"), "$<0> expression requires a parameter.");
}

#[test]
fn bool_false_constants() {
    let f = Fixture::new();
    for value in ["", "0", "off", "No", "FALSE", "n", "IGNORE", "NOTFOUND", "lib-NOTFOUND"] {
        assert_eq!(f.ok(&format!("$<BOOL:{value}>")), "0", "{value}");
    }
    for value in ["1", "ON", "yes", "anything", "2"] {
        assert_eq!(f.ok(&format!("$<BOOL:{value}>")), "1", "{value}");
    }
}

#[test]
fn and_or_not() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<AND:1,1,1>"), "1");
    assert_eq!(f.ok("$<AND:1,0,1>"), "0");
    assert_eq!(f.ok("$<OR:0,0>"), "0");
    assert_eq!(f.ok("$<OR:0,1>"), "1");
    assert_eq!(f.ok("$<NOT:0>"), "1");
    assert_eq!(f.ok("$<NOT:1>"), "0");
}

#[test]
fn logic_rejects_non_boolean() {
    let f = Fixture::new();
    assert_eq!(
        f.err("$<AND:1,yes>"),
        "Parameters to $<AND> must resolve to either '0' or '1'."
    );
    assert_eq!(
        f.err("$<NOT:2>"),
        "$<NOT> parameter must resolve to exactly one '0' or '1' value."
    );
}

#[test]
fn and_or_short_circuit() {
    let f = Fixture::new();
    // The unknown operation is never dispatched.
    assert_eq!(f.ok("$<AND:0,$<NOPE>>"), "0");
    assert_eq!(f.ok("$<OR:1,$<NOPE>>"), "1");
    assert!(f.eval("$<AND:1,$<NOPE>>").is_err());
}

#[test]
fn if_selects_branch() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<IF:1,yes,no>"), "yes");
    assert_eq!(f.ok("$<IF:0,yes,no>"), "no");
    assert_eq!(f.ok("$<IF:1,yes,$<NOPE>>"), "yes");
    assert_eq!(f.ok("$<IF:0,$<NOPE>,no>"), "no");
    assert_eq!(
        f.err("$<IF:maybe,a,b>"),
        "First parameter to $<IF> must resolve to exactly one '0' or '1' value."
    );
}

// === Comparison ===

#[test]
fn strequal() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<STREQUAL:a,a>"), "1");
    assert_eq!(f.ok("$<STREQUAL:a,A>"), "0");
    assert_eq!(f.ok("$<STREQUAL:,>"), "1");
}

#[test]
fn equal_numbers() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<EQUAL:10,0xA>"), "1");
    assert_eq!(f.ok("$<EQUAL:0b101,5>"), "1");
    assert_eq!(f.ok("$<EQUAL:-3,3>"), "0");
    assert_eq!(f.ok("$<EQUAL:+7,007>"), "1");
    assert_eq!(
        f.err("$<EQUAL:1,one>"),
        "$<EQUAL> parameter one is not a valid integer."
    );
}

#[test]
fn in_list() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<IN_LIST:b,a;b;c>"), "1");
    assert_eq!(f.ok("$<IN_LIST:d,a;b;c>"), "0");
    assert_eq!(f.ok("$<IN_LIST:,a;;b>"), "0");
}

// === Text ===

#[test]
fn literal_characters() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<ANGLE-R>$<COMMA>$<SEMICOLON>"), ">,;");
    assert_eq!(
        f.err("$<COMMA:x>"),
        "$<COMMA> expression requires no parameters."
    );
}

#[test]
fn case_mapping() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<LOWER_CASE:MiXeD>"), "mixed");
    assert_eq!(f.ok("$<UPPER_CASE:MiXeD>"), "MIXED");
}

#[test]
fn join_and_remove_duplicates() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<JOIN:a;b;c, -I>"), "a -Ib -Ic");
    assert_eq!(f.ok("-I$<JOIN:x;y,;-I>"), "-Ix;-Iy");
    assert_eq!(f.ok("$<REMOVE_DUPLICATES:a;b;a;c;b>"), "a;b;c");
}

// === Configuration and language ===

#[test]
fn config_queries() {
    let f = Fixture::new();
    assert_eq!(f.ok("$<CONFIG>"), "Debug");
    assert_eq!(f.ok("$<CONFIG:debug>"), "1");
    assert_eq!(f.ok("$<CONFIG:Release,Debug>"), "1");
    assert_eq!(f.ok("$<CONFIG:Release>"), "0");
    assert!(f.eval("$<CONFIG:Not-Valid>").is_err());
}

#[test]
fn compile_language_requires_language() {
    let f = Fixture::new();
    assert!(f.eval("$<COMPILE_LANGUAGE>").is_err());

    let inputs = crate::EvalInputs::new("Debug").language("CXX");
    let out = f
        .engine
        .evaluate_str("$<COMPILE_LANGUAGE>|$<COMPILE_LANGUAGE:C,CXX>|$<COMPILE_LANGUAGE:C>", &inputs, None)
        .unwrap();
    assert_eq!(out, "CXX|1|0");
}

// === Interfaces ===

#[test]
fn interfaces_while_building() {
    let f = Fixture::new();
    assert_eq!(
        f.ok("$<BUILD_INTERFACE:src/a,b>$<INSTALL_INTERFACE:include>"),
        "src/a,b"
    );
}

#[test]
fn install_interface_content_is_not_evaluated() {
    let f = Fixture::new();
    assert_eq!(f.ok("a$<INSTALL_INTERFACE:$<TARGET_PROPERTY:missing,X>>b"), "ab");
    assert_eq!(f.ok("$<INSTALL_INTERFACE:$<NOT_AN_OP:x>>"), "");
    assert!(f.sink.is_empty());
}

// === Targets ===

#[test]
fn target_exists_and_name() {
    let f = Fixture::new();
    f.model.add_target("lib");
    assert_eq!(f.ok("$<TARGET_EXISTS:lib>"), "1");
    assert_eq!(f.ok("$<TARGET_EXISTS:nope>"), "0");
    assert_eq!(f.ok("$<TARGET_NAME_IF_EXISTS:lib>"), "lib");
    assert_eq!(f.ok("$<TARGET_NAME_IF_EXISTS:nope>"), "");
    assert_eq!(
        f.err("$<TARGET_EXISTS:>"),
        "$<TARGET_EXISTS:tgt> expression requires a non-empty valid target name."
    );
}

#[test]
fn target_objects_requires_buildsystem() {
    let f = Fixture::new();
    f.model.set_property("objs", "OBJECTS", "a.o;b.o");
    assert!(f.eval("$<TARGET_OBJECTS:objs>").is_err());

    let f = Fixture::with(|b| b.for_buildsystem(true));
    f.model.set_property("objs", "OBJECTS", "a.o;b.o");
    assert_eq!(f.ok("$<TARGET_OBJECTS:objs>"), "a.o;b.o");
    assert_eq!(f.err("$<TARGET_OBJECTS:missing>"), "No target \"missing\"");
}

// === Compile features ===

#[test]
fn compile_features_against_configured_standard() {
    let f = Fixture::new();
    f.model.set_property("app", "CXX_STANDARD", "17");
    let check = |features: &str| {
        f.eval_for(&format!("$<COMPILE_FEATURES:{features}>"), "Debug", Some("app"))
            .unwrap()
    };
    assert_eq!(check("cxx_std_11"), "1");
    assert_eq!(check("cxx_std_17"), "1");
    assert_eq!(check("cxx_std_20"), "0");
    assert_eq!(check("cxx_std_11,cxx_std_20"), "0");
    // No C standard configured: any requirement is satisfied.
    assert_eq!(check("c_std_11"), "1");
}

#[test]
fn compile_features_errors() {
    let f = Fixture::new();
    assert!(f.eval("$<COMPILE_FEATURES:cxx_std_11>").is_err());
    let err = f
        .eval_for("$<COMPILE_FEATURES:cxx_lambdas>", "Debug", Some("app"))
        .unwrap_err();
    assert_eq!(err.kind.to_string(), "Feature \"cxx_lambdas\" is not known.");
}

// === Helpers ===

#[test]
fn integer_forms() {
    use super::compare::parse_integer;
    assert_eq!(parse_integer("42"), Some(42));
    assert_eq!(parse_integer("-0x10"), Some(-16));
    assert_eq!(parse_integer("0B11"), Some(3));
    assert_eq!(parse_integer("--1"), None);
    assert_eq!(parse_integer("0x"), None);
    assert_eq!(parse_integer(""), None);
    assert_eq!(parse_integer("1.5"), None);
}

#[test]
fn off_constants() {
    use super::logic::is_off;
    assert!(is_off("Off"));
    assert!(is_off("foo-notfound"));
    assert!(!is_off("NOTFOUNDX"));
    assert!(!is_off("y"));
}
