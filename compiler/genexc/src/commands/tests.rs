use super::*;
use crate::{EngineArgs, EvalArgs, Mode, PreprocessArgs};
use pretty_assertions::assert_eq;

fn eval_args(input: &str) -> EvalArgs {
    EvalArgs {
        input: input.to_string(),
        config: DEFAULT_CONFIG.to_string(),
        target: None,
        language: None,
        model: None,
        engine: EngineArgs::default(),
    }
}

#[test]
fn lex_lists_tokens() {
    let report = lex("a$<B>");
    let lines: Vec<&str> = report.output.lines().collect();
    assert_eq!(lines[0], "4 tokens");
    assert!(lines[1].ends_with("\"a\""));
    assert!(!report.failed);
}

#[test]
fn parse_prints_tree() {
    let report = parse("x$<IF:1,a,b>", None);
    assert_eq!(
        report.output,
        [
            "2 nodes, 1 operations",
            "  text \"x\"",
            "  op IF @ 1..12",
            "    param 0",
            "      text \"1\"",
            "    param 1",
            "      text \"a\"",
            "    param 2",
            "      text \"b\"",
        ]
        .join("\n")
    );
}

#[test]
fn parse_reports_overflow() {
    let report = parse("$<1:$<1:x>>", Some(1));
    assert!(report.failed);
    assert_eq!(report.diagnostics.len(), 1);
}

#[test]
fn eval_success_and_failure() {
    let report = eval(&eval_args("$<UPPER_CASE:$<CONFIG>>")).unwrap();
    assert_eq!(report, Report::success("DEBUG"));

    let report = eval(&eval_args("$<BOOL>")).unwrap();
    assert!(report.failed);
    assert!(report.output.is_empty());
    assert!(report.diagnostics[0].contains("$<BOOL> expression requires exactly one parameter."));
}

#[test]
fn eval_quiet_suppresses_diagnostics() {
    let mut args = eval_args("$<NOPE>");
    args.engine.quiet = true;
    let report = eval(&args).unwrap();
    assert_eq!(report, Report::failure(Vec::new()));
}

#[test]
fn eval_with_adhoc_head_target() {
    let mut args = eval_args("$<TARGET_EXISTS:app>");
    args.target = Some("app".to_string());
    assert_eq!(eval(&args).unwrap().output, "1");
}

#[test]
fn list_commands() {
    assert_eq!(split("a;$<1:b;c>;d").output, "a\n$<1:b;c>\nd");
    assert_eq!(strip_empty(";a;;b;").output, "a;b");
}

#[test]
fn preprocess_modes() {
    let args = |mode, resolve_relative, prefix: Option<&str>| PreprocessArgs {
        input: "$<BUILD_INTERFACE:src>;$<INSTALL_INTERFACE:include>".to_string(),
        mode,
        resolve_relative,
        prefix: prefix.map(str::to_string),
    };
    assert_eq!(preprocess(&args(Mode::StripAll, false, None)).output, "");
    assert_eq!(preprocess(&args(Mode::BuildInterface, false, None)).output, "src");
    assert_eq!(
        preprocess(&args(Mode::InstallInterface, true, None)).output,
        "${_IMPORT_PREFIX}/include"
    );
    assert_eq!(
        preprocess(&args(Mode::InstallInterface, true, Some("/opt/"))).output,
        "/opt/include"
    );
}
