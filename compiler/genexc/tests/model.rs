// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end runs of the driver over model files.

use std::io::Write;

use clap::Parser;
use genexc::{run, Cli, Report};
use pretty_assertions::assert_eq;

const MODEL: &str = r#"
configurations = ["Debug", "Release"]

[targets.app]
COMPILE_DEFINITIONS = ["APP", "$<$<CONFIG:Debug>:APP_DEBUG>"]
LINK_LIBRARIES = "$<TARGET_PROPERTY:core,OUTPUT_NAME>"

[targets.app.configs.Release]
COMPILE_OPTIONS = "-O2"

[targets.core]
OUTPUT_NAME = "core_$<LOWER_CASE:$<CONFIG>>"

[targets.loop]
A = "$<TARGET_PROPERTY:loop,B>"
B = "$<TARGET_PROPERTY:loop,A>"
"#;

fn model_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn run_args(args: &[&str]) -> Report {
    let cli = Cli::try_parse_from(std::iter::once("genexc").chain(args.iter().copied())).unwrap();
    run(&cli).unwrap()
}

#[test]
fn eval_against_model() {
    let file = model_file(MODEL);
    let path = file.path().to_str().unwrap();
    let report = run_args(&[
        "eval",
        "--model",
        path,
        "--target",
        "app",
        "--config",
        "Release",
        "--",
        "-D$<JOIN:$<TARGET_PROPERTY:COMPILE_DEFINITIONS>,;-D>",
    ]);
    // The Release-only empty element is dropped by the list join.
    assert_eq!(report, Report::success("-DAPP"));
}

#[test]
fn eval_model_covers_every_property() {
    let file = model_file(MODEL);
    let path = file.path().to_str().unwrap();
    let report = run_args(&["eval-model", path]);

    assert_eq!(
        report.output.lines().collect::<Vec<_>>(),
        [
            "app.COMPILE_DEFINITIONS [Debug] = APP;APP_DEBUG",
            "app.COMPILE_DEFINITIONS [Release] = APP;",
            "app.COMPILE_OPTIONS [Release] = -O2",
            "app.LINK_LIBRARIES [Debug] = core_debug",
            "app.LINK_LIBRARIES [Release] = core_release",
            "core.OUTPUT_NAME [Debug] = core_debug",
            "core.OUTPUT_NAME [Release] = core_release",
        ]
    );
    assert!(report.failed);
    assert_eq!(report.diagnostics.len(), 4);
    assert!(report
        .diagnostics
        .iter()
        .all(|d| d.starts_with("loop.") && d.contains("Dependency loop found.")));
}

#[test]
fn explicit_configs_override_model_defaults() {
    let file = model_file("[targets.t]\nP = \"$<CONFIG>\"\n");
    let path = file.path().to_str().unwrap();
    let report = run_args(&["eval-model", path, "--config", "A", "--config", "B"]);
    assert_eq!(report.output, "t.P [A] = A\nt.P [B] = B");
    assert!(!report.failed);

    let report = run_args(&["eval-model", path]);
    assert_eq!(report.output, "t.P [Debug] = Debug");
}

#[test]
fn unknown_target_is_a_driver_error() {
    let file = model_file(MODEL);
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["genexc", "eval", "--model", path, "--target", "ghost", "x"])
        .unwrap();
    let err = run(&cli).unwrap_err();
    assert_eq!(err.to_string(), "no target `ghost` in the model");
}

#[test]
fn malformed_model_is_a_driver_error() {
    let file = model_file("[targets.app\n");
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["genexc", "eval-model", path]).unwrap();
    let err = run(&cli).unwrap_err();
    assert!(err.to_string().starts_with("invalid model file"));
}
