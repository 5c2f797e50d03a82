//! Unit tests for argument handling and configuration.

use std::path::PathBuf;

use crate::build::toolchain::Compiler;

use super::{
    args::{normalize_args, parse_args, Cli, Parsed},
    config::{validate_source, BuildConfig},
};

fn parse(args: &[&str]) -> Cli {
    match parse_args(args.iter().copied()).unwrap() {
        Parsed::Run(cli) => cli,
        Parsed::Info(text) => panic!("unexpected info output: {}", text),
    }
}

#[test]
fn test_normalize_single_dash_flags() {
    let args = normalize_args(["cycomp", "hello.cy", "-scc=tcc", "-aarch", "-keep-c", "-v"]);

    assert_eq!(
        args,
        ["cycomp", "hello.cy", "--scc=tcc", "--aarch", "--keep-c", "-v"]
    );
}

#[test]
fn test_normalize_leaves_double_dash_flags() {
    let args = normalize_args(["cycomp", "--keep-c", "--scc=gcc", "-scca"]);

    assert_eq!(args, ["cycomp", "--keep-c", "--scc=gcc", "-scca"]);
}

#[test]
fn test_parse_source_and_flags() {
    let cli = parse(&["cycomp", "hello.cy", "-scc=tcc", "-keep-c"]);

    assert_eq!(cli.source, PathBuf::from("hello.cy"));
    assert_eq!(cli.scc.as_deref(), Some("tcc"));
    assert!(cli.keep_c);
    assert!(!cli.aarch);
}

#[test]
fn test_flags_may_precede_source() {
    let cli = parse(&["cycomp", "-aarch", "hello.cy"]);

    assert!(cli.aarch);
    assert_eq!(cli.source, PathBuf::from("hello.cy"));
}

#[test]
fn test_missing_source_is_invalid_usage() {
    let error = parse_args(["cycomp"]).err().unwrap();

    assert_eq!(error.get_error_name(), "InvalidUsage");
}

#[test]
fn test_two_sources_is_invalid_usage() {
    let error = parse_args(["cycomp", "a.cy", "b.cy"]).err().unwrap();

    assert_eq!(error.get_error_name(), "InvalidUsage");
}

#[test]
fn test_help_is_not_an_error() {
    assert!(matches!(
        parse_args(["cycomp", "--help"]),
        Ok(Parsed::Info(_))
    ));
}

#[test]
fn test_validate_source_extension() {
    assert!(validate_source(&PathBuf::from("dir/hello.cy")).is_ok());

    for bad in ["hello.c", "hello", "hello.cy.txt", "hello.CY"] {
        let error = validate_source(&PathBuf::from(bad)).unwrap_err();
        assert_eq!(error.get_error_name(), "InvalidUsage");
    }
}

#[test]
fn test_config_defaults() {
    let config = BuildConfig::from_cli(&parse(&["cycomp", "hello.cy"])).unwrap();

    assert_eq!(config.compiler, Compiler::Clang);
    assert!(!config.keep_intermediate);
    assert_eq!(config.intermediate, PathBuf::from("output.c"));
    assert_eq!(config.executable, PathBuf::from("program"));
}

#[test]
fn test_config_arm_target() {
    let config = BuildConfig::from_cli(&parse(&["cycomp", "hello.cy", "-aarch", "-scc=clang"])).unwrap();

    assert_eq!(config.compiler, Compiler::Gcc);
}

#[test]
fn test_config_rejects_tcc_on_arm() {
    let error = BuildConfig::from_cli(&parse(&["cycomp", "hello.cy", "-aarch", "-scc=tcc"])).unwrap_err();

    assert_eq!(error.get_error_name(), "UnsupportedConfiguration");
}

#[test]
fn test_config_checks_extension_first() {
    let error = BuildConfig::from_cli(&parse(&["cycomp", "hello.c", "-aarch", "-scc=tcc"])).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidUsage");
}
