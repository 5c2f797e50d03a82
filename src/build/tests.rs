//! Unit tests for compiler selection and invocation.

use std::path::Path;

use crate::errors::errors::ErrorImpl;

use super::{
    build::{compiler_command, run_compiler},
    toolchain::{select_compiler, Compiler, Target},
};

#[test]
fn test_default_compiler_becomes_clang() {
    assert_eq!(select_compiler(None, Target::Native).unwrap(), Compiler::Clang);
}

#[test]
fn test_explicit_request_is_overridden_off_arm() {
    assert_eq!(select_compiler(Some("gcc"), Target::Native).unwrap(), Compiler::Clang);
    assert_eq!(select_compiler(Some("cc"), Target::Native).unwrap(), Compiler::Clang);
    assert_eq!(select_compiler(Some("clang"), Target::Native).unwrap(), Compiler::Clang);
}

#[test]
fn test_tcc_is_honored_off_arm() {
    assert_eq!(select_compiler(Some("tcc"), Target::Native).unwrap(), Compiler::Tcc);
}

#[test]
fn test_arm_forces_gcc() {
    assert_eq!(select_compiler(None, Target::Aarch64).unwrap(), Compiler::Gcc);
    assert_eq!(select_compiler(Some("clang"), Target::Aarch64).unwrap(), Compiler::Gcc);
}

#[test]
fn test_tcc_on_arm_is_unsupported() {
    let error = select_compiler(Some("tcc"), Target::Aarch64).unwrap_err();

    assert_eq!(error.get_error_name(), "UnsupportedConfiguration");
    match error.kind() {
        ErrorImpl::UnsupportedConfiguration { compiler, target } => {
            assert_eq!(compiler, "tcc");
            assert_eq!(target, "aarch/ARM");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_compiler_command_arguments() {
    let command = compiler_command("clang", Path::new("output.c"), Path::new("program"));

    assert_eq!(command.get_program(), "clang");
    let args: Vec<_> = command.get_args().collect();
    assert_eq!(args, ["-o", "program", "output.c"]);
}

#[cfg(unix)]
#[test]
fn test_successful_compiler_exit() {
    assert!(run_compiler("true", Path::new("output.c"), Path::new("program")).is_ok());
}

#[cfg(unix)]
#[test]
fn test_failed_compiler_exit_is_compilation_error() {
    let error = run_compiler("false", Path::new("output.c"), Path::new("program")).unwrap_err();

    assert!(matches!(
        error.kind(),
        ErrorImpl::CompilationError { code: Some(1) }
    ));
}

#[test]
fn test_missing_compiler_is_io_error() {
    let error = run_compiler(
        "cycomp-no-such-compiler",
        Path::new("output.c"),
        Path::new("program"),
    )
    .unwrap_err();

    assert_eq!(error.get_error_name(), "IOError");
    assert_eq!(
        error.get_file().unwrap().to_str(),
        Some("cycomp-no-such-compiler")
    );
}
