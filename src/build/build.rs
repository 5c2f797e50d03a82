use std::{ffi::OsStr, path::Path, process::Command};

use tracing::{debug, info};

use crate::errors::errors::{Error, ErrorImpl};

use super::toolchain::Compiler;

/// Builds `<program> -o <executable> <artifact>`.
pub fn compiler_command(program: impl AsRef<OsStr>, artifact: &Path, executable: &Path) -> Command {
    let mut command = Command::new(program);
    command.arg("-o").arg(executable).arg(artifact);
    command
}

/// Compiles `artifact` into `executable` with the selected compiler.
pub fn compile(compiler: Compiler, artifact: &Path, executable: &Path) -> Result<(), Error> {
    run_compiler(compiler.binary(), artifact, executable)
}

/// Runs any program following the `-o <output> <input>` convention and
/// waits for it to exit.
pub fn run_compiler(
    program: impl AsRef<OsStr>,
    artifact: &Path,
    executable: &Path,
) -> Result<(), Error> {
    let program = program.as_ref();
    let mut command = compiler_command(program, artifact, executable);
    debug!("running {:?}", command);

    let status = command
        .status()
        .map_err(|err| Error::io(program, err))?;

    if !status.success() {
        return Err(Error::new(ErrorImpl::CompilationError {
            code: status.code(),
        }));
    }

    info!("built {}", executable.display());
    Ok(())
}
