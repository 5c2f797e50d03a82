use std::fmt::Display;

use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl};

/// Compiler assumed when none is requested on the command line.
pub const DEFAULT_COMPILER: &str = "gcc";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Compiler {
    Gcc,
    Clang,
    Tcc,
}

impl Compiler {
    pub fn binary(&self) -> &'static str {
        match self {
            Compiler::Gcc => "gcc",
            Compiler::Clang => "clang",
            Compiler::Tcc => "tcc",
        }
    }
}

impl Display for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Target {
    #[default]
    Native,
    Aarch64,
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Native => write!(f, "native"),
            Target::Aarch64 => write!(f, "aarch/ARM"),
        }
    }
}

/// Resolves the compiler that will actually run.
///
/// Only `tcc` survives as an explicit request, and only off ARM. On ARM
/// everything else becomes `gcc`; elsewhere everything else becomes `clang`.
pub fn select_compiler(requested: Option<&str>, target: Target) -> Result<Compiler, Error> {
    let requested = requested.unwrap_or(DEFAULT_COMPILER);
    let is_tcc = requested == Compiler::Tcc.binary();

    let selected = match target {
        Target::Aarch64 if is_tcc => {
            return Err(Error::new(ErrorImpl::UnsupportedConfiguration {
                compiler: String::from(requested),
                target: target.to_string(),
            }));
        }
        Target::Aarch64 => Compiler::Gcc,
        Target::Native if is_tcc => Compiler::Tcc,
        Target::Native => Compiler::Clang,
    };

    if selected.binary() != requested {
        debug!("requested compiler `{}` replaced by `{}` for {} target", requested, selected, target);
    }

    Ok(selected)
}
