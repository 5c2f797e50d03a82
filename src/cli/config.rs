use std::path::{Path, PathBuf};

use crate::{
    build::toolchain::{select_compiler, Compiler, Target},
    errors::errors::{Error, ErrorImpl},
};

use super::args::Cli;

pub const SOURCE_EXTENSION: &str = "cy";
pub const INTERMEDIATE_FILE: &str = "output.c";
pub const EXECUTABLE_FILE: &str = "program";

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub source: PathBuf,
    pub compiler: Compiler,
    pub keep_intermediate: bool,
    pub intermediate: PathBuf,
    pub executable: PathBuf,
}

impl BuildConfig {
    pub fn from_cli(cli: &Cli) -> Result<BuildConfig, Error> {
        validate_source(&cli.source)?;

        let target = if cli.aarch {
            Target::Aarch64
        } else {
            Target::Native
        };
        let compiler = select_compiler(cli.scc.as_deref(), target)?;

        Ok(BuildConfig {
            source: cli.source.clone(),
            compiler,
            keep_intermediate: cli.keep_c,
            intermediate: PathBuf::from(INTERMEDIATE_FILE),
            executable: PathBuf::from(EXECUTABLE_FILE),
        })
    }
}

pub fn validate_source(source: &Path) -> Result<(), Error> {
    match source.extension() {
        Some(extension) if extension == SOURCE_EXTENSION => Ok(()),
        _ => Err(Error::new(ErrorImpl::InvalidUsage {
            message: format!(
                "input file must have a .{} extension, got `{}`",
                SOURCE_EXTENSION,
                source.display()
            ),
        })),
    }
}
