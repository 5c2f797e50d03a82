#![allow(clippy::module_inception)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use tracing::{debug, warn};

use crate::{
    build::build::compile,
    cli::config::BuildConfig,
    errors::errors::{Error, ErrorTip},
    translator::translator::translate_file,
};

pub mod build;
pub mod cli;
pub mod errors;
pub mod macros;
pub mod translator;

/// Translates, compiles and cleans up, in that order. Returns the path of
/// the executable that was produced.
///
/// The intermediate C file is left in place when compilation fails.
pub fn run(config: &BuildConfig) -> Result<PathBuf, Error> {
    println!("Translating C* to C...");
    translate_file(&config.source, &config.intermediate)?;

    println!("Compiling with {}...", config.compiler);
    compile(config.compiler, &config.intermediate, &config.executable)?;

    if config.keep_intermediate {
        debug!("keeping {}", config.intermediate.display());
    } else if let Err(err) = fs::remove_file(&config.intermediate) {
        warn!("could not remove {}: {}", config.intermediate.display(), err);
    }

    Ok(config.executable.clone())
}

/// The hint printed once the executable exists.
pub fn run_hint(executable: &Path) -> String {
    format!("Compilation finished! Run './{}' to execute.", executable.display())
}

pub fn display_error(error: &Error) {
    /*
        Error: UnsupportedConfiguration (tcc is not available for aarch/ARM devices)
        -> hello.cy
    */

    let label = "Error:".bold().on_red();

    if let ErrorTip::None = error.get_tip() {
        eprintln!("{} {}", label, error.get_error_name());
    } else {
        eprintln!("{} {} ({})", label, error.get_error_name(), error.get_tip());
    }

    if let Some(file) = error.get_file() {
        eprintln!("-> {}", file.display());
    }
}
