use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

use crate::errors::errors::{Error, ErrorImpl};

/// Long flags that are spelled with a single dash on the command line.
const SINGLE_DASH_FLAGS: [&str; 3] = ["scc", "aarch", "keep-c"];

#[derive(Parser, Debug)]
#[clap(
    name = "cycomp",
    about = "Translates a C* source file to C and compiles it",
    rename_all = "kebab-case",
    version
)]
pub struct Cli {
    /// C* source file (must end in .cy)
    pub source: PathBuf,

    /// Compiler to request (`tcc`, `gcc`, `clang`, ...)
    #[clap(long = "scc", value_name = "COMPILER")]
    pub scc: Option<String>,

    /// Build for aarch/ARM devices
    #[clap(long)]
    pub aarch: bool,

    /// Keep the translated output.c after a successful build
    #[clap(long)]
    pub keep_c: bool,

    /// Log progress of the translation
    #[clap(long, short = 'v')]
    pub verbose: bool,

    /// Log every rewritten line and the compiler command
    #[clap(long)]
    pub debug: bool,
}

/// Rewrites `-scc=x`, `-aarch` and `-keep-c` into clap's `--` spelling.
/// Everything else, the program name included, passes through untouched.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let is_single_dash_flag = arg
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split('=').next().unwrap_or(rest))
                .is_some_and(|name| SINGLE_DASH_FLAGS.contains(&name));

            if is_single_dash_flag {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

pub enum Parsed {
    Run(Cli),
    /// `--help` or `--version`: the rendered text, to print before exiting successfully.
    Info(String),
}

pub fn parse_args<I, S>(args: I) -> Result<Parsed, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => Ok(Parsed::Run(cli)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Parsed::Info(err.to_string()))
        }
        Err(err) => Err(Error::new(ErrorImpl::InvalidUsage {
            message: first_line(&err.to_string()),
        })),
    }
}

fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or(message);
    String::from(line.trim_start_matches("error: "))
}
