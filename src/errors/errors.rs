use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::new(ErrorImpl::IOError {
            path: path.into(),
            source,
        })
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Any failure ends the run with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn get_file(&self) -> Option<&PathBuf> {
        match &self.internal_error {
            ErrorImpl::IOError { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidUsage { .. } => "InvalidUsage",
            ErrorImpl::IOError { .. } => "IOError",
            ErrorImpl::UnsupportedConfiguration { .. } => "UnsupportedConfiguration",
            ErrorImpl::CompilationError { .. } => "CompilationError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidUsage { message } => ErrorTip::Suggestion(format!(
                "{}; usage: cycomp <source.cy> [-scc=compiler] [-aarch] [-keep-c]",
                message
            )),
            ErrorImpl::IOError { path, source } if source.kind() == io::ErrorKind::NotFound => {
                ErrorTip::Suggestion(format!("`{}` does not exist", path.display()))
            }
            ErrorImpl::IOError { source, .. } => ErrorTip::Suggestion(source.to_string()),
            ErrorImpl::UnsupportedConfiguration { compiler, target } => ErrorTip::Suggestion(
                format!("{} is not available for {} devices", compiler, target),
            ),
            ErrorImpl::CompilationError { code: Some(code) } => {
                ErrorTip::Suggestion(format!("Compilation failed with error code {}", code))
            }
            ErrorImpl::CompilationError { code: None } => ErrorTip::None,
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("invalid usage: {message}")]
    InvalidUsage { message: String },
    #[error("cannot access {path:?}: {source}")]
    IOError { path: PathBuf, source: io::Error },
    #[error("{compiler} is not supported for target {target}")]
    UnsupportedConfiguration { compiler: String, target: String },
    #[error("compiler exited with status {code:?}")]
    CompilationError { code: Option<i32> },
}
