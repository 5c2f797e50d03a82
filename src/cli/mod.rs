//! Command-line handling.
//!
//! Turns raw process arguments into an immutable build configuration:
//!
//! - Accepting the tool's single-dash long flags (`-scc=`, `-aarch`, `-keep-c`)
//! - Parsing with clap
//! - Validating the source extension and resolving the compiler

pub mod args;
pub mod config;

#[cfg(test)]
mod tests;
