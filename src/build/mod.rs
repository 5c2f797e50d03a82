//! Native build of the translated C artifact.
//!
//! - Compiler selection from the requested compiler and target
//! - Invocation of the external compiler as a blocking subprocess

pub mod build;
pub mod toolchain;

#[cfg(test)]
mod tests;
