//! Error types and error handling for the translator.
//!
//! Every failure in this tool is terminal. This module defines:
//!
//! - The error taxonomy (usage, I/O, configuration, compilation)
//! - Error names and user-facing suggestions
//! - The exit status reported for any failure

pub mod errors;
