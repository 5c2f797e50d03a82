//! C* to C translation.
//!
//! This module rewrites C* source text into C, line by line. It handles:
//!
//! - The keyword table mapping C* spellings to C
//! - Tracking whether a position sits inside a string literal
//! - Substituting keywords outside string literals
//! - Reading the source file and writing the translated artifact

pub mod literal;
pub mod mappings;
pub mod substitute;
pub mod translator;
