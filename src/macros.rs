//! Utility macros for the translator.
//!
//! - `MK_MAPPING!` - Creates a Mapping entry for the keyword table

/// Creates a Mapping entry from a literal pattern and its replacement.
///
/// The pattern is matched verbatim; regex metacharacters in it carry no
/// special meaning.
///
/// # Example
///
/// ```ignore
/// let mapping = MK_MAPPING!("oprint", "printf");
/// ```
#[macro_export]
macro_rules! MK_MAPPING {
    ($pattern:literal, $replacement:literal) => {
        $crate::translator::mappings::Mapping::new($pattern, $replacement)
    };
}
