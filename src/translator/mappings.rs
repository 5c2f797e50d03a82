use lazy_static::lazy_static;
use regex::bytes::{Match, Regex};

use crate::MK_MAPPING;

lazy_static! {
    /// The C* vocabulary. Order is precedence: an earlier entry rewrites the
    /// whole line before a later one runs.
    pub static ref MAPPINGS: Vec<Mapping> = vec![
        MK_MAPPING!("?xhport", "include <"),
        MK_MAPPING!(":\n", ".h>\n"),
        MK_MAPPING!("2reviewed", "_Bool"),
        MK_MAPPING!("mreviewed", "float"),
        MK_MAPPING!("lreviewed", "long"),
        MK_MAPPING!("oprint", "printf"),
        MK_MAPPING!(" @?build ", "struct "),
        MK_MAPPING!("nonreviewed", "void"),
        MK_MAPPING!("reviewed", "int"),
        MK_MAPPING!("|>", ")"),
        MK_MAPPING!("<|", "("),
        MK_MAPPING!("@?bye", "int* ptr = nullptr;\n *ptr = 0;"),
        MK_MAPPING!("@\\", "#"),
        // Shadowed by `|>` and `<|` above.
        MK_MAPPING!("<|>", "()"),
    ];
}

#[derive(Clone, Debug)]
pub struct Mapping {
    pattern: &'static str,
    replacement: &'static str,
    regex: Regex,
}

impl Mapping {
    pub fn new(pattern: &'static str, replacement: &'static str) -> Mapping {
        assert!(!pattern.is_empty(), "mapping patterns must not be empty");

        Mapping {
            pattern,
            replacement,
            regex: Regex::new(&regex::escape(pattern)).unwrap(),
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Next occurrence of the pattern starting at byte offset `start`.
    pub fn find_at<'h>(&self, line: &'h [u8], start: usize) -> Option<Match<'h>> {
        self.regex.find_at(line, start)
    }
}
