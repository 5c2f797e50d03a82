/// Whether the scan position is inside a string literal. Carried from one
/// line to the next and never reset within a file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub in_string_literal: bool,
}

impl ScanState {
    pub fn new() -> ScanState {
        ScanState::default()
    }

    pub fn inside() -> ScanState {
        ScanState {
            in_string_literal: true,
        }
    }

    fn toggled(self) -> ScanState {
        ScanState {
            in_string_literal: !self.in_string_literal,
        }
    }
}

/// Per-byte literal classification of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan {
    /// One entry per byte; delimiting quotes count as inside.
    pub inside: Vec<bool>,
    pub end: ScanState,
}

impl LineScan {
    /// True when no scanned byte belongs to a literal span.
    pub fn is_outside(&self) -> bool {
        self.inside.iter().all(|inside| !inside)
    }
}

/// Running literal state over a stream of bytes.
///
/// A `"` toggles the state unless the byte before it is a backslash. An
/// escaped backslash right before a quote (`\\"`) is therefore read as an
/// escaped quote.
#[derive(Debug, Clone, Copy)]
pub struct LiteralTracker {
    state: ScanState,
    previous: Option<u8>,
}

impl LiteralTracker {
    /// A tracker positioned at the start of a line.
    pub fn new(state: ScanState) -> LiteralTracker {
        LiteralTracker {
            state,
            previous: None,
        }
    }

    /// Consumes one byte and reports whether it is part of a literal.
    pub fn feed(&mut self, byte: u8) -> bool {
        let toggles = byte == b'"' && self.previous != Some(b'\\');
        self.previous = Some(byte);

        if toggles {
            // Opening and closing quotes are both part of the literal.
            self.state = self.state.toggled();
            true
        } else {
            self.state.in_string_literal
        }
    }

    pub fn advance(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.feed(*byte);
        }
    }

    /// Classifies `bytes` as if they came next, without consuming them.
    pub fn scan(&self, bytes: &[u8]) -> LineScan {
        let mut tracker = *self;
        let inside = bytes.iter().map(|byte| tracker.feed(*byte)).collect();

        LineScan {
            inside,
            end: tracker.state,
        }
    }
}

/// Classifies every byte of `line`, starting from `state`.
pub fn scan_line(line: &[u8], state: ScanState) -> LineScan {
    LiteralTracker::new(state).scan(line)
}
