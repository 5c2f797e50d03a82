use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{debug, info, warn};

use crate::errors::errors::Error;

use super::{
    literal::ScanState,
    mappings::{Mapping, MAPPINGS},
    substitute::substitute_line,
};

/// Counts reported after a file has been translated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranslationSummary {
    pub lines: usize,
    pub rewritten: usize,
    /// Line on which a literal was opened and never closed.
    pub unterminated_literal: Option<usize>,
}

/// Drives the substitution engine over consecutive lines of one file,
/// threading the literal state from each line into the next.
pub struct Translator<'a> {
    mappings: &'a [Mapping],
    state: ScanState,
    line: usize,
    literal_opened_at: Option<usize>,
    rewritten: usize,
}

impl Translator<'static> {
    pub fn new() -> Self {
        Translator::with_mappings(&MAPPINGS)
    }
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Translator::new()
    }
}

impl<'a> Translator<'a> {
    pub fn with_mappings(mappings: &'a [Mapping]) -> Self {
        Translator {
            mappings,
            state: ScanState::new(),
            line: 0,
            literal_opened_at: None,
            rewritten: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Translates one line, including its line terminator if it has one.
    pub fn translate_line(&mut self, line: &[u8]) -> Vec<u8> {
        self.line += 1;

        let mut translated = line.to_vec();
        let next_state = substitute_line(&mut translated, self.state, self.mappings);

        if translated != line {
            self.rewritten += 1;
            debug!(
                "line {}: {:?} -> {:?}",
                self.line,
                String::from_utf8_lossy(line),
                String::from_utf8_lossy(&translated)
            );
        }

        match (self.state.in_string_literal, next_state.in_string_literal) {
            (false, true) => self.literal_opened_at = Some(self.line),
            (true, false) => self.literal_opened_at = None,
            _ => (),
        }
        self.state = next_state;

        translated
    }

    pub fn summary(&self) -> TranslationSummary {
        TranslationSummary {
            lines: self.line,
            rewritten: self.rewritten,
            unterminated_literal: self.literal_opened_at,
        }
    }
}

/// Translates a whole C* source held in memory. The source need not be
/// valid UTF-8.
pub fn translate_source(source: &[u8]) -> Vec<u8> {
    let mut translator = Translator::new();

    source
        .split_inclusive(|byte| *byte == b'\n')
        .flat_map(|line| translator.translate_line(line))
        .collect()
}

/// Translates `input` into `output`, one line at a time. Lines are handled
/// as raw bytes, so sources in any ASCII-compatible encoding translate.
///
/// The input is opened before the output is created, so a missing source
/// leaves no artifact behind.
pub fn translate_file(input: &Path, output: &Path) -> Result<TranslationSummary, Error> {
    let reader = File::open(input).map_err(|err| Error::io(input, err))?;
    let mut reader = BufReader::new(reader);
    let writer = File::create(output).map_err(|err| Error::io(output, err))?;
    let mut writer = BufWriter::new(writer);

    let mut translator = Translator::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|err| Error::io(input, err))?;
        if read == 0 {
            break;
        }

        writer
            .write_all(&translator.translate_line(&line))
            .map_err(|err| Error::io(output, err))?;
    }

    writer.flush().map_err(|err| Error::io(output, err))?;

    let summary = translator.summary();
    info!(
        "translated {} lines from {} ({} rewritten)",
        summary.lines,
        input.display(),
        summary.rewritten
    );

    if let Some(opened) = summary.unterminated_literal {
        warn!(
            "string literal opened on line {} of {} is never closed; no keywords were replaced after it",
            opened,
            input.display()
        );
    }

    Ok(summary)
}
