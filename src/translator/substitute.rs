use super::{
    literal::{scan_line, LiteralTracker, ScanState},
    mappings::Mapping,
};

/// Rewrites `line` with every mapping, in table order, and returns the
/// literal state to carry into the next line.
///
/// An occurrence is only replaced when none of its bytes fall inside a
/// string literal of the line as rewritten so far. Replacement text is never
/// rescanned by the mapping that produced it.
pub fn substitute_line(line: &mut Vec<u8>, state: ScanState, mappings: &[Mapping]) -> ScanState {
    for mapping in mappings {
        let rewritten = substitute_mapping(line, state, mapping);
        *line = rewritten;
    }

    scan_line(line, state).end
}

/// One left-to-right pass of a single mapping. The tracker follows the
/// rewritten output, so a match is judged against every earlier replacement.
fn substitute_mapping(line: &[u8], state: ScanState, mapping: &Mapping) -> Vec<u8> {
    let mut tracker = LiteralTracker::new(state);
    let mut rewritten = Vec::with_capacity(line.len());
    let mut cursor = 0;

    while let Some(range) = mapping.find_at(line, cursor).map(|found| found.range()) {
        let gap = &line[cursor..range.start];
        tracker.advance(gap);
        rewritten.extend_from_slice(gap);

        if tracker.scan(&line[range.clone()]).is_outside() {
            let replacement = mapping.replacement().as_bytes();
            tracker.advance(replacement);
            rewritten.extend_from_slice(replacement);
            cursor = range.end;
        } else {
            tracker.feed(line[range.start]);
            rewritten.push(line[range.start]);
            cursor = range.start + 1;
        }
    }

    rewritten.extend_from_slice(&line[cursor..]);
    rewritten
}
