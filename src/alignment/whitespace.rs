use crate::alignment::edit_distance::edit_script;
use crate::types::{EditStep, SpaceTally};

pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
}

/// Counts separators the candidate adds ("extra") or drops ("missing")
/// relative to the reference, walking both sequences in lockstep.
///
/// Assumes both sides carry the same non-separator characters in the same
/// order. On a non-separator mismatch both cursors advance without recording
/// anything, so drifted inputs can under- or over-count.
pub fn check_spaces(reference: &[char], candidate: &[char]) -> SpaceTally {
    let mut tally = SpaceTally::default();
    let mut i = 0usize;
    let mut j = 0usize;

    while i < reference.len() && j < candidate.len() {
        match (is_separator(reference[i]), is_separator(candidate[j])) {
            (true, true) => {
                i += 1;
                j += 1;
            }
            (true, false) => {
                tally.missing_spaces += 1;
                i += 1;
            }
            (false, true) => {
                tally.extra_spaces += 1;
                j += 1;
            }
            (false, false) => {
                i += 1;
                j += 1;
            }
        }
    }

    tally.missing_spaces += count_separators(&reference[i..]);
    tally.extra_spaces += count_separators(&candidate[j..]);
    tally
}

/// Spacing discrepancies read off the optimal edit script instead of a
/// lockstep scan: a deleted reference separator is missing, an inserted
/// candidate separator is extra, and a substitution between a separator and
/// a non-separator counts on the side that held the separator.
pub fn aligned_space_tally(reference: &[char], candidate: &[char]) -> SpaceTally {
    let mut tally = SpaceTally::default();
    for step in edit_script(reference, candidate) {
        match step {
            EditStep::Match { .. } => {}
            EditStep::Delete { source } => {
                if is_separator(reference[source]) {
                    tally.missing_spaces += 1;
                }
            }
            EditStep::Insert { target } => {
                if is_separator(candidate[target]) {
                    tally.extra_spaces += 1;
                }
            }
            EditStep::Substitute { source, target } => {
                let from_separator = is_separator(reference[source]);
                let to_separator = is_separator(candidate[target]);
                if from_separator && !to_separator {
                    tally.missing_spaces += 1;
                } else if to_separator && !from_separator {
                    tally.extra_spaces += 1;
                }
            }
        }
    }
    tally
}

fn count_separators(tail: &[char]) -> usize {
    tail.iter().filter(|&&c| is_separator(c)).count()
}
