//! Repeat section - detects repeated characters and repeated blocks.

use super::{fragment, SectionInput, SectionResult};
use crate::types::WeaknessKind;

/// Reports runs of one character (e.g. "aaa") and consecutively repeated
/// blocks (e.g. "abab", "123123").
pub fn repeat_section(input: &SectionInput<'_>) -> SectionResult {
    let chars = &input.chars;
    let policy = input.policy;
    let mut found = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == chars[i] {
            run += 1;
        }
        if run >= policy.min_repeat_run {
            found.push(input.weakness(WeaknessKind::RepeatedChars, fragment(chars, i, run)));
            i += run;
            continue;
        }

        if let Some(total) = repeated_block_at(chars, i, policy.max_block_len, policy.min_block_total) {
            found.push(input.weakness(WeaknessKind::RepeatedChars, fragment(chars, i, total)));
            i += total;
            continue;
        }

        i += 1;
    }

    found
}

/// Total length of the longest repeated block starting at `start`.
///
/// Blocks made of a single character are left to the run check.
fn repeated_block_at(chars: &[char], start: usize, max_block: usize, min_total: usize) -> Option<usize> {
    let available = chars.len() - start;
    let mut best: Option<usize> = None;

    for size in 2..=max_block.min(available / 2) {
        let block = &chars[start..start + size];
        if block.iter().all(|c| *c == block[0]) {
            continue;
        }

        let mut reps = 1;
        while start + (reps + 1) * size <= chars.len()
            && chars[start + reps * size..start + (reps + 1) * size] == *block
        {
            reps += 1;
        }

        let total = reps * size;
        if reps >= 2 && total >= min_total && best.is_none_or(|b| total > b) {
            best = Some(total);
        }
    }

    best
}
