//! Sequence section - detects ascending or descending character runs.

use super::{fragment, SectionInput, SectionResult};
use crate::types::WeaknessKind;

/// Reports maximal runs whose characters step by +1 or -1 (e.g. "abcd",
/// "4321"). Comparison is case-insensitive.
pub fn sequence_section(input: &SectionInput<'_>) -> SectionResult {
    let chars = &input.lowered;
    let min_len = input.policy.min_sequence_len;
    let mut found = Vec::new();

    let mut i = 0;
    while i + 1 < chars.len() {
        let step = chars[i + 1] as i64 - chars[i] as i64;
        if step != 1 && step != -1 {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end + 1 < chars.len() && chars[end + 1] as i64 - chars[end] as i64 == step {
            end += 1;
        }

        let len = end - i + 1;
        if len >= min_len {
            found.push(input.weakness(
                WeaknessKind::SequentialChars,
                fragment(chars, i, len),
            ));
        }
        // The turning point may start a run in the other direction.
        i = end;
    }

    found
}
