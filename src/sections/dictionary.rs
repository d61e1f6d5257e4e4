//! Dictionary section - finds dictionary words embedded in the input.

use super::{fragment, longest_per_position, SectionInput, SectionResult};
use crate::types::WeaknessKind;

/// Reports the longest dictionary word starting at each position.
///
/// Matching is case-insensitive and ignores words shorter than the policy
/// minimum. Words at different positions are reported separately, even when
/// one lies inside another.
pub fn dictionary_section(input: &SectionInput<'_>) -> SectionResult {
    longest_per_position(
        &input.lowered,
        input.lexicon.dictionary(),
        input.policy.min_match_len,
    )
    .into_iter()
    .map(|(start, len)| {
        input.weakness(
            WeaknessKind::DictionaryWord,
            fragment(&input.lowered, start, len),
        )
    })
    .collect()
}
