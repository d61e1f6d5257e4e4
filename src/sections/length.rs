//! Length section - checks the minimum length.

use super::{SectionInput, SectionResult};
use crate::types::WeaknessKind;

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(input: &SectionInput<'_>) -> SectionResult {
    let min_length = input.policy.min_length;
    if input.profile.length < min_length {
        return vec![input.weakness(
            WeaknessKind::InsufficientLength,
            format!("Password must be at least {} characters", min_length),
        )];
    }
    Vec::new()
}
