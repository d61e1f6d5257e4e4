//! Common password section - checks if the input is a known common password.

use super::{SectionInput, SectionResult};
use crate::types::WeaknessKind;

/// Checks if the password is in the list of common passwords.
///
/// # Returns
/// - one `CommonPassword` weakness if the password is listed
/// - nothing otherwise, or when the list is empty
pub fn common_password_section(input: &SectionInput<'_>) -> SectionResult {
    if input.lexicon.is_common(input.password) {
        return vec![input.weakness(
            WeaknessKind::CommonPassword,
            format!(
                "found among the {} most common passwords",
                input.lexicon.common_len()
            ),
        )];
    }
    Vec::new()
}
