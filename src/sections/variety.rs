//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::{SectionInput, SectionResult};
use crate::composition::CharClass;
use crate::types::WeaknessKind;

/// Checks if the password mixes enough character classes.
///
/// The detail lists the missing classes, e.g. `"Missing: uppercase, numbers"`.
pub fn character_variety_section(input: &SectionInput<'_>) -> SectionResult {
    if input.profile.class_count() >= input.policy.min_classes {
        return Vec::new();
    }

    let missing: Vec<&str> = input
        .profile
        .missing_classes()
        .into_iter()
        .map(CharClass::label)
        .collect();

    vec![input.weakness(
        WeaknessKind::LowDiversity,
        format!("Missing: {}", missing.join(", ")),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::sections::fixtures::{details, run};

    #[test]
    fn test_variety_section_missing_uppercase_and_special() {
        let result = run(character_variety_section, "lowercase123", &Lexicon::empty());
        assert_eq!(details(&result), vec!["Missing: uppercase, special characters"]);
    }

    #[test]
    fn test_variety_section_three_classes_pass() {
        let result = run(character_variety_section, "NoSpecial123", &Lexicon::empty());
        assert!(result.is_empty());
    }

    #[test]
    fn test_variety_section_single_class() {
        let result = run(character_variety_section, "aaaaaaaa", &Lexicon::empty());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, WeaknessKind::LowDiversity);
    }

    #[test]
    fn test_variety_section_other_chars_do_not_help() {
        let result = run(character_variety_section, "abc déf", &Lexicon::empty());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let result = run(character_variety_section, "HasAll123!@#", &Lexicon::empty());
        assert!(result.is_empty());
    }
}
