//! Keyboard section - detects walks along adjacent keys.

use super::{fragment, longest_matches, SectionInput, SectionResult};
use crate::types::WeaknessKind;

/// Reports substrings that follow a stored keyboard walk, in either
/// direction. Fragments inside an already reported walk are skipped, so
/// "qwerty" yields one match rather than one per suffix.
pub fn keyboard_section(input: &SectionInput<'_>) -> SectionResult {
    longest_matches(
        &input.lowered,
        input.lexicon.keyboard(),
        input.policy.min_match_len,
    )
    .into_iter()
    .map(|(start, len)| {
        input.weakness(
            WeaknessKind::KeyboardPattern,
            fragment(&input.lowered, start, len),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::sections::fixtures::{details, run};

    fn lexicon() -> Lexicon {
        Lexicon::from_words(
            Vec::<&str>::new(),
            Vec::<&str>::new(),
            ["qwertyuiop", "asdfghjkl", "1qaz2wsx"],
        )
    }

    #[test]
    fn test_keyboard_section_forward_walk() {
        let result = run(keyboard_section, "xQWERTYx", &lexicon());
        assert_eq!(details(&result), vec!["qwerty"]);
    }

    #[test]
    fn test_keyboard_section_reverse_walk() {
        let result = run(keyboard_section, "lkjh99", &lexicon());
        assert_eq!(details(&result), vec!["lkjh"]);
    }

    #[test]
    fn test_keyboard_section_column_walk() {
        let result = run(keyboard_section, "1qaz2wsx!", &lexicon());
        assert_eq!(details(&result), vec!["1qaz2wsx"]);
    }

    #[test]
    fn test_keyboard_section_too_short() {
        let result = run(keyboard_section, "qwe-asd", &lexicon());
        assert!(result.is_empty());
    }

    #[test]
    fn test_keyboard_section_builtin_walks() {
        let result = run(keyboard_section, "zxcvbnm", &Lexicon::builtin());
        assert_eq!(details(&result), vec!["zxcvbnm"]);
    }
}
