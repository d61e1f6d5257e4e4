//! Composition analysis: character classes, length and uniqueness.

use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    /// ASCII punctuation.
    Symbol,
    /// Anything else: whitespace, control and non-ASCII characters.
    Other,
}

impl CharClass {
    /// Classes that count towards diversity.
    pub const SCORING: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn of(c: char) -> Self {
        match c {
            'a'..='z' => CharClass::Lowercase,
            'A'..='Z' => CharClass::Uppercase,
            '0'..='9' => CharClass::Digit,
            c if c.is_ascii_punctuation() => CharClass::Symbol,
            _ => CharClass::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "numbers",
            CharClass::Symbol => "special characters",
            CharClass::Other => "other characters",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompositionProfile {
    pub lowercase: usize,
    pub uppercase: usize,
    pub digits: usize,
    pub symbols: usize,
    pub other: usize,
    /// Length in characters.
    pub length: usize,
    pub distinct: usize,
}

impl CompositionProfile {
    pub fn analyze(password: &str) -> Self {
        let mut profile = Self::default();
        let mut seen = HashSet::new();

        for c in password.chars() {
            match CharClass::of(c) {
                CharClass::Lowercase => profile.lowercase += 1,
                CharClass::Uppercase => profile.uppercase += 1,
                CharClass::Digit => profile.digits += 1,
                CharClass::Symbol => profile.symbols += 1,
                CharClass::Other => profile.other += 1,
            }
            profile.length += 1;
            seen.insert(c);
        }

        profile.distinct = seen.len();
        profile
    }

    pub fn count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
            CharClass::Other => self.other,
        }
    }

    pub fn has(&self, class: CharClass) -> bool {
        self.count(class) > 0
    }

    /// Number of scoring classes present (0..=4). `Other` is not counted.
    pub fn class_count(&self) -> usize {
        CharClass::SCORING.iter().filter(|c| self.has(**c)).count()
    }

    /// Scoring classes absent from the input, in declaration order.
    pub fn missing_classes(&self) -> Vec<CharClass> {
        CharClass::SCORING
            .iter()
            .copied()
            .filter(|c| !self.has(*c))
            .collect()
    }

    /// Distinct characters over length; 0 for an empty input.
    pub fn uniqueness_ratio(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        self.distinct as f64 / self.length as f64
    }
}
