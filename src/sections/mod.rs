//! Pattern detection sections
//!
//! Each section looks for one kind of weakness. Sections run in a fixed
//! order so the resulting weakness list is reproducible.

mod common;
mod dictionary;
mod keyboard;
mod length;
mod repeat;
mod sequence;
mod variety;

pub use common::common_password_section;
pub use dictionary::dictionary_section;
pub use keyboard::keyboard_section;
pub use length::length_section;
pub use repeat::repeat_section;
pub use sequence::sequence_section;
pub use variety::character_variety_section;

use crate::composition::CompositionProfile;
use crate::lexicon::{FragmentSet, Lexicon};
use crate::policy::Policy;
use crate::types::{Weakness, WeaknessKind};

/// Result type for section functions: every match the section found.
pub type SectionResult = Vec<Weakness>;

pub type Section = fn(&SectionInput<'_>) -> SectionResult;

/// Detection order.
pub const SECTIONS: [(&str, Section); 7] = [
    ("common", common_password_section),
    ("dictionary", dictionary_section),
    ("keyboard", keyboard_section),
    ("sequence", sequence_section),
    ("repeat", repeat_section),
    ("length", length_section),
    ("variety", character_variety_section),
];

/// Everything a section may look at for one input.
pub struct SectionInput<'a> {
    pub password: &'a str,
    pub chars: Vec<char>,
    /// Case-folded characters used by case-insensitive sections.
    pub lowered: Vec<char>,
    pub profile: &'a CompositionProfile,
    pub lexicon: &'a Lexicon,
    pub policy: &'a Policy,
}

impl<'a> SectionInput<'a> {
    pub fn new(
        password: &'a str,
        profile: &'a CompositionProfile,
        lexicon: &'a Lexicon,
        policy: &'a Policy,
    ) -> Self {
        Self {
            password,
            chars: password.chars().collect(),
            lowered: password.chars().flat_map(char::to_lowercase).collect(),
            profile,
            lexicon,
            policy,
        }
    }

    fn weakness(&self, kind: WeaknessKind, detail: impl Into<String>) -> Weakness {
        Weakness {
            kind,
            detail: detail.into(),
            severity: self.policy.severity(kind),
        }
    }
}

/// Runs every section in detection order.
pub fn detect(input: &SectionInput<'_>) -> Vec<Weakness> {
    let mut weaknesses = Vec::new();
    for (_section_name, section_fn) in SECTIONS {
        let found = section_fn(input);

        #[cfg(feature = "tracing")]
        {
            if !found.is_empty() {
                tracing::debug!("section '{}' reported {} match(es)", _section_name, found.len());
            }
        }

        weaknesses.extend(found);
    }
    weaknesses
}

/// Longest fragment starting at each position, skipping matches that lie
/// entirely inside an earlier one. Returns `(start, len)` pairs.
fn longest_matches(chars: &[char], set: &FragmentSet, min_len: usize) -> Vec<(usize, usize)> {
    let mut matches = Vec::new();
    let mut covered_until = 0;
    for start in 0..chars.len() {
        if let Some(len) = set.longest_at(chars, start, min_len) {
            if start + len > covered_until {
                matches.push((start, len));
                covered_until = start + len;
            }
        }
    }
    matches
}

/// Longest fragment starting at each position. Shorter fragments that
/// start elsewhere inside an earlier match are still reported.
fn longest_per_position(chars: &[char], set: &FragmentSet, min_len: usize) -> Vec<(usize, usize)> {
    (0..chars.len())
        .filter_map(|start| set.longest_at(chars, start, min_len).map(|len| (start, len)))
        .collect()
}

fn fragment(chars: &[char], start: usize, len: usize) -> String {
    chars[start..start + len].iter().collect()
}
