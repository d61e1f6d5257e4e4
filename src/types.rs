//! Result types shared across the analysis pipeline.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::attack::{AttackModel, CrackTime};
use crate::capability::{AdvancedEstimate, BreachVerdict};
use crate::composition::CompositionProfile;

/// Qualitative strength label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Maps a clamped score to its tier.
    ///
    /// Boundaries: `[0,20)`, `[20,40)`, `[40,60)`, `[60,80)`, `[80,100]`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => StrengthTier::VeryWeak,
            20..=39 => StrengthTier::Weak,
            40..=59 => StrengthTier::Fair,
            60..=79 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Fair => "Fair",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Weakness categories, declared in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WeaknessKind {
    CommonPassword,
    DictionaryWord,
    KeyboardPattern,
    SequentialChars,
    RepeatedChars,
    InsufficientLength,
    LowDiversity,
}

impl WeaknessKind {
    pub const ALL: [WeaknessKind; 7] = [
        WeaknessKind::CommonPassword,
        WeaknessKind::DictionaryWord,
        WeaknessKind::KeyboardPattern,
        WeaknessKind::SequentialChars,
        WeaknessKind::RepeatedChars,
        WeaknessKind::InsufficientLength,
        WeaknessKind::LowDiversity,
    ];
}

/// A single detection.
///
/// `detail` holds the matched fragment (lowercased) or a short description
/// for the policy checks. `severity` is the penalty the kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Weakness {
    pub kind: WeaknessKind,
    pub detail: String,
    pub severity: u32,
}

/// Where the guess count used for attack-time estimates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuessSource {
    /// `2^entropy_bits`
    Entropy,
    /// Bounded by the size of the common-password list.
    CommonList,
    /// Supplied by an external pattern-aware estimator.
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuessEstimate {
    pub guesses: f64,
    pub source: GuessSource,
}

/// Score, tier and supporting signals for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: StrengthTier,
    pub weaknesses: Vec<Weakness>,
    pub entropy_bits: f64,
    pub crack_times: BTreeMap<AttackModel, CrackTime>,
}

impl ScoreResult {
    /// Returns `true` if at least one weakness of `kind` was detected.
    pub fn has(&self, kind: WeaknessKind) -> bool {
        self.weaknesses.iter().any(|w| w.kind == kind)
    }
}

/// Everything produced for a single input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordEvaluation {
    pub profile: CompositionProfile,
    pub result: ScoreResult,
    pub guesses: GuessEstimate,
    pub feedback: Vec<String>,
    /// Present only when an advanced estimator is configured and answered.
    pub advanced: Option<AdvancedEstimate>,
    pub breach: BreachVerdict,
}

impl PasswordEvaluation {
    pub fn score(&self) -> u8 {
        self.result.score
    }

    pub fn tier(&self) -> StrengthTier {
        self.result.tier
    }
}
