//! Score aggregation.
//!
//! Four capped sub-scores are summed and a per-kind pattern penalty is
//! subtracted. The result is clamped to `0..=100` and mapped to a tier.

use serde::Serialize;
use std::collections::HashSet;

use crate::composition::CompositionProfile;
use crate::entropy::EntropyEstimate;
use crate::policy::Policy;
use crate::types::{StrengthTier, Weakness};

/// Breakdown of a score, kept for reporting and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubScores {
    pub length: u32,
    pub diversity: u32,
    pub entropy: u32,
    pub uniqueness: u32,
    /// Penalty actually applied, after capping.
    pub penalty: u32,
}

impl SubScores {
    pub fn compute(
        profile: &CompositionProfile,
        entropy: &EntropyEstimate,
        weaknesses: &[Weakness],
        policy: &Policy,
    ) -> Self {
        let length = length_points(profile.length, policy);
        let diversity = diversity_points(profile.class_count(), policy);
        let entropy = entropy_points(entropy.bits, policy);
        let uniqueness = uniqueness_points(profile, policy);

        let positive = length + diversity + entropy + uniqueness;
        // Penalty alone never pushes the raw sum below zero.
        let penalty = pattern_penalty(weaknesses).min(positive);

        Self {
            length,
            diversity,
            entropy,
            uniqueness,
            penalty,
        }
    }

    pub fn raw(&self) -> i64 {
        i64::from(self.length + self.diversity + self.entropy + self.uniqueness)
            - i64::from(self.penalty)
    }

    pub fn score(&self) -> u8 {
        self.raw().clamp(0, 100) as u8
    }
}

/// Score and tier for a composition, entropy and weakness list.
pub fn aggregate(
    profile: &CompositionProfile,
    entropy: &EntropyEstimate,
    weaknesses: &[Weakness],
    policy: &Policy,
) -> (u8, StrengthTier) {
    let score = SubScores::compute(profile, entropy, weaknesses, policy).score();
    (score, StrengthTier::from_score(score))
}

pub fn length_points(length: usize, policy: &Policy) -> u32 {
    policy
        .length_bands
        .iter()
        .find(|(min, _)| length >= *min)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

pub fn diversity_points(class_count: usize, policy: &Policy) -> u32 {
    let last = policy.diversity_points.len() - 1;
    policy.diversity_points[class_count.min(last)]
}

/// `floor(bits * cap / saturation)`, capped.
pub fn entropy_points(bits: f64, policy: &Policy) -> u32 {
    if bits <= 0.0 {
        return 0;
    }
    let scaled = (bits * f64::from(policy.entropy_cap) / policy.entropy_saturation_bits).floor();
    (scaled as u32).min(policy.entropy_cap)
}

pub fn uniqueness_points(profile: &CompositionProfile, policy: &Policy) -> u32 {
    if profile.length == 0 {
        return 0;
    }
    let ratio = profile.uniqueness_ratio();
    policy
        .uniqueness_bands
        .iter()
        .find(|(min, _)| ratio >= *min)
        .map(|(_, points)| *points)
        .unwrap_or(policy.uniqueness_floor)
}

/// Sum of severities, counting only the first weakness of each kind.
pub fn pattern_penalty(weaknesses: &[Weakness]) -> u32 {
    let mut seen = HashSet::new();
    weaknesses
        .iter()
        .filter(|w| seen.insert(w.kind))
        .map(|w| w.severity)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeaknessKind;

    fn weakness(kind: WeaknessKind, severity: u32) -> Weakness {
        Weakness {
            kind,
            detail: String::new(),
            severity,
        }
    }

    fn sub_scores(password: &str, weaknesses: &[Weakness]) -> SubScores {
        let profile = CompositionProfile::analyze(password);
        let entropy = EntropyEstimate::from_profile(&profile);
        SubScores::compute(&profile, &entropy, weaknesses, &Policy::default())
    }

    #[test]
    fn test_length_bands() {
        let policy = Policy::default();
        let expected = [
            (0, 0),
            (1, 5),
            (3, 5),
            (4, 10),
            (6, 15),
            (8, 20),
            (11, 20),
            (12, 25),
            (15, 25),
            (16, 30),
            (64, 30),
        ];
        for (length, points) in expected {
            assert_eq!(length_points(length, &policy), points, "length {}", length);
        }
    }

    #[test]
    fn test_diversity_points() {
        let policy = Policy::default();
        assert_eq!(diversity_points(0, &policy), 0);
        assert_eq!(diversity_points(1, &policy), 10);
        assert_eq!(diversity_points(2, &policy), 15);
        assert_eq!(diversity_points(3, &policy), 20);
        assert_eq!(diversity_points(4, &policy), 25);
    }

    #[test]
    fn test_entropy_points_golden_values() {
        let policy = Policy::default();
        assert_eq!(entropy_points(0.0, &policy), 0);
        assert_eq!(entropy_points(2.39, &policy), 0);
        assert_eq!(entropy_points(2.5, &policy), 1);
        assert_eq!(entropy_points(30.0, &policy), 12);
        assert_eq!(entropy_points(59.9, &policy), 24);
        assert_eq!(entropy_points(60.0, &policy), 25);
        assert_eq!(entropy_points(500.0, &policy), 25);
    }

    #[test]
    fn test_uniqueness_points() {
        let policy = Policy::default();
        let points = |s: &str| uniqueness_points(&CompositionProfile::analyze(s), &policy);
        assert_eq!(points(""), 0);
        assert_eq!(points("abcde"), 20);
        assert_eq!(points("abcdeaaaaa"), 10);
        assert_eq!(points("aaaaaaaa"), 5);
    }

    #[test]
    fn test_penalty_counts_each_kind_once() {
        let weaknesses = vec![
            weakness(WeaknessKind::DictionaryWord, 14),
            weakness(WeaknessKind::DictionaryWord, 14),
            weakness(WeaknessKind::RepeatedChars, 10),
        ];
        assert_eq!(pattern_penalty(&weaknesses), 24);
    }

    #[test]
    fn test_penalty_capped_at_positive_sum() {
        let weaknesses = vec![
            weakness(WeaknessKind::CommonPassword, 50),
            weakness(WeaknessKind::LowDiversity, 50),
        ];
        let scores = sub_scores("abc", &weaknesses);
        let positive = scores.length + scores.diversity + scores.entropy + scores.uniqueness;
        assert_eq!(scores.penalty, positive);
        assert_eq!(scores.raw(), 0);
        assert_eq!(scores.score(), 0);
    }

    #[test]
    fn test_listed_password_breakdown() {
        let policy = Policy::default();
        let weaknesses: Vec<Weakness> = [
            WeaknessKind::CommonPassword,
            WeaknessKind::DictionaryWord,
            WeaknessKind::LowDiversity,
        ]
        .into_iter()
        .map(|kind| weakness(kind, policy.severity(kind)))
        .collect();

        let scores = sub_scores("password", &weaknesses);
        assert_eq!(scores.length, 20);
        assert_eq!(scores.diversity, 10);
        assert_eq!(scores.entropy, 15);
        assert_eq!(scores.uniqueness, 20);
        // 50 + 14 + 7 = 71, capped at the 65 positive points
        assert_eq!(pattern_penalty(&weaknesses), 71);
        assert_eq!(scores.penalty, 65);
        assert_eq!(scores.score(), 0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let scores = sub_scores("", &[]);
        assert_eq!(scores, SubScores::default());
        assert_eq!(scores.score(), 0);
    }

    #[test]
    fn test_strong_input_reaches_cap() {
        let scores = sub_scores("Tr0ub4dor&3XyZ9Qw", &[]);
        assert_eq!(scores.length, 30);
        assert_eq!(scores.diversity, 25);
        assert_eq!(scores.entropy, 25);
        assert_eq!(scores.uniqueness, 20);
        assert_eq!(scores.score(), 100);
    }

    #[test]
    fn test_aggregate_tier() {
        let profile = CompositionProfile::analyze("aaaaaaaa");
        let entropy = EntropyEstimate::from_profile(&profile);
        let weaknesses = vec![
            weakness(WeaknessKind::RepeatedChars, 10),
            weakness(WeaknessKind::LowDiversity, 7),
        ];
        // 20 + 10 + 15 + 5 - 17
        let (score, tier) = aggregate(&profile, &entropy, &weaknesses, &Policy::default());
        assert_eq!(score, 33);
        assert_eq!(tier, StrengthTier::Weak);
    }
}
