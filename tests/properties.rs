use pwd_audit::{estimate_crack_times, Analyzer, AttackModel, Policy, StrengthTier, WeaknessKind};
use proptest::prelude::*;
use secrecy::SecretString;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn analyzer() -> &'static Analyzer {
    static ANALYZER: OnceLock<Analyzer> = OnceLock::new();
    ANALYZER.get_or_init(Analyzer::default)
}

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

fn kinds(password: &str) -> BTreeSet<WeaknessKind> {
    analyzer()
        .score(&secret(password))
        .weaknesses
        .iter()
        .map(|w| w.kind)
        .collect()
}

proptest! {
    #[test]
    fn score_is_bounded_and_tier_consistent(password in "\\PC{0,40}") {
        let result = analyzer().score(&secret(&password));
        prop_assert!(result.score <= 100);
        prop_assert_eq!(result.tier, StrengthTier::from_score(result.score));
        prop_assert!(result.entropy_bits >= 0.0);
    }

    #[test]
    fn evaluation_is_idempotent(password in "[ -~]{0,24}") {
        let pwd = secret(&password);
        prop_assert_eq!(analyzer().evaluate(&pwd), analyzer().evaluate(&pwd));
    }

    #[test]
    fn widening_classes_never_lowers_score(
        base in "[a-z0-9]{0,14}",
        extra in prop::sample::select(vec!['Q', 'Z', '#', '~', '%']),
    ) {
        let widened = format!("{}{}", base, extra);
        let before = analyzer().score(&secret(&base));
        let after = analyzer().score(&secret(&widened));

        if kinds(&widened).is_subset(&kinds(&base)) {
            prop_assert!(
                after.score >= before.score,
                "{:?} scored {} but {:?} scored {}",
                base, before.score, widened, after.score
            );
        }
    }

    #[test]
    fn attack_models_are_monotonic(exponent in 0.0f64..400.0) {
        let guesses = 10f64.powf(exponent);
        let times = estimate_crack_times(guesses, &Policy::default());
        for pair in AttackModel::ALL.windows(2) {
            prop_assert!(times[&pair[0]] >= times[&pair[1]]);
        }
    }

    #[test]
    fn batch_matches_independent_evaluations(
        inputs in prop::collection::vec("[ -~]{0,20}", 0..12),
    ) {
        let batch = analyzer().evaluate_batch(&inputs);
        prop_assert_eq!(batch.len(), inputs.len());
        for (input, result) in inputs.iter().zip(batch) {
            let single = analyzer().evaluate(&secret(input));
            prop_assert_eq!(result.expect("valid utf-8"), single);
        }
    }
}
