//! Password strength scoring library
//!
//! This library scores a candidate password on a 0-100 scale, labels it with
//! a strength tier, lists the weaknesses it found and estimates how long
//! several kinds of attacker would need to guess it.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Word lists merged into the built-in lexicon by [`Lexicon::from_env`]:
//!
//! - `PWD_COMMON_PASSWORDS_PATH`
//! - `PWD_DICTIONARY_PATH`
//! - `PWD_KEYBOARD_WALKS_PATH`
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{Analyzer, Lexicon};
//! use secrecy::SecretString;
//!
//! // Build once at startup, share everywhere
//! let analyzer = Analyzer::new(Lexicon::from_env());
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = analyzer.evaluate(&password);
//!
//! println!("Score: {}", evaluation.score());
//! println!("Strength: {}", evaluation.tier());
//! for suggestion in &evaluation.feedback {
//!     println!("- {}", suggestion);
//! }
//! ```

// Internal modules
mod attack;
mod capability;
mod composition;
mod entropy;
mod error;
mod evaluator;
mod feedback;
mod lexicon;
mod policy;
mod scoring;
mod sections;
mod types;

// Public API
pub use attack::{estimate_crack_times, select_guesses, AttackModel, CrackTime};
pub use capability::{
    check_breach, k_anonymity_split, AdvancedEstimate, AdvancedEstimator, BreachChecker,
    BreachVerdict, HashPrefix, RangeEntry, HASH_PREFIX_LEN,
};
pub use composition::{CharClass, CompositionProfile};
pub use entropy::EntropyEstimate;
pub use error::{AnalysisError, CapabilityError, LexiconError};
pub use evaluator::Analyzer;
pub use feedback::generate_feedback;
pub use lexicon::{
    load_word_list, FragmentSet, Lexicon, LexiconPaths, COMMON_PASSWORDS_ENV, DICTIONARY_ENV,
    KEYBOARD_WALKS_ENV,
};
pub use policy::Policy;
pub use scoring::{aggregate, SubScores};
pub use types::{
    GuessEstimate, GuessSource, PasswordEvaluation, ScoreResult, StrengthTier, Weakness,
    WeaknessKind,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
