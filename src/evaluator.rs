//! Password strength evaluator - main evaluation logic.

use rayon::prelude::*;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::attack::{estimate_crack_times, select_guesses};
use crate::capability::{
    check_breach, AdvancedEstimate, AdvancedEstimator, BreachChecker, BreachVerdict,
};
use crate::composition::CompositionProfile;
use crate::entropy::EntropyEstimate;
use crate::error::AnalysisError;
use crate::feedback::generate_feedback;
use crate::lexicon::Lexicon;
use crate::policy::Policy;
use crate::scoring::aggregate;
use crate::sections::{detect, SectionInput};
use crate::types::{GuessEstimate, PasswordEvaluation, ScoreResult, WeaknessKind};

/// Scoring engine bound to a lexicon, a policy and optional capabilities.
///
/// Cheap to clone; everything it holds is shared read-only.
#[derive(Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
    policy: Arc<Policy>,
    estimator: Option<Arc<dyn AdvancedEstimator>>,
    breach_checker: Option<Arc<dyn BreachChecker>>,
}

impl Analyzer {
    pub fn new(lexicon: impl Into<Arc<Lexicon>>) -> Self {
        Self {
            lexicon: lexicon.into(),
            policy: Arc::new(Policy::default()),
            estimator: None,
            breach_checker: None,
        }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    pub fn with_estimator(mut self, estimator: Arc<dyn AdvancedEstimator>) -> Self {
        self.estimator = Some(estimator);
        self
    }

    pub fn with_breach_checker(mut self, checker: Arc<dyn BreachChecker>) -> Self {
        self.breach_checker = Some(checker);
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Evaluates password strength and returns a detailed evaluation.
    ///
    /// Capability failures never fail the evaluation: the advanced fields are
    /// left empty and the breach verdict reports `Unknown`.
    pub fn evaluate(&self, password: &SecretString) -> PasswordEvaluation {
        let advanced = self.advanced_estimate(password);
        let (profile, guesses, result) = self.score_with(password, advanced.as_ref());

        let breach = match &self.breach_checker {
            Some(checker) => check_breach(checker.as_ref(), password),
            None => BreachVerdict::NotChecked,
        };

        let feedback = generate_feedback(&result.weaknesses, &profile, &result);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "evaluation done: score={} tier={:?} weaknesses={}",
            result.score,
            result.tier,
            result.weaknesses.len()
        );

        PasswordEvaluation {
            profile,
            result,
            guesses,
            feedback,
            advanced,
            breach,
        }
    }

    /// Score only, without feedback or breach lookup.
    ///
    /// A configured estimator still drives the attack-time estimates, so the
    /// result equals `evaluate(password).result`.
    pub fn score(&self, password: &SecretString) -> ScoreResult {
        let advanced = self.advanced_estimate(password);
        self.score_with(password, advanced.as_ref()).2
    }

    fn advanced_estimate(&self, password: &SecretString) -> Option<AdvancedEstimate> {
        let estimator = self.estimator.as_ref()?;
        estimator
            .estimate(password)
            .map_err(|_e| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Advanced estimator unavailable, using entropy: {}", _e);
            })
            .ok()
    }

    fn score_with(
        &self,
        password: &SecretString,
        advanced: Option<&AdvancedEstimate>,
    ) -> (CompositionProfile, GuessEstimate, ScoreResult) {
        let pwd = password.expose_secret();
        let policy = self.policy.as_ref();

        let profile = CompositionProfile::analyze(pwd);
        let weaknesses = detect(&SectionInput::new(pwd, &profile, &self.lexicon, policy));
        let entropy = EntropyEstimate::from_profile(&profile);
        let (score, tier) = aggregate(&profile, &entropy, &weaknesses, policy);

        let common_bound = weaknesses
            .iter()
            .any(|w| w.kind == WeaknessKind::CommonPassword)
            .then(|| self.lexicon.common_len());
        let guesses = select_guesses(&entropy, common_bound, advanced);

        let result = ScoreResult {
            score,
            tier,
            weaknesses,
            entropy_bits: entropy.bits,
            crack_times: estimate_crack_times(guesses.guesses, policy),
        };
        (profile, guesses, result)
    }

    /// Evaluates raw bytes, rejecting anything that is not UTF-8.
    pub fn evaluate_bytes(&self, bytes: &[u8]) -> Result<PasswordEvaluation, AnalysisError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| AnalysisError::MalformedInput(e.to_string()))?;
        Ok(self.evaluate(&SecretString::new(text.to_string().into())))
    }

    /// Evaluates many inputs in parallel, preserving input order.
    ///
    /// A malformed item yields an error in its slot; the others proceed.
    pub fn evaluate_batch<T>(&self, inputs: &[T]) -> Vec<Result<PasswordEvaluation, AnalysisError>>
    where
        T: AsRef<[u8]> + Sync,
    {
        #[cfg(feature = "tracing")]
        tracing::info!("batch evaluation of {} inputs", inputs.len());

        inputs
            .par_iter()
            .map(|input| self.evaluate_bytes(input.as_ref()))
            .collect()
    }

    /// Scores many secrets in parallel, preserving input order.
    pub fn score_batch(&self, passwords: &[SecretString]) -> Vec<ScoreResult> {
        passwords.par_iter().map(|p| self.score(p)).collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

/// Async version that sends the evaluation result via channel.
///
/// The evaluation runs on the blocking pool. Nothing is sent if `token` is
/// cancelled before the result is ready.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    analyzer: Analyzer,
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    if token.is_cancelled() {
        return;
    }

    let evaluation = match tokio::task::spawn_blocking(move || analyzer.evaluate(&password)).await {
        Ok(evaluation) => evaluation,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Password evaluation task failed: {}", _e);
            return;
        }
    };

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled, result dropped");
        return;
    }

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
