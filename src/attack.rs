//! Attack-time estimates.
//!
//! A guess count is divided by the throughput of each adversary model and the
//! resulting duration is bucketed into a human-scale [`CrackTime`].

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::capability::AdvancedEstimate;
use crate::entropy::EntropyEstimate;
use crate::policy::{Policy, CENTURY, DAY, HOUR, MINUTE, MONTH, YEAR};
use crate::types::{GuessEstimate, GuessSource};

/// Adversary models, ordered from slowest to fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AttackModel {
    /// Rate-limited online service (100 guesses per hour).
    OnlineThrottled,
    /// Online service without rate limiting (10 guesses per second).
    OnlineUnthrottled,
    /// Offline attack against a slow hash (1e4 guesses per second).
    OfflineSlow,
    /// Offline attack against a fast hash on GPUs (1e10 guesses per second).
    OfflineFast,
}

impl AttackModel {
    pub const ALL: [AttackModel; 4] = [
        AttackModel::OnlineThrottled,
        AttackModel::OnlineUnthrottled,
        AttackModel::OfflineSlow,
        AttackModel::OfflineFast,
    ];
}

/// Human-scale duration bucket. Ordering follows duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CrackTime {
    LessThanSecond,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Months(u64),
    Years(u64),
    Centuries,
}

impl CrackTime {
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds.is_nan() || seconds < 1.0 {
            return CrackTime::LessThanSecond;
        }
        if !seconds.is_finite() || seconds >= CENTURY {
            return CrackTime::Centuries;
        }

        let count = |unit: f64| (seconds / unit).round() as u64;
        if seconds < MINUTE {
            CrackTime::Seconds(count(1.0))
        } else if seconds < HOUR {
            CrackTime::Minutes(count(MINUTE))
        } else if seconds < DAY {
            CrackTime::Hours(count(HOUR))
        } else if seconds < MONTH {
            CrackTime::Days(count(DAY))
        } else if seconds < YEAR {
            CrackTime::Months(count(MONTH))
        } else {
            CrackTime::Years(count(YEAR))
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, unit) = match *self {
            CrackTime::LessThanSecond => return f.write_str("less than a second"),
            CrackTime::Centuries => return f.write_str("centuries"),
            CrackTime::Seconds(n) => (n, "second"),
            CrackTime::Minutes(n) => (n, "minute"),
            CrackTime::Hours(n) => (n, "hour"),
            CrackTime::Days(n) => (n, "day"),
            CrackTime::Months(n) => (n, "month"),
            CrackTime::Years(n) => (n, "year"),
        };
        if n == 1 {
            write!(f, "{} {}", n, unit)
        } else {
            write!(f, "{} {}s", n, unit)
        }
    }
}

/// Picks the guess count used for attack-time estimates.
///
/// Precedence: external estimator, then the common-password list bound when
/// the input is a listed common password, then `2^entropy_bits`.
pub fn select_guesses(
    entropy: &EntropyEstimate,
    common_list_len: Option<usize>,
    advanced: Option<&AdvancedEstimate>,
) -> GuessEstimate {
    if let Some(advanced) = advanced {
        return GuessEstimate {
            guesses: advanced.guesses.max(0.0),
            source: GuessSource::External,
        };
    }

    let from_entropy = entropy.guesses();
    match common_list_len {
        Some(len) if (len as f64) < from_entropy => GuessEstimate {
            guesses: len as f64,
            source: GuessSource::CommonList,
        },
        _ => GuessEstimate {
            guesses: from_entropy,
            source: GuessSource::Entropy,
        },
    }
}

/// Duration bucket for every adversary model.
pub fn estimate_crack_times(guesses: f64, policy: &Policy) -> BTreeMap<AttackModel, CrackTime> {
    let guesses = if guesses.is_nan() { 0.0 } else { guesses.max(0.0) };
    AttackModel::ALL
        .iter()
        .map(|model| {
            let seconds = guesses / policy.throughput(*model);
            (*model, CrackTime::from_seconds(seconds))
        })
        .collect()
}
