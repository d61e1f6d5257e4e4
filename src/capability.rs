//! Optional external capabilities.
//!
//! Two integrations can be plugged into an [`crate::Analyzer`]:
//!
//! - an [`AdvancedEstimator`], a pattern-aware guess estimator whose guess
//!   count replaces the local one for attack-time estimates;
//! - a [`BreachChecker`], queried with a k-anonymity SHA-1 prefix so the raw
//!   input never leaves the process.
//!
//! Both are fallible. Their failures are absorbed: the local score is always
//! produced.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::error::CapabilityError;

/// Result of an external pattern-aware estimator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedEstimate {
    /// Estimator's own 0-4 tier, reported alongside the 0-100 score.
    pub score: u8,
    pub guesses: f64,
    /// Descriptions of the patterns the estimator matched.
    pub patterns: Vec<String>,
}

pub trait AdvancedEstimator: Send + Sync {
    fn estimate(&self, password: &SecretString) -> Result<AdvancedEstimate, CapabilityError>;
}

/// Number of hex characters of the SHA-1 digest sent to a breach checker.
pub const HASH_PREFIX_LEN: usize = 5;

/// Uppercase hex SHA-1 prefix of an input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashPrefix(String);

impl HashPrefix {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One line of a range response: a digest suffix and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub suffix: String,
    pub count: u64,
}

impl RangeEntry {
    /// Parses a `SUFFIX:COUNT` line as served by range APIs.
    pub fn parse(line: &str) -> Option<Self> {
        let (suffix, count) = line.trim().split_once(':')?;
        Some(Self {
            suffix: suffix.trim().to_uppercase(),
            count: count.trim().parse().ok()?,
        })
    }
}

/// A breach database reachable through k-anonymity range queries.
pub trait BreachChecker: Send + Sync {
    /// Identifier reported in the verdict.
    fn source(&self) -> &str;

    /// Every known digest suffix sharing `prefix`.
    fn range(&self, prefix: &HashPrefix) -> Result<Vec<RangeEntry>, CapabilityError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BreachVerdict {
    /// No checker configured.
    NotChecked,
    Breached { source: String, count: u64 },
    NotFound { source: String },
    /// The checker failed or timed out.
    Unknown { source: String, reason: String },
}

impl BreachVerdict {
    /// `Some(true/false)` when the checker answered, `None` otherwise.
    pub fn is_breached(&self) -> Option<bool> {
        match self {
            BreachVerdict::Breached { .. } => Some(true),
            BreachVerdict::NotFound { .. } => Some(false),
            BreachVerdict::NotChecked | BreachVerdict::Unknown { .. } => None,
        }
    }
}

/// Splits the uppercase hex SHA-1 of the input into prefix and suffix.
pub fn k_anonymity_split(password: &SecretString) -> (HashPrefix, String) {
    let digest = hex::encode_upper(Sha1::digest(password.expose_secret().as_bytes()));
    let (prefix, suffix) = digest.split_at(HASH_PREFIX_LEN);
    (HashPrefix(prefix.to_string()), suffix.to_string())
}

/// Queries `checker` with the hash prefix and matches the suffix locally.
pub fn check_breach(checker: &dyn BreachChecker, password: &SecretString) -> BreachVerdict {
    let (prefix, suffix) = k_anonymity_split(password);
    let source = checker.source().to_string();

    match checker.range(&prefix) {
        Ok(entries) => match entries.iter().find(|e| e.suffix.eq_ignore_ascii_case(&suffix)) {
            Some(entry) if entry.count > 0 => BreachVerdict::Breached {
                source,
                count: entry.count,
            },
            _ => BreachVerdict::NotFound { source },
        },
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Breach check via '{}' unavailable: {}", source, e);
            BreachVerdict::Unknown {
                source,
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    /// Range source backed by fixed response text; records the prefixes it saw.
    struct StaticRange {
        body: String,
        seen: Mutex<Vec<String>>,
    }

    impl StaticRange {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl BreachChecker for StaticRange {
        fn source(&self) -> &str {
            "static"
        }

        fn range(&self, prefix: &HashPrefix) -> Result<Vec<RangeEntry>, CapabilityError> {
            self.seen.lock().unwrap().push(prefix.as_str().to_string());
            Ok(self.body.lines().filter_map(RangeEntry::parse).collect())
        }
    }

    struct Offline;

    impl BreachChecker for Offline {
        fn source(&self) -> &str {
            "offline"
        }

        fn range(&self, _prefix: &HashPrefix) -> Result<Vec<RangeEntry>, CapabilityError> {
            Err(CapabilityError::Timeout)
        }
    }

    #[test]
    fn test_k_anonymity_split_known_digest() {
        // SHA-1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
        let (prefix, suffix) = k_anonymity_split(&secret("password"));
        assert_eq!(prefix.as_str(), "5BAA6");
        assert_eq!(suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn test_range_entry_parse() {
        assert_eq!(
            RangeEntry::parse("1e4c9b93f3f0682250b6cf8331b7ee68fd8:3861493\r"),
            Some(RangeEntry {
                suffix: "1E4C9B93F3F0682250B6CF8331B7EE68FD8".to_string(),
                count: 3861493,
            })
        );
        assert_eq!(RangeEntry::parse("garbage"), None);
        assert_eq!(RangeEntry::parse("ABC:notanumber"), None);
    }

    #[test]
    fn test_check_breach_found() {
        let checker = StaticRange::new(
            "0018A45C4D1DEF81644B54AB7F969B88D65:1\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:3861493",
        );
        let verdict = check_breach(&checker, &secret("password"));
        assert_eq!(
            verdict,
            BreachVerdict::Breached {
                source: "static".to_string(),
                count: 3861493
            }
        );
        assert_eq!(verdict.is_breached(), Some(true));
        // only the prefix was sent
        assert_eq!(*checker.seen.lock().unwrap(), vec!["5BAA6".to_string()]);
    }

    #[test]
    fn test_check_breach_padding_entry_is_not_a_hit() {
        let checker = StaticRange::new("1E4C9B93F3F0682250B6CF8331B7EE68FD8:0");
        let verdict = check_breach(&checker, &secret("password"));
        assert_eq!(verdict.is_breached(), Some(false));
    }

    #[test]
    fn test_check_breach_not_found() {
        let checker = StaticRange::new("0018A45C4D1DEF81644B54AB7F969B88D65:1");
        let verdict = check_breach(&checker, &secret("password"));
        assert_eq!(
            verdict,
            BreachVerdict::NotFound {
                source: "static".to_string()
            }
        );
    }

    #[test]
    fn test_check_breach_failure_is_unknown() {
        let verdict = check_breach(&Offline, &secret("password"));
        assert!(matches!(verdict, BreachVerdict::Unknown { .. }));
        assert_eq!(verdict.is_breached(), None);
    }
}
