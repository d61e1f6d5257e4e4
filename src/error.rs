use std::path::PathBuf;
use thiserror::Error;

/// Per-item failure surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

/// Word-list loading failures. Absorbed by [`crate::Lexicon`].
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Word list file is empty: {0}")]
    EmptyFile(PathBuf),
}

/// Failures of optional external capabilities. Never fatal to an analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("Capability unavailable: {0}")]
    Unavailable(String),
    #[error("Capability timed out")]
    Timeout,
    #[error("Capability failed: {0}")]
    Failed(String),
}
