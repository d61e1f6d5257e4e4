//! Lexicon store
//!
//! Holds the reference sets the detectors consult: common passwords,
//! dictionary words and keyboard-adjacency walks. A [`Lexicon`] is built once
//! and then only read, so it can be shared across threads without locking.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::LexiconError;

pub const COMMON_PASSWORDS_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";
pub const DICTIONARY_ENV: &str = "PWD_DICTIONARY_PATH";
pub const KEYBOARD_WALKS_ENV: &str = "PWD_KEYBOARD_WALKS_PATH";

const BUILTIN_COMMON: &str = include_str!("../assets/common_passwords.txt");
const BUILTIN_DICTIONARY: &str = include_str!("../assets/dictionary_words.txt");
const BUILTIN_KEYBOARD: &str = include_str!("../assets/keyboard_walks.txt");

/// Optional word-list files merged into the built-in lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconPaths {
    pub common_passwords: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub keyboard_walks: Option<PathBuf>,
}

impl LexiconPaths {
    /// Reads the paths from the environment.
    ///
    /// - `PWD_COMMON_PASSWORDS_PATH`
    /// - `PWD_DICTIONARY_PATH`
    /// - `PWD_KEYBOARD_WALKS_PATH`
    ///
    /// Unset variables leave the built-in list alone.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().map(PathBuf::from);
        Self {
            common_passwords: var(COMMON_PASSWORDS_ENV),
            dictionary: var(DICTIONARY_ENV),
            keyboard_walks: var(KEYBOARD_WALKS_ENV),
        }
    }
}

/// Loads a word list: one entry per line, trimmed and lowercased.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, LexiconError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LexiconError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let set = parse_word_list(&content);

    if set.is_empty() {
        return Err(LexiconError::EmptyFile(path.to_path_buf()));
    }

    Ok(set)
}

fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Set of lowercase fragments with lookups by character slice.
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    entries: HashSet<String>,
    max_len: usize,
}

impl FragmentSet {
    fn new(entries: HashSet<String>) -> Self {
        let max_len = entries.iter().map(|e| e.chars().count()).max().unwrap_or(0);
        Self { entries, max_len }
    }

    /// Every contiguous fragment of each walk, forwards and backwards.
    fn from_walks<I, S>(walks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = HashSet::new();
        for walk in walks {
            let forward: Vec<char> = walk.as_ref().to_lowercase().chars().collect();
            let backward: Vec<char> = forward.iter().rev().copied().collect();
            for chars in [forward, backward] {
                for start in 0..chars.len() {
                    for end in start + 1..=chars.len() {
                        entries.insert(chars[start..end].iter().collect());
                    }
                }
            }
        }
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.entries.contains(fragment)
    }

    /// Length of the longest entry that starts at `start`, if at least
    /// `min_len` characters long.
    pub fn longest_at(&self, chars: &[char], start: usize, min_len: usize) -> Option<usize> {
        let available = chars.len().saturating_sub(start);
        let upper = self.max_len.min(available);
        if upper < min_len {
            return None;
        }
        (min_len..=upper).rev().find(|&len| {
            let candidate: String = chars[start..start + len].iter().collect();
            self.entries.contains(&candidate)
        })
    }
}

/// Read-only reference sets consulted by the detectors.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    common: HashSet<String>,
    dictionary: FragmentSet,
    keyboard: FragmentSet,
}

impl Lexicon {
    /// Lexicon built from the lists compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            common: parse_word_list(BUILTIN_COMMON),
            dictionary: FragmentSet::new(parse_word_list(BUILTIN_DICTIONARY)),
            keyboard: FragmentSet::from_walks(parse_word_list(BUILTIN_KEYBOARD)),
        }
    }

    /// Lexicon with every category empty. No lexicon detector fires.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lexicon from explicit lists, mostly useful as a test fixture.
    pub fn from_words<C, D, K>(common: C, dictionary: D, keyboard_walks: K) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let normalize = |s: &str| s.trim().to_lowercase();
        Self {
            common: common.into_iter().map(|w| normalize(w.as_ref())).collect(),
            dictionary: FragmentSet::new(
                dictionary.into_iter().map(|w| normalize(w.as_ref())).collect(),
            ),
            keyboard: FragmentSet::from_walks(keyboard_walks),
        }
    }

    /// Built-in lists merged with the configured word-list files.
    ///
    /// A file that cannot be loaded empties its category instead of failing;
    /// the detectors relying on it simply never fire.
    pub fn load(paths: &LexiconPaths) -> Self {
        let common = merge(BUILTIN_COMMON, paths.common_passwords.as_deref(), "common passwords");
        let dictionary = merge(BUILTIN_DICTIONARY, paths.dictionary.as_deref(), "dictionary");
        let keyboard = merge(BUILTIN_KEYBOARD, paths.keyboard_walks.as_deref(), "keyboard walks");

        let lexicon = Self {
            common,
            dictionary: FragmentSet::new(dictionary),
            keyboard: FragmentSet::from_walks(keyboard),
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Lexicon initialized: {} common passwords, {} dictionary words, {} keyboard fragments",
            lexicon.common.len(),
            lexicon.dictionary.len(),
            lexicon.keyboard.len()
        );

        lexicon
    }

    /// Same as [`Lexicon::load`] with paths taken from the environment.
    pub fn from_env() -> Self {
        Self::load(&LexiconPaths::from_env())
    }

    /// Case-insensitive exact match against the common-password list.
    pub fn is_common(&self, password: &str) -> bool {
        self.common.contains(&password.to_lowercase())
    }

    pub fn common_len(&self) -> usize {
        self.common.len()
    }

    pub fn dictionary(&self) -> &FragmentSet {
        &self.dictionary
    }

    pub fn keyboard(&self) -> &FragmentSet {
        &self.keyboard
    }
}

fn merge(builtin: &str, path: Option<&Path>, _category: &str) -> HashSet<String> {
    let mut set = parse_word_list(builtin);
    let Some(path) = path else {
        return set;
    };

    match load_word_list(path) {
        Ok(extra) => {
            set.extend(extra);
            set
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Lexicon category '{}' disabled: {}", _category, _e);
            HashSet::new()
        }
    }
}
