//! Entropy estimate from alphabet size and length.
//!
//! Assumes uniform random selection from the detected alphabet; patterns are
//! accounted for elsewhere.

use serde::Serialize;

use crate::composition::{CharClass, CompositionProfile};
use crate::policy::{
    DIGIT_ALPHABET, LOWERCASE_ALPHABET, SYMBOL_ALPHABET, UPPERCASE_ALPHABET,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntropyEstimate {
    pub bits: f64,
    pub alphabet_size: u32,
}

impl EntropyEstimate {
    pub fn from_profile(profile: &CompositionProfile) -> Self {
        let mut alphabet_size: u32 = [
            (CharClass::Lowercase, LOWERCASE_ALPHABET),
            (CharClass::Uppercase, UPPERCASE_ALPHABET),
            (CharClass::Digit, DIGIT_ALPHABET),
        ]
        .iter()
        .filter(|(class, _)| profile.has(*class))
        .map(|(_, size)| size)
        .sum();

        // Symbols and other characters share one 32-character pool.
        if profile.has(CharClass::Symbol) || profile.has(CharClass::Other) {
            alphabet_size += SYMBOL_ALPHABET;
        }

        // log2 of 0 or 1 would yield -inf/0; both collapse to 0 bits
        let bits = if profile.length == 0 || alphabet_size <= 1 {
            0.0
        } else {
            profile.length as f64 * f64::from(alphabet_size).log2()
        };

        Self {
            bits,
            alphabet_size,
        }
    }

    /// `2^bits`, saturating to infinity for very long inputs.
    pub fn guesses(&self) -> f64 {
        self.bits.exp2()
    }
}
