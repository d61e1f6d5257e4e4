//! Policy constants.
//!
//! Every tunable number of the scoring model lives in [`Policy`] so tests can
//! target exact boundaries. [`Policy::default`] is the reference table.

use crate::attack::AttackModel;
use crate::types::WeaknessKind;

pub const LOWERCASE_ALPHABET: u32 = 26;
pub const UPPERCASE_ALPHABET: u32 = 26;
pub const DIGIT_ALPHABET: u32 = 10;
/// Matches the 32 ASCII punctuation characters classified as symbols.
/// Other characters (space, non-ASCII) draw from the same pool.
pub const SYMBOL_ALPHABET: u32 = 32;

pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = MINUTE * 60.0;
pub const DAY: f64 = HOUR * 24.0;
pub const MONTH: f64 = DAY * 31.0;
pub const YEAR: f64 = MONTH * 12.0;
pub const CENTURY: f64 = YEAR * 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// Inputs shorter than this raise `InsufficientLength`.
    pub min_length: usize,
    /// Fewer scoring classes than this raise `LowDiversity`.
    pub min_classes: usize,
    /// Shortest dictionary word or keyboard fragment that counts as a match.
    pub min_match_len: usize,
    pub min_sequence_len: usize,
    pub min_repeat_run: usize,
    pub min_block_total: usize,
    /// Upper bound on the block size examined by the repeated-block scan.
    pub max_block_len: usize,
    /// `(minimum length, points)`, checked from the top.
    pub length_bands: [(usize, u32); 6],
    /// Points indexed by scoring-class count (0..=4).
    pub diversity_points: [u32; 5],
    pub entropy_cap: u32,
    /// Entropy (bits) at which the entropy sub-score reaches its cap.
    pub entropy_saturation_bits: f64,
    /// `(minimum distinct/length ratio, points)`, checked from the top.
    pub uniqueness_bands: [(f64, u32); 3],
    pub uniqueness_floor: u32,
    /// Penalty per weakness kind, indexed in detection order.
    pub severities: [u32; 7],
    /// Guesses per second, indexed by [`AttackModel`] from slowest to fastest.
    pub throughputs: [f64; 4],
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: 8,
            min_classes: 3,
            min_match_len: 4,
            min_sequence_len: 4,
            min_repeat_run: 3,
            min_block_total: 4,
            max_block_len: 16,
            length_bands: [(16, 30), (12, 25), (8, 20), (6, 15), (4, 10), (1, 5)],
            diversity_points: [0, 10, 15, 20, 25],
            entropy_cap: 25,
            entropy_saturation_bits: 60.0,
            uniqueness_bands: [(0.8, 20), (0.6, 15), (0.4, 10)],
            uniqueness_floor: 5,
            // Baseline is 7 points; kinds that hand an attacker a direct
            // guessing strategy weigh more.
            severities: [50, 14, 14, 10, 10, 7, 7],
            throughputs: [100.0 / HOUR, 10.0, 1e4, 1e10],
        }
    }
}

impl Policy {
    pub fn severity(&self, kind: WeaknessKind) -> u32 {
        self.severities[kind as usize]
    }

    pub fn throughput(&self, model: AttackModel) -> f64 {
        self.throughputs[model as usize]
    }
}
