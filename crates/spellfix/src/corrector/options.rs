// Corrector configuration

use spellfix_core::enums::{
    DEFAULT_COMPOUND_STOP_COUNT, DEFAULT_MAX_WORD_LENGTH, DEFAULT_MAX_WORD_LENGTH_DISTANCE_TWO,
    DEFAULT_MIN_WORD_LENGTH,
};

/// Options controlling word and text correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectorOptions {
    /// Tokens shorter than this (in characters) pass through text correction.
    pub min_word_length: usize,
    /// Words longer than this are never corrected.
    pub max_word_length: usize,
    /// Words longer than this skip the edit-distance-2 fallback.
    pub max_word_length_distance_two: usize,
    /// Accept unknown words whose compound parts are all known.
    pub compound_support: bool,
    /// Compound splitting is only tried while the best distance-1 score is
    /// below this value.
    pub compound_stop_count: u64,
    /// Boost candidates by context bigram counts.
    pub use_context: bool,
}

impl Default for CorrectorOptions {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_word_length_distance_two: DEFAULT_MAX_WORD_LENGTH_DISTANCE_TWO,
            compound_support: false,
            compound_stop_count: DEFAULT_COMPOUND_STOP_COUNT,
            use_context: false,
        }
    }
}
