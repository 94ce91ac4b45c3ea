// Shared enums and default limits

/// Default minimum token length for text correction; shorter tokens pass through.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// Default maximum word length; longer words are never corrected.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 20;

/// Default maximum word length for the edit-distance-2 fallback.
pub const DEFAULT_MAX_WORD_LENGTH_DISTANCE_TWO: usize = 10;

/// Default best-candidate score below which a compound split is attempted.
pub const DEFAULT_COMPOUND_STOP_COUNT: u64 = 10;

/// Multiplier applied to a context bigram count when scoring a candidate.
pub const CONTEXT_BOOST: u64 = 100;

/// Separator between the two words of a context bigram key.
pub const CONTEXT_SEPARATOR: char = '_';

/// Terminal state reached by single-word correction.
///
/// States are entered in the declaration order below; the first one that
/// applies ends the correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// A manual word override matched.
    Override,
    /// Longer than the configured maximum; left untouched and not judged.
    TooLong,
    /// Several uppercase letters; treated as an acronym or proper noun.
    AcronymGuard,
    /// Nothing to correct.
    Empty,
    /// Present in the frequency dictionary.
    Known,
    /// Replaced by the best edit-distance-1 candidate.
    DistanceOne,
    /// Accepted as a compound of known parts.
    CompoundValid,
    /// Replaced by the best edit-distance-2 candidate.
    DistanceTwo,
    /// No candidate found; returned unchanged.
    Uncorrectable,
}

impl Resolution {
    /// Whether the word counts as known. Set from dictionary presence,
    /// overrides and compound validation, never from a successful edit.
    pub fn is_known(self) -> bool {
        matches!(
            self,
            Resolution::Override
                | Resolution::AcronymGuard
                | Resolution::Empty
                | Resolution::Known
                | Resolution::CompoundValid
        )
    }

    /// Whether the returned word was substituted.
    pub fn is_corrected(self) -> bool {
        matches!(
            self,
            Resolution::Override | Resolution::DistanceOne | Resolution::DistanceTwo
        )
    }
}
