// Compound word validation
//
// Decomposition itself (and singularization of the parts) is supplied by
// the caller through `CompoundSplitter`; this module only decides whether
// a split is made of known words.

use log::debug;

use crate::model::LanguageModel;

/// Minimum length, in characters, of every compound part.
pub const MIN_PART_LENGTH: usize = 2;

/// Splits a compound word (typically German) into its parts.
pub trait CompoundSplitter: Send + Sync {
    /// Split `word` into parts, e.g. `"Goldkette"` into `["Gold", "kette"]`.
    /// A word that cannot be split is returned as a single part.
    fn split(&self, word: &str) -> Vec<String>;

    /// Singular form of a part, when it differs from the part itself.
    fn singularize(&self, _part: &str) -> Option<String> {
        None
    }
}

/// Check whether every part of `word`'s split is a known word.
///
/// Parts are lowercased and looked up directly, then in their singular
/// form. A part shorter than `MIN_PART_LENGTH` or an empty split rejects
/// the compound.
pub fn is_valid_compound(model: &LanguageModel, splitter: &dyn CompoundSplitter, word: &str) -> bool {
    let parts = splitter.split(word);
    if parts.is_empty() {
        return false;
    }
    for part in &parts {
        if part.chars().count() < MIN_PART_LENGTH {
            debug!("compound {word:?} rejected: part {part:?} too short");
            return false;
        }
        let part = part.to_lowercase();
        if model.contains(&part) {
            continue;
        }
        let singular_known = splitter
            .singularize(&part)
            .is_some_and(|s| model.contains(&s.to_lowercase()));
        if !singular_known {
            debug!("compound {word:?} rejected: unknown part {part:?}");
            return false;
        }
    }
    debug!("compound {word:?} accepted as {parts:?}");
    true
}
