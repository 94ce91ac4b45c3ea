// Single-word correction
//
// A word moves through a fixed sequence of checks; the first that applies
// decides the result (see `Resolution`):
//
//   override -> too long -> acronym guard -> empty -> known
//     -> distance 1 -> compound -> distance 2 -> best candidate / unchanged

use hashbrown::{HashMap, HashSet};
use log::debug;
use spellfix_core::case::CaseProfile;
use spellfix_core::character::is_other_punctuation;
use spellfix_core::enums::{CONTEXT_BOOST, Resolution};

use super::Corrector;
use crate::compound::is_valid_compound;
use crate::edits::edits1;

/// Outcome of correcting one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCorrection {
    /// The corrected word, or the input when nothing applied.
    pub word: String,
    /// Whether `word` differs from a plain pass-through.
    pub corrected: bool,
    /// Whether the input was recognized before any edit-distance correction.
    pub known: bool,
    /// Which check decided the outcome.
    pub resolution: Resolution,
}

impl WordCorrection {
    fn new(word: String, resolution: Resolution) -> Self {
        Self {
            word,
            corrected: resolution.is_corrected(),
            known: resolution.is_known(),
            resolution,
        }
    }
}

impl Corrector<'_> {
    /// Correct a single word.
    ///
    /// Unless `case_sensitive`, the word is lowercased for every lookup and
    /// a single capital is restored on the result. `left` and `right` are
    /// the neighbouring tokens, used for context scoring when enabled.
    pub fn correct(
        &self,
        word: &str,
        case_sensitive: bool,
        left: Option<&str>,
        right: Option<&str>,
    ) -> WordCorrection {
        let lower = word.to_lowercase();
        let (profile, lookup) = if case_sensitive {
            (CaseProfile::default(), word.to_string())
        } else {
            (CaseProfile::of(word), lower.clone())
        };

        if let Some(target) = self.mappings.word(&lower) {
            return WordCorrection::new(profile.restore(target), Resolution::Override);
        }

        let len = lookup.chars().count();
        if len > self.options.max_word_length {
            return WordCorrection::new(word.to_string(), Resolution::TooLong);
        }
        if !case_sensitive && profile.is_acronym_like() {
            return WordCorrection::new(word.to_string(), Resolution::AcronymGuard);
        }
        if lookup.is_empty() {
            return WordCorrection::new(String::new(), Resolution::Empty);
        }
        if self.model.contains(&lookup) {
            return WordCorrection::new(profile.restore(&lookup), Resolution::Known);
        }

        let distance_one = edits1(&lookup);
        let mut candidates = self.score_distance_one(&distance_one, left, right);
        let mut resolution = Resolution::DistanceOne;

        if self.try_compound(word, &candidates) {
            return WordCorrection::new(word.to_string(), Resolution::CompoundValid);
        }

        if candidates.is_empty() && len <= self.options.max_word_length_distance_two {
            candidates = self.collect_distance_two(&lookup, &distance_one);
            resolution = Resolution::DistanceTwo;
        }

        match best_candidate(&candidates) {
            Some(best) => {
                debug!("corrected {word:?} to {best:?} ({resolution:?})");
                WordCorrection::new(profile.restore(best), resolution)
            }
            None => WordCorrection::new(word.to_string(), Resolution::Uncorrectable),
        }
    }

    /// Score every known distance-1 candidate by frequency plus context boost.
    fn score_distance_one(
        &self,
        edits: &[String],
        left: Option<&str>,
        right: Option<&str>,
    ) -> HashMap<String, u64> {
        let use_context = self.options.use_context && self.model.tracks_context();
        let left = left.map(context_word).filter(|_| use_context);
        let right = right.map(context_word).filter(|_| use_context);

        let mut candidates = HashMap::new();
        for candidate in edits {
            let count = self.model.count(candidate);
            if count == 0 || candidates.contains_key(candidate.as_str()) {
                continue;
            }
            let mut score = count;
            if let Some(left) = &left {
                score += CONTEXT_BOOST * self.model.context_count(left, candidate);
            }
            if let Some(right) = &right {
                score += CONTEXT_BOOST * self.model.context_count(candidate, right);
            }
            candidates.insert(candidate.clone(), score);
        }
        candidates
    }

    /// Whether the compound check applies and accepts `word`.
    fn try_compound(&self, word: &str, candidates: &HashMap<String, u64>) -> bool {
        if !self.options.compound_support {
            return false;
        }
        let Some(splitter) = self.splitter else {
            return false;
        };
        let best_score = candidates.values().copied().max();
        if best_score.is_some_and(|s| s >= self.options.compound_stop_count) {
            return false;
        }
        is_valid_compound(self.model, splitter, word)
    }

    /// Known words two edits away that keep the first character of `lookup`.
    fn collect_distance_two(&self, lookup: &str, distance_one: &[String]) -> HashMap<String, u64> {
        let first = lookup.chars().next();
        let mut seen = HashSet::new();
        let mut candidates = HashMap::new();
        for e1 in distance_one {
            if !seen.insert(e1.as_str()) {
                continue;
            }
            for e2 in edits1(e1) {
                if e2.chars().next() != first || candidates.contains_key(e2.as_str()) {
                    continue;
                }
                let count = self.model.count(&e2);
                if count > 0 {
                    candidates.insert(e2, count);
                }
            }
        }
        candidates
    }
}

/// Highest score wins; equal scores go to the lexicographically smallest
/// candidate so results do not depend on map iteration order.
fn best_candidate(candidates: &HashMap<String, u64>) -> Option<&str> {
    candidates
        .iter()
        .max_by(|(a, sa), (b, sb)| sa.cmp(sb).then_with(|| b.cmp(a)))
        .map(|(word, _)| word.as_str())
}

/// Normalize a neighbouring token for context lookup: lowercase, with
/// surrounding sentence punctuation removed.
fn context_word(token: &str) -> String {
    token.trim_matches(is_other_punctuation).to_lowercase()
}
