// Language model: word frequencies and context bigram counts
//
// Built once by `ModelBuilder`, then read-only. A `LanguageModel` is
// `Send + Sync` and is normally shared between checkers behind an `Arc`.

pub mod builder;

use hashbrown::HashMap;
use spellfix_core::enums::CONTEXT_SEPARATOR;

pub use builder::ModelBuilder;

/// Lowercase word -> occurrence count.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyDictionary {
    counts: HashMap<String, u64>,
}

impl FrequencyDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `word`. The caller lowercases.
    pub fn add(&mut self, word: &str) {
        self.add_count(word, 1);
    }

    /// Add `count` occurrences of `word`.
    pub fn add_count(&mut self, word: &str, count: u64) {
        if count == 0 {
            return;
        }
        match self.counts.get_mut(word) {
            Some(c) => *c += count,
            None => {
                self.counts.insert(word.to_string(), count);
            }
        }
    }

    /// Occurrence count of `word`, 0 when absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

/// Ordered word pair -> co-occurrence count, keyed as `left_right`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextModel {
    counts: HashMap<String, u64>,
}

impl ContextModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the bigram key for `left` followed by `right`.
    pub fn key(left: &str, right: &str) -> String {
        let mut key = String::with_capacity(left.len() + right.len() + 1);
        key.push_str(left);
        key.push(CONTEXT_SEPARATOR);
        key.push_str(right);
        key
    }

    /// Record one occurrence of `left` directly followed by `right`.
    pub fn add(&mut self, left: &str, right: &str) {
        *self.counts.entry(Self::key(left, right)).or_insert(0) += 1;
    }

    /// Co-occurrence count of `left` followed by `right`, 0 when absent.
    pub fn count(&self, left: &str, right: &str) -> u64 {
        self.counts.get(&Self::key(left, right)).copied().unwrap_or(0)
    }

    /// Number of distinct bigrams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Frequency dictionary plus optional context model.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageModel {
    dictionary: FrequencyDictionary,
    context: ContextModel,
    tracks_context: bool,
}

impl LanguageModel {
    pub fn new(dictionary: FrequencyDictionary, context: Option<ContextModel>) -> Self {
        let tracks_context = context.is_some();
        Self {
            dictionary,
            context: context.unwrap_or_default(),
            tracks_context,
        }
    }

    /// Build a model directly from `(word, count)` pairs. Words are lowercased.
    pub fn from_counts<'a, I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut dictionary = FrequencyDictionary::new();
        for (word, count) in counts {
            dictionary.add_count(&word.to_lowercase(), count);
        }
        Self::new(dictionary, None)
    }

    /// Attach context bigram counts given as `(left, right, count)`.
    pub fn with_context<'a, I>(mut self, bigrams: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, u64)>,
    {
        for (left, right, count) in bigrams {
            let key = ContextModel::key(&left.to_lowercase(), &right.to_lowercase());
            *self.context.counts.entry(key).or_insert(0) += count;
        }
        self.tracks_context = true;
        self
    }

    pub fn dictionary(&self) -> &FrequencyDictionary {
        &self.dictionary
    }

    pub fn context(&self) -> &ContextModel {
        &self.context
    }

    /// Whether context bigrams were collected while building.
    pub fn tracks_context(&self) -> bool {
        self.tracks_context
    }

    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn count(&self, word: &str) -> u64 {
        self.dictionary.count(word)
    }

    pub fn context_count(&self, left: &str, right: &str) -> u64 {
        self.context.count(left, right)
    }
}
