// SpellChecker: top-level integration point
//
// Owns the configuration (options, manual overrides, compound splitter)
// and shares the language model behind an `Arc`. Every correction method
// takes `&self` and builds a short-lived `Corrector` view, so one checker
// can serve concurrent callers; setters take `&mut self`.

use std::path::Path;
use std::sync::Arc;

use log::warn;

use crate::compound::CompoundSplitter;
use crate::corrector::{CorrectedText, Corrector, CorrectorOptions, WordCorrection};
use crate::error::Result;
use crate::mappings::ManualMappings;
use crate::model::{LanguageModel, ModelBuilder};

/// Dictionary-backed spelling corrector.
pub struct SpellChecker {
    model: Arc<LanguageModel>,
    mappings: ManualMappings,
    options: CorrectorOptions,
    splitter: Option<Box<dyn CompoundSplitter>>,
}

impl SpellChecker {
    /// Create a checker over an already built model with default options.
    pub fn new(model: Arc<LanguageModel>) -> Self {
        Self {
            model,
            mappings: ManualMappings::new(),
            options: CorrectorOptions::default(),
            splitter: None,
        }
    }

    /// Build the model from a corpus file and create a checker over it.
    ///
    /// With `track_context`, bigram counts are collected and context
    /// scoring is switched on.
    pub fn from_path(path: &Path, track_context: bool) -> Result<Self> {
        let mut builder = ModelBuilder::new().track_context(track_context);
        builder.read_path(path)?;
        let mut checker = Self::new(Arc::new(builder.build()));
        checker.options.use_context = track_context;
        Ok(checker)
    }

    fn corrector(&self) -> Corrector<'_> {
        Corrector::new(
            &self.model,
            &self.mappings,
            &self.options,
            self.splitter.as_deref(),
        )
    }

    // =========================================================================
    // Correction
    // =========================================================================

    /// Correct a single word and return only the resulting string.
    pub fn correct_word(
        &self,
        word: &str,
        case_sensitive: bool,
        left: Option<&str>,
        right: Option<&str>,
    ) -> String {
        self.correct_word_detailed(word, case_sensitive, left, right).word
    }

    /// Correct a single word, reporting whether it was known and changed.
    pub fn correct_word_detailed(
        &self,
        word: &str,
        case_sensitive: bool,
        left: Option<&str>,
        right: Option<&str>,
    ) -> WordCorrection {
        self.corrector().correct(word, case_sensitive, left, right)
    }

    /// Correct a text case-insensitively.
    pub fn auto_correct(&self, text: &str) -> String {
        self.auto_correct_ignoring(text, &[])
    }

    /// Correct a text case-insensitively, leaving `ignore_words` untouched.
    pub fn auto_correct_ignoring(&self, text: &str, ignore_words: &[&str]) -> String {
        self.auto_correct_text(text, false, ignore_words).text
    }

    /// Correct a text and report the aggregate flags.
    pub fn auto_correct_text(
        &self,
        text: &str,
        case_sensitive: bool,
        ignore_words: &[&str],
    ) -> CorrectedText {
        self.corrector().correct_text(text, case_sensitive, ignore_words)
    }

    /// Whether the lowercased word is in the dictionary.
    pub fn is_known(&self, word: &str) -> bool {
        self.model.contains(&word.to_lowercase())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn model(&self) -> &Arc<LanguageModel> {
        &self.model
    }

    pub fn options(&self) -> &CorrectorOptions {
        &self.options
    }

    pub fn manual_mappings(&self) -> &ManualMappings {
        &self.mappings
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Replace all options at once.
    pub fn set_options(&mut self, options: CorrectorOptions) {
        if options.use_context {
            self.warn_if_no_context();
        }
        self.options = options;
    }

    /// Set the minimum token length for text correction.
    pub fn set_min_word_length(&mut self, value: usize) {
        self.options.min_word_length = value;
    }

    /// Set the maximum length of a word that may be corrected.
    pub fn set_max_word_length(&mut self, value: usize) {
        self.options.max_word_length = value;
    }

    /// Set the maximum word length for the edit-distance-2 fallback.
    pub fn set_max_word_length_distance_two(&mut self, value: usize) {
        self.options.max_word_length_distance_two = value;
    }

    /// Set whether compound words made of known parts are accepted.
    /// Has no effect until a splitter is installed.
    pub fn set_compound_support(&mut self, value: bool) {
        self.options.compound_support = value;
    }

    /// Set the candidate score at which the compound check is skipped.
    pub fn set_compound_stop_count(&mut self, value: u64) {
        self.options.compound_stop_count = value;
    }

    /// Set whether context bigrams boost candidate scores.
    pub fn set_use_context(&mut self, value: bool) {
        if value {
            self.warn_if_no_context();
        }
        self.options.use_context = value;
    }

    /// Install the compound splitter used when compound support is on.
    pub fn set_compound_splitter(&mut self, splitter: Box<dyn CompoundSplitter>) {
        self.splitter = Some(splitter);
    }

    /// Replace the manual override tables.
    pub fn set_manual_mappings(&mut self, mappings: ManualMappings) {
        self.mappings = mappings;
    }

    /// Add a single manual override rule.
    pub fn add_manual_mapping(&mut self, source: &str, target: &str) {
        self.mappings.add(source, target);
    }

    /// Load manual overrides from a `source = target` file, replacing the
    /// current tables.
    pub fn load_manual_mappings(&mut self, path: &Path) -> Result<()> {
        self.mappings = ManualMappings::read_path(path)?;
        Ok(())
    }

    fn warn_if_no_context(&self) {
        if !self.model.tracks_context() {
            warn!("context scoring enabled, but the model was built without context bigrams");
        }
    }
}
