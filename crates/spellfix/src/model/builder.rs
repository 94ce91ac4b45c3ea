// Model construction from a training corpus
//
// Each line is tokenized into runs of letters, digits and hyphens, the
// tokens are lowercased and counted. With context tracking enabled,
// consecutive tokens of the same line are also counted as bigrams; no pair
// spans a line break.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use spellfix_core::character;

use crate::error::{Error, Result};
use crate::model::{ContextModel, FrequencyDictionary, LanguageModel};

/// Training token: Unicode letters, numbers and hyphens.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}-]+").unwrap());

/// Emit a progress line every this many input lines.
const PROGRESS_INTERVAL: usize = 100_000;

/// Accumulates word and bigram counts, then freezes them into a
/// `LanguageModel`.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    dictionary: FrequencyDictionary,
    context: ContextModel,
    track_context: bool,
    strip_diacritics: bool,
    lines: usize,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also count ordered pairs of adjacent tokens.
    pub fn track_context(mut self, value: bool) -> Self {
        self.track_context = value;
        self
    }

    /// Remove diacritics from tokens before counting them.
    pub fn strip_diacritics(mut self, value: bool) -> Self {
        self.strip_diacritics = value;
        self
    }

    /// Count the tokens of a single line.
    pub fn add_line(&mut self, line: &str) {
        let mut previous: Option<String> = None;
        for token in TOKEN_PATTERN.find_iter(line) {
            let token = if self.strip_diacritics {
                character::strip_diacritics(token.as_str()).to_lowercase()
            } else {
                token.as_str().to_lowercase()
            };
            self.dictionary.add(&token);
            if self.track_context {
                if let Some(prev) = &previous {
                    self.context.add(prev, &token);
                }
                previous = Some(token);
            }
        }

        self.lines += 1;
        if self.lines % PROGRESS_INTERVAL == 0 {
            debug!(
                "model builder: {} lines, {} distinct words",
                self.lines,
                self.dictionary.len()
            );
        }
    }

    /// Count every line of `text`.
    pub fn add_text(&mut self, text: &str) {
        for line in text.lines() {
            self.add_line(line);
        }
    }

    /// Count every line produced by `reader`.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            self.add_line(&line?);
        }
        Ok(())
    }

    /// Count every line of the file at `path`.
    ///
    /// An unreadable file is reported as `Error::DictionaryRead`; the
    /// builder keeps whatever was counted before the failure, but callers
    /// are expected to discard it.
    pub fn read_path(&mut self, path: &Path) -> Result<()> {
        let to_error = |source: std::io::Error| Error::DictionaryRead {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(to_error)?;
        for line in BufReader::new(file).lines() {
            self.add_line(&line.map_err(to_error)?);
        }
        Ok(())
    }

    /// Freeze the counts into an immutable model.
    pub fn build(self) -> LanguageModel {
        info!(
            "built language model: {} lines, {} words, {} bigrams",
            self.lines,
            self.dictionary.len(),
            self.context.len()
        );
        let context = self.track_context.then_some(self.context);
        LanguageModel::new(self.dictionary, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lowercased_tokens() {
        let mut builder = ModelBuilder::new();
        builder.add_line("Der Hund, der Hund! Und die Katze.");
        let model = builder.build();
        assert_eq!(model.count("der"), 2);
        assert_eq!(model.count("hund"), 2);
        assert_eq!(model.count("katze"), 1);
        assert!(!model.contains("Hund"));
        assert!(!model.contains("katze."));
    }

    #[test]
    fn hyphens_and_digits_stay_in_tokens() {
        let mut builder = ModelBuilder::new();
        builder.add_line("e-mail an 3d-drucker_team");
        let model = builder.build();
        assert!(model.contains("e-mail"));
        assert!(model.contains("3d-drucker"));
        assert!(model.contains("team"));
        assert!(!model.contains("3d-drucker_team"));
    }

    #[test]
    fn tokens_consist_of_word_chars() {
        let line = "Grüße, e-mail (3d) auf_dem Weg! ½ x";
        for token in TOKEN_PATTERN.find_iter(line) {
            assert!(token.as_str().chars().all(character::is_word_char), "{token:?}");
        }
        for gap in TOKEN_PATTERN.split(line) {
            assert!(!gap.chars().any(character::is_word_char), "{gap:?}");
        }
    }

    #[test]
    fn umlauts_are_word_chars() {
        let mut builder = ModelBuilder::new();
        builder.add_line("Grüße aus München");
        let model = builder.build();
        assert!(model.contains("grüße"));
        assert!(model.contains("münchen"));
    }

    #[test]
    fn strip_diacritics_option() {
        let mut builder = ModelBuilder::new().strip_diacritics(true);
        builder.add_line("Müller café");
        let model = builder.build();
        assert!(model.contains("muller"));
        assert!(model.contains("cafe"));
        assert!(!model.contains("müller"));
    }

    #[test]
    fn context_pairs_within_line_only() {
        let mut builder = ModelBuilder::new().track_context(true);
        builder.add_text("milk cow\ncow milk\nmilk cow");
        let model = builder.build();
        assert!(model.tracks_context());
        assert_eq!(model.context_count("milk", "cow"), 2);
        assert_eq!(model.context_count("cow", "milk"), 1);
        // No pair across the line break "cow\ncow".
        assert_eq!(model.context_count("cow", "cow"), 0);
    }

    #[test]
    fn context_not_tracked_by_default() {
        let mut builder = ModelBuilder::new();
        builder.add_line("milk cow");
        let model = builder.build();
        assert!(!model.tracks_context());
        assert_eq!(model.context_count("milk", "cow"), 0);
    }

    #[test]
    fn read_from_reader() {
        let corpus = "the cow\nthe milk\n";
        let mut builder = ModelBuilder::new();
        builder.read_from(corpus.as_bytes()).unwrap();
        let model = builder.build();
        assert_eq!(model.count("the"), 2);
    }

    #[test]
    fn missing_file_is_dictionary_read_error() {
        let mut builder = ModelBuilder::new();
        let err = builder
            .read_path(Path::new("/nonexistent/spellfix/corpus.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::DictionaryRead { .. }));
        assert!(err.to_string().contains("corpus.txt"));
    }
}
