// Text correction: phrase overrides, tokenization and reassembly

use std::borrow::Cow;

use spellfix_core::character::{is_no_correction_char, is_other_punctuation};

use super::Corrector;

/// Outcome of correcting a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectedText {
    /// Corrected tokens joined by single spaces.
    pub text: String,
    /// A phrase override fired or at least one word was corrected.
    pub was_corrected: bool,
    /// Every token that went through word correction was known.
    pub all_words_known: bool,
}

impl Corrector<'_> {
    /// Correct every eligible whitespace-separated token of `text`.
    ///
    /// Only the first phrase override found in the text is applied (all of
    /// its occurrences are replaced). Tokens outside the configured length
    /// range, listed in `ignore_words`, or containing digits or one of
    /// `< > = - * ' # / + & @` pass through verbatim.
    pub fn correct_text(&self, text: &str, case_sensitive: bool, ignore_words: &[&str]) -> CorrectedText {
        let mut was_corrected = false;
        let mut all_words_known = true;

        let mut text = Cow::Borrowed(text);
        if let Some((source, target)) = self.mappings.first_phrase_in(&text) {
            text = Cow::Owned(text.replace(source, target));
            was_corrected = true;
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut out = String::with_capacity(text.len());

        for (i, &token) in tokens.iter().enumerate() {
            if !self.is_correctable(token, ignore_words) {
                out.push_str(token);
                out.push(' ');
                continue;
            }

            let (prefix, core, suffix) = split_punctuation(token);
            let left = i.checked_sub(1).map(|j| tokens[j]);
            let right = tokens.get(i + 1).copied();
            let correction = self.correct(core, case_sensitive, left, right);

            all_words_known &= correction.known;
            was_corrected |= correction.corrected;

            out.push_str(prefix);
            out.push_str(&correction.word);
            out.push_str(suffix);
            out.push(' ');
        }

        let trimmed = out.trim_end().len();
        out.truncate(trimmed);

        CorrectedText {
            text: out,
            was_corrected,
            all_words_known,
        }
    }

    fn is_correctable(&self, token: &str, ignore_words: &[&str]) -> bool {
        let len = token.chars().count();
        len >= self.options.min_word_length
            && len <= self.options.max_word_length
            && !ignore_words.contains(&token)
            && !token.chars().any(is_no_correction_char)
    }
}

/// Split off one leading and one trailing "other punctuation" character.
fn split_punctuation(token: &str) -> (&str, &str, &str) {
    let mut start = 0;
    if let Some(c) = token.chars().next() {
        if is_other_punctuation(c) {
            start = c.len_utf8();
        }
    }
    let rest = &token[start..];
    let mut end = rest.len();
    if let Some(c) = rest.chars().next_back() {
        if is_other_punctuation(c) {
            end -= c.len_utf8();
        }
    }
    (&token[..start], &rest[..end], &rest[end..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrector::CorrectorOptions;
    use crate::mappings::ManualMappings;
    use crate::model::LanguageModel;

    fn model() -> LanguageModel {
        LanguageModel::from_counts([("this", 50), ("is", 80), ("fine", 20), ("the", 100), ("cow", 30)])
    }

    fn run(model: &LanguageModel, mappings: &ManualMappings, text: &str) -> CorrectedText {
        let options = CorrectorOptions::default();
        Corrector::new(model, mappings, &options, None).correct_text(text, false, &[])
    }

    #[test]
    fn split_punctuation_strips_one_each_side() {
        assert_eq!(split_punctuation("word"), ("", "word", ""));
        assert_eq!(split_punctuation("word."), ("", "word", "."));
        assert_eq!(split_punctuation("\"word\""), ("\"", "word", "\""));
        assert_eq!(split_punctuation("word?!"), ("", "word?", "!"));
        assert_eq!(split_punctuation("(word)"), ("", "(word)", ""));
        assert_eq!(split_punctuation("."), (".", "", ""));
    }

    #[test]
    fn corrects_unknown_word() {
        let result = run(&model(), &ManualMappings::new(), "This ls fine");
        assert_eq!(result.text, "This is fine");
        assert!(result.was_corrected);
        // "ls" was not known before it was corrected.
        assert!(!result.all_words_known);
    }

    #[test]
    fn known_text_is_untouched() {
        let result = run(&model(), &ManualMappings::new(), "This is fine");
        assert_eq!(result.text, "This is fine");
        assert!(!result.was_corrected);
        assert!(result.all_words_known);
    }

    #[test]
    fn punctuation_is_reattached() {
        let result = run(&model(), &ManualMappings::new(), "Thsi is fine.");
        assert_eq!(result.text, "This is fine.");
        let result = run(&model(), &ManualMappings::new(), "\"teh cow\"");
        assert_eq!(result.text, "\"the cow\"");
    }

    #[test]
    fn whitespace_collapses_to_single_spaces() {
        let result = run(&model(), &ManualMappings::new(), "  the\tcow \n is  fine  ");
        assert_eq!(result.text, "the cow is fine");
    }

    #[test]
    fn skipped_tokens_pass_through() {
        let result = run(&model(), &ManualMappings::new(), "a cov 42cows e-mail x@y.z cov");
        assert_eq!(result.text, "a cow 42cows e-mail x@y.z cow");
    }

    #[test]
    fn ignore_words_pass_through() {
        let model = model();
        let mappings = ManualMappings::new();
        let options = CorrectorOptions::default();
        let corrector = Corrector::new(&model, &mappings, &options, None);
        let result = corrector.correct_text("teh cov", false, &["cov"]);
        assert_eq!(result.text, "the cov");
    }

    #[test]
    fn only_first_phrase_override_applies() {
        let mut mappings = ManualMappings::new();
        mappings.add("is fine", "is the cow");
        mappings.add("this is", "the cow");
        let result = run(&model(), &mappings, "this is fine");
        assert_eq!(result.text, "this is the cow");
        assert!(result.was_corrected);
    }

    #[test]
    fn phrase_override_replaces_all_occurrences() {
        let mut mappings = ManualMappings::new();
        mappings.add("the cow", "this cow");
        let result = run(&model(), &mappings, "the cow is the cow");
        assert_eq!(result.text, "this cow is this cow");
        assert!(result.all_words_known);
    }

    #[test]
    fn empty_text() {
        let result = run(&model(), &ManualMappings::new(), "");
        assert_eq!(result.text, "");
        assert!(!result.was_corrected);
        assert!(result.all_words_known);
    }
}
