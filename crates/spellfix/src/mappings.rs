// Manual word and phrase overrides
//
// Rules are exact-match substitutions consulted before any statistical
// correction. A source containing whitespace is a phrase rule, anything
// else a word rule.
//
// File format: one `source = target` rule per line. Lines that do not
// contain exactly one `=`, or that have an empty side, are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use log::debug;

use crate::error::{Error, Result};

/// Word and phrase override tables.
#[derive(Debug, Clone, Default)]
pub struct ManualMappings {
    words: HashMap<String, String>,
    /// Kept in insertion order: the first phrase found in a text wins.
    phrases: Vec<(String, String)>,
}

impl ManualMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. The source is trimmed and lowercased.
    ///
    /// Re-adding a word source replaces its target; re-adding a phrase
    /// source replaces the target and keeps its original position.
    pub fn add(&mut self, source: &str, target: &str) {
        let source = source.trim().to_lowercase();
        let target = target.trim().to_string();
        if source.is_empty() {
            return;
        }
        if source.chars().any(char::is_whitespace) {
            match self.phrases.iter_mut().find(|(s, _)| *s == source) {
                Some(entry) => entry.1 = target,
                None => self.phrases.push((source, target)),
            }
        } else {
            self.words.insert(source, target);
        }
    }

    /// Target for a lowercase word, if any.
    pub fn word(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// First phrase rule whose source occurs in `text`.
    pub fn first_phrase_in(&self, text: &str) -> Option<(&str, &str)> {
        self.phrases
            .iter()
            .find(|(source, _)| text.contains(source.as_str()))
            .map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }

    /// Read rules from `reader`, skipping malformed lines.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut mappings = Self::new();
        let mut skipped = 0;
        for line in reader.lines() {
            match parse_line(&line?) {
                Some((source, target)) => mappings.add(&source, &target),
                None => skipped += 1,
            }
        }
        debug!(
            "manual mappings: {} words, {} phrases, {} lines skipped",
            mappings.word_count(),
            mappings.phrase_count(),
            skipped
        );
        Ok(mappings)
    }

    /// Read rules from the file at `path`.
    pub fn read_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::MappingRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_from(BufReader::new(file)).map_err(|e| match e {
            Error::Io(source) => Error::MappingRead {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

/// Parse a `source = target` rule line.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let mut parts = line.split('=');
    let source = parts.next()?.trim();
    let target = parts.next()?.trim();
    if parts.next().is_some() || source.is_empty() || target.is_empty() {
        return None;
    }
    Some((source.to_string(), target.to_string()))
}
