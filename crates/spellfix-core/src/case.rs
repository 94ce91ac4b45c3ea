// Case profiling and capitalization restore

use crate::character::{is_upper, simple_upper};

/// Uppercase profile of a word, taken before it is lowercased for lookup.
///
/// The corrector uses it twice: words with several capitals are left
/// alone (acronyms, proper nouns in camel case), and words with a single
/// capital get their first letter re-capitalized after correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseProfile {
    uppercase: usize,
}

impl CaseProfile {
    /// Count the uppercase letters of `word`.
    pub fn of(word: &str) -> Self {
        Self {
            uppercase: word.chars().filter(|&c| is_upper(c)).count(),
        }
    }

    /// Number of uppercase letters found.
    pub fn uppercase_count(&self) -> usize {
        self.uppercase
    }

    /// Exactly one uppercase letter, wherever it was.
    pub fn has_single_capital(&self) -> bool {
        self.uppercase == 1
    }

    /// More than one uppercase letter.
    pub fn is_acronym_like(&self) -> bool {
        self.uppercase > 1
    }

    /// Re-apply a single leading capital to `word` if this profile had one.
    pub fn restore(&self, word: &str) -> String {
        if self.has_single_capital() {
            capitalize_first(word)
        } else {
            word.to_string()
        }
    }
}

/// Uppercase the first character of `word`, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(simple_upper(first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_counts_uppercase() {
        assert_eq!(CaseProfile::of("koira").uppercase_count(), 0);
        assert_eq!(CaseProfile::of("Haus").uppercase_count(), 1);
        assert_eq!(CaseProfile::of("NASA").uppercase_count(), 4);
        assert_eq!(CaseProfile::of("\u{00C4}rger").uppercase_count(), 1); // Ärger
        assert_eq!(CaseProfile::of("").uppercase_count(), 0);
    }

    #[test]
    fn single_capital_and_acronym() {
        assert!(CaseProfile::of("Haus").has_single_capital());
        assert!(CaseProfile::of("hAus").has_single_capital());
        assert!(!CaseProfile::of("haus").has_single_capital());
        assert!(CaseProfile::of("McDonald").is_acronym_like());
        assert!(!CaseProfile::of("Haus").is_acronym_like());
    }

    #[test]
    fn capitalize_first_only_touches_first_char() {
        assert_eq!(capitalize_first("haus"), "Haus");
        assert_eq!(capitalize_first("\u{00FC}bel"), "\u{00DC}bel"); // übel -> Übel
        assert_eq!(capitalize_first("hAUS"), "HAUS");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn restore_only_for_single_capital() {
        assert_eq!(CaseProfile::of("Teh").restore("the"), "The");
        assert_eq!(CaseProfile::of("teh").restore("the"), "the");
        assert_eq!(CaseProfile::of("TEH").restore("the"), "the");
    }

    #[test]
    fn restore_after_inner_capital_still_capitalizes_first() {
        // One capital anywhere counts as a single leading capital on restore.
        assert_eq!(CaseProfile::of("hOuse").restore("house"), "House");
    }
}
