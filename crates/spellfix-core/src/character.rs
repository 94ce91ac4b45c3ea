// Character classification and Unicode utilities

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters that exclude a whole token from correction when present
/// anywhere in it (together with ASCII digits).
const NO_CORRECTION_CHARS: &[char] = &['<', '>', '=', '-', '*', '\'', '#', '/', '+', '&', '@'];

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. For the one-to-one
// mapping used in lookups we only take the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c) || c == '\u{018F}' // LATIN CAPITAL LETTER SCHWA
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

// ---------------------------------------------------------------------------
// Token classes
// ---------------------------------------------------------------------------

/// Check whether a character belongs to a training token: any Unicode
/// letter, any Unicode number, or a hyphen.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

/// Check whether a character is "other punctuation" (Unicode general
/// category Po).
///
/// Sentence punctuation such as `.`, `,`, `!`, `?`, `:`, `;` and straight
/// quotes fall in this class. Dashes (Pd) and brackets (Ps/Pe) do not.
pub fn is_other_punctuation(c: char) -> bool {
    c.is_punctuation_other()
}

/// Check whether a character marks its token as not correctable.
pub fn is_no_correction_char(c: char) -> bool {
    c.is_ascii_digit() || NO_CORRECTION_CHARS.contains(&c)
}

/// Remove diacritics by decomposing to NFD and dropping combining marks.
///
/// `"Müller"` becomes `"Muller"`. Characters without a decomposition
/// (such as `ß`) are kept as they are.
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|&c| !is_combining_mark(c)).collect()
}
