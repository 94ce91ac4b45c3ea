// Edit-distance-1 candidate generation
//
// Each operation class produces every string one edit away from the input.
// The functions are pure, so distance 2 is reached by applying `edits1` to
// each distance-1 candidate.
//
// Candidates are not de-duplicated: the same string may come out of two
// operation classes (e.g. substituting a letter with itself). Lookups
// downstream are idempotent, so duplicates only cost time.

/// Letters tried by substitution and insertion: `a`-`z` plus `ä`, `ö`, `ü`.
pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    '\u{00E4}', '\u{00F6}', '\u{00FC}',
];

/// All strings at Damerau-Levenshtein distance 1 from `word`.
///
/// Empty input yields no candidates, and empty candidates (from deleting
/// the only character of a one-letter word) are dropped.
pub fn edits1(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    let n = chars.len();
    let mut out = Vec::with_capacity(n + n.saturating_sub(1) + (2 * n + 1) * ALPHABET.len());
    deletions(&chars, &mut out);
    transpositions(&chars, &mut out);
    substitutions(&chars, &mut out);
    insertions(&chars, &mut out);
    out.retain(|s| !s.is_empty());
    out
}

// ---------------------------------------------------------------------------
// Operation classes
// ---------------------------------------------------------------------------

/// Remove one character at each position (n variants).
pub fn deletions(word: &[char], out: &mut Vec<String>) {
    for i in 0..word.len() {
        out.push(word[..i].iter().chain(&word[i + 1..]).collect());
    }
}

/// Swap each pair of adjacent characters (n-1 variants).
pub fn transpositions(word: &[char], out: &mut Vec<String>) {
    let mut buffer = word.to_vec();
    for i in 1..word.len() {
        buffer.swap(i - 1, i);
        out.push(buffer.iter().collect());
        buffer.swap(i - 1, i);
    }
}

/// Replace each character with every alphabet letter (n * 29 variants).
pub fn substitutions(word: &[char], out: &mut Vec<String>) {
    let mut buffer = word.to_vec();
    for i in 0..word.len() {
        for &c in ALPHABET {
            buffer[i] = c;
            out.push(buffer.iter().collect());
        }
        buffer[i] = word[i];
    }
}

/// Insert every alphabet letter at every position, both ends included
/// ((n+1) * 29 variants).
pub fn insertions(word: &[char], out: &mut Vec<String>) {
    for i in 0..=word.len() {
        for &c in ALPHABET {
            let mut s = String::with_capacity(word.len() + 1);
            s.extend(&word[..i]);
            s.push(c);
            s.extend(&word[i..]);
            out.push(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn alphabet_has_29_letters() {
        assert_eq!(ALPHABET.len(), 29);
    }

    #[test]
    fn empty_word_has_no_edits() {
        assert!(edits1("").is_empty());
    }

    #[test]
    fn single_letter_word() {
        // 1 deletion (empty, dropped) + 0 transpositions + 29 substitutions
        // + 2 * 29 insertions.
        let edits = edits1("a");
        assert_eq!(edits.len(), 29 + 2 * 29);
        assert!(edits.iter().all(|e| !e.is_empty()));
        assert!(edits.contains(&"b".to_string()));
        assert!(edits.contains(&"ab".to_string()));
        assert!(edits.contains(&"\u{00FC}a".to_string())); // üa
    }

    #[test]
    fn candidate_count_for_longer_word() {
        // n + (n-1) + 29n + 29(n+1) for n = 4
        let n = 4;
        assert_eq!(edits1("haus").len(), n + (n - 1) + 29 * n + 29 * (n + 1));
    }

    #[test]
    fn deletions_cover_every_position() {
        let mut out = Vec::new();
        deletions(&chars("cat"), &mut out);
        assert_eq!(out, vec!["at", "ct", "ca"]);
    }

    #[test]
    fn transpositions_swap_neighbours() {
        let mut out = Vec::new();
        transpositions(&chars("abc"), &mut out);
        assert_eq!(out, vec!["bac", "acb"]);
    }

    #[test]
    fn substitution_reaches_umlaut() {
        let mut out = Vec::new();
        substitutions(&chars("haus"), &mut out);
        assert!(out.contains(&"h\u{00E4}us".to_string())); // häus
        assert_eq!(out.len(), 4 * 29);
    }

    #[test]
    fn insertion_at_both_ends() {
        let mut out = Vec::new();
        insertions(&chars("ow"), &mut out);
        assert!(out.contains(&"cow".to_string()));
        assert!(out.contains(&"owl".to_string()));
        assert!(out.contains(&"oaw".to_string()));
    }

    #[test]
    fn multibyte_letters_are_single_positions() {
        let edits: HashSet<String> = edits1("\u{00FC}ber").into_iter().collect(); // über
        assert!(edits.contains("ber"));
        assert!(edits.contains("uber"));
        assert!(edits.contains("b\u{00FC}er"));
    }

    #[test]
    fn distance_two_by_composition() {
        let two: HashSet<String> = edits1("ct").iter().flat_map(|e| edits1(e)).collect();
        assert!(two.contains("cat"));
        assert!(two.contains("cute"));
    }
}
