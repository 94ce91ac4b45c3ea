// spellfix-word: Diagnose single words.
//
// For each word prints one line:
//   K: word          (known)
//   C: word -> fix   (corrected)
//   U: word          (unknown, left unchanged)
//
// Usage:
//   spellfix-word [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Training corpus (default: search paths)
//   -m, --mappings PATH    Manual override file (`source = target` lines)
//   -c, --case-sensitive   Look words up without lowercasing
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use spellfix::SpellChecker;

fn report(checker: &SpellChecker, word: &str, case_sensitive: bool, out: &mut impl Write) {
    let correction = checker.correct_word_detailed(word, case_sensitive, None, None);
    let _ = if correction.corrected {
        writeln!(out, "C: {word} -> {}", correction.word)
    } else if correction.known {
        writeln!(out, "K: {word}")
    } else {
        writeln!(out, "U: {word}")
    };
    log::debug!("{word:?}: {:?}", correction.resolution);
}

fn main() {
    spellfix_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spellfix_cli::parse_dict_path(&args);
    let (mappings_path, args) = spellfix_cli::parse_flag_value(&args, "-m", "--mappings");

    if spellfix_cli::wants_help(&args) {
        println!("spellfix-word: Diagnose single words.");
        println!();
        println!("Usage: spellfix-word [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  K: word          (known)");
        println!("  C: word -> fix   (corrected)");
        println!("  U: word          (unknown, unchanged)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Training corpus (default: search paths)");
        println!("  -m, --mappings PATH    Manual override file (`source = target` lines)");
        println!("  -c, --case-sensitive   Look words up without lowercasing");
        println!("  -h, --help             Print this help");
        return;
    }

    let case_sensitive = args.iter().any(|a| a == "-c" || a == "--case-sensitive");
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let checker = spellfix_cli::load_checker(dict_path.as_deref(), mappings_path.as_deref(), false)
        .unwrap_or_else(|e| spellfix_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !words.is_empty() {
        for word in words {
            report(&checker, word, case_sensitive, &mut out);
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        report(&checker, word, case_sensitive, &mut out);
    }
}
