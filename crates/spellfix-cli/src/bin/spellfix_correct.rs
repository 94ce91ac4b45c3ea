// spellfix-correct: Autocorrect text from stdin.
//
// Reads text from stdin line by line and prints each line with misspelled
// words replaced by their most likely correction.
//
// Usage:
//   spellfix-correct [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Training corpus (default: search paths)
//   -m, --mappings PATH    Manual override file (`source = target` lines)
//   -c, --case-sensitive   Look words up without lowercasing
//   --context              Collect and use context bigrams
//   -i, --ignore WORDS     Comma-separated words to leave untouched
//   -v, --verbose          Print correction flags for each line to stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    spellfix_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spellfix_cli::parse_dict_path(&args);
    let (mappings_path, args) = spellfix_cli::parse_flag_value(&args, "-m", "--mappings");
    let (ignore, args) = spellfix_cli::parse_flag_value(&args, "-i", "--ignore");

    if spellfix_cli::wants_help(&args) {
        println!("spellfix-correct: Autocorrect text from stdin.");
        println!();
        println!("Usage: spellfix-correct [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Training corpus (default: search paths)");
        println!("  -m, --mappings PATH    Manual override file (`source = target` lines)");
        println!("  -c, --case-sensitive   Look words up without lowercasing");
        println!("  --context              Collect and use context bigrams");
        println!("  -i, --ignore WORDS     Comma-separated words to leave untouched");
        println!("  -v, --verbose          Print correction flags for each line to stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    let case_sensitive = args.iter().any(|a| a == "-c" || a == "--case-sensitive");
    let use_context = args.iter().any(|a| a == "--context");
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");

    let ignore_words: Vec<&str> = ignore
        .as_deref()
        .map(|list| list.split(',').map(str::trim).filter(|w| !w.is_empty()).collect())
        .unwrap_or_default();

    let checker =
        spellfix_cli::load_checker(dict_path.as_deref(), mappings_path.as_deref(), use_context)
            .unwrap_or_else(|e| spellfix_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        let result = checker.auto_correct_text(&line, case_sensitive, &ignore_words);
        let _ = writeln!(out, "{}", result.text);
        if verbose {
            eprintln!(
                "was_corrected={} all_words_known={}",
                result.was_corrected, result.all_words_known
            );
        }
    }
}
