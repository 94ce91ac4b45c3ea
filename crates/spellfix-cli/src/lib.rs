// spellfix-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use log::info;
use spellfix::SpellChecker;

/// Training corpus file name looked up in the default locations.
const DICT_FILE: &str = "dictionary.txt";

/// Per-user directory holding the default corpus.
const HOME_SUBDIR: &str = ".spellfix";

/// Search for a training corpus and build a SpellChecker from it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `SPELLFIX_DICT` environment variable
/// 3. `~/.spellfix/dictionary.txt`
/// 4. `dictionary.txt` in the current working directory
///
/// When `mappings_path` is given, manual overrides are loaded from it.
pub fn load_checker(
    dict_path: Option<&str>,
    mappings_path: Option<&str>,
    track_context: bool,
) -> Result<SpellChecker, String> {
    let search_paths = build_search_paths(dict_path);

    let Some(path) = search_paths.iter().find(|p| p.is_file()) else {
        return Err(format!(
            "could not find a dictionary in any of the search paths:\n{}",
            search_paths
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    };

    info!("loading dictionary from {}", path.display());
    let mut checker = SpellChecker::from_path(path, track_context).map_err(|e| e.to_string())?;

    if let Some(mappings) = mappings_path {
        checker
            .load_manual_mappings(Path::new(mappings))
            .map_err(|e| e.to_string())?;
    }

    Ok(checker)
}

/// Build the list of candidate corpus files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("SPELLFIX_DICT") {
        let env_path = PathBuf::from(env_path);
        // Either the file itself or a directory containing it
        paths.push(env_path.join(DICT_FILE));
        paths.push(env_path);
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(HOME_SUBDIR).join(DICT_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Initialize logging from `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Extract the value of a flag given as `--long=VALUE`, `--long VALUE` or
/// `-s VALUE`.
///
/// Returns `(value, remaining_args)`. A flag without a value is fatal.
pub fn parse_flag_value(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let long_eq = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(long_eq.as_str()) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match args.get(i + 1) {
                Some(next) => {
                    value = Some(next.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_flag_value(args, "-d", "--dict-path")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
