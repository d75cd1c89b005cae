// markspell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use markspell::{Pipeline, SpellCheckConfig};

/// Word list file name looked up inside dictionary directories.
const DICT_FILE: &str = "dictionary.txt";

/// Environment variable naming a word list file or a directory holding one.
pub const DICT_PATH_ENV: &str = "MARKSPELL_DICT_PATH";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MARKSPELL_LOG";

/// Search for a word list and build a Pipeline over it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `MARKSPELL_DICT_PATH` environment variable
/// 3. `~/.markspell/dictionary.txt`
/// 4. `/usr/share/dict/words`
/// 5. `./data/dictionary.txt`
pub fn load_pipeline(dict_path: Option<&str>, config: &SpellCheckConfig) -> Result<Pipeline, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        if let Some(file) = resolve_word_list(candidate) {
            log::debug!("using word list {}", file.display());
            return Pipeline::from_word_list(&file, config)
                .map_err(|e| format!("failed to initialise spell checker from {}: {e}", file.display()));
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// A search path may name the word list itself or a directory containing
/// `dictionary.txt`.
fn resolve_word_list(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let inner = path.join(DICT_FILE);
    inner.is_file().then_some(inner)
}

/// Build the list of word list locations to try.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".markspell").join(DICT_FILE));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));

    // Local development fallback
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("data").join(DICT_FILE));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Initialise env_logger from `MARKSPELL_LOG` (default `warn`, or `debug`
/// when `verbose` is set).
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().filter_or(LOG_ENV, default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(Some(env_logger::TimestampPrecision::Millis))
        .try_init();
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            match iter.next() {
                Some(val) => dict_path = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Remove `-v`/`--verbose` from args, returning whether it was present.
pub fn take_verbose(args: Vec<String>) -> (bool, Vec<String>) {
    let before = args.len();
    let remaining: Vec<String> = args.into_iter().filter(|a| a != "-v" && a != "--verbose").collect();
    (remaining.len() != before, remaining)
}

/// Parse a non-negative integer flag value or exit.
pub fn parse_count(flag: &str, value: Option<&String>) -> usize {
    let Some(value) = value else {
        fatal(&format!("{flag} requires a value"));
    };
    value
        .parse()
        .unwrap_or_else(|_| fatal(&format!("invalid number for {flag}: {value}")))
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
