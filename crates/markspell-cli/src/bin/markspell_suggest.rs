// markspell-suggest: Print spelling suggestions for words.
//
// Known words are printed as-is. Unknown words are followed by their
// filtered suggestions, closest first.
//
// Usage:
//   markspell-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH    Word list file, or directory containing dictionary.txt
//   --max-distance N        Maximum edit distance for suggestions (default: 2)
//   -v, --verbose           Debug logging
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use markspell::{Pipeline, SpellCheckConfig};

fn suggest_word(word: &str, pipeline: &Pipeline, out: &mut impl Write) {
    if pipeline.vocabulary().contains(word) {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    let suggestions = pipeline.engine().suggestions(word);
    if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = markspell_cli::parse_dict_path(&args);
    let (verbose, args) = markspell_cli::take_verbose(args);

    if markspell_cli::wants_help(&args) {
        println!("markspell-suggest: Print spelling suggestions.");
        println!();
        println!("Usage: markspell-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH  Word list file, or directory containing dictionary.txt");
        println!("  --max-distance N      Maximum edit distance for suggestions (default: 2)");
        println!("  -v, --verbose         Debug logging");
        println!("  -h, --help            Print this help");
        return;
    }

    markspell_cli::init_logging(verbose);

    let mut config = SpellCheckConfig::default();
    let mut words: Vec<String> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--max-distance" {
            config.max_edit_distance = markspell_cli::parse_count(arg, iter.next());
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let pipeline =
        markspell_cli::load_pipeline(dict_path.as_deref(), &config).unwrap_or_else(|e| markspell_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        for line in io::stdin().lock().lines() {
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
            suggest_word(word, &pipeline, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &pipeline, &mut out);
        }
    }
}
