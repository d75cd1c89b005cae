// markspell-check: Spell check a markdown document.
//
// Reads a markdown file (or stdin), prints the annotated HTML document, or
// the misspelling record as JSON with --json.
//
// Usage:
//   markspell-check [-d DICT_PATH] [OPTIONS] [FILE]
//
// Options:
//   -d, --dict-path PATH    Word list file, or directory containing dictionary.txt
//   --json                  Print the misspelling record as JSON
//   --max-distance N        Maximum edit distance for suggestions (default: 2)
//   --chunk-size N          Tokens per scan worker (default: 1000)
//   -v, --verbose           Debug logging (overridden by MARKSPELL_LOG)
//   -h, --help              Print help

use std::io::{self, Read, Write};

use markspell::SpellCheckConfig;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = markspell_cli::parse_dict_path(&args);
    let (verbose, args) = markspell_cli::take_verbose(args);

    if markspell_cli::wants_help(&args) {
        println!("markspell-check: Spell check a markdown document.");
        println!();
        println!("Usage: markspell-check [-d DICT_PATH] [OPTIONS] [FILE]");
        println!();
        println!("Reads FILE (or stdin if omitted) and prints annotated HTML.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH  Word list file, or directory containing dictionary.txt");
        println!("  --json                Print the misspelling record as JSON");
        println!("  --max-distance N      Maximum edit distance for suggestions (default: 2)");
        println!("  --chunk-size N        Tokens per scan worker (default: 1000)");
        println!("  -v, --verbose         Debug logging (overridden by MARKSPELL_LOG)");
        println!("  -h, --help            Print this help");
        return;
    }

    markspell_cli::init_logging(verbose);

    let mut config = SpellCheckConfig::default();
    let mut json = false;
    let mut file: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--max-distance" => {
                config.max_edit_distance = markspell_cli::parse_count(arg, iter.next());
            }
            "--chunk-size" => {
                config.chunk_size = markspell_cli::parse_count(arg, iter.next());
            }
            other if other.starts_with('-') && other != "-" => {
                markspell_cli::fatal(&format!("unknown option: {other}"));
            }
            other => {
                if file.replace(other.to_string()).is_some() {
                    markspell_cli::fatal("only one input file may be given");
                }
            }
        }
    }

    let pipeline =
        markspell_cli::load_pipeline(dict_path.as_deref(), &config).unwrap_or_else(|e| markspell_cli::fatal(&e));

    let input = match file.as_deref() {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .unwrap_or_else(|e| markspell_cli::fatal(&format!("failed to read stdin: {e}")));
            buf
        }
        Some(path) => {
            std::fs::read(path).unwrap_or_else(|e| markspell_cli::fatal(&format!("failed to read {path}: {e}")))
        }
    };

    let report = pipeline
        .check(&input)
        .unwrap_or_else(|e| markspell_cli::fatal(&format!("{} failed: {e}", e.stage())));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if json {
        let value = serde_json::json!({
            "tokens": report.token_count,
            "misspellings": report.misspellings,
        });
        let _ = serde_json::to_writer_pretty(&mut out, &value);
        let _ = writeln!(out);
    } else {
        let _ = writeln!(out, "{}", report.html);
    }
}
