// markspell-tokenize: Tokenize text from a file or stdin.
//
// Prints every word and punctuation token with its byte range. No word
// list is needed.
//
// Usage:
//   markspell-tokenize [OPTIONS] [FILE]
//
// Options:
//   --words    Print only the words the spell checker would scan
//   -h, --help Print help

use std::io::{self, Read, Write};

use markspell_core::TokenKind;
use markspell_core::token::{tokenize, tokens};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if markspell_cli::wants_help(&args) {
        println!("markspell-tokenize: Tokenize text.");
        println!();
        println!("Usage: markspell-tokenize [OPTIONS] [FILE]");
        println!();
        println!("Reads FILE (or stdin), prints tokens with kinds:");
        println!("  WORD:        <text>");
        println!("  PUNCTUATION: <text>");
        println!();
        println!("Options:");
        println!("  --words     Print only the words the spell checker would scan");
        println!("  -h, --help  Print this help");
        return;
    }

    let words_only = args.iter().any(|a| a == "--words");
    let file = args.iter().find(|a| !a.starts_with('-'));

    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| markspell_cli::fatal(&format!("failed to read {path}: {e}"))),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| markspell_cli::fatal(&format!("failed to read stdin: {e}")));
            buf
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words_only {
        for word in tokenize(&input) {
            let _ = writeln!(out, "{word}");
        }
        return;
    }

    for token in tokens(&input) {
        let kind = match token.kind {
            TokenKind::Word => "WORD",
            TokenKind::Punctuation => "PUNCTUATION",
        };
        let _ = writeln!(
            out,
            "{kind:12} [{:>5}..{:>5}]: {}",
            token.pos,
            token.pos + token.text.len(),
            token.text
        );
    }
}
