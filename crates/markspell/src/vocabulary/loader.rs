// Word list loading
//
// One entry per line; the first whitespace-delimited field is the word.
// Anything after it (frequency columns, tags) is ignored.

use std::path::{Path, PathBuf};

/// Error type for word list loading. Always fatal at start-up.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {source_name} contains no words")]
    Empty { source_name: String },
}

/// Extract words from word-list text.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|word| !word.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and parse a word list file.
///
/// Fails if the file cannot be read or yields no words.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, VocabularyError> {
    let text = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&text);
    if words.is_empty() {
        return Err(VocabularyError::Empty {
            source_name: path.display().to_string(),
        });
    }
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_field_only() {
        let words = parse_word_list("hello 120\nworld\t55 noun\n");
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let words = parse_word_list("# header\n\n   \nalpha\n  beta  \n");
        assert_eq!(words, vec!["alpha", "beta"]);
    }

    #[test]
    fn preserves_case_of_entries() {
        assert_eq!(parse_word_list("Paris\n"), vec!["Paris"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_word_list(Path::new("/nonexistent/markspell/words.txt")).unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/markspell/words.txt"));
    }

    #[test]
    fn empty_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("markspell-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "# nothing here\n\n").unwrap();
        let err = load_word_list(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, VocabularyError::Empty { .. }));
    }

    #[test]
    fn loads_real_file() {
        let path = std::env::temp_dir().join(format!("markspell-words-{}.txt", std::process::id()));
        std::fs::write(&path, "one 1\ntwo 2\n").unwrap();
        let words = load_word_list(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(words, vec!["one", "two"]);
    }
}
