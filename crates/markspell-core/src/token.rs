// Tokenizer: Unicode-aware word and punctuation splitting
//
// Words are runs of Unicode letters, optionally joined once by an apostrophe
// so that contractions ("don't", "l’homme") stay a single token. A small
// fixed set of sentence punctuation is matched as separate units and then
// discarded by `tokenize`. Case is preserved.

use std::sync::LazyLock;

use regex::Regex;

/// Sentence punctuation recognised as standalone tokens.
pub const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';'];

/// Pattern for a single word: letters, optionally `'` or `’` and more letters.
const WORD_PATTERN: &str = r"\p{L}+(?:['\u{2019}]\p{L}+)?";

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{WORD_PATTERN}|[.,!?;]")).expect("token pattern is valid")
});

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("word pattern is valid"));

/// Kind of a matched token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of letters (possibly a contraction).
    Word,
    /// One of the characters in [`PUNCTUATION`].
    Punctuation,
}

/// A token with its kind and byte offset in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,

    /// The surface text, case preserved.
    pub text: String,

    /// Byte offset of the token within the input.
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

fn is_punctuation(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if PUNCTUATION.contains(&c))
}

/// Split `text` into word and punctuation tokens, in order.
pub fn tokens(text: &str) -> Vec<Token> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| {
            let kind = if is_punctuation(m.as_str()) {
                TokenKind::Punctuation
            } else {
                TokenKind::Word
            };
            Token::new(kind, m.as_str(), m.start())
        })
        .collect()
}

/// Split `text` into word tokens with punctuation discarded.
///
/// Empty or letter-free input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .filter(|m| !is_punctuation(m.as_str()))
        .map(|m| m.as_str().trim_end_matches(PUNCTUATION).to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Iterate over `(byte_offset, word)` for every word in `text`.
///
/// Uses the same word pattern as [`tokenize`], so a surface form found while
/// scanning is found again, identically, when rewriting markup text.
pub fn word_spans(text: &str) -> impl Iterator<Item = (usize, &str)> {
    WORD_RE.find_iter(text).map(|m| (m.start(), m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn non_matching_input() {
        assert!(tokenize("123 456 -- ()").is_empty());
    }

    #[test]
    fn drops_punctuation_and_keeps_case() {
        assert_eq!(tokenize("Hello, world!"), vec!["Hello", "world"]);
    }

    #[test]
    fn keeps_contractions() {
        assert_eq!(tokenize("I don't know."), vec!["I", "don't", "know"]);
        assert_eq!(tokenize("l\u{2019}homme"), vec!["l\u{2019}homme"]);
    }

    #[test]
    fn trailing_apostrophe_is_not_part_of_word() {
        assert_eq!(tokenize("the dogs' bones"), vec!["the", "dogs", "bones"]);
    }

    #[test]
    fn unicode_letters() {
        assert_eq!(
            tokenize("Caf\u{00E9} na\u{00EF}ve \u{00FC}ber"),
            vec!["Caf\u{00E9}", "na\u{00EF}ve", "\u{00FC}ber"]
        );
    }

    #[test]
    fn digits_split_words() {
        assert_eq!(tokenize("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn token_kinds_and_positions() {
        let toks = tokens("Hi, you.");
        assert_eq!(toks.len(), 4);
        assert_eq!(toks[0], Token::new(TokenKind::Word, "Hi", 0));
        assert_eq!(toks[1], Token::new(TokenKind::Punctuation, ",", 2));
        assert_eq!(toks[2], Token::new(TokenKind::Word, "you", 4));
        assert_eq!(toks[3], Token::new(TokenKind::Punctuation, ".", 7));
    }

    #[test]
    fn char_len_counts_chars() {
        let tok = Token::new(TokenKind::Word, "\u{00E9}t\u{00E9}", 0);
        assert_eq!(tok.char_len(), 3);
    }

    #[test]
    fn word_spans_match_tokenize() {
        let text = "It's a tst, isn't it? Caf\u{00E9}!";
        let spans: Vec<&str> = word_spans(text).map(|(_, w)| w).collect();
        assert_eq!(spans, tokenize(text));
    }

    #[test]
    fn word_spans_offsets() {
        let spans: Vec<(usize, &str)> = word_spans("a bc").collect();
        assert_eq!(spans, vec![(0, "a"), (2, "bc")]);
    }
}
