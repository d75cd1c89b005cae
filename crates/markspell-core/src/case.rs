// Case pattern detection and restoration for words and suggestions

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "hello".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Hello".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "heLLo".
    Complex,
    /// All letters are uppercase: "HELLO".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, apostrophes) are ignored when
/// determining the pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if first.is_uppercase() {
        first_uc = true;
        no_letters = false;
    }
    if first.is_lowercase() {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Return `word` rewritten to follow `case_type`.
///
/// `NoLetters` and `Complex` leave the word untouched.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.to_lowercase(),
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        }
    }
}

/// Re-case `suggestion` after the pattern of `original`.
///
/// Used to present suggestions for "Helo" as "Hello" rather than "hello".
pub fn restore_case(original: &str, suggestion: &str) -> String {
    apply_case(suggestion, detect_case(original))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_empty() {
        assert_eq!(detect_case(""), CaseType::NoLetters);
    }

    #[test]
    fn detect_no_letters() {
        assert_eq!(detect_case("123"), CaseType::NoLetters);
        assert_eq!(detect_case("'"), CaseType::NoLetters);
    }

    #[test]
    fn detect_patterns() {
        assert_eq!(detect_case("hello"), CaseType::AllLower);
        assert_eq!(detect_case("Hello"), CaseType::FirstUpper);
        assert_eq!(detect_case("HELLO"), CaseType::AllUpper);
        assert_eq!(detect_case("McDonald"), CaseType::Complex);
    }

    #[test]
    fn detect_accented() {
        assert_eq!(detect_case("\u{00C9}cole"), CaseType::FirstUpper); // École
        assert_eq!(detect_case("caf\u{00E9}"), CaseType::AllLower); // café
    }

    #[test]
    fn apply_first_upper() {
        assert_eq!(apply_case("hello", CaseType::FirstUpper), "Hello");
        assert_eq!(apply_case("HELLO", CaseType::FirstUpper), "Hello");
    }

    #[test]
    fn apply_complex_is_noop() {
        assert_eq!(apply_case("hello", CaseType::Complex), "hello");
    }

    #[test]
    fn restore_from_query() {
        assert_eq!(restore_case("Helo", "hello"), "Hello");
        assert_eq!(restore_case("HELO", "hello"), "HELLO");
        assert_eq!(restore_case("helo", "hello"), "hello");
        assert_eq!(restore_case("hELo", "hello"), "hello");
    }

    #[test]
    fn apply_empty() {
        assert_eq!(apply_case("", CaseType::FirstUpper), "");
    }
}
