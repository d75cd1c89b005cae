// Levenshtein edit distance
//
// Unit-cost insertion, deletion and substitution over Unicode scalar values.
// Used both by the fuzzy index (candidate scoring) and by the mandatory
// post-filter that bounds suggestions to a maximum edit distance.

/// Compute the Levenshtein distance between two strings.
///
/// Operates on `char`s, so "café" and "cafe" are one substitution apart.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein_chars(&a_chars, &b_chars)
}

/// Levenshtein distance over pre-split character slices.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows are enough: the previous row and the one being filled.
    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Case-insensitive Levenshtein distance (both sides lower-cased first).
pub fn levenshtein_ignore_case(a: &str, b: &str) -> usize {
    levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Check whether `a` and `b` are within `max` edits of each other.
///
/// Rejects on length difference before running the full table.
pub fn within_distance(a: &str, b: &str, max: usize) -> bool {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len().abs_diff(b_chars.len()) > max {
        return false;
    }
    levenshtein_chars(&a_chars, &b_chars) <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abcd"), 4);
    }

    #[test]
    fn identical() {
        assert_eq!(levenshtein("hello", "hello"), 0);
    }

    #[test]
    fn single_operations() {
        assert_eq!(levenshtein("helo", "hello"), 1); // insertion
        assert_eq!(levenshtein("hello", "helo"), 1); // deletion
        assert_eq!(levenshtein("hallo", "hello"), 1); // substitution
    }

    #[test]
    fn transposition_costs_two() {
        assert_eq!(levenshtein("teh", "the"), 2);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("incorect", "correct"), 3);
        assert_eq!(levenshtein("incorect", "incorrect"), 1);
    }

    #[test]
    fn unicode_is_per_char() {
        assert_eq!(levenshtein("caf\u{00E9}", "cafe"), 1);
        assert_eq!(levenshtein("na\u{00EF}ve", "naive"), 1);
    }

    #[test]
    fn symmetric() {
        assert_eq!(levenshtein("spelling", "speling"), levenshtein("speling", "spelling"));
    }

    #[test]
    fn ignore_case() {
        assert_eq!(levenshtein("Hello", "hello"), 1);
        assert_eq!(levenshtein_ignore_case("Hello", "hello"), 0);
        assert_eq!(levenshtein_ignore_case("HELO", "hello"), 1);
    }

    #[test]
    fn within_distance_bounds() {
        assert!(within_distance("helo", "hello", 1));
        assert!(within_distance("speling", "spelling", 2));
        assert!(!within_distance("a", "abcd", 2));
        assert!(!within_distance("kitten", "sitting", 2));
    }
}
