//! Levenshtein edit distance.
//!
//! The suggestion engine does not rank by distance and never calls into this
//! module. It is kept as a standalone utility for callers that want to
//! measure how far a suggestion is from the original word.

use std::cmp::min;

/// Minimum number of single-character insertions, deletions or substitutions
/// needed to turn `a` into `b`. Compares by `char`, case-sensitively.
///
/// # Examples
///
/// ```
/// use trie_speller::edit_distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("cta", "cat"), 2);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows of the DP table
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + min(prev[j], min(prev[j + 1], curr[j]))
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Returns `true` when `a` and `b` are at most one edit apart.
pub fn within_one_edit(a: &str, b: &str) -> bool {
    let (la, lb) = (a.chars().count(), b.chars().count());
    la.abs_diff(lb) <= 1 && levenshtein(a, b) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(levenshtein("hello", "hello"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_against_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(levenshtein("cat", "at"), 1);
        assert_eq!(levenshtein("at", "cat"), 1);
        assert_eq!(levenshtein("cat", "cot"), 1);
    }

    #[test]
    fn test_transposition_costs_two() {
        assert_eq!(levenshtein("ab", "ba"), 2);
        assert!(!within_one_edit("cta", "cat"));
    }

    #[test]
    fn test_multiple_edits() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn test_within_one_edit() {
        assert!(within_one_edit("cat", "cats"));
        assert!(within_one_edit("cat", "cat"));
        assert!(!within_one_edit("cat", "dogs"));
    }
}
