//! The fixed 26-letter alphabet the dictionary is keyed by.

/// Number of distinct child slots per trie node.
pub const ALPHABET_SIZE: usize = 26;

/// Longest word the tokenizer will hand to the dictionary.
///
/// The trie and the suggestion engine accept longer input; this is the
/// practical ceiling for text coming through [`crate::Tokenizer`].
pub const MAX_WORD_LENGTH: usize = 45;

/// Iterates the alphabet in ascending order.
pub fn letters() -> impl Iterator<Item = char> + Clone {
    'a'..='z'
}

/// Maps a lowercase ASCII letter to its child slot.
///
/// Returns `None` for anything outside `a`..=`z`, including uppercase letters.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// Like [`letter_index`], but folds ASCII uppercase to lowercase first.
pub fn folded_letter_index(c: char) -> Option<usize> {
    letter_index(c.to_ascii_lowercase())
}

/// Inverse of [`letter_index`].
pub fn index_letter(idx: usize) -> Option<char> {
    if idx < ALPHABET_SIZE {
        Some((b'a' + idx as u8) as char)
    } else {
        None
    }
}
