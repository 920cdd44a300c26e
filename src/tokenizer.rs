//! Splits free text into words for checking.

use tracing::debug;

use crate::alphabet::MAX_WORD_LENGTH;

/// A word found in the input, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word as it appears in the input (case untouched)
    pub text: &'a str,
    /// Byte offset of the word in the input
    pub offset: usize,
}

/// Iterator over the words of a text.
///
/// The input is cut into maximal runs of ASCII letters and digits; everything
/// else separates runs. A run is yielded as a word only if it is made of
/// letters alone and is at most [`MAX_WORD_LENGTH`] long. Runs that contain a
/// digit anywhere are dropped whole, so `abc1def` yields nothing.
///
/// # Examples
///
/// ```
/// use trie_speller::Tokenizer;
///
/// let words: Vec<&str> = Tokenizer::new("Helo, wrld! r2d2 ok").map(|t| t.text).collect();
/// assert_eq!(words, vec!["Helo", "wrld", "ok"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `text`.
    pub fn new(text: &'a str) -> Self {
        Tokenizer { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();

        while self.pos < bytes.len() {
            // Skip separators. Multi-byte UTF-8 sequences never contain ASCII
            // bytes, so stepping byte by byte stays on char boundaries here.
            if !bytes[self.pos].is_ascii_alphanumeric() {
                self.pos += 1;
                continue;
            }

            let start = self.pos;
            let mut has_digit = false;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphanumeric() {
                has_digit |= bytes[self.pos].is_ascii_digit();
                self.pos += 1;
            }

            let run = &self.text[start..self.pos];
            if has_digit {
                debug!(run, offset = start, "skipping run containing a digit");
                continue;
            }
            if run.len() > MAX_WORD_LENGTH {
                debug!(offset = start, len = run.len(), "skipping overlong word");
                continue;
            }

            return Some(Token {
                text: run,
                offset: start,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        Tokenizer::new(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            words("The quick brown fox."),
            vec!["The", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_trailing_word_without_separator() {
        assert_eq!(words("last"), vec!["last"]);
    }

    #[test]
    fn test_offsets() {
        let tokens: Vec<Token> = Tokenizer::new("  ab, cd").collect();
        assert_eq!(tokens[0], Token { text: "ab", offset: 2 });
        assert_eq!(tokens[1], Token { text: "cd", offset: 6 });
    }

    #[test]
    fn test_digit_discards_whole_run() {
        assert_eq!(words("abc1def ghi 42 x9 9x"), vec!["ghi"]);
    }

    #[test]
    fn test_punctuation_splits() {
        assert_eq!(words("don't stop-me"), vec!["don", "t", "stop", "me"]);
    }

    #[test]
    fn test_non_ascii_is_separator() {
        assert_eq!(words("café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_length_limit() {
        let longest = "a".repeat(MAX_WORD_LENGTH);
        let too_long = "b".repeat(MAX_WORD_LENGTH + 1);
        let text = format!("{} {} ok", longest, too_long);

        assert_eq!(words(&text), vec![longest.as_str(), "ok"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(words("").is_empty());
        assert!(words(" \t\n,.;").is_empty());
    }
}
