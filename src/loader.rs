//! Builds a dictionary from a word list.
//!
//! A word list is any text where words are separated by whitespace; one word
//! per line is the usual layout. Words are inserted in the order they appear.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::dictionary::Dictionary;
use crate::{Error, InitializationError, Result};

/// What to do with a word that contains characters outside `a`..=`z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWordPolicy {
    /// Log and leave the word out
    Skip,
    /// Abort loading
    Fail,
}

impl Default for InvalidWordPolicy {
    fn default() -> Self {
        InvalidWordPolicy::Skip
    }
}

/// Options for loading a word list.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Handling of words the dictionary can't store
    pub invalid_words: InvalidWordPolicy,
}

impl LoadOptions {
    /// Options that reject the whole list on the first bad word.
    pub fn strict() -> Self {
        LoadOptions {
            invalid_words: InvalidWordPolicy::Fail,
        }
    }
}

/// Reads every whitespace-separated word from `reader` into a new dictionary.
///
/// # Examples
///
/// ```
/// use trie_speller::loader::load_words;
/// use trie_speller::LoadOptions;
///
/// let dictionary = load_words("apple\nbanana cherry\n".as_bytes(), &LoadOptions::default())?;
/// assert_eq!(dictionary.size(), 3);
/// assert!(dictionary.contains("banana"));
/// # Ok::<(), trie_speller::Error>(())
/// ```
pub fn load_words<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Dictionary> {
    let mut dictionary = Dictionary::new();
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(InitializationError::Read)?;
        let line_no = idx + 1;

        for word in line.split_whitespace() {
            match dictionary.insert(word) {
                Ok(()) => {}
                Err(err @ Error::InvalidCharacter { .. }) => match options.invalid_words {
                    InvalidWordPolicy::Skip => {
                        warn!(line = line_no, word, "skipping word: {}", err);
                        skipped += 1;
                    }
                    InvalidWordPolicy::Fail => {
                        return Err(InitializationError::InvalidWord {
                            line: line_no,
                            source: Box::new(err),
                        }
                        .into());
                    }
                },
                Err(err) => return Err(err),
            }
        }
    }

    info!(
        words = dictionary.size(),
        nodes = dictionary.node_count(),
        skipped,
        "loaded dictionary"
    );

    Ok(dictionary)
}

/// Opens the word list at `path` and loads it with [`load_words`].
///
/// Failing to open or read the file is reported as
/// [`InitializationError::WordSource`].
pub fn load_from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Dictionary> {
    let path = path.as_ref();
    let source_error = |source| InitializationError::WordSource {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(source_error)?;
    info!(path = %path.display(), "loading word list");

    load_words(BufReader::new(file), options).map_err(|err| match err {
        Error::Initialization(InitializationError::Read(source)) => source_error(source).into(),
        other => other,
    })
}
