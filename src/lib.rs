//! # Trie Speller
//!
//! A dictionary trie with a single-edit spelling suggester.
//!
//! Words are stored in a 26-way prefix tree keyed by lowercase ASCII letters.
//! Misspelled words are corrected by generating every string one insertion,
//! deletion or substitution away and keeping those the dictionary knows.
//!
//! ## Features
//!
//! - **Arena trie**: all nodes live in one allocation and are released together
//! - **Case-insensitive lookup**: queries fold ASCII case before walking the tree
//! - **Exhaustive single-edit suggestions**: deterministic, unranked, duplicates kept
//! - **Frozen dictionaries**: share a finished dictionary across threads without locks
//!
//! ## Example
//!
//! ```rust
//! use trie_speller::{Dictionary, SuggestionEngine};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.insert("cat")?;
//! dictionary.insert("cats")?;
//!
//! assert!(dictionary.contains("Cat"));
//! assert!(!dictionary.contains("ca"));
//!
//! let engine = SuggestionEngine::new(&dictionary);
//! assert_eq!(engine.suggest("ct"), vec!["cat".to_string()]);
//! # Ok::<(), trie_speller::Error>(())
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod alphabet;
mod dictionary;
pub mod edit_distance;
mod frozen;
mod lexicon;
pub mod loader;
pub mod node;
pub mod report;
pub mod suggest;
mod tokenizer;

// Re-export public types
pub use crate::dictionary::Dictionary;
pub use crate::frozen::FrozenDictionary;
pub use crate::lexicon::Lexicon;
pub use crate::loader::{InvalidWordPolicy, LoadOptions};
pub use crate::suggest::{Edit, Suggestion, SuggestionEngine};
pub use crate::tokenizer::{Token, Tokenizer};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or loading a dictionary.
///
/// Lookups and suggestions never produce errors; a word that can't be found
/// is simply reported as absent.
#[derive(Error, Debug)]
pub enum Error {
    /// The word contains a character outside `a`..=`z`
    #[error("invalid character {character:?} at position {position} in {word:?}")]
    InvalidCharacter {
        word: String,
        character: char,
        position: usize,
    },

    /// The dictionary could not be brought into a usable state
    #[error("could not initialize dictionary: {0}")]
    Initialization(#[from] InitializationError),
}

/// Fatal conditions hit while building a dictionary. None of them leave a
/// dictionary behind that should be used.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Growing the node arena failed
    #[error("out of memory while allocating trie nodes")]
    AllocationFailed,

    /// The word source could not be opened or read
    #[error("could not read word source {}: {source}", .path.display())]
    WordSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already open word source failed
    #[error("could not read word source: {0}")]
    Read(#[source] io::Error),

    /// A word was rejected while loading with [`InvalidWordPolicy::Fail`]
    #[error("rejected word on line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns true for errors that mean no dictionary is available.
    pub fn is_initialization(&self) -> bool {
        matches!(self, Error::Initialization(_))
    }
}
