//! Single-edit spelling suggestions.
//!
//! Candidates are produced in three passes over the word: every deletion,
//! then every insertion, then every substitution. Each pass walks positions
//! in ascending order and, where a letter is involved, tries `a` through `z`.
//! Every candidate the lexicon accepts is reported, so the same word can come
//! back more than once when two different edits produce it.

use std::fmt;

use tracing::debug;

use crate::alphabet::{letters, ALPHABET_SIZE};
use crate::lexicon::Lexicon;

/// One single-character edit applied to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Remove the character at `position`. At one past the end this leaves
    /// the word unchanged.
    Deletion { position: usize },
    /// Insert `letter` before the character at `position`
    Insertion { position: usize, letter: char },
    /// Replace the character at `position` with `letter`
    Substitution { position: usize, letter: char },
}

impl Edit {
    /// Applies the edit to a word given as characters.
    ///
    /// Positions past the valid range for the edit leave the word unchanged.
    pub fn apply(&self, word: &[char]) -> String {
        let len = word.len();
        let mut out = String::with_capacity(len + 1);

        match *self {
            Edit::Deletion { position } => {
                out.extend(&word[..position.min(len)]);
                out.extend(word.get(position.saturating_add(1)..).unwrap_or(&[]));
            }
            Edit::Insertion { position, letter } => {
                let position = position.min(len);
                out.extend(&word[..position]);
                out.push(letter);
                out.extend(&word[position..]);
            }
            Edit::Substitution { position, letter } => {
                if position >= len {
                    out.extend(word);
                } else {
                    out.extend(&word[..position]);
                    out.push(letter);
                    out.extend(&word[position + 1..]);
                }
            }
        }

        out
    }

    /// The position the edit applies to.
    pub fn position(&self) -> usize {
        match *self {
            Edit::Deletion { position }
            | Edit::Insertion { position, .. }
            | Edit::Substitution { position, .. } => position,
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Deletion { position } => write!(f, "delete at {}", position),
            Edit::Insertion { position, letter } => {
                write!(f, "insert '{}' at {}", letter, position)
            }
            Edit::Substitution { position, letter } => {
                write!(f, "substitute '{}' at {}", letter, position)
            }
        }
    }
}

/// A dictionary word reached from the query by one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The candidate as generated; characters the edit didn't touch keep the
    /// query's case
    pub word: String,
    /// How the candidate was produced
    pub edit: Edit,
}

/// Every edit examined for a word of `len` characters, in emission order.
pub fn edits(len: usize) -> impl Iterator<Item = Edit> {
    let deletions = (0..=len).map(|position| Edit::Deletion { position });
    let insertions = (0..=len).flat_map(|position| {
        letters().map(move |letter| Edit::Insertion { position, letter })
    });
    let substitutions = (0..len).flat_map(|position| {
        letters().map(move |letter| Edit::Substitution { position, letter })
    });

    deletions.chain(insertions).chain(substitutions)
}

/// Every candidate string for `word` along with the edit that produced it.
///
/// Nothing is filtered or deduplicated.
pub fn candidates(word: &str) -> impl Iterator<Item = (Edit, String)> {
    let chars: Vec<char> = word.chars().collect();
    edits(chars.len()).map(move |edit| {
        let candidate = edit.apply(&chars);
        (edit, candidate)
    })
}

/// Number of candidates examined for a word of `len` characters:
/// `(n + 1) + 26(n + 1) + 26n`.
pub fn candidate_count(len: usize) -> usize {
    (len + 1) + ALPHABET_SIZE * (len + 1) + ALPHABET_SIZE * len
}

/// Proposes corrections for a word by checking all of its single-edit
/// neighbours against a lexicon.
///
/// The engine holds nothing but the lexicon; callers are expected to check
/// [`Lexicon::contains`] first and only ask for suggestions when it fails.
///
/// # Examples
///
/// ```
/// use trie_speller::{Dictionary, SuggestionEngine};
///
/// let dictionary = Dictionary::from_words(["ab"])?;
/// let engine = SuggestionEngine::new(&dictionary);
///
/// assert_eq!(engine.suggest("b"), vec!["ab".to_string()]);
/// assert_eq!(engine.suggest("abc"), vec!["ab".to_string()]);
/// # Ok::<(), trie_speller::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SuggestionEngine<L> {
    lexicon: L,
}

impl<L: Lexicon> SuggestionEngine<L> {
    /// Creates an engine that validates candidates against `lexicon`.
    pub fn new(lexicon: L) -> Self {
        SuggestionEngine { lexicon }
    }

    /// Returns the lexicon candidates are checked against.
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Returns every accepted candidate in emission order, duplicates kept.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.suggest_with_edits(word)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Like [`suggest`](Self::suggest), but also reports which edit produced
    /// each word.
    pub fn suggest_with_edits(&self, word: &str) -> Vec<Suggestion> {
        let suggestions: Vec<Suggestion> = candidates(word)
            .filter(|(_, candidate)| self.lexicon.contains(candidate))
            .map(|(edit, word)| Suggestion { word, edit })
            .collect();

        debug!(
            word,
            examined = candidate_count(word.chars().count()),
            accepted = suggestions.len(),
            "generated suggestions"
        );

        suggestions
    }
}
