//! Defines the membership trait the suggestion engine is generic over.
use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::frozen::FrozenDictionary;

/// Anything that can answer "is this a word?".
///
/// Implementations must not fail: a word that can't be represented is simply
/// not a member.
pub trait Lexicon {
    /// Returns `true` if `word` is a known word.
    fn contains(&self, word: &str) -> bool;
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        Dictionary::contains(self, word)
    }
}

impl Lexicon for FrozenDictionary {
    fn contains(&self, word: &str) -> bool {
        FrozenDictionary::contains(self, word)
    }
}

/// Exact-match set of words. Useful as a reference lexicon in tests.
impl Lexicon for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}
