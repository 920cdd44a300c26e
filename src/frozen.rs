//! Read-only dictionary handle.
//!
//! `FrozenDictionary` wraps a finished `Dictionary` in an `Arc`. It has no
//! mutating methods, so clones can be handed to other threads and queried
//! concurrently without any locking.

use std::fmt;
use std::sync::Arc;

use crate::dictionary::Dictionary;

/// An immutable, cheaply clonable dictionary.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use trie_speller::Dictionary;
///
/// let frozen = Dictionary::from_words(["alpha", "beta"])?.freeze();
///
/// let handle = {
///     let frozen = frozen.clone();
///     thread::spawn(move || frozen.contains("beta"))
/// };
///
/// assert!(frozen.contains("alpha"));
/// assert!(handle.join().unwrap());
/// # Ok::<(), trie_speller::Error>(())
/// ```
#[derive(Clone)]
pub struct FrozenDictionary {
    inner: Arc<Dictionary>,
}

impl FrozenDictionary {
    pub(crate) fn new(dictionary: Dictionary) -> Self {
        FrozenDictionary {
            inner: Arc::new(dictionary),
        }
    }

    /// See [`Dictionary::contains`].
    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    /// See [`Dictionary::size`].
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// See [`Dictionary::node_count`].
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Read access to the underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.inner
    }

    /// Returns `true` if both handles share the same tree.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Recovers the mutable dictionary if this is the last handle.
    pub fn try_unfreeze(self) -> Result<Dictionary, Self> {
        Arc::try_unwrap(self.inner).map_err(|inner| FrozenDictionary { inner })
    }
}

impl fmt::Debug for FrozenDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrozenDictionary")
            .field("size", &self.size())
            .field("node_count", &self.node_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_frozen_is_send_sync() {
        assert_send_sync::<FrozenDictionary>();
    }

    #[test]
    fn test_clones_share_tree() {
        let frozen = Dictionary::from_words(["one", "two"]).unwrap().freeze();
        let copy = frozen.clone();

        assert!(frozen.ptr_eq(&copy));
        assert_eq!(copy.dictionary().words(), vec!["one", "two"]);
        assert!(std::ptr::eq(frozen.dictionary(), copy.dictionary()));
        assert_eq!(copy.size(), 2);
        assert!(copy.contains("two"));
    }

    #[test]
    fn test_concurrent_reads() {
        let frozen = Dictionary::from_words(["red", "green", "blue"])
            .unwrap()
            .freeze();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let frozen = frozen.clone();
                thread::spawn(move || {
                    (0..100).all(|_| frozen.contains("green") && !frozen.contains("gren"))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_try_unfreeze() {
        let frozen = Dictionary::from_words(["x"]).unwrap().freeze();
        let copy = frozen.clone();

        let frozen = frozen.try_unfreeze().unwrap_err();
        drop(copy);

        let mut dictionary = frozen.try_unfreeze().unwrap();
        dictionary.insert("y").unwrap();
        assert_eq!(dictionary.size(), 2);
    }
}
