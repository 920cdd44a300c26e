//! The dictionary trie.
//!
//! This module contains the `Dictionary` type, which owns the node arena and
//! provides insertion and membership queries.

use once_cell::sync::OnceCell;

use crate::alphabet::{folded_letter_index, letter_index};
use crate::frozen::FrozenDictionary;
use crate::node::{NodeId, TrieNode};
use crate::{Error, InitializationError, Result};

/// Slot of the root node in the arena.
const ROOT: usize = 0;

/// A set of lowercase words stored as a prefix tree.
///
/// Nodes are created on demand by [`insert`](Dictionary::insert) and are never
/// removed individually. Dropping the dictionary (or calling
/// [`teardown`](Dictionary::teardown)) releases the whole tree at once.
#[derive(Debug)]
pub struct Dictionary {
    /// Node arena; slot 0 is the root
    nodes: Vec<TrieNode>,

    /// The number of successful `insert` calls, duplicates included
    size: usize,

    /// Cached number of distinct words, cleared by every insert
    distinct_words: OnceCell<usize>,
}

impl Dictionary {
    /// Creates a new, empty dictionary.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_speller::Dictionary;
    ///
    /// let dictionary = Dictionary::new();
    /// assert!(dictionary.is_empty());
    /// assert_eq!(dictionary.node_count(), 1);
    /// ```
    pub fn new() -> Self {
        Dictionary {
            nodes: vec![TrieNode::new()],
            size: 0,
            distinct_words: OnceCell::new(),
        }
    }

    /// Creates an empty dictionary with room for `nodes` trie nodes, root
    /// included.
    pub fn with_capacity(nodes: usize) -> Result<Self> {
        let mut arena = Vec::new();
        arena
            .try_reserve(nodes.max(1))
            .map_err(|_| InitializationError::AllocationFailed)?;
        arena.push(TrieNode::new());

        Ok(Dictionary {
            nodes: arena,
            size: 0,
            distinct_words: OnceCell::new(),
        })
    }

    /// Builds a dictionary by inserting every word in order.
    ///
    /// Stops at the first word that fails to insert.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word.as_ref())?;
        }
        Ok(dictionary)
    }

    /// Returns the number of `insert` calls that succeeded, counting
    /// duplicates each time.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_speller::Dictionary;
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.insert("cat")?;
    /// dictionary.insert("cat")?;
    /// assert_eq!(dictionary.size(), 2);
    /// # Ok::<(), trie_speller::Error>(())
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of different words stored, ignoring repeated insertions.
    ///
    /// Computed by walking the arena the first time it is asked for and cached
    /// until the next insert.
    pub fn distinct_words(&self) -> usize {
        *self
            .distinct_words
            .get_or_init(|| self.nodes.iter().filter(|node| node.is_word).count())
    }

    /// Inserts `word`, creating any missing nodes along its path.
    ///
    /// Only `a`..=`z` is accepted. On an out-of-alphabet character nothing is
    /// modified and [`Error::InvalidCharacter`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_speller::{Dictionary, Error};
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.insert("hello")?;
    /// assert!(dictionary.contains("hello"));
    ///
    /// let err = dictionary.insert("héllo").unwrap_err();
    /// assert!(matches!(err, Error::InvalidCharacter { character: 'é', position: 1, .. }));
    /// # Ok::<(), trie_speller::Error>(())
    /// ```
    pub fn insert(&mut self, word: &str) -> Result<()> {
        // Validate up front so a bad word never leaves a half-built path
        let path = word
            .chars()
            .enumerate()
            .map(|(position, character)| {
                letter_index(character).ok_or_else(|| Error::InvalidCharacter {
                    word: word.to_string(),
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        let mut current = ROOT;
        for idx in path {
            current = match self.nodes[current].child(idx) {
                Some(child) => child.slot(),
                None => {
                    let child = self.push_node()?;
                    self.nodes[current].children[idx] = Some(child);
                    child.slot()
                }
            };
        }

        self.nodes[current].is_word = true;
        self.size += 1;
        self.distinct_words.take();
        Ok(())
    }

    // Appends a fresh node to the arena, failing instead of aborting on OOM
    fn push_node(&mut self) -> Result<NodeId> {
        let slot = self.nodes.len();
        let id = NodeId::from_slot(slot).ok_or(InitializationError::AllocationFailed)?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| InitializationError::AllocationFailed)?;
        self.nodes.push(TrieNode::new());
        Ok(id)
    }

    /// Returns `true` if `word` was inserted.
    ///
    /// ASCII case is folded before lookup. Characters that are not letters
    /// after folding can never be stored, so they simply make the result
    /// `false`. The empty string is found only if it was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_speller::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "cats", "car"])?;
    ///
    /// assert!(dictionary.contains("CATS"));
    /// assert!(!dictionary.contains("ca"));
    /// assert!(!dictionary.contains(""));
    /// assert!(!dictionary.contains("c@t"));
    /// # Ok::<(), trie_speller::Error>(())
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).map_or(false, |node| node.is_word)
    }

    /// Returns `true` if some stored word starts with `prefix` (case folded).
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    // Walks the path for `word`, never creating nodes
    fn find_node(&self, word: &str) -> Option<&TrieNode> {
        let mut current = &self.nodes[ROOT];
        for c in word.chars() {
            let child = current.child(folded_letter_index(c)?)?;
            current = &self.nodes[child.slot()];
        }
        Some(current)
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    /// Returns the node stored under `id`.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.slot())
    }

    /// Collects every stored word in alphabetical order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.distinct_words());
        let mut stack = vec![(ROOT, String::new())];

        while let Some((slot, prefix)) = stack.pop() {
            let node = &self.nodes[slot];
            if node.is_word {
                words.push(prefix.clone());
            }
            // Push in reverse so 'a' is popped first
            let edges: Vec<_> = node.edges().collect();
            for (letter, child) in edges.into_iter().rev() {
                let mut next = prefix.clone();
                next.push(letter);
                stack.push((child.slot(), next));
            }
        }

        words
    }

    /// Releases the whole tree in one operation and reports how many nodes
    /// were freed.
    ///
    /// Consuming `self` rules out a second teardown.
    pub fn teardown(self) -> usize {
        let released = self.nodes.len();
        drop(self);
        released
    }

    /// Converts the dictionary into an immutable, shareable form.
    pub fn freeze(self) -> FrozenDictionary {
        FrozenDictionary::new(self)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
