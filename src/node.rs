//! Arena node implementation for the dictionary trie.
//!
//! Every node lives in a single `Vec` owned by the `Dictionary`; children are
//! referenced by index rather than by pointer. The root always sits at slot 0,
//! so no child id is ever zero and `Option<NodeId>` stays four bytes wide.

use std::num::NonZeroU32;

use crate::alphabet::{index_letter, ALPHABET_SIZE};

/// Index of a non-root node inside the dictionary arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Wraps an arena slot. Returns `None` for slot 0 (the root) or for slots
    /// that don't fit in 32 bits.
    pub(crate) fn from_slot(slot: usize) -> Option<Self> {
        u32::try_from(slot).ok().and_then(NonZeroU32::new).map(NodeId)
    }

    /// The arena slot this id refers to.
    pub fn slot(self) -> usize {
        self.0.get() as usize
    }
}

/// One prefix position in the trie.
///
/// A node says nothing about which letter leads to it; that is implied by the
/// slot it occupies in its parent's `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// True iff the path from the root to this node spells a complete word
    pub is_word: bool,

    /// Child nodes indexed by letter (`a` = 0 .. `z` = 25)
    pub children: [Option<NodeId>; ALPHABET_SIZE],
}

impl TrieNode {
    /// Creates a node with no children that does not terminate a word.
    pub fn new() -> Self {
        TrieNode {
            is_word: false,
            children: [None; ALPHABET_SIZE],
        }
    }

    /// Returns the child reached through letter slot `idx`, if any.
    pub fn child(&self, idx: usize) -> Option<NodeId> {
        self.children.get(idx).copied().flatten()
    }

    /// Returns whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Number of letters that continue this prefix
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates present children in alphabetical order along with their letter.
    pub fn edges(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(idx, child)| Some((index_letter(idx)?, (*child)?)))
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
