use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::alphabet::normalize;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::trienode::TrieNode;

/// A case-insensitive set of words stored as a prefix tree.
///
/// Words are folded with [`normalize`] on the way in, and every query folds
/// its input the same way. The empty string is never stored and never
/// matches.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: Default::default()
        }
    }

    pub fn from_words<I, S>(words: I) -> Trie
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut trie = Trie::new();
        trie.insert_words(words);
        trie
    }

    /// Inserts each word in turn, skipping empty ones. Returns how many were
    /// accepted.
    pub fn insert_words<I, S>(&mut self, words: I) -> usize
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        words.into_iter()
            .filter(|word| self.insert_word(word.as_ref()))
            .count()
    }

    /// Stores `word`. Returns `false`, leaving the trie untouched, if `word`
    /// is empty. Inserting a word that is already stored succeeds and changes
    /// nothing.
    pub fn insert_word(&mut self, word: &str) -> bool {
        if word.is_empty() {
            trace!("ignoring empty word");
            return false;
        }
        self.root.insert(&normalize(word));
        true
    }

    /// Removes each word in turn, skipping ones that are not stored. Returns
    /// how many were removed.
    pub fn remove_words<I, S>(&mut self, words: I) -> usize
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        words.into_iter()
            .filter(|word| self.remove_word(word.as_ref()))
            .count()
    }

    /// Removes `word` and prunes the branch it leaves behind. Nodes are
    /// dropped from the bottom up until one is reached that still has
    /// children or is itself a word; the root always stays.
    pub fn remove_word(&mut self, word: &str) -> bool {
        if !self.is_valid_word(word) {
            trace!(word, "not removing word that is not stored");
            return false;
        }
        let chars: Vec<char> = normalize(word).chars().collect();
        let removed = self.root.remove(&chars);
        debug!(word, "removed word");
        removed
    }

    pub fn is_valid_word(&self, word: &str) -> bool {
        self.get_node(word).map(|x| x.is_word()).unwrap_or(false)
    }

    /// Whether some stored word starts with `prefix`. With `ignore_whole_word`
    /// a word equal to `prefix` does not count, so the answer says whether
    /// `prefix` can be extended into a longer stored word.
    pub fn is_valid_prefix(&self, prefix: &str, ignore_whole_word: bool) -> bool {
        self.get_node(prefix)
            .map(|x| x.contains_words(ignore_whole_word))
            .unwrap_or(false)
    }

    /// Every stored word, in character order. Recomputed on each call.
    pub fn words(&self) -> Vec<String> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Words<'_> {
        Words::new(String::new(), &self.root)
    }

    /// Every stored word that starts with `prefix` (itself included), in
    /// character order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize(prefix);
        match self.get_node(&prefix) {
            Some(node) => Words::new(prefix, node).collect(),
            None => Words::empty().collect(),
        }
    }

    /// A deep copy of the node tree, sharing nothing with this trie.
    pub fn export(&self) -> TrieNode {
        self.root.clone()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        if word.is_empty() {
            return None;
        }
        normalize(word).chars()
            .try_fold(&self.root, |node, c| node.get_child(c))
    }
}

impl From<TrieNode> for Trie {
    /// Rebuilds a trie from the words found under `root`, folding case and
    /// dropping any branch that holds no word.
    fn from(root: TrieNode) -> Self {
        Trie::from_words(Words::new(String::new(), &root))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
        Trie::from_words(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item=S>>(&mut self, iter: I) {
        self.insert_words(iter);
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        TrieNode::deserialize(deserializer).map(Trie::from)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
