use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

/// One level of the tree: the edges leaving it, keyed by character, and
/// whether the path from the root down to here spells a stored word.
///
/// Every node owns its children outright, so cloning a node deep-copies the
/// whole subtree beneath it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) children: BTreeMap<char, TrieNode>,
    #[serde(default)]
    pub(crate) is_word: bool,
}

impl TrieNode {
    pub fn new() -> TrieNode {
        Default::default()
    }

    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub fn set_word(&mut self, is_word: bool) {
        self.is_word = is_word;
    }

    pub fn children(&self) -> &BTreeMap<char, TrieNode> {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut BTreeMap<char, TrieNode> {
        &mut self.children
    }

    pub fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }

    /// A node that carries nothing: no word ends here and nothing hangs below.
    pub(crate) fn is_orphan(&self) -> bool {
        self.children.is_empty() && !self.is_word
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(TrieNode::new)
    }

    pub(crate) fn insert(&mut self, word: &str) {
        match word.chars().next() {
            None => self.is_word = true,
            Some(c) => self.get_or_create_child(c).insert(&word[c.len_utf8()..]),
        }
    }

    /// Unmarks `word` below this node and drops every node the removal left
    /// orphaned, deepest first. Returns whether `word` was stored.
    pub(crate) fn remove(&mut self, word: &[char]) -> bool {
        match word.split_first() {
            None => {
                let was_word = self.is_word;
                self.is_word = false;
                was_word
            }
            Some((c, rest)) => {
                let child = match self.children.get_mut(c) {
                    Some(child) => child,
                    None => return false,
                };
                let removed = child.remove(rest);
                if removed && child.is_orphan() {
                    self.children.remove(c);
                }
                removed
            }
        }
    }

    /// Whether any word ends in this subtree. With `ignore_whole_word` the
    /// node's own flag is skipped and only its descendants count.
    pub(crate) fn contains_words(&self, ignore_whole_word: bool) -> bool {
        if !ignore_whole_word && self.is_word {
            return true;
        }
        self.children.values().any(|child| child.contains_words(false))
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_word", &self.is_word)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::trienode::TrieNode;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn insert_builds_one_node_per_char() {
        let mut root = TrieNode::new();
        root.insert("abc");
        assert_eq!(root.node_count(), 4);
        let c = root.get_child('a')
            .and_then(|x| x.get_child('b'))
            .and_then(|x| x.get_child('c'))
            .unwrap();
        assert!(c.is_word());
        assert!(c.is_leaf());
        assert!(!root.is_word());
    }

    #[test]
    fn insert_handles_multibyte_chars() {
        let mut root = TrieNode::new();
        root.insert("día");
        assert!(root.get_child('d').unwrap().get_child('í').is_some());
    }

    #[test]
    fn remove_prunes_up_to_shared_node() {
        let mut root = TrieNode::new();
        root.insert("ban");
        root.insert("bans");
        root.insert("banana");
        assert_eq!(root.node_count(), 8);

        assert!(root.remove(&chars("bans")));
        assert_eq!(root.node_count(), 7);
        assert!(root.remove(&chars("ban")));
        assert_eq!(root.node_count(), 7);
        assert!(root.remove(&chars("banana")));
        assert_eq!(root.node_count(), 1);
        assert!(root.is_leaf());
    }

    #[test]
    fn remove_of_missing_word_changes_nothing() {
        let mut root = TrieNode::new();
        root.insert("banana");
        let before = root.clone();
        assert!(!root.remove(&chars("ban")));
        assert!(!root.remove(&chars("bandana")));
        assert_eq!(root, before);
    }

    #[test]
    fn contains_words_can_skip_own_flag() {
        let mut root = TrieNode::new();
        root.insert("app");
        let app = root.get_child('a')
            .and_then(|x| x.get_child('p'))
            .and_then(|x| x.get_child('p'))
            .unwrap();
        assert!(app.contains_words(false));
        assert!(!app.contains_words(true));

        root.insert("apple");
        let app = root.get_child('a')
            .and_then(|x| x.get_child('p'))
            .and_then(|x| x.get_child('p'))
            .unwrap();
        assert!(app.contains_words(true));
    }

    #[test]
    fn serializes_as_nested_maps() {
        let mut root = TrieNode::new();
        root.insert("ab");
        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json,
                   r#"{"children":{"a":{"children":{"b":{"is_word":true}},"is_word":false}},"is_word":false}"#);
        let back: TrieNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, root);
    }
}
