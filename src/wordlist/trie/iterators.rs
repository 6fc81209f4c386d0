use crate::wordlist::trie::trienode::TrieNode;

/// Depth-first walk over the words stored beneath a node, in character
/// order. Each word is yielded with the path that led to the starting node
/// prepended.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    stack: Vec<(String, &'a TrieNode)>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(prefix: String, node: &'a TrieNode) -> Words<'a> {
        Words { stack: vec![(prefix, node)] }
    }

    pub(crate) fn empty() -> Words<'a> {
        Words { stack: vec![] }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            // reversed so the smallest child is popped first
            for (c, child) in node.children().iter().rev() {
                let mut next = path.clone();
                next.push(*c);
                self.stack.push((next, child));
            }
            if node.is_word() {
                return Some(path);
            }
        }
        None
    }
}
