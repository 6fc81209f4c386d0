pub mod trie;
pub mod trienode;
pub mod iterators;
pub mod dump;

pub use trie::Trie;
