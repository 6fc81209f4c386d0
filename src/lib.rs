//! A case-insensitive prefix tree for storing a dictionary of words and
//! answering membership, prefix and completion queries.
//!
//! ```
//! use trieage::Trie;
//!
//! let mut trie = Trie::from_words(["Apple", "apps"]);
//! assert!(trie.is_valid_word("APPLE"));
//! assert!(trie.is_valid_prefix("app", false));
//! assert!(trie.remove_word("apps"));
//! assert_eq!(trie.words(), vec!["apple"]);
//! ```

pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use crate::error::{Error, Result};
pub use crate::wordlist::trie::dump::{Dump, DumpFormat};
pub use crate::wordlist::trie::trie::Trie;
pub use crate::wordlist::trie::trienode::TrieNode;
pub use crate::wordlist::wordlist::{FileFormat, LoadStats, Wordlist};
