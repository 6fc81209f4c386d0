use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};
use crate::wordlist::trie::dump::{Dump, DumpFormat};
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::trie::Trie;
use crate::wordlist::trie::trienode::TrieNode;

/// A dictionary loaded from word list files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    trie: Trie,
}

/// How to pull words out of the lines of a word list file.
#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
pub struct FileFormat {
    /// Column separator. Without one the whole line is the word.
    #[builder(default)]
    delimiter: Option<char>,
    /// Zero-based column holding the word when lines are delimited.
    #[builder(default)]
    word_column: Option<usize>,
    /// Lines starting with this character are skipped.
    #[builder(default)]
    comment: Option<char>,
}

#[derive(new, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: usize,
}

enum Line<'a> {
    Word(&'a str),
    Ignored,
    Malformed,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Line<'a> {
        let line = line.trim();
        if line.is_empty() || self.comment.map_or(false, |c| line.starts_with(c)) {
            return Line::Ignored;
        }
        let word = match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column.unwrap_or(0))
                .map(str::trim),
        };
        match word {
            Some(word) if !word.is_empty() => Line::Word(word),
            _ => Line::Malformed,
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist> {
        let mut wordlist = Wordlist::new();
        wordlist.load_file(path, format)?;
        Ok(wordlist)
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<LoadStats> {
        let path = path.as_ref();
        info!(?path, "reading words");
        let file = File::open(path).map_err(|source| Error::Open { path: path.to_path_buf(), source })?;
        Ok(self.load_reader(BufReader::new(file), format))
    }

    /// Adds every word found in `reader`. Lines that cannot be read or hold
    /// no word are counted as skipped; loading never stops early.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> LoadStats {
        let start = Instant::now();
        let mut count: usize = 0;
        let mut failures: usize = 0;

        for (number, line) in reader.lines().enumerate() {
            match line.as_deref().map(|x| format.parse_line(x)) {
                Ok(Line::Word(word)) => {
                    self.trie.insert_word(word);
                    count += 1;
                }
                Ok(Line::Ignored) => {}
                Ok(Line::Malformed) => {
                    debug!(line = number + 1, "skipping line without a word");
                    failures += 1;
                }
                Err(e) => {
                    debug!(line = number + 1, error = %e, "skipping unreadable line");
                    failures += 1;
                }
            }
        }

        let elapsed = start.elapsed();
        info!(count, failures, seconds = elapsed.as_secs_f64(), "read words");
        LoadStats::new(count, failures)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn into_trie(self) -> Trie {
        self.trie
    }

    delegate! {
        to self.trie {
            pub fn insert_word(&mut self, word: &str) -> bool;
            pub fn remove_word(&mut self, word: &str) -> bool;
            pub fn is_valid_word(&self, word: &str) -> bool;
            pub fn is_valid_prefix(&self, prefix: &str, ignore_whole_word: bool) -> bool;
            pub fn words(&self) -> Vec<String>;
            pub fn iter(&self) -> Words<'_>;
            pub fn words_with_prefix(&self, prefix: &str) -> Vec<String>;
            pub fn export(&self) -> TrieNode;
            pub fn dump(&self, format: DumpFormat) -> Result<Dump>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn node_count(&self) -> usize;
        }
    }
}

impl From<Trie> for Wordlist {
    fn from(trie: Trie) -> Self {
        Wordlist { trie }
    }
}
