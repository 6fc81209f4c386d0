use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Result;
use crate::wordlist::trie::trie::Trie;
use crate::wordlist::trie::trienode::TrieNode;

/// The shapes a trie can be dumped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    Json,
    PrettyJson,
    /// Deep copy of the node tree.
    #[default]
    Export,
    /// Every stored word, in order.
    Words,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dump {
    Json(String),
    Export(TrieNode),
    Words(Vec<String>),
}

impl Trie {
    pub fn dump(&self, format: DumpFormat) -> Result<Dump> {
        Ok(match format {
            DumpFormat::Json => Dump::Json(serde_json::to_string(self)?),
            DumpFormat::PrettyJson => Dump::Json(serde_json::to_string_pretty(self)?),
            DumpFormat::Export => Dump::Export(self.export()),
            DumpFormat::Words => Dump::Words(self.words()),
        })
    }
}

impl FromStr for DumpFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(DumpFormat::Json),
            "pretty-json" => Ok(DumpFormat::PrettyJson),
            "export" => Ok(DumpFormat::Export),
            "words" => Ok(DumpFormat::Words),
            other => Err(format!("unknown dump format {:?} (expected json, pretty-json, export or words)", other)),
        }
    }
}

impl Display for DumpFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DumpFormat::Json => "json",
            DumpFormat::PrettyJson => "pretty-json",
            DumpFormat::Export => "export",
            DumpFormat::Words => "words",
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::dump::{Dump, DumpFormat};
    use crate::wordlist::trie::trie::Trie;

    #[test]
    fn dumps_words() {
        let trie = Trie::from_words(["HELP", "hello"]);
        assert_eq!(trie.dump(DumpFormat::Words).unwrap(),
                   Dump::Words(vec!["hello".to_string(), "help".to_string()]));
    }

    #[test]
    fn json_dump_decodes_to_same_trie() {
        let trie = Trie::from_words(["good", "goodbye", "help"]);
        for format in [DumpFormat::Json, DumpFormat::PrettyJson] {
            let json = match trie.dump(format).unwrap() {
                Dump::Json(json) => json,
                other => panic!("expected json, got {:?}", other),
            };
            let decoded: Trie = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, trie);
        }
    }

    #[test]
    fn default_dump_is_export() {
        let trie = Trie::from_words(["a"]);
        assert_eq!(trie.dump(DumpFormat::default()).unwrap(), Dump::Export(trie.export()));
    }

    #[test]
    fn parses_format_names() {
        for format in [DumpFormat::Json, DumpFormat::PrettyJson, DumpFormat::Export, DumpFormat::Words] {
            assert_eq!(format.to_string().parse::<DumpFormat>(), Ok(format));
        }
        assert!("php".parse::<DumpFormat>().is_err());
    }
}
