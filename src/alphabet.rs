/// Folds a word to the form stored in the trie.
///
/// Each character is lowered on its own, with no context rules, so the folded
/// form of a prefix is always a prefix of the folded word. A single input
/// character may still fold to more than one (`'İ'` becomes `"i\u{307}"`).
pub fn normalize(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use crate::alphabet::normalize;

    #[test]
    fn folds_ascii() {
        assert_eq!(normalize("HeLLo"), "hello");
        assert_eq!(normalize("already"), "already");
    }

    #[test]
    fn folds_unicode() {
        assert_eq!(normalize("ÉCOLE"), "école");
        assert_eq!(normalize("ὈΔΥΣΣΕΎΣ"), "ὀδυσσεύσ");
        assert_eq!(normalize("İ").chars().count(), 2);
    }

    #[test]
    fn folds_prefix_like_whole_word() {
        let word = normalize("ΟΔΥΣΣΕΥΣ");
        assert!(word.starts_with(&normalize("ΟΔΥΣ")));
    }

    #[test]
    fn keeps_empty_empty() {
        assert!(normalize("").is_empty());
    }
}
