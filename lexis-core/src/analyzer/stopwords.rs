//! Stopword sets.
//!
//! A stopword set is plain data handed to the normalizer. The embedded
//! English list covers the common case; [`StopwordSet::parse`] accepts an
//! externally loaded list.

use rustc_hash::FxHashSet;

const ENGLISH: [&str; 50] = [
    "the", "and", "is", "in", "it", "to", "of", "a", "for", "on", "with", "as", "by", "that",
    "this", "be", "have", "are", "from", "was", "will", "can", "would", "at", "or", "an", "they",
    "we", "he", "she", "you", "their", "his", "her", "its", "i", "my", "your", "but", "so", "if",
    "then", "about", "up", "out", "only", "no", "yes", "than", "more",
];

/// Set of lowercase words excluded from frequency analysis.
///
/// Lookups are exact: the normalizer only ever asks about tokens that are
/// already lowercase, so entries are lowercased once on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<Box<str>>,
}

impl StopwordSet {
    /// Creates an empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The embedded English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH)
    }

    /// Builds a set from arbitrary words. Entries are trimmed and lowercased;
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// Parses a newline-separated list.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    ///
    /// ```
    /// use lexis_core::analyzer::StopwordSet;
    ///
    /// let set = StopwordSet::parse("# common\nThe\n\n  and \n");
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("the"));
    /// ```
    pub fn parse(list: &str) -> Self {
        Self::from_words(
            list.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Adds words to the set.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase().into_boxed_str());
            }
        }
    }

    /// Returns true if `token` is a stopword. `token` must already be lowercase.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stopwords.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set filters nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_is_complete() {
        let set = StopwordSet::english();
        assert_eq!(set.len(), ENGLISH.len());
        for word in ["the", "and", "than", "more", "i", "a"] {
            assert!(set.contains(word), "missing {word}");
        }
        assert!(!set.contains("revenue"));
    }

    #[test]
    fn entries_are_lowercased() {
        let set = StopwordSet::from_words(["THE", "  Profit "]);
        assert!(set.contains("the"));
        assert!(set.contains("profit"));
        assert!(!set.contains("THE"));
    }

    #[test]
    fn blank_entries_skipped() {
        let set = StopwordSet::from_words(["", "   ", "and"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn parse_skips_comments() {
        let set = StopwordSet::parse("# header\nfoo\n#bar\n\nbaz\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("foo"));
        assert!(set.contains("baz"));
        assert!(!set.contains("#bar"));
    }

    #[test]
    fn extend_deduplicates() {
        let mut set = StopwordSet::from_words(["foo"]);
        set.extend(["FOO", "bar"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_set() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }
}
