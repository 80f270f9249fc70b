//! Keyword filtering.
//!
//! Keywords are matched as case-insensitive substrings of whole sentences, so
//! `pay` matches `Payment`. Consecutive matching sentences are coalesced into
//! one [`MatchedParagraph`]; any non-matching sentence ends the run.

use core::fmt;

use lexis_types::MatchedParagraph;
use memchr::memmem::Finder;
use smallvec::SmallVec;

use super::sentence::Sentence;

/// One lowercase keyword with a prebuilt substring searcher.
#[derive(Clone)]
struct Keyword {
    text: Box<str>,
    finder: Finder<'static>,
}

impl Keyword {
    fn new(text: String) -> Self {
        let finder = Finder::new(text.as_bytes()).into_owned();
        Self {
            text: text.into_boxed_str(),
            finder,
        }
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.text, f)
    }
}

/// Set of lowercase, trimmed, non-empty keywords.
///
/// An empty set means keyword filtering is disabled.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: SmallVec<[Keyword; 4]>,
}

impl PartialEq for KeywordSet {
    fn eq(&self, other: &Self) -> bool {
        self.keywords.len() == other.keywords.len()
            && self
                .keywords
                .iter()
                .zip(&other.keywords)
                .all(|(a, b)| a.text == b.text)
    }
}

impl Eq for KeywordSet {}

impl KeywordSet {
    /// Creates an empty set (filtering disabled).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a comma-separated keyword list.
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped and
    /// duplicates keep their first position. Input with no usable entries
    /// yields an empty set.
    ///
    /// ```
    /// use lexis_core::analyzer::KeywordSet;
    ///
    /// let set = KeywordSet::parse(" Revenue, profit ,, REVENUE ");
    /// assert_eq!(set.iter().collect::<Vec<_>>(), ["revenue", "profit"]);
    /// assert!(KeywordSet::parse(" , , ").is_empty());
    /// ```
    pub fn parse(input: &str) -> Self {
        Self::from_keywords(input.split(','))
    }

    /// Builds a set from individual keywords, applying the same cleanup as
    /// [`parse`](Self::parse).
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for raw in keywords {
            let keyword = fold_case(raw.as_ref().trim());
            if keyword.is_empty() || set.iter().any(|k| k == keyword) {
                continue;
            }
            set.keywords.push(Keyword::new(keyword));
        }
        set
    }

    /// Number of keywords.
    #[inline]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if filtering is disabled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.keywords.iter().map(|k| &*k.text)
    }

    /// Returns true if any keyword occurs in `text`, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        let mut buf = String::with_capacity(text.len());
        self.matches_with(text, &mut buf)
    }

    /// Same as [`matches`](Self::matches), reusing `buf` for the lowercased text.
    fn matches_with(&self, text: &str, buf: &mut String) -> bool {
        if self.keywords.is_empty() {
            return false;
        }

        buf.clear();
        buf.extend(text.chars().flat_map(char::to_lowercase));
        let haystack = buf.as_bytes();
        self.keywords
            .iter()
            .any(|k| k.finder.find(haystack).is_some())
    }
}

/// Per-char lowercasing shared by keywords and haystacks.
///
/// `str::to_lowercase` maps a word-final `Σ` to `ς`, while the per-char
/// mapping always yields `σ`; both sides must fold the same way.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Coalesces runs of consecutive matching sentences into paragraphs.
///
/// Every returned paragraph is non-empty and maximal: the sentences just
/// before and after it (if any) do not match. No sentence matching returns
/// an empty vector, as does an empty keyword set.
pub fn group_paragraphs(sentences: &[Sentence<'_>], keywords: &KeywordSet) -> Vec<MatchedParagraph> {
    let mut paragraphs = Vec::new();
    if keywords.is_empty() {
        return paragraphs;
    }

    let mut buf = String::new();
    let mut acc = String::new();
    let mut first = 0usize;
    let mut count = 0usize;

    for (i, sentence) in sentences.iter().enumerate() {
        if keywords.matches_with(sentence.as_str(), &mut buf) {
            if count == 0 {
                first = i;
            } else {
                acc.push(' ');
            }
            acc.push_str(sentence.as_str().trim());
            count += 1;
        } else if count > 0 {
            paragraphs.push(MatchedParagraph {
                text: core::mem::take(&mut acc),
                first_sentence: first,
                sentence_count: count,
            });
            count = 0;
        }
    }

    if count > 0 {
        paragraphs.push(MatchedParagraph {
            text: acc,
            first_sentence: first,
            sentence_count: count,
        });
    }

    paragraphs
}

/// Concatenates paragraph text with single spaces.
pub fn matched_text(paragraphs: &[MatchedParagraph]) -> String {
    let len = paragraphs.iter().map(|p| p.text.len() + 1).sum();
    let mut out = String::with_capacity(len);
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&paragraph.text);
    }
    out
}
