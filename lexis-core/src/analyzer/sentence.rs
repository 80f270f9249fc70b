//! Punctuation-based sentence splitting.
//!
//! A sentence ends at `.`, `!` or `?` when the next character is whitespace.
//! The terminator stays with the sentence and the whitespace run is
//! consumed. Text after the last terminator is emitted as a final sentence.
//!
//! This is a coarse approximation. Abbreviations ("e.g. this") and similar
//! constructs split early; paragraph grouping only needs locality.

use memchr::memchr3_iter;

/// One sentence: a trimmed, borrowed slice of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    text: &'a str,
    ordinal: usize,
}

impl<'a> Sentence<'a> {
    /// Original text, casing and punctuation intact.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Position of this sentence in document order, starting at 0.
    #[inline]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl AsRef<str> for Sentence<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

/// Iterator over the sentences of a text.
///
/// ```
/// use lexis_core::analyzer::SentenceSplitter;
///
/// let parts: Vec<_> = SentenceSplitter::new("Hi there! How are you? Fine")
///     .map(|s| s.as_str())
///     .collect();
/// assert_eq!(parts, ["Hi there!", "How are you?", "Fine"]);
/// ```
#[derive(Debug, Clone)]
pub struct SentenceSplitter<'a> {
    text: &'a str,
    /// Byte offset where the next sentence starts.
    start: usize,
    /// Byte offset from which to look for the next terminator.
    cursor: usize,
    ordinal: usize,
}

impl<'a> SentenceSplitter<'a> {
    /// Creates a splitter over `text`.
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            start: 0,
            cursor: 0,
            ordinal: 0,
        }
    }

    /// Byte offset of the next boundary at or after `cursor` and the offset
    /// where the sentence after it begins.
    fn next_boundary(&self) -> Option<(usize, usize)> {
        let bytes = self.text.as_bytes();
        let base = self.cursor;

        for pos in memchr3_iter(b'.', b'!', b'?', &bytes[base..]) {
            let end = base + pos + 1;
            let rest = &self.text[end..];
            let ws_len: usize = rest
                .chars()
                .take_while(|c| c.is_whitespace())
                .map(char::len_utf8)
                .sum();
            if ws_len > 0 {
                return Some((end, end + ws_len));
            }
        }

        None
    }

    fn emit(&mut self, raw: &'a str) -> Option<Sentence<'a>> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let sentence = Sentence {
            text,
            ordinal: self.ordinal,
        };
        self.ordinal += 1;
        Some(sentence)
    }
}

impl<'a> Iterator for SentenceSplitter<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.start < self.text.len() {
            match self.next_boundary() {
                Some((end, next_start)) => {
                    let raw = &self.text[self.start..end];
                    self.start = next_start;
                    self.cursor = next_start;
                    if let Some(sentence) = self.emit(raw) {
                        return Some(sentence);
                    }
                }
                None => {
                    let raw = &self.text[self.start..];
                    self.start = self.text.len();
                    return self.emit(raw);
                }
            }
        }
        None
    }
}

impl core::iter::FusedIterator for SentenceSplitter<'_> {}

/// Splits `text` into sentences in document order.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    SentenceSplitter::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        split_sentences(text).iter().map(Sentence::as_str).collect()
    }

    #[test]
    fn four_sentences() {
        assert_eq!(
            split("Revenue grew. The weather was nice. Profit and revenue rose sharply. No keyword here."),
            [
                "Revenue grew.",
                "The weather was nice.",
                "Profit and revenue rose sharply.",
                "No keyword here."
            ]
        );
    }

    #[test]
    fn all_terminators() {
        assert_eq!(split("One! Two? Three."), ["One!", "Two?", "Three."]);
    }

    #[test]
    fn trailing_fragment_kept() {
        assert_eq!(split("Done. And then"), ["Done.", "And then"]);
    }

    #[test]
    fn no_whitespace_no_split() {
        assert_eq!(split("Pi is 3.14 today.Really"), ["Pi is 3.14 today.Really"]);
    }

    #[test]
    fn abbreviations_split_early() {
        assert_eq!(split("See e.g. this case."), ["See e.g.", "this case."]);
    }

    #[test]
    fn whitespace_runs_consumed() {
        assert_eq!(split("First.\n\n\t  Second."), ["First.", "Second."]);
    }

    #[test]
    fn unicode_whitespace_splits() {
        assert_eq!(split("First.\u{00A0}Second."), ["First.", "Second."]);
    }

    #[test]
    fn ellipsis_splits_once() {
        assert_eq!(split("Wait... really? Yes"), ["Wait...", "really?", "Yes"]);
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert!(split("").is_empty());
        assert!(split("   \n ").is_empty());
    }

    #[test]
    fn leading_whitespace_trimmed() {
        assert_eq!(split("   Hello there.  "), ["Hello there."]);
    }

    #[test]
    fn ordinals_are_sequential() {
        let sentences = split_sentences("A. B. C.");
        let ordinals: Vec<_> = sentences.iter().map(Sentence::ordinal).collect();
        assert_eq!(ordinals, [0, 1, 2]);
    }

    #[test]
    fn multibyte_text_around_terminators() {
        assert_eq!(split("Café ouvert. Très bien!"), ["Café ouvert.", "Très bien!"]);
    }

    #[test]
    fn slices_borrow_source() {
        let text = String::from("Alpha. Beta.");
        let base = text.as_ptr() as usize;
        for sentence in split_sentences(&text) {
            let ptr = sentence.as_str().as_ptr() as usize;
            assert!(ptr >= base && ptr < base + text.len());
        }
    }
}
