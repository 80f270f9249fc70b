use core::fmt;

use lexis_types::DEFAULT_MIN_TOKEN_LEN;

use super::stopwords::StopwordSet;

/// Configuration options for token normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Letter runs shorter than this are dropped.
    pub min_token_len: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

/// Turns raw document text into a flat sequence of analyzable tokens.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Splits on anything that is not an ASCII letter `a`-`z`, which drops
///   digits, punctuation and non-Latin script in the same pass
/// - Drops letter runs shorter than the configured minimum
/// - Drops stopwords (exact match on the lowercased token)
///
/// Output order is left-to-right and duplicates are kept.
///
/// # Examples
///
/// ```
/// use lexis_core::analyzer::{NormalizerConfig, StopwordSet, TextNormalizer};
///
/// let normalizer = TextNormalizer::new(NormalizerConfig::default(), StopwordSet::english());
/// let tokens = normalizer.normalize("The Cat sat on 2 mats, and the cat slept.");
/// assert_eq!(tokens.as_slice(), ["cat", "sat", "mats", "cat", "slept"]);
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    config: NormalizerConfig,
    stopwords: StopwordSet,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default(), StopwordSet::english())
    }
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration and stopwords.
    pub fn new(config: NormalizerConfig, stopwords: StopwordSet) -> Self {
        Self { config, stopwords }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// The active stopword set.
    #[inline]
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Lowercases text into an existing String buffer.
    ///
    /// ASCII runs are copied and lowered in bulk; other characters go through
    /// full Unicode lowercasing, which may change their byte length.
    /// Clears the buffer before writing.
    pub fn lowercase_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii() {
                i += 1;
            }

            if start < i {
                let from = out.len();
                out.push_str(&input[start..i]);
                out[from..].make_ascii_lowercase();
            }

            // `i` sits on a char boundary: it follows an ASCII byte or a whole char.
            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            out.extend(ch.to_lowercase());
            i += ch.len_utf8();
        }
    }

    /// Scans lowercased text and emits qualifying tokens left to right.
    ///
    /// Tokens are slices of `lowered`. The scan treats every byte outside
    /// `a`-`z` as a boundary, so it is only meaningful on output of
    /// [`lowercase_into`](Self::lowercase_into).
    #[inline]
    pub fn tokenize<'n, F>(&self, lowered: &'n str, mut emit: F)
    where
        F: FnMut(&'n str),
    {
        let bytes = lowered.as_bytes();
        let min_len = self.config.min_token_len;
        let mut i = 0usize;

        while i < bytes.len() {
            if !bytes[i].is_ascii_lowercase() {
                i += 1;
                continue;
            }

            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_lowercase() {
                i += 1;
            }

            // Both ends are ASCII, so the slice is on char boundaries.
            let token = &lowered[start..i];
            if token.len() >= min_len && !self.stopwords.contains(token) {
                emit(token);
            }
        }
    }

    /// Normalizes text, reusing `buf` for the lowercased intermediate.
    pub fn normalize_with(&self, input: &str, buf: &mut String) -> TokenSequence {
        self.lowercase_into(input, buf);

        let mut tokens = Vec::new();
        self.tokenize(buf.as_str(), |token| tokens.push(token.to_owned()));
        TokenSequence { tokens }
    }

    /// Normalizes text and returns the token sequence.
    #[inline]
    pub fn normalize(&self, input: &str) -> TokenSequence {
        let mut buf = String::with_capacity(input.len());
        self.normalize_with(input, &mut buf)
    }
}

/// Ordered, non-deduplicated tokens produced by one normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    /// Number of tokens, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if normalization produced nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in document order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens joined with single spaces.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TextNormalizer {
        TextNormalizer::new(NormalizerConfig::default(), StopwordSet::empty())
    }

    fn tokens(input: &str) -> Vec<String> {
        plain().normalize(input).as_slice().to_vec()
    }

    fn lower(input: &str) -> String {
        let mut out = String::new();
        plain().lowercase_into(input, &mut out);
        out
    }

    #[test]
    fn ascii_lowercase() {
        assert_eq!(lower("HELLO"), "hello");
        assert_eq!(lower("HeLlO 123 ABC!"), "hello 123 abc!");
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(lower("ÜBER Café"), "über café");
        assert_eq!(lower("ПРИВЕТ"), "привет");
    }

    #[test]
    fn expanding_lowercase_stays_valid() {
        // U+0130 lowercases to two chars
        let out = lower("İstanbul");
        assert!(out.starts_with('i'));
        assert!(out.ends_with("stanbul"));
    }

    #[test]
    fn lowercase_into_reuses_buffer() {
        let n = plain();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        n.lowercase_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        n.lowercase_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn unfiltered_word_stream() {
        assert_eq!(
            tokens("cat cat dog bird dog cat"),
            ["cat", "cat", "dog", "bird", "dog", "cat"]
        );
    }

    #[test]
    fn digits_and_punctuation_only() {
        assert!(tokens("12345 !!! ???").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn short_runs_dropped() {
        assert_eq!(tokens("a an ant ants"), ["ant", "ants"]);
    }

    #[test]
    fn digits_split_letter_runs() {
        assert_eq!(tokens("abc1def x9yz"), ["abc", "def"]);
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(tokens("well-known e-mail don't"), ["well", "known", "mail", "don"]);
    }

    #[test]
    fn non_ascii_letters_break_runs() {
        assert_eq!(tokens("café naïve"), ["caf"]);
        assert!(tokens("привет мир").is_empty());
    }

    #[test]
    fn kelvin_sign_lowercases_to_ascii() {
        // U+212A lowercases to ASCII 'k'
        assert_eq!(tokens("\u{212A}ILN"), ["kiln"]);
    }

    #[test]
    fn extraction_artifacts() {
        assert_eq!(
            tokens("Revenuegrew\u{FB01}nally\tPROFIT\n\nrose"),
            ["revenuegrew", "nally", "profit", "rose"]
        );
    }

    #[test]
    fn stopwords_removed_regardless_of_case() {
        let n = TextNormalizer::default();
        let out = n.normalize("THE Market and The market, THAN more");
        assert_eq!(out.as_slice(), ["market", "market"]);
    }

    #[test]
    fn custom_min_length() {
        let n = TextNormalizer::new(NormalizerConfig { min_token_len: 5 }, StopwordSet::empty());
        assert_eq!(n.normalize("tiny small larger").as_slice(), ["small", "larger"]);
    }

    #[test]
    fn tokens_are_slices_of_lowered() {
        let n = plain();
        let mut lowered = String::new();
        n.lowercase_into("Hello World", &mut lowered);

        let base = lowered.as_ptr() as usize;
        let end = base + lowered.len();
        n.tokenize(&lowered, |token| {
            let ptr = token.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn normalize_is_idempotent() {
        let n = TextNormalizer::default();
        let input = "Profit and revenue rose sharply. Revenue grew!";
        assert_eq!(n.normalize(input), n.normalize(input));
    }

    #[test]
    fn normalize_with_reuses_buffer() {
        let n = plain();
        let mut buf = String::new();
        let first = n.normalize_with("ONE two THREE", &mut buf);
        let second = n.normalize_with("four FIVE", &mut buf);
        assert_eq!(first.as_slice(), ["one", "two", "three"]);
        assert_eq!(second.as_slice(), ["four", "five"]);
    }

    #[test]
    fn sequence_join_and_display() {
        let seq: TokenSequence = ["cat", "dog", "cat"].into_iter().collect();
        assert_eq!(seq.joined(), "cat dog cat");
        assert_eq!(seq.to_string(), "cat dog cat");
        assert_eq!(seq.len(), 3);
        assert_eq!(TokenSequence::default().joined(), "");
    }
}
