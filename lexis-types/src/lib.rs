//! Core types and configuration for the Lexis word-frequency pipeline.
//!
//! This crate holds the values that cross crate boundaries:
//!
//! - **Results**: ranked [`WordCount`] rows and [`MatchedParagraph`] units
//! - **Configuration**: [`AnalysisConfig`] and [`WordCloudParams`]
//! - **Errors**: the [`AnalysisError`] taxonomy every caller classifies on
//!
//! Nothing here touches I/O. The core crate produces these values and the
//! presentation layer consumes them.

#![warn(missing_docs)]

use core::fmt;
use thiserror::Error;

/// Minimum token length in characters.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Number of ranked rows shown in the frequency table.
pub const DEFAULT_TOP_N: usize = 20;

/// Number of rows drawn in the frequency chart.
pub const DEFAULT_CHART_N: usize = 10;

/// Extracted text must exceed this many characters (after trimming) before
/// it is worth analyzing. Shorter output usually means extraction failed.
pub const DEFAULT_CONTENT_THRESHOLD: usize = 100;

/// Characters of raw extracted text shown in a debug preview.
pub const RAW_PREVIEW_CHARS: usize = 1000;

/// One row of a frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    /// The normalized token.
    pub word: String,
    /// Number of occurrences.
    pub count: u32,
}

impl WordCount {
    /// Creates a new ranked row.
    #[inline]
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.count)
    }
}

/// A maximal run of consecutive keyword-matching sentences.
///
/// `first_sentence..first_sentence + sentence_count` is the half-open range
/// of sentence ordinals the paragraph covers. The sentences on either side
/// of that range (when they exist) never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedParagraph {
    /// Constituent sentences, trimmed and joined with single spaces.
    pub text: String,
    /// Ordinal of the first sentence in the run.
    pub first_sentence: usize,
    /// Number of sentences in the run (always at least one).
    pub sentence_count: usize,
}

impl MatchedParagraph {
    /// Ordinal one past the last sentence in the run.
    #[inline]
    pub const fn end_sentence(&self) -> usize {
        self.first_sentence + self.sentence_count
    }
}

impl fmt::Display for MatchedParagraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Analysis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Tokens shorter than this are discarded.
    /// Default: 3
    pub min_token_len: usize,
    /// Rows returned by the default ranking.
    /// Default: 20
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with an explicit token length and table size.
    pub const fn new(min_token_len: usize, top_n: usize) -> Self {
        Self {
            min_token_len,
            top_n,
        }
    }

    /// Configuration sized for a short chart rather than a full table.
    pub const fn chart() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            top_n: DEFAULT_CHART_N,
        }
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    /// Returns `AnalysisError::InvalidConfig` if `min_token_len` or `top_n` is zero.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.min_token_len == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "min_token_len must be at least 1",
            });
        }
        if self.top_n == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "top_n must be at least 1",
            });
        }
        Ok(())
    }
}

/// Rendering parameters handed to an external word-cloud renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCloudParams {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background color name or hex string.
    pub background: String,
    /// Maximum number of distinct words to draw.
    pub max_words: usize,
}

impl Default for WordCloudParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: String::from("white"),
            max_words: 200,
        }
    }
}

impl WordCloudParams {
    /// Checks that the canvas and word budget are non-zero.
    ///
    /// # Errors
    /// Returns `AnalysisError::InvalidConfig` on a zero dimension or word budget.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.width == 0 || self.height == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "word cloud canvas must have non-zero width and height",
            });
        }
        if self.max_words == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "word cloud max_words must be at least 1",
            });
        }
        Ok(())
    }
}

/// Everything an external renderer needs: one space-joined string plus
/// the canvas parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCloudRequest {
    /// Space-joined input text.
    pub text: String,
    /// Canvas parameters.
    pub params: WordCloudParams,
}

/// Classifiable outcomes that stop an analysis before it produces data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The document text is absent, empty or whitespace only.
    #[error("document is empty")]
    EmptyDocument,
    /// Extracted text is too short to be worth analyzing.
    #[error("extracted text too short: {length} characters (must exceed {threshold})")]
    ContentTooShort {
        /// Trimmed length in characters.
        length: usize,
        /// Length the text must exceed.
        threshold: usize,
    },
    /// Normalization left no tokens to count.
    #[error("nothing to analyze: no words of the minimum length remain after cleaning")]
    EmptyAfterNormalization,
    /// Keyword filtering was requested but no sentence matched.
    #[error("no sentences matched any of the {keywords} keyword(s)")]
    NoKeywordMatches {
        /// Number of keywords that were searched for.
        keywords: usize,
    },
    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

/// Gates extracted text on a minimum content length.
///
/// Returns the input unchanged when its trimmed length exceeds `threshold`
/// characters.
///
/// # Errors
/// Returns `AnalysisError::EmptyDocument` for blank text and
/// `AnalysisError::ContentTooShort` when the trimmed text is too short.
///
/// # Example
/// ```
/// use lexis_types::{ensure_content, AnalysisError};
///
/// assert!(ensure_content("long enough", 5).is_ok());
/// assert_eq!(
///     ensure_content("  tiny  ", 5),
///     Err(AnalysisError::ContentTooShort { length: 4, threshold: 5 })
/// );
/// ```
pub fn ensure_content(text: &str, threshold: usize) -> Result<&str, AnalysisError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptyDocument);
    }

    let length = trimmed.chars().count();
    if length <= threshold {
        return Err(AnalysisError::ContentTooShort { length, threshold });
    }

    Ok(text)
}
