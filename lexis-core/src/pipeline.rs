//! The full analysis pipeline.
//!
//! ```text
//! raw text ─┬─ keywords empty ─────────────────────────────┬─> normalize ─> count
//!           └─ keywords set ─> split ─> group ─> join ─────┘
//! ```
//!
//! Every stage is a pure function of its input and the [`Analyzer`]'s
//! configuration. Identical inputs produce identical [`Analysis`] values, so
//! callers may memoize on (text, keywords, config) without further checks.

use core::fmt;

use lexis_types::{
    AnalysisConfig, AnalysisError, MatchedParagraph, WordCloudParams, WordCloudRequest, WordCount,
};
use tracing::debug;

use crate::analyzer::{
    group_paragraphs, matched_text, split_sentences, FrequencyTable, KeywordSet, NormalizerConfig,
    StopwordSet, TextNormalizer, TokenSequence,
};

/// Runs the normalize / filter / count pipeline with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    normalizer: TextNormalizer,
}

impl Analyzer {
    /// Creates an analyzer.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` if the configuration is unusable.
    pub fn new(config: AnalysisConfig, stopwords: StopwordSet) -> Result<Self, AnalysisError> {
        config.validate()?;
        let normalizer = TextNormalizer::new(
            NormalizerConfig {
                min_token_len: config.min_token_len,
            },
            stopwords,
        );
        Ok(Self { config, normalizer })
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> AnalysisConfig {
        self.config
    }

    /// The normalizer used for every run.
    #[inline]
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Analyzes one document.
    ///
    /// With an empty keyword set the whole text is normalized. Otherwise only
    /// the matched paragraphs are.
    ///
    /// # Errors
    ///
    /// - `EmptyDocument` if `raw` is blank
    /// - `NoKeywordMatches` if filtering found no matching sentence
    /// - `EmptyAfterNormalization` if no tokens survive normalization
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = raw.len(), keywords = keywords.len()))]
    pub fn analyze(&self, raw: &str, keywords: &KeywordSet) -> Result<Analysis, AnalysisError> {
        if raw.trim().is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }

        let (tokens, paragraphs, sentence_count) = if keywords.is_empty() {
            (self.normalizer.normalize(raw), None, None)
        } else {
            let sentences = split_sentences(raw);
            let paragraphs = group_paragraphs(&sentences, keywords);
            debug!(
                sentences = sentences.len(),
                paragraphs = paragraphs.len(),
                "keyword grouping done"
            );

            if paragraphs.is_empty() {
                return Err(AnalysisError::NoKeywordMatches {
                    keywords: keywords.len(),
                });
            }

            let tokens = self.normalizer.normalize(&matched_text(&paragraphs));
            (tokens, Some(paragraphs), Some(sentences.len()))
        };

        if tokens.is_empty() {
            return Err(AnalysisError::EmptyAfterNormalization);
        }

        let frequencies = FrequencyTable::from_tokens(&tokens);
        debug!(
            tokens = tokens.len(),
            distinct = frequencies.distinct(),
            "frequency table built"
        );

        Ok(Analysis {
            tokens,
            frequencies,
            paragraphs,
            sentence_count,
            top_n: self.config.top_n,
        })
    }
}

/// Result of one successful analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    tokens: TokenSequence,
    frequencies: FrequencyTable,
    paragraphs: Option<Vec<MatchedParagraph>>,
    sentence_count: Option<usize>,
    top_n: usize,
}

impl Analysis {
    /// Normalized tokens in document order.
    #[inline]
    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    /// Token counts.
    #[inline]
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Matched paragraphs, or `None` when keyword filtering was disabled.
    #[inline]
    pub fn paragraphs(&self) -> Option<&[MatchedParagraph]> {
        self.paragraphs.as_deref()
    }

    /// Sentences scanned during keyword filtering, or `None` when disabled.
    #[inline]
    pub fn sentence_count(&self) -> Option<usize> {
        self.sentence_count
    }

    /// The configured number of top words.
    #[inline]
    pub fn top_words(&self) -> Vec<WordCount> {
        self.frequencies.top(self.top_n)
    }

    /// The `n` most frequent words.
    #[inline]
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        self.frequencies.top(n)
    }

    /// Input text for an external word-cloud renderer.
    ///
    /// Unfiltered runs hand over the space-joined tokens; filtered runs hand
    /// over the matched paragraph text.
    pub fn word_cloud_text(&self) -> String {
        match &self.paragraphs {
            Some(paragraphs) => matched_text(paragraphs),
            None => self.tokens.joined(),
        }
    }

    /// Builds the full renderer request.
    pub fn word_cloud_request(&self, params: WordCloudParams) -> WordCloudRequest {
        WordCloudRequest {
            text: self.word_cloud_text(),
            params,
        }
    }

    /// Summary counts for this run.
    pub fn stats(&self) -> AnalysisStats {
        AnalysisStats {
            tokens: self.tokens.len(),
            distinct: self.frequencies.distinct(),
            sentences: self.sentence_count,
            paragraphs: self.paragraphs.as_ref().map(Vec::len),
        }
    }
}

/// A snapshot of analysis counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisStats {
    /// Tokens after normalization.
    pub tokens: usize,
    /// Distinct tokens.
    pub distinct: usize,
    /// Sentences scanned, if keyword filtering ran.
    pub sentences: Option<usize>,
    /// Paragraphs matched, if keyword filtering ran.
    pub paragraphs: Option<usize>,
}

impl fmt::Display for AnalysisStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tokens, {} distinct", self.tokens, self.distinct)?;

        if let (Some(sentences), Some(paragraphs)) = (self.sentences, self.paragraphs) {
            write!(
                f,
                ", {} paragraphs from {} sentences",
                paragraphs, sentences
            )?;
        }

        Ok(())
    }
}
