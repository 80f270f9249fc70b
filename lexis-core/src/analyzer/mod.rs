//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Turns raw text into lowercase alphabetic tokens
//! - **Stopwords**: The word set the normalizer drops
//! - **Frequency**: Counts tokens and ranks them
//! - **Sentence**: Splits raw text at terminal punctuation
//! - **Keywords**: Groups keyword-matching sentences into paragraphs

pub mod frequency;
pub mod keywords;
pub mod normalizer;
pub mod sentence;
pub mod stopwords;

pub use frequency::FrequencyTable;
pub use keywords::{group_paragraphs, matched_text, KeywordSet};
pub use normalizer::{NormalizerConfig, TextNormalizer, TokenSequence};
pub use sentence::{split_sentences, Sentence, SentenceSplitter};
pub use stopwords::StopwordSet;
