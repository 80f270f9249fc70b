//! Word-frequency analysis for extracted document text.
//!
//! The crate turns raw text (typically the output of a PDF extractor) into
//! ranked word counts and the input string for a word-cloud renderer. It
//! never performs I/O: text comes in, values go out.
//!
//! - [`analyzer`] holds the individual stages
//! - [`pipeline`] wires them into a single [`Analyzer`] call
//!
//! ```
//! use lexis_core::{Analyzer, KeywordSet, StopwordSet};
//! use lexis_types::AnalysisConfig;
//!
//! let analyzer = Analyzer::new(AnalysisConfig::default(), StopwordSet::english()).unwrap();
//! let analysis = analyzer
//!     .analyze("Cats chase mice. Dogs chase cats.", &KeywordSet::empty())
//!     .unwrap();
//!
//! let top = analysis.top(2);
//! assert_eq!(top[0].word, "cats");
//! assert_eq!(top[0].count, 2);
//! ```

pub mod analyzer;
pub mod pipeline;

pub use analyzer::{FrequencyTable, KeywordSet, StopwordSet, TextNormalizer, TokenSequence};
pub use pipeline::{Analysis, AnalysisStats, Analyzer};
