//! `lexis`: word-frequency analysis for PDF and text documents.
//!
//! ```bash
//! lexis report.pdf
//! lexis report.pdf --keywords "revenue, profit" --top 30
//! lexis notes.txt --stopwords my_stopwords.txt --cloud-out cloud.txt
//! ```
//!
//! Exit codes: 0 success, 1 I/O or extraction failure, 2 invalid
//! configuration, 3 empty or too-short document, 4 nothing left after
//! normalization, 5 no keyword matches.

mod report;
mod source;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use lexis_core::{Analyzer, KeywordSet, StopwordSet};
use lexis_types::{
    ensure_content, AnalysisConfig, AnalysisError, WordCloudParams, DEFAULT_CHART_N,
    DEFAULT_CONTENT_THRESHOLD, DEFAULT_MIN_TOKEN_LEN, DEFAULT_TOP_N, RAW_PREVIEW_CHARS,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lexis", about = "Word-frequency analysis for PDF and text documents")]
struct Args {
    /// PDF or UTF-8 text file to analyze
    path: PathBuf,

    /// Comma-separated keywords; only paragraphs of matching sentences are analyzed
    #[arg(short, long)]
    keywords: Option<String>,

    /// Rows in the frequency table
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Rows in the bar chart
    #[arg(long, default_value_t = DEFAULT_CHART_N)]
    chart: usize,

    /// Minimum token length
    #[arg(long, default_value_t = DEFAULT_MIN_TOKEN_LEN)]
    min_len: usize,

    /// Stopword list (one word per line, `#` comments) replacing the built-in English list
    #[arg(long, conflicts_with = "no_stopwords")]
    stopwords: Option<PathBuf>,

    /// Disable stopword removal
    #[arg(long, default_value_t = false)]
    no_stopwords: bool,

    /// Extracted text must exceed this many characters
    #[arg(long, default_value_t = DEFAULT_CONTENT_THRESHOLD)]
    threshold: usize,

    /// Write the word-cloud input text to this file
    #[arg(long)]
    cloud_out: Option<PathBuf>,

    /// Word-cloud canvas width
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Word-cloud canvas height
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Word-cloud background color
    #[arg(long, default_value = "white")]
    background: String,

    /// Maximum distinct words in the word cloud
    #[arg(long, default_value_t = 200)]
    max_words: usize,

    /// Print the first characters of the extracted text
    #[arg(long, default_value_t = false)]
    show_raw: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lexis_demo=info,lexis_core=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            match err.downcast_ref::<AnalysisError>() {
                Some(analysis) => eprintln!("error: {}", user_message(analysis)),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = AnalysisConfig::new(args.min_len, args.top);
    let cloud = WordCloudParams {
        width: args.width,
        height: args.height,
        background: args.background.clone(),
        max_words: args.max_words,
    };
    cloud.validate()?;

    let stopwords = load_stopwords(args)?;
    info!(stopwords = stopwords.len(), "stopwords ready");
    let analyzer = Analyzer::new(config, stopwords)?;

    info!(path = %args.path.display(), "extracting text");
    let raw = source::load_text(&args.path)?;
    let raw = ensure_content(&raw, args.threshold)?;

    let keywords = KeywordSet::parse(args.keywords.as_deref().unwrap_or_default());
    if args.keywords.is_some() && keywords.is_empty() {
        info!("keyword input has no usable entries, analyzing the whole document");
    }

    let analysis = analyzer.analyze(raw, &keywords)?;
    info!(stats = %analysis.stats(), "analysis complete");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(paragraphs) = analysis.paragraphs() {
        writeln!(out, "== Matched paragraphs ({}) ==", paragraphs.len())?;
        report::write_paragraphs(&mut out, paragraphs)?;
        writeln!(out)?;
    }

    writeln!(out, "== Top {} words ==", args.top)?;
    report::write_table(&mut out, &analysis.top_words())?;
    writeln!(out)?;

    if args.chart > 0 {
        writeln!(out, "== Top {} chart ==", args.chart)?;
        report::write_chart(&mut out, &analysis.top(args.chart))?;
        writeln!(out)?;
    }

    if args.show_raw {
        writeln!(out, "== Raw extracted text ==")?;
        writeln!(out, "{}", report::raw_preview(raw, RAW_PREVIEW_CHARS))?;
    }

    if let Some(path) = &args.cloud_out {
        let request = analysis.word_cloud_request(cloud);
        std::fs::write(path, &request.text)
            .with_context(|| format!("failed to write word-cloud text: {}", path.display()))?;
        info!(
            path = %path.display(),
            width = request.params.width,
            height = request.params.height,
            background = %request.params.background,
            max_words = request.params.max_words,
            "word-cloud input written"
        );
    }

    Ok(())
}

fn load_stopwords(args: &Args) -> Result<StopwordSet> {
    if args.no_stopwords {
        return Ok(StopwordSet::empty());
    }

    match &args.stopwords {
        Some(path) => {
            let list = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read stopword list: {}", path.display()))?;
            Ok(StopwordSet::parse(&list))
        }
        None => Ok(StopwordSet::english()),
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::InvalidConfig { .. }) => 2,
        Some(AnalysisError::EmptyDocument | AnalysisError::ContentTooShort { .. }) => 3,
        Some(AnalysisError::EmptyAfterNormalization) => 4,
        Some(AnalysisError::NoKeywordMatches { .. }) => 5,
        None => 1,
    }
}

fn user_message(err: &AnalysisError) -> String {
    match err {
        AnalysisError::EmptyDocument | AnalysisError::ContentTooShort { .. } => format!(
            "{err}. The extracted text was too short or empty; please try another file."
        ),
        AnalysisError::EmptyAfterNormalization => {
            format!("{err}. The document has no words to count.")
        }
        AnalysisError::NoKeywordMatches { .. } => {
            format!("{err}. Try different or fewer keywords.")
        }
        AnalysisError::InvalidConfig { .. } => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let cases = [
            (AnalysisError::InvalidConfig { reason: "x" }, 2),
            (AnalysisError::EmptyDocument, 3),
            (
                AnalysisError::ContentTooShort {
                    length: 5,
                    threshold: 100,
                },
                3,
            ),
            (AnalysisError::EmptyAfterNormalization, 4),
            (AnalysisError::NoKeywordMatches { keywords: 1 }, 5),
        ];
        for (err, code) in cases {
            assert_eq!(exit_code(&anyhow::Error::new(err)), code);
        }
        assert_eq!(exit_code(&anyhow::anyhow!("pdf broke")), 1);
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::try_parse_from(["lexis", "report.pdf"]).expect("valid args");
        assert_eq!(args.top, DEFAULT_TOP_N);
        assert_eq!(args.chart, DEFAULT_CHART_N);
        assert_eq!(args.min_len, DEFAULT_MIN_TOKEN_LEN);
        assert_eq!(args.threshold, DEFAULT_CONTENT_THRESHOLD);
        assert!(args.keywords.is_none());
        assert_eq!(args.background, "white");
    }

    #[test]
    fn stopword_flags_conflict() {
        let parsed = Args::try_parse_from([
            "lexis",
            "a.txt",
            "--stopwords",
            "s.txt",
            "--no-stopwords",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn no_stopwords_flag_yields_empty_set() {
        let args = Args::try_parse_from(["lexis", "a.txt", "--no-stopwords"]).expect("valid args");
        assert!(load_stopwords(&args).expect("no I/O").is_empty());

        let args = Args::try_parse_from(["lexis", "a.txt"]).expect("valid args");
        assert!(load_stopwords(&args).expect("no I/O").contains("the"));
    }

    #[test]
    fn full_run_on_text_file() {
        let dir = std::env::temp_dir().join(format!("lexis-demo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let input = dir.join("doc.txt");
        let cloud = dir.join("cloud.txt");
        let body = "Revenue grew in the north. The weather was nice all year. \
                    Profit and revenue rose sharply in the south. No keyword here at all, truly.";
        std::fs::write(&input, body).expect("write input");

        let args = Args::try_parse_from([
            "lexis",
            input.to_str().expect("utf-8 path"),
            "--keywords",
            "revenue, profit",
            "--cloud-out",
            cloud.to_str().expect("utf-8 path"),
        ])
        .expect("valid args");
        run(&args).expect("analysis succeeds");

        let written = std::fs::read_to_string(&cloud).expect("cloud text written");
        assert_eq!(
            written,
            "Revenue grew in the north. Profit and revenue rose sharply in the south."
        );
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn short_text_rejected() {
        let dir = std::env::temp_dir().join(format!("lexis-short-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let input = dir.join("tiny.txt");
        std::fs::write(&input, "too short").expect("write input");

        let args = Args::try_parse_from(["lexis", input.to_str().expect("utf-8 path")])
            .expect("valid args");
        let err = run(&args).unwrap_err();
        assert_eq!(exit_code(&err), 3);
        std::fs::remove_dir_all(&dir).ok();
    }
}
