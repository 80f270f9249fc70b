//! Corpus Benchmarking Tool
//!
//! Measures each stage of the analysis pipeline on a large plain-text file
//! (a concatenation of extracted reports, a Wikipedia dump, and so on).
//!
//! ## Stages
//!
//! 1. **Lowercase**: Unicode lowercasing into a reused buffer
//! 2. **Normalize**: Lowercase + token scan + stopword removal
//! 3. **Count**: Frequency table construction over a prepared token sequence
//! 4. **Keywords**: Sentence splitting + paragraph grouping
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/corpus_bench /path/to/corpus.txt
//! ./target/release/corpus_bench /path/to/corpus.txt "revenue, profit"
//! ```
//!
//! Without a keyword argument the keyword stage uses `"the"`, which matches
//! most English sentences and so exercises the coalescing path.
//!
//! Build with `--release`; debug numbers are meaningless.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use lexis_core::analyzer::{
    group_paragraphs, split_sentences, FrequencyTable, KeywordSet, TextNormalizer,
};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

struct Perf<'a> {
    label: &'a str,
    input_bytes: usize,
    elapsed: Duration,
    /// Items produced (tokens, paragraphs); 0 hides the line.
    items: u64,
    item_name: &'a str,
}

fn main() -> std::io::Result<()> {
    let mut args = env::args().skip(1);

    let Some(path) = args.next() else {
        eprintln!("Usage: corpus_bench <path> [keywords]");
        std::process::exit(1);
    };
    let keywords = KeywordSet::parse(args.next().as_deref().unwrap_or("the"));

    println!("Loading file...");
    let input = fs::read_to_string(&path)?;

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Keywords:  {:?}\n", keywords.iter().collect::<Vec<_>>());

    let normalizer = TextNormalizer::default();
    bench_lowercase(&normalizer, &input);
    bench_normalize(&normalizer, &input);
    bench_count(&normalizer, &input);
    bench_keywords(&input, &keywords);

    Ok(())
}

fn bench_lowercase(normalizer: &TextNormalizer, input: &str) {
    let mut buf = String::with_capacity(input.len());
    let elapsed = run(|| {
        normalizer.lowercase_into(input, &mut buf);
        std::hint::black_box(buf.len());
    });

    report(Perf {
        label: "Lowercase",
        input_bytes: input.len(),
        elapsed,
        items: 0,
        item_name: "",
    });
}

fn bench_normalize(normalizer: &TextNormalizer, input: &str) {
    let mut buf = String::with_capacity(input.len());
    let mut tokens = 0u64;
    let elapsed = run(|| {
        let seq = normalizer.normalize_with(input, &mut buf);
        tokens = seq.len() as u64;
        std::hint::black_box(&seq);
    });

    report(Perf {
        label: "Normalize",
        input_bytes: input.len(),
        elapsed,
        items: tokens,
        item_name: "Tokens",
    });
}

fn bench_count(normalizer: &TextNormalizer, input: &str) {
    let seq = normalizer.normalize(input);
    let mut distinct = 0u64;
    let elapsed = run(|| {
        let table = FrequencyTable::from_tokens(&seq);
        distinct = table.distinct() as u64;
        std::hint::black_box(table.top(20));
    });

    report(Perf {
        label: "Count + top 20",
        input_bytes: input.len(),
        elapsed,
        items: distinct,
        item_name: "Distinct",
    });
}

fn bench_keywords(input: &str, keywords: &KeywordSet) {
    let mut paragraphs = 0u64;
    let elapsed = run(|| {
        let sentences = split_sentences(input);
        let grouped = group_paragraphs(&sentences, keywords);
        paragraphs = grouped.len() as u64;
        std::hint::black_box(grouped);
    });

    report(Perf {
        label: "Keywords",
        input_bytes: input.len(),
        elapsed,
        items: paragraphs,
        item_name: "Paragraphs",
    });
}

/// Warms up, then returns the mean duration over the measured runs.
fn run<F: FnMut()>(mut f: F) -> Duration {
    for _ in 0..WARMUP_RUNS {
        f();
    }

    let start = Instant::now();
    for _ in 0..MEASURE_RUNS {
        f();
    }
    start.elapsed() / MEASURE_RUNS as u32
}

fn report(perf: Perf<'_>) {
    let secs = perf.elapsed.as_secs_f64();
    let mib = perf.input_bytes as f64 / (1024.0 * 1024.0);

    println!("=== {} ===", perf.label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.1} MiB/s", mib / secs);

    if perf.items > 0 {
        println!("{:<12}: {}", perf.item_name, fmt_count(perf.items));
        println!(
            "{:<12}: {}",
            format!("{}/sec", perf.item_name),
            fmt_count((perf.items as f64 / secs) as u64)
        );
    }

    println!();
}

fn fmt_bytes(b: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = b as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", b)
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out
}
