//! Terminal rendering of analysis results.

use std::io::{self, Write};

use lexis_types::{MatchedParagraph, WordCount};

/// Widest bar drawn by [`write_chart`].
const BAR_WIDTH: usize = 40;

/// Writes a two-column Word / Count table.
pub fn write_table<W: Write>(out: &mut W, rows: &[WordCount]) -> io::Result<()> {
    let width = rows
        .iter()
        .map(|row| row.word.len())
        .max()
        .unwrap_or(0)
        .max("Word".len());

    writeln!(out, "{:<width$}  {:>6}", "Word", "Count")?;
    writeln!(out, "{}  {}", "-".repeat(width), "-".repeat(6))?;
    for row in rows {
        writeln!(out, "{:<width$}  {:>6}", row.word, row.count)?;
    }
    Ok(())
}

/// Writes a horizontal bar chart, most frequent word on top.
pub fn write_chart<W: Write>(out: &mut W, rows: &[WordCount]) -> io::Result<()> {
    let Some(max) = rows.iter().map(|row| row.count).max() else {
        return Ok(());
    };
    let label = rows.iter().map(|row| row.word.len()).max().unwrap_or(0);

    for row in rows {
        let len = bar_len(row.count, max);
        writeln!(
            out,
            "{:>label$} | {} {}",
            row.word,
            "#".repeat(len),
            row.count
        )?;
    }
    Ok(())
}

/// Writes matched paragraphs, numbered from 1.
pub fn write_paragraphs<W: Write>(out: &mut W, paragraphs: &[MatchedParagraph]) -> io::Result<()> {
    for (i, paragraph) in paragraphs.iter().enumerate() {
        writeln!(
            out,
            "[{}] (sentences {}-{}) {}",
            i + 1,
            paragraph.first_sentence + 1,
            paragraph.end_sentence(),
            paragraph.text
        )?;
    }
    Ok(())
}

/// First `chars` characters of `text` followed by `...`.
///
/// The marker is appended even when nothing was cut.
pub fn raw_preview(text: &str, chars: usize) -> String {
    let cut = text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i);
    format!("{}...", &text[..cut])
}

fn bar_len(count: u32, max: u32) -> usize {
    if max == 0 {
        return 0;
    }
    let scaled = (u64::from(count) * BAR_WIDTH as u64).div_ceil(u64::from(max));
    scaled as usize
}
