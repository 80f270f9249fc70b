//! Document loading.
//!
//! PDFs go through `pdf-extract`; anything else is read as UTF-8 text.

use std::path::Path;

use anyhow::{Context, Result};

/// Kind of input, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Portable Document Format.
    Pdf,
    /// Plain UTF-8 text.
    Text,
}

impl SourceKind {
    /// Classifies a path by its extension (case-insensitive).
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => SourceKind::Pdf,
            _ => SourceKind::Text,
        }
    }
}

/// Reads a document and returns its text.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid UTF-8 (text inputs), or
/// the PDF extractor rejects it.
pub fn load_text(path: &Path) -> Result<String> {
    let text = match SourceKind::of(path) {
        SourceKind::Pdf => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read PDF file: {}", path.display()))?;
            pdf_extract::extract_text_from_mem(&bytes)
                .with_context(|| format!("failed to extract text from PDF: {}", path.display()))?
        }
        SourceKind::Text => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read text file: {}", path.display()))?,
    };

    Ok(strip_artifacts(text))
}

/// Removes NUL bytes and byte-order marks that extractors leave behind.
fn strip_artifacts(text: String) -> String {
    if text.contains(['\u{0}', '\u{FEFF}']) {
        text.replace(['\u{0}', '\u{FEFF}'], "")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_by_extension() {
        assert_eq!(SourceKind::of(Path::new("report.pdf")), SourceKind::Pdf);
        assert_eq!(SourceKind::of(Path::new("REPORT.PDF")), SourceKind::Pdf);
        assert_eq!(SourceKind::of(Path::new("notes.txt")), SourceKind::Text);
        assert_eq!(SourceKind::of(Path::new("README")), SourceKind::Text);
    }

    #[test]
    fn artifacts_removed() {
        assert_eq!(strip_artifacts("\u{FEFF}Hello\u{0} world".into()), "Hello world");
        assert_eq!(strip_artifacts("clean".into()), "clean");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_text(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.txt"));
    }
}
