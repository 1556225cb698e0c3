//! Line classification for document export.
//!
//! Exporters render titles, section headers, and body text differently. This
//! module decides which is which; encoding to PDF or DOCX happens elsewhere.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::CoreError;

/// Base name used when the caller does not supply one.
pub const DEFAULT_EXPORT_BASE: &str = "legal_document";

const TITLE_WORDS: &[&str] = &["CONTRACT", "AGREEMENT", "DOCUMENT", "TERMS", "CONDITIONS"];
const MIN_TITLE_CHARS: usize = 5;
const MAX_SECTION_CHARS: usize = 50;

static NUMBERED_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Title,
    Section,
    Body,
    Blank,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Section => "section",
            Self::Body => "body",
            Self::Blank => "blank",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutLine {
    pub kind: LineKind,
    pub text: String,
}

/// Classify a single line.
///
/// Titles are all upper-case, at least five characters, and contain one of
/// the title words. Sections start with `<n>.` or are short lines ending in
/// `:`.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    let chars = line.chars().count();
    let all_caps = line.to_uppercase() == line;
    if chars >= MIN_TITLE_CHARS && all_caps && TITLE_WORDS.iter().any(|w| line.contains(w)) {
        return LineKind::Title;
    }

    if NUMBERED_PREFIX.is_match(line) || (line.ends_with(':') && chars < MAX_SECTION_CHARS) {
        return LineKind::Section;
    }

    LineKind::Body
}

/// Classify every non-empty line of `text`, trimmed.
pub fn layout_lines(text: &str) -> Vec<LayoutLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| LayoutLine {
            kind: classify_line(line),
            text: line.to_string(),
        })
        .collect()
}

/// Like [`layout_lines`], with each body line split one sentence per row.
pub fn layout_sentences(text: &str) -> Vec<LayoutLine> {
    layout_lines(text)
        .into_iter()
        .flat_map(|line| match line.kind {
            LineKind::Body => sentence_lines(&line.text)
                .lines()
                .map(|sentence| LayoutLine {
                    kind: LineKind::Body,
                    text: sentence.to_string(),
                })
                .collect(),
            _ => vec![line],
        })
        .collect()
}

/// Flatten whitespace and put each sentence on its own line.
pub fn sentence_lines(text: &str) -> String {
    WHITESPACE
        .replace_all(text, " ")
        .trim()
        .replace(". ", ".\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(CoreError::UnknownExportFormat(s.to_string())),
        }
    }
}

/// `<base>_<YYYY-MM-DDTHH-MM-SS>.<ext>`, with the timestamp in UTC.
pub fn export_filename(base: &str, format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        base,
        at.format("%Y-%m-%dT%H-%M-%S"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn titles() {
        assert_eq!(classify_line("EMPLOYMENT CONTRACT"), LineKind::Title);
        assert_eq!(classify_line("  TERMS AND CONDITIONS  "), LineKind::Title);
        // Mixed case is not a title.
        assert_eq!(classify_line("Employment Contract"), LineKind::Body);
        // All caps without a title word is not a title either.
        assert_eq!(classify_line("WITNESSETH"), LineKind::Body);
    }

    #[test]
    fn sections() {
        assert_eq!(classify_line("1. Parties"), LineKind::Section);
        assert_eq!(classify_line("12.Payment"), LineKind::Section);
        assert_eq!(classify_line("Compensation and Benefits:"), LineKind::Section);
    }

    #[test]
    fn long_colon_line_is_body() {
        let line = "The following obligations apply to both parties equally:";
        assert!(line.len() >= MAX_SECTION_CHARS);
        assert_eq!(classify_line(line), LineKind::Body);
    }

    #[test]
    fn blank() {
        assert_eq!(classify_line("   "), LineKind::Blank);
    }

    #[test]
    fn layout_skips_blank_lines() {
        let lines = layout_lines("NDA AGREEMENT\n\n1. Parties\n   Acme and Beta.\n");
        let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Title, LineKind::Section, LineKind::Body]);
        assert_eq!(lines[2].text, "Acme and Beta.");
    }

    #[test]
    fn sentences_split() {
        assert_eq!(
            sentence_lines("  First clause.   Second\nclause. Third"),
            "First clause.\nSecond clause.\nThird"
        );
    }

    #[test]
    fn sentences_split_body_only() {
        let lines = layout_sentences("NDA AGREEMENT\n1. Term. Two years.\nFirst clause. Second clause.");
        let rows: Vec<(LineKind, &str)> = lines.iter().map(|l| (l.kind, l.text.as_str())).collect();
        assert_eq!(
            rows,
            vec![
                (LineKind::Title, "NDA AGREEMENT"),
                (LineKind::Section, "1. Term. Two years."),
                (LineKind::Body, "First clause."),
                (LineKind::Body, "Second clause."),
            ]
        );
    }

    #[test]
    fn export_format_parse() {
        assert_eq!("PDF".parse::<ExportFormat>(), Ok(ExportFormat::Pdf));
        assert_eq!(" docx ".parse::<ExportFormat>(), Ok(ExportFormat::Docx));
        assert_eq!(
            "rtf".parse::<ExportFormat>(),
            Err(CoreError::UnknownExportFormat("rtf".to_string()))
        );
    }

    #[test]
    fn filename_has_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            export_filename(DEFAULT_EXPORT_BASE, ExportFormat::Pdf, at),
            "legal_document_2024-01-02T03-04-05.pdf"
        );
        assert_eq!(
            export_filename("nda", ExportFormat::Docx, at),
            "nda_2024-01-02T03-04-05.docx"
        );
    }
}
