//! Plain-text rendering for CLI output.

use std::fmt::{self, Write};

use lexdraft_core::extract::FIELD_PATTERNS;
use lexdraft_core::layout::LayoutLine;
use lexdraft_core::{CleanReport, CleanStages, ExtractedFields};

const LABEL_WIDTH: usize = 16;

// ── Fields ──

pub fn write_fields(out: &mut impl Write, fields: &ExtractedFields) -> fmt::Result {
    for (key, value) in fields.entries() {
        writeln!(out, "  {key:<LABEL_WIDTH$} {value}")?;
    }
    writeln!(
        out,
        "  {:<LABEL_WIDTH$} {}/{}",
        "found",
        fields.found_count(),
        FIELD_PATTERNS.len()
    )
}

// ── Cleaning ──

pub fn write_report(out: &mut impl Write, report: &CleanReport, max_drop_ratio: f64) -> fmt::Result {
    writeln!(out, "=== Cleaning summary ===")?;
    writeln!(out, "  {:<LABEL_WIDTH$} {}", "original chars", report.original_chars)?;
    writeln!(out, "  {:<LABEL_WIDTH$} {}", "cleaned chars", report.cleaned_chars)?;
    writeln!(
        out,
        "  {:<LABEL_WIDTH$} {} ({:.1}%)",
        "removed",
        report.removed_chars(),
        report.drop_ratio() * 100.0
    )?;
    let residual = if report.residual.is_empty() {
        "none".to_string()
    } else {
        report.residual.join(", ")
    };
    writeln!(out, "  {:<LABEL_WIDTH$} {}", "residual filler", residual)?;
    let status = if report.is_suspicious(max_drop_ratio) {
        "review suggested"
    } else {
        "ok"
    };
    writeln!(out, "  {:<LABEL_WIDTH$} {}", "status", status)
}

pub fn write_stages(out: &mut impl Write, stages: &CleanStages) -> fmt::Result {
    for (name, text) in [
        ("stripped", &stages.stripped),
        ("trimmed", &stages.trimmed),
        ("cleaned", &stages.cleaned),
    ] {
        writeln!(out, "=== {name} ({} chars) ===", text.chars().count())?;
        writeln!(out, "{text}")?;
        writeln!(out)?;
    }
    Ok(())
}

// ── Layout ──

pub fn write_layout(out: &mut impl Write, lines: &[LayoutLine]) -> fmt::Result {
    for line in lines {
        writeln!(out, "{:<8} {}", line.kind.as_str(), line.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use lexdraft_core::{NOT_FOUND, clean_with_report, extract_fields, layout_lines};

    use super::*;

    #[test]
    fn fields_table() {
        let mut out = String::new();
        write_fields(&mut out, &extract_fields("It is governed by the laws of Ontario.")).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], format!("  {:<16} {}", "party_a", NOT_FOUND));
        assert_eq!(lines[4], "  jurisdiction     Ontario");
        assert_eq!(lines[5], "  found            1/5");
    }

    #[test]
    fn report_ok() {
        let report = clean_with_report("Understood. NDA\n\nThe parties agree.");
        let mut out = String::new();
        write_report(&mut out, &report, 0.9).unwrap();
        assert!(out.contains("residual filler  none"), "{out}");
        assert!(out.contains("status           ok"), "{out}");
    }

    #[test]
    fn report_flags_drop() {
        let report = clean_with_report("Let me know if this works.");
        let mut out = String::new();
        write_report(&mut out, &report, 0.9).unwrap();
        assert!(out.contains("removed          26 (100.0%)"), "{out}");
        assert!(out.contains("review suggested"), "{out}");
    }

    #[test]
    fn layout_rows() {
        let mut out = String::new();
        write_layout(&mut out, &layout_lines("LEASE AGREEMENT\n1. Rent\nPaid monthly.")).unwrap();
        assert_eq!(
            out,
            "title    LEASE AGREEMENT\nsection  1. Rent\nbody     Paid monthly.\n"
        );
    }

    #[test]
    fn stages_are_labelled() {
        let stages = lexdraft_core::clean_stages("Understood. NDA\nBody.");
        let mut out = String::new();
        write_stages(&mut out, &stages).unwrap();
        assert!(out.starts_with("=== stripped ("), "{out}");
        assert!(out.contains("=== cleaned ("), "{out}");
    }
}
