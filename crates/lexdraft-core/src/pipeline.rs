//! The cleaning pipeline: filler removal, boundary trimming, normalisation.
//!
//! [`strip_and_clean`] is what callers use before displaying or exporting a
//! draft. [`clean_with_report`] adds the numbers needed to spot
//! over-truncation, which the heuristics cannot rule out.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{boundary, filler, normalize};

/// Phrases that must never survive cleaning.
pub const RESIDUAL_CHECKS: &[&str] = &[
    "based on fictitious details",
    "This is for illustrative purposes",
    "should not be used as a legally binding",
    "This is a template",
    "Let me know",
    "consult a lawyer",
];

/// Drop ratio above which a cleaning result is worth a second look.
pub const DEFAULT_MAX_DROP_RATIO: f64 = 0.9;

/// Output of each pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanStages {
    /// After filler removal and anchor truncation.
    pub stripped: String,
    /// After signature and title trimming; a substring of `stripped`.
    pub trimmed: String,
    pub cleaned: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub cleaned: String,
    pub original_chars: usize,
    pub cleaned_chars: usize,
    /// Entries of [`RESIDUAL_CHECKS`] still present in `cleaned`.
    pub residual: Vec<&'static str>,
}

impl CleanReport {
    pub fn removed_chars(&self) -> usize {
        self.original_chars.saturating_sub(self.cleaned_chars)
    }

    /// Fraction of the input that cleaning removed, in `0.0..=1.0`.
    pub fn drop_ratio(&self) -> f64 {
        if self.original_chars == 0 {
            return 0.0;
        }
        self.removed_chars() as f64 / self.original_chars as f64
    }

    pub fn is_suspicious(&self, max_drop_ratio: f64) -> bool {
        !self.residual.is_empty() || self.drop_ratio() > max_drop_ratio
    }
}

/// Clean a raw draft: filler, then boundaries, then markdown and whitespace.
pub fn strip_and_clean(raw: &str) -> String {
    clean_stages(raw).cleaned
}

pub fn clean_stages(raw: &str) -> CleanStages {
    let stripped = filler::strip_filler(raw.trim());
    let trimmed = boundary::trim_to_document_span(&stripped);
    let normalized = normalize::normalize(&trimmed);
    // Markup removal can join an anchor phrase back together.
    let cleaned = filler::truncate_at_anchors(&normalized).trim_end().to_string();
    debug!(
        raw = raw.len(),
        stripped = stripped.len(),
        trimmed = trimmed.len(),
        cleaned = cleaned.len(),
        "cleaned draft"
    );
    CleanStages {
        stripped,
        trimmed,
        cleaned,
    }
}

pub fn clean_with_report(raw: &str) -> CleanReport {
    let cleaned = strip_and_clean(raw);
    let residual = residual_filler(&cleaned);
    if !residual.is_empty() {
        warn!(?residual, "filler survived cleaning");
    }
    let report = CleanReport {
        original_chars: raw.chars().count(),
        cleaned_chars: cleaned.chars().count(),
        residual,
        cleaned,
    };
    if report.drop_ratio() > DEFAULT_MAX_DROP_RATIO {
        warn!(
            original = report.original_chars,
            cleaned = report.cleaned_chars,
            "cleaning removed most of the draft"
        );
    }
    report
}

/// Entries of [`RESIDUAL_CHECKS`] found in `text`, case-insensitively.
pub fn residual_filler(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    RESIDUAL_CHECKS
        .iter()
        .copied()
        .filter(|phrase| lower.contains(&phrase.to_lowercase()))
        .collect()
}
