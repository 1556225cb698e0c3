//! Document boundary detection.
//!
//! Generated output often carries material before the document title and
//! after the signature block. The trimmer cuts at both ends and only ever
//! returns a contiguous slice of its input.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::trace;

/// "Employee Signature:" ... "Date:" ... a run of 15 underscores, across
/// lines, matched lazily and case-sensitively.
pub const SIGNATURE_BLOCK: &str = r"(?s)Employee Signature:.*?Date:.*?_{15}";

/// A title keyword that marks where the document proper begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitlePattern {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Checked in order; the first pattern that matches anywhere wins, even if a
/// later pattern matches earlier in the text.
///
/// Every pattern is bounded by `\b` on purpose: without it "standard NDA"
/// would be cut mid-word to "ndard NDA".
pub const TITLE_PATTERNS: &[TitlePattern] = &[
    TitlePattern {
        name: "employment",
        pattern: r"\b(?:EMPLOYMENT CONTRACT|EMPLOYMENT AGREEMENT)\b",
    },
    TitlePattern {
        name: "property-transfer",
        pattern: r"\b(?:PROPERTY TRANSFER AGREEMENT|PROPERTY TRANSFER)\b",
    },
    TitlePattern {
        name: "non-disclosure",
        pattern: r"\b(?:NON-DISCLOSURE AGREEMENT|NDA)\b",
    },
    TitlePattern {
        name: "service",
        pattern: r"\b(?:SERVICE AGREEMENT|SERVICE CONTRACT)\b",
    },
    TitlePattern {
        name: "lease",
        pattern: r"\b(?:LEASE AGREEMENT|RENTAL AGREEMENT)\b",
    },
    TitlePattern {
        name: "partnership",
        pattern: r"\bPARTNERSHIP AGREEMENT\b",
    },
    TitlePattern {
        name: "generic",
        pattern: r"\b(?:CONTRACT|AGREEMENT)\b",
    },
];

static SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(SIGNATURE_BLOCK).unwrap());

static TITLE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TITLE_PATTERNS
        .iter()
        .map(|t| {
            RegexBuilder::new(t.pattern)
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect()
});

/// Trim to the end of the signature block, then to the start of the title.
pub fn trim_to_document_span(text: &str) -> String {
    trim_before_title(trim_after_signature(text)).to_string()
}

/// Keep text up to and including the signature block, if there is one.
pub fn trim_after_signature(text: &str) -> &str {
    match SIGNATURE_RE.find(text) {
        Some(m) => {
            trace!(dropped = text.len() - m.end(), "trimmed after signature block");
            &text[..m.end()]
        }
        None => text,
    }
}

/// Drop everything before the first title pattern (in list order) that
/// matches.
pub fn trim_before_title(text: &str) -> &str {
    for (title, re) in TITLE_PATTERNS.iter().zip(TITLE_RES.iter()) {
        if let Some(m) = re.find(text) {
            trace!(title = title.name, dropped = m.start(), "trimmed before title");
            return &text[m.start()..];
        }
    }
    text
}
