//! Markdown and whitespace normalisation.
//!
//! Strips the markdown a model tends to emit (bold, headings, bullets),
//! collapses whitespace, and restores canonical spacing around punctuation
//! and section breaks.
//!
//! Steps 3–7 of [`normalize`] are idempotent. Section spacing (step 8) and
//! numbered-section breaks (step 9) only insert a break where one is missing.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
// Any heading run at a line start; mid-line only runs of two or more, so
// "Invoice #12" keeps its hash.
static HEADING_BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:^[ \t]*#{1,6}|#{2,6})[ \t]*\*\*[ \t]*").unwrap()
});
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*|#{2,6}[ \t]*").unwrap());
static STAR_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\*[ \t]+").unwrap());
static DASH_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-[ \t]*").unwrap());
static STRAY_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*+").unwrap());
static HSPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static SPACE_BEFORE_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+([.,;:])").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").unwrap());
static COLON_CAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([A-Z])").unwrap());
static PERIOD_CAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.([A-Z])").unwrap());
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[A-Z][^.\n]*:[ \t]*$").unwrap());
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\b(\d{1,3}\.)[ \t]*([A-Z])").unwrap());

/// Run all normalisation steps once, in order.
pub fn normalize(text: &str) -> String {
    let text = strip_markdown(text);
    let text = tidy_whitespace(&text);
    let text = space_section_headers(&text);
    let text = break_numbered_sections(&text);
    text.trim().to_string()
}

/// Steps 1–2: bold, headings, bullets, stray emphasis.
pub fn strip_markdown(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = HEADING_BOLD.replace_all(&text, "");
    let text = HEADING.replace_all(&text, "");
    let text = STAR_BULLET.replace_all(&text, "");
    let text = DASH_BULLET.replace_all(&text, "");
    STRAY_EMPHASIS.replace_all(&text, "").into_owned()
}

/// Steps 3–7: whitespace and punctuation spacing.
pub fn tidy_whitespace(text: &str) -> String {
    let text = HSPACE.replace_all(text, " ");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    let text = text.trim();
    let text = COLON_CAP.replace_all(text, ": $1");
    PERIOD_CAP.replace_all(&text, ". $1").into_owned()
}

/// Step 8: put a blank line before header-like lines ("Compensation:").
pub fn space_section_headers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in SECTION_HEADER.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if !follows_blank_line(&text[..m.start()]) {
            out.push('\n');
        }
        last = m.start();
    }
    out.push_str(&text[last..]);
    out
}

/// Step 9: move "<n>. Capital" markers onto their own line.
pub fn break_numbered_sections(text: &str) -> String {
    NUMBERED
        .replace_all(text, |caps: &Captures| {
            let start = caps.get(0).map_or(0, |m| m.start());
            if at_line_start(&text[..start]) {
                format!("{} {}", &caps[1], &caps[2])
            } else {
                format!("\n{} {}", &caps[1], &caps[2])
            }
        })
        .into_owned()
}

/// `before` ends at a line start; true if that line opens the text or is
/// preceded by a blank line.
fn follows_blank_line(before: &str) -> bool {
    match before.strip_suffix('\n') {
        Some(rest) => rest.rsplit('\n').next().unwrap_or("").trim().is_empty(),
        None => true,
    }
}

fn at_line_start(before: &str) -> bool {
    before.rsplit('\n').next().unwrap_or("").trim().is_empty()
}
