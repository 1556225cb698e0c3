//! Numbered, indented rendering of a draft.
//!
//! A display transform, separate from the cleaning pipeline: headings get an
//! incrementing section number and are upper-cased, every other line is
//! indented, and lines are double-spaced.

use std::sync::LazyLock;

use regex::Regex;

/// Lines that are treated as section headings when they stand alone.
pub const HEADINGS: &[&str] = &[
    "agreement",
    "parties",
    "definitions",
    "terms",
    "termination",
    "confidentiality",
    "governing law",
    "dispute resolution",
    "miscellaneous",
    "signatures",
    "witnesseth",
    "now, therefore",
];

const INDENT: &str = "    ";

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Render `text` as numbered headings and indented paragraphs.
///
/// The output always ends with exactly one newline.
pub fn format_structured(text: &str) -> String {
    let collapsed = BLANK_LINES.replace_all(text.trim(), "\n\n");
    let content = upper_case_standalone_headings(&collapsed);

    let mut section = 1;
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            let line = line.trim();
            let upper = line.to_uppercase();
            if is_heading(&upper) || line.ends_with(':') {
                let numbered = format!("{section}. {upper}");
                section += 1;
                numbered
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect();

    format!("{}\n", lines.join("\n\n").trim())
}

/// Upper-case heading-vocabulary lines that have a line break on both sides.
fn upper_case_standalone_headings(text: &str) -> String {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let count = lines.len();
    if count >= 3 {
        for line in &mut lines[1..count - 1] {
            if is_heading(line) {
                *line = line.to_uppercase();
            }
        }
    }
    lines.join("\n")
}

fn is_heading(line: &str) -> bool {
    HEADINGS.iter().any(|h| line.eq_ignore_ascii_case(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_numbered() {
        let out = format_structured("Parties\nAcme and Beta.\nGoverning Law\nOntario.");
        assert_eq!(
            out,
            "1. PARTIES\n\n    Acme and Beta.\n\n2. GOVERNING LAW\n\n    Ontario.\n"
        );
    }

    #[test]
    fn colon_lines_are_headings() {
        let out = format_structured("Payment terms:\nNet 30.");
        assert_eq!(out, "1. PAYMENT TERMS:\n\n    Net 30.\n");
    }

    #[test]
    fn title_indent_is_trimmed() {
        // The whole rendering is trimmed, so the first body line loses its indent.
        let out = format_structured("SERVICE AGREEMENT NO. 4\nBody text.");
        assert_eq!(out, "SERVICE AGREEMENT NO. 4\n\n    Body text.\n");
    }

    #[test]
    fn blank_runs_collapse() {
        let out = format_structured("Terms\n\n\n\n   \nPay on time.");
        assert!(!out.contains("\n\n\n"));
        assert_eq!(out, "1. TERMS\n\n    \n\n    Pay on time.\n");
    }

    #[test]
    fn standalone_heading_upper_cased() {
        assert_eq!(
            upper_case_standalone_headings("intro\nnow, therefore\nbody"),
            "intro\nNOW, THEREFORE\nbody"
        );
        // First and last lines have no break on one side.
        assert_eq!(
            upper_case_standalone_headings("terms\nbody\nparties"),
            "terms\nbody\nparties"
        );
    }

    #[test]
    fn exactly_one_trailing_newline() {
        for input in ["", "\n\n\n", "Definitions\n\n", "a\nb\n\n\nc\n\n"] {
            let out = format_structured(input);
            assert!(out.ends_with('\n'), "{input:?}");
            assert!(!out.ends_with("\n\n"), "{input:?}");
            assert!(!out.contains("\n\n\n"), "{input:?}");
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(format_structured(""), "\n");
    }
}
