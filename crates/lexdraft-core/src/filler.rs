//! Filler removal for generated drafts.
//!
//! Language models wrap a document in conversational framing: openers
//! ("Understood."), introductions ("Here is a draft of ..."), invitations to
//! edit, and legal disclaimers. Two kinds of rule strip that framing:
//!
//! - [`PhraseRule`]: removes every match of its pattern and leaves the rest
//!   of the text in place.
//! - [`TruncationAnchor`]: cuts the text at the first occurrence of its
//!   phrase, discarding everything after it.
//!
//! Each list is applied once, in declared order. Later rules see the text as
//! left by earlier ones; nothing is repeated to a fixpoint.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::trace;

/// A local-removal rule: every non-overlapping match is deleted.
///
/// Patterns are compiled case-insensitive and multi-line, so `^`/`$` anchor
/// per line and `.` stops at newlines while `\s` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseRule {
    pub name: &'static str,
    pub pattern: &'static str,
}

impl PhraseRule {
    fn compile(&self) -> Regex {
        RegexBuilder::new(self.pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .unwrap_or_else(|e| panic!("phrase rule {:?} does not compile: {e}", self.name))
    }
}

/// A destructive rule: the text is cut at the anchor's first occurrence.
///
/// `phrase` is literal text. Its words match across any run of whitespace
/// or `*`, so "Let  me **know**" is caught before normalisation hides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationAnchor {
    pub name: &'static str,
    pub phrase: &'static str,
}

impl TruncationAnchor {
    fn compile(&self) -> Regex {
        let words: Vec<String> = self.phrase.split_whitespace().map(regex::escape).collect();
        RegexBuilder::new(&words.join(r"[\s*]+"))
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("truncation anchor {:?} does not compile: {e}", self.name))
    }
}

// ── Openers and introductions ──

pub const UNDERSTOOD: PhraseRule = PhraseRule {
    name: "understood",
    pattern: r"Understood\.\s*",
};

pub const BELOW_IS_A_DRAFT: PhraseRule = PhraseRule {
    name: "below-is-a-draft",
    pattern: r"Below is a draft\s+.*?\.\s*",
};

pub const PLEASE_REVIEW: PhraseRule = PhraseRule {
    name: "please-review",
    pattern: r"Please review it and let me know.*?\.\s*",
};

pub const LIKE_ANY_MODIFICATIONS: PhraseRule = PhraseRule {
    name: "like-any-modifications",
    pattern: r"if you'd like any modifications.*?\.\s*",
};

pub const LIKE_TO_REPLACE: PhraseRule = PhraseRule {
    name: "like-to-replace",
    pattern: r"if you'd like to replace.*?\.\s*",
};

pub const HERE_IS_DRAFT: PhraseRule = PhraseRule {
    name: "here-is-draft",
    pattern: r"Here is.*?draft.*?:\s*",
};

pub const HELP_YOU_CREATE: PhraseRule = PhraseRule {
    name: "help-you-create",
    pattern: r"I'll help you create.*?\.\s*",
};

pub const LET_ME_DRAFT: PhraseRule = PhraseRule {
    name: "let-me-draft",
    pattern: r"Let me draft.*?for you\.\s*",
};

pub const HERES_A_DOCUMENT: PhraseRule = PhraseRule {
    name: "heres-a-document",
    pattern: r"Here's a.*?document.*?:\s*",
};

pub const IVE_PREPARED: PhraseRule = PhraseRule {
    name: "ive-prepared",
    pattern: r"I've prepared.*?document.*?\.\s*",
};

// ── Placeholder notes ──

pub const DOCUMENT_PLACEHOLDER: PhraseRule = PhraseRule {
    name: "document-placeholder",
    pattern: r"This document.*?placeholder.*?\.\s*",
};

pub const NOTE_PLACEHOLDER: PhraseRule = PhraseRule {
    name: "note-placeholder",
    pattern: r"Note:.*?placeholder.*?\.\s*",
};

pub const PLEASE_NOTE_PLACEHOLDER: PhraseRule = PhraseRule {
    name: "please-note-placeholder",
    pattern: r"Please note.*?placeholder.*?\.\s*",
};

pub const BOLD_NOTE: PhraseRule = PhraseRule {
    name: "bold-note",
    pattern: r"\*\*Note:.*?\*\*\s*",
};

// ── Decoration ──

pub const SEPARATOR: PhraseRule = PhraseRule {
    name: "separator",
    pattern: r"---+\s*",
};

pub const BOLD_ONLY_LINE: PhraseRule = PhraseRule {
    name: "bold-only-line",
    pattern: r"^\s*\*\*.*?\*\*\s*$",
};

// ── Disclaimers ──

pub const FICTITIOUS_DETAILS: PhraseRule = PhraseRule {
    name: "fictitious-details",
    pattern: r"based on fictitious details.*?\.\s*",
};

pub const ILLUSTRATIVE_PURPOSES: PhraseRule = PhraseRule {
    name: "illustrative-purposes",
    pattern: r"This is for illustrative purposes only.*?\.\s*",
};

pub const NOT_LEGALLY_BINDING: PhraseRule = PhraseRule {
    name: "not-legally-binding",
    pattern: r"should not be used as a legally binding document.*?\.\s*",
};

pub const WITHOUT_REVIEW: PhraseRule = PhraseRule {
    name: "without-review",
    pattern: r"without review by a qualified legal professional.*?\.\s*",
};

pub const IS_A_TEMPLATE: PhraseRule = PhraseRule {
    name: "is-a-template",
    pattern: r"This is a template.*?\.\s*",
};

pub const FOR_LEGALLY_BINDING: PhraseRule = PhraseRule {
    name: "for-legally-binding",
    pattern: r"For a legally binding document.*?\.\s*",
};

pub const CONSULT_A_LAWYER: PhraseRule = PhraseRule {
    name: "consult-a-lawyer",
    pattern: r"consult a lawyer.*?\.\s*",
};

pub const TAILOR_IT: PhraseRule = PhraseRule {
    name: "tailor-it",
    pattern: r"to tailor it to your specific needs.*?\.\s*",
};

// ── Invitations to edit ──

/// Runs to the end of the line, not the end of the text.
pub const LET_ME_KNOW_LINE: PhraseRule = PhraseRule {
    name: "let-me-know-line",
    pattern: r"Let me know.*$",
};

pub const IF_YOU_NEED_MODIFICATIONS: PhraseRule = PhraseRule {
    name: "if-you-need-modifications",
    pattern: r"If you need.*?modifications.*?\.\s*",
};

pub const PLEASE_LET_ME_KNOW: PhraseRule = PhraseRule {
    name: "please-let-me-know",
    pattern: r"Please let me know.*?\.\s*",
};

pub const FEEL_FREE: PhraseRule = PhraseRule {
    name: "feel-free",
    pattern: r"Feel free to.*?\.\s*",
};

pub const THIS_TEMPLATE: PhraseRule = PhraseRule {
    name: "this-template",
    pattern: r"This template.*?\.\s*",
};

pub const DISCLAIMER: PhraseRule = PhraseRule {
    name: "disclaimer",
    pattern: r"Disclaimer:.*?\.\s*",
};

pub const BOLD_DISCLAIMER: PhraseRule = PhraseRule {
    name: "bold-disclaimer",
    pattern: r"\*\*Disclaimer:.*?\*\*\s*",
};

pub const IMPORTANT: PhraseRule = PhraseRule {
    name: "important",
    pattern: r"Important:.*?\.\s*",
};

pub const BOLD_IMPORTANT: PhraseRule = PhraseRule {
    name: "bold-important",
    pattern: r"\*\*Important:.*?\*\*\s*",
};

/// Local-removal rules in application order.
pub const PHRASE_RULES: &[PhraseRule] = &[
    UNDERSTOOD,
    BELOW_IS_A_DRAFT,
    PLEASE_REVIEW,
    LIKE_ANY_MODIFICATIONS,
    LIKE_TO_REPLACE,
    HERE_IS_DRAFT,
    HELP_YOU_CREATE,
    LET_ME_DRAFT,
    HERES_A_DOCUMENT,
    IVE_PREPARED,
    DOCUMENT_PLACEHOLDER,
    NOTE_PLACEHOLDER,
    PLEASE_NOTE_PLACEHOLDER,
    BOLD_NOTE,
    SEPARATOR,
    BOLD_ONLY_LINE,
    FICTITIOUS_DETAILS,
    ILLUSTRATIVE_PURPOSES,
    NOT_LEGALLY_BINDING,
    WITHOUT_REVIEW,
    IS_A_TEMPLATE,
    FOR_LEGALLY_BINDING,
    CONSULT_A_LAWYER,
    TAILOR_IT,
    LET_ME_KNOW_LINE,
    IF_YOU_NEED_MODIFICATIONS,
    PLEASE_LET_ME_KNOW,
    FEEL_FREE,
    THIS_TEMPLATE,
    DISCLAIMER,
    BOLD_DISCLAIMER,
    IMPORTANT,
    BOLD_IMPORTANT,
];

/// Tail anchors in application order.
pub const TRUNCATION_ANCHORS: &[TruncationAnchor] = &[
    TruncationAnchor { name: "is-a-template", phrase: "This is a template" },
    TruncationAnchor { name: "for-legally-binding", phrase: "For a legally binding document" },
    TruncationAnchor { name: "consult-a-lawyer", phrase: "consult a lawyer" },
    TruncationAnchor { name: "let-me-know", phrase: "Let me know" },
    TruncationAnchor { name: "if-you-need", phrase: "If you need" },
    TruncationAnchor { name: "please-let-me-know", phrase: "Please let me know" },
    TruncationAnchor { name: "feel-free", phrase: "Feel free to" },
    TruncationAnchor { name: "this-template", phrase: "This template" },
    TruncationAnchor { name: "disclaimer", phrase: "Disclaimer:" },
    TruncationAnchor { name: "important", phrase: "Important:" },
];

static COMPILED_PHRASES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| PHRASE_RULES.iter().map(PhraseRule::compile).collect());

static COMPILED_ANCHORS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| TRUNCATION_ANCHORS.iter().map(TruncationAnchor::compile).collect());

/// Remove filler phrases, then truncate at the first tail anchor.
pub fn strip_filler(text: &str) -> String {
    let removed = remove_filler_phrases(text);
    truncate_at_anchors(&removed).to_string()
}

/// Apply every [`PHRASE_RULES`] entry once, in order.
pub fn remove_filler_phrases(text: &str) -> String {
    let mut out = text.to_string();
    for (rule, re) in PHRASE_RULES.iter().zip(COMPILED_PHRASES.iter()) {
        if re.is_match(&out) {
            let before = out.len();
            out = re.replace_all(&out, "").into_owned();
            trace!(rule = rule.name, removed = before - out.len(), "filler phrase removed");
        }
    }
    out
}

/// Cut the text at each [`TRUNCATION_ANCHORS`] entry in turn.
///
/// The result is always a prefix of `text`.
pub fn truncate_at_anchors(text: &str) -> &str {
    let mut out = text;
    for (anchor, re) in TRUNCATION_ANCHORS.iter().zip(COMPILED_ANCHORS.iter()) {
        if let Some(m) = re.find(out) {
            trace!(anchor = anchor.name, at = m.start(), "truncated at anchor");
            out = &out[..m.start()];
        }
    }
    out
}
