//! Best-effort field extraction.
//!
//! One anchored, case-insensitive pattern per field, matched against the
//! whole text. There is no fallback and no cross-field check: a pattern that
//! over- or under-captures is returned as-is, and a pattern that does not
//! match yields [`NOT_FOUND`].

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Value recorded for a field whose pattern did not match.
pub const NOT_FOUND: &str = "Not Found";

/// A field name and the pattern whose first capture group is its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPattern {
    pub key: &'static str,
    pub pattern: &'static str,
}

pub const PARTY_A: FieldPattern = FieldPattern {
    key: "party_a",
    pattern: r"This agreement is made between\s+(.*?)\s+and",
};

pub const PARTY_B: FieldPattern = FieldPattern {
    key: "party_b",
    pattern: r"and\s+(.*?)\s+on",
};

pub const EFFECTIVE_DATE: FieldPattern = FieldPattern {
    key: "effective_date",
    pattern: r"effective\s+on\s+([A-Za-z0-9,\s]+)[.\n]",
};

pub const TERM: FieldPattern = FieldPattern {
    key: "term",
    pattern: r"shall remain in effect for\s+([A-Za-z0-9\s]+)[.\n]",
};

pub const JURISDICTION: FieldPattern = FieldPattern {
    key: "jurisdiction",
    pattern: r"governed by the laws of\s+([A-Za-z\s]+)[.\n]",
};

/// Field patterns in output order.
pub const FIELD_PATTERNS: [FieldPattern; 5] =
    [PARTY_A, PARTY_B, EFFECTIVE_DATE, TERM, JURISDICTION];

static FIELD_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FIELD_PATTERNS
        .iter()
        .map(|f| {
            RegexBuilder::new(f.pattern)
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect()
});

/// Fields pulled from a draft. Serializes as an object with keys in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub party_a: String,
    pub party_b: String,
    pub effective_date: String,
    pub term: String,
    pub jurisdiction: String,
}

impl ExtractedFields {
    /// `(key, value)` pairs in fixed order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            (PARTY_A.key, self.party_a.as_str()),
            (PARTY_B.key, self.party_b.as_str()),
            (EFFECTIVE_DATE.key, self.effective_date.as_str()),
            (TERM.key, self.term.as_str()),
            (JURISDICTION.key, self.jurisdiction.as_str()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Number of fields whose pattern matched.
    pub fn found_count(&self) -> usize {
        self.entries().iter().filter(|(_, v)| *v != NOT_FOUND).count()
    }
}

/// Extract all five fields from `text`.
pub fn extract_fields(text: &str) -> ExtractedFields {
    ExtractedFields {
        party_a: capture_or_not_found(&FIELD_RES[0], text),
        party_b: capture_or_not_found(&FIELD_RES[1], text),
        effective_date: capture_or_not_found(&FIELD_RES[2], text),
        term: capture_or_not_found(&FIELD_RES[3], text),
        jurisdiction: capture_or_not_found(&FIELD_RES[4], text),
    }
}

fn capture_or_not_found(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACME: &str = "This agreement is made between Acme Corp and Beta LLC on January 1, 2024. \
        It shall remain in effect for two years. It is governed by the laws of Ontario.";

    #[test]
    fn acme_beta_scenario() {
        let fields = extract_fields(ACME);
        assert_eq!(fields.party_a, "Acme Corp");
        assert_eq!(fields.party_b, "Beta LLC");
        assert_eq!(fields.effective_date, NOT_FOUND);
        assert_eq!(fields.term, "two years");
        assert_eq!(fields.jurisdiction, "Ontario");
        assert_eq!(fields.found_count(), 4);
    }

    #[test]
    fn nothing_matches() {
        let fields = extract_fields("Lorem ipsum dolor sit amet.");
        for (key, value) in fields.entries() {
            assert_eq!(value, NOT_FOUND, "{key}");
        }
        assert_eq!(fields.found_count(), 0);
    }

    #[test]
    fn empty_text() {
        assert_eq!(extract_fields("").found_count(), 0);
    }

    #[test]
    fn effective_date_stops_at_period() {
        let fields = extract_fields("This lease is effective on March 3, 2025. Rent is due monthly.");
        assert_eq!(fields.effective_date, "March 3, 2025");
    }

    #[test]
    fn case_insensitive_anchors() {
        let fields = extract_fields("GOVERNED BY THE LAWS OF new york\n");
        assert_eq!(fields.jurisdiction, "new york");
    }

    #[test]
    fn party_b_can_overcapture() {
        // The "and" ending "Brand" anchors the match; this is the pattern's
        // literal behaviour.
        let fields = extract_fields("Brand new terms apply on delivery.");
        assert_eq!(fields.party_b, "new terms apply");
    }

    #[test]
    fn get_by_key() {
        let fields = extract_fields(ACME);
        assert_eq!(fields.get("jurisdiction"), Some("Ontario"));
        assert_eq!(fields.get("governing_law"), None);
    }

    #[test]
    fn serializes_in_key_order() {
        let json = serde_json::to_string(&extract_fields(ACME)).unwrap();
        assert_eq!(
            json,
            r#"{"party_a":"Acme Corp","party_b":"Beta LLC","effective_date":"Not Found","term":"two years","jurisdiction":"Ontario"}"#
        );
    }
}
