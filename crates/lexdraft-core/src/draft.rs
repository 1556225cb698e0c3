//! Completed-draft detection in agent replies.
//!
//! While gathering details the agent answers conversationally. When it has
//! enough to produce the document it prefixes the reply with
//! [`DRAFT_COMPLETE_MARKER`]; everything else in that reply is the draft.

pub const DRAFT_COMPLETE_MARKER: &str = "DRAFT_COMPLETE:";

/// An agent reply, split by whether it carries a finished draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentReply {
    /// Draft text with the marker removed and surrounding whitespace trimmed.
    Draft(String),
    /// A conversational message, passed through unchanged.
    Message(String),
}

impl AgentReply {
    pub fn is_draft(&self) -> bool {
        matches!(self, Self::Draft(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Draft(text) | Self::Message(text) => text,
        }
    }
}

pub fn classify_reply(content: &str) -> AgentReply {
    if content.contains(DRAFT_COMPLETE_MARKER) {
        AgentReply::Draft(content.replace(DRAFT_COMPLETE_MARKER, "").trim().to_string())
    } else {
        AgentReply::Message(content.to_string())
    }
}

/// The draft in `content`, if the reply carries one.
pub fn take_completed_draft(content: &str) -> Option<String> {
    match classify_reply(content) {
        AgentReply::Draft(text) => Some(text),
        AgentReply::Message(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_yields_draft() {
        let reply = classify_reply("DRAFT_COMPLETE:\n\nNDA\n\n1. Parties");
        assert!(reply.is_draft());
        assert_eq!(reply.text(), "NDA\n\n1. Parties");
    }

    #[test]
    fn marker_anywhere_is_removed() {
        assert_eq!(
            take_completed_draft("Done. DRAFT_COMPLETE: LEASE AGREEMENT").as_deref(),
            Some("Done.  LEASE AGREEMENT")
        );
    }

    #[test]
    fn plain_message() {
        let reply = classify_reply("What is the employee's start date?");
        assert_eq!(
            reply,
            AgentReply::Message("What is the employee's start date?".to_string())
        );
        assert_eq!(take_completed_draft(reply.text()), None);
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert!(!classify_reply("draft_complete: x").is_draft());
    }
}
