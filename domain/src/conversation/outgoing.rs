//! Submission classification
//!
//! Decides, from the current flow mode, what an outgoing text submission
//! looks like on the wire: the final question string, whether it appears
//! in the visible log, and the flow mode to apply before dispatch.

use crate::conversation::flow::FlowMode;

/// Sentinel understood by the backend: a question starting with this prefix
/// files a support ticket whose description is the substring after the colon.
pub const TICKET_ACTION_PREFIX: &str = "ACTION_CREATE_TICKET:";

/// A classified submission, ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingQuestion {
    /// The question string sent to the backend.
    pub text: String,
    /// Whether the outgoing text is appended to the log as a user message.
    pub visible: bool,
    /// Flow mode to apply before the dispatch is issued.
    pub mode_before_dispatch: FlowMode,
}

/// Classify a text submission against the current flow mode.
///
/// In [`FlowMode::AwaitingTicketDescription`] the raw text becomes a
/// sentinel-prefixed ticket action, hidden from the log, and the mode drops
/// back to [`FlowMode::Idle`]. In every other mode the text passes through
/// unchanged and visible.
pub fn classify_submission(mode: FlowMode, raw_text: &str) -> OutgoingQuestion {
    match mode {
        FlowMode::AwaitingTicketDescription => OutgoingQuestion {
            text: format!("{TICKET_ACTION_PREFIX}{raw_text}"),
            visible: false,
            mode_before_dispatch: FlowMode::Idle,
        },
        other => OutgoingQuestion {
            text: raw_text.to_string(),
            visible: true,
            mode_before_dispatch: other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_submission_passes_through() {
        let outgoing = classify_submission(FlowMode::Idle, "How do I reset my password?");
        assert_eq!(outgoing.text, "How do I reset my password?");
        assert!(outgoing.visible);
        assert_eq!(outgoing.mode_before_dispatch, FlowMode::Idle);
    }

    #[test]
    fn test_ticket_description_is_prefixed_and_hidden() {
        let outgoing = classify_submission(
            FlowMode::AwaitingTicketDescription,
            "My printer won't connect",
        );
        assert_eq!(outgoing.text, "ACTION_CREATE_TICKET:My printer won't connect");
        assert!(!outgoing.visible);
        assert_eq!(outgoing.mode_before_dispatch, FlowMode::Idle);
    }

    #[test]
    fn test_button_modes_pass_text_through() {
        // The presentation layer never submits text in these modes, but the
        // rule table is total: text passes through unchanged.
        for mode in [FlowMode::AwaitingFeedback, FlowMode::AwaitingFollowUp] {
            let outgoing = classify_submission(mode, "stray text");
            assert_eq!(outgoing.text, "stray text");
            assert!(outgoing.visible);
            assert_eq!(outgoing.mode_before_dispatch, mode);
        }
    }

    #[test]
    fn test_prefix_preserves_description_verbatim() {
        let outgoing = classify_submission(FlowMode::AwaitingTicketDescription, "a: b: c");
        assert_eq!(outgoing.text, "ACTION_CREATE_TICKET:a: b: c");
    }
}
