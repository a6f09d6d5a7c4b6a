//! Dialogue flow state machine
//!
//! The flow mode decides how the next user intent is interpreted:
//!
//! ```text
//! Idle --(ask, follow_up_required)--> AwaitingFeedback
//! Idle --(ask, no follow-up)--> Idle
//! AwaitingFeedback --(solved)--> Idle
//! AwaitingFeedback --(not solved)--> AwaitingFollowUp
//! AwaitingFollowUp --(explain more)--> Idle
//! AwaitingFollowUp --(create ticket)--> AwaitingTicketDescription
//! AwaitingTicketDescription --(submit text)--> Idle
//! ```
//!
//! There is no terminal state; the machine cycles for the life of the
//! session.

use crate::conversation::script;
use serde::{Deserialize, Serialize};

/// Flow mode of the dialogue, exactly one active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowMode {
    /// Free text is an ordinary question
    Idle,
    /// Waiting for "did this solve your problem?"
    AwaitingFeedback,
    /// Waiting for the escalation choice
    AwaitingFollowUp,
    /// The next free text is the ticket description
    AwaitingTicketDescription,
}

impl Default for FlowMode {
    fn default() -> Self {
        Self::Idle
    }
}

impl FlowMode {
    /// The control surface the presentation layer must show in this mode.
    ///
    /// Total: every mode maps to exactly one surface, so free-text entry
    /// and the two button groups are mutually exclusive.
    pub fn input_surface(self) -> InputSurface {
        match self {
            Self::Idle | Self::AwaitingTicketDescription => InputSurface::TextEntry,
            Self::AwaitingFeedback => InputSurface::FeedbackButtons,
            Self::AwaitingFollowUp => InputSurface::FollowUpButtons,
        }
    }
}

/// The single active control surface derived from [`FlowMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSurface {
    /// Free-text input is enabled
    TextEntry,
    /// "Yes, solved" / "No, I need more help"
    FeedbackButtons,
    /// "Open a ticket" / "Explain my problem further"
    FollowUpButtons,
}

/// The user's answer to "did this solve your problem?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Solved,
    NotSolved,
}

/// The user's choice between escalation paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpChoice {
    CreateTicket,
    ExplainMore,
}

/// Resolve a feedback answer into the bot line to append and the next mode.
///
/// Pure local transition, no backend call. Only valid while the mode is
/// [`FlowMode::AwaitingFeedback`]; the caller guards the mode.
pub fn resolve_feedback(feedback: Feedback) -> (&'static str, FlowMode) {
    match feedback {
        Feedback::Solved => (script::SOLVED_CONFIRMATION, FlowMode::Idle),
        Feedback::NotSolved => (script::HOW_TO_PROCEED, FlowMode::AwaitingFollowUp),
    }
}

/// Resolve an escalation choice into the bot line to append and the next mode.
///
/// Pure local transition, no backend call. Choosing a ticket only switches
/// to description capture; the dispatch happens on the next text submission.
pub fn resolve_follow_up(choice: FollowUpChoice) -> (&'static str, FlowMode) {
    match choice {
        FollowUpChoice::CreateTicket => {
            (script::TICKET_DETAILS_PROMPT, FlowMode::AwaitingTicketDescription)
        }
        FollowUpChoice::ExplainMore => (script::EXPLAIN_MORE_PROMPT, FlowMode::Idle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_idle() {
        assert_eq!(FlowMode::default(), FlowMode::Idle);
    }

    #[test]
    fn test_every_mode_has_exactly_one_surface() {
        assert_eq!(FlowMode::Idle.input_surface(), InputSurface::TextEntry);
        assert_eq!(
            FlowMode::AwaitingTicketDescription.input_surface(),
            InputSurface::TextEntry
        );
        assert_eq!(
            FlowMode::AwaitingFeedback.input_surface(),
            InputSurface::FeedbackButtons
        );
        assert_eq!(
            FlowMode::AwaitingFollowUp.input_surface(),
            InputSurface::FollowUpButtons
        );
    }

    #[test]
    fn test_feedback_solved_returns_to_idle() {
        let (line, next) = resolve_feedback(Feedback::Solved);
        assert_eq!(line, script::SOLVED_CONFIRMATION);
        assert_eq!(next, FlowMode::Idle);
    }

    #[test]
    fn test_feedback_not_solved_asks_how_to_proceed() {
        let (line, next) = resolve_feedback(Feedback::NotSolved);
        assert_eq!(line, script::HOW_TO_PROCEED);
        assert_eq!(next, FlowMode::AwaitingFollowUp);
    }

    #[test]
    fn test_create_ticket_prompts_for_description() {
        let (line, next) = resolve_follow_up(FollowUpChoice::CreateTicket);
        assert_eq!(line, script::TICKET_DETAILS_PROMPT);
        assert_eq!(next, FlowMode::AwaitingTicketDescription);
    }

    #[test]
    fn test_explain_more_returns_to_idle() {
        let (line, next) = resolve_follow_up(FollowUpChoice::ExplainMore);
        assert_eq!(line, script::EXPLAIN_MORE_PROMPT);
        assert_eq!(next, FlowMode::Idle);
    }
}
