//! Domain layer for helpdesk-pilot
//!
//! This crate contains the core business logic of the support dialogue:
//! the conversation aggregate, the flow-mode state machine, and the
//! submission classification rules. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Dialogue Flow
//!
//! The conversation cycles through four mutually exclusive flow modes:
//!
//! - **Idle**: free text is treated as an ordinary question
//! - **AwaitingFeedback**: the user answers "did this solve it?"
//! - **AwaitingFollowUp**: the user picks an escalation path
//! - **AwaitingTicketDescription**: the next free text becomes ticket content
//!
//! ## Ticket Sentinel
//!
//! A ticket description is sent to the backend as
//! `ACTION_CREATE_TICKET:<description>`. The prefix is a backend protocol
//! detail and must never appear in the visible log.

pub mod conversation;
pub mod core;

// Re-export commonly used types
pub use conversation::{
    entities::{Message, MessageId, Sender},
    flow::{Feedback, FlowMode, FollowUpChoice, InputSurface, resolve_feedback, resolve_follow_up},
    outgoing::{OutgoingQuestion, TICKET_ACTION_PREFIX, classify_submission},
    script,
    state::Conversation,
};
pub use core::submission::Submission;
