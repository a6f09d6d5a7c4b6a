//! Conversation domain: log entities, flow state machine, submission rules

pub mod entities;
pub mod flow;
pub mod outgoing;
pub mod script;
pub mod state;

pub use entities::{Message, MessageId, Sender};
pub use flow::{Feedback, FlowMode, FollowUpChoice, InputSurface};
pub use outgoing::{OutgoingQuestion, TICKET_ACTION_PREFIX, classify_submission};
pub use state::Conversation;
