//! Conversation aggregate

use crate::conversation::entities::{Message, MessageId};
use crate::conversation::flow::FlowMode;
use crate::conversation::script;

/// The mutable state of one support conversation (Aggregate)
///
/// Created once at session start with a single bot greeting, mutated only
/// through the dialogue controller, and discarded when the session ends.
/// The log is append-only; message ids are monotonic.
#[derive(Debug, Clone)]
pub struct Conversation {
    log: Vec<Message>,
    next_id: u64,
    pending_input: String,
    busy: bool,
    flow_mode: FlowMode,
}

impl Conversation {
    /// Create a freshly greeted conversation in [`FlowMode::Idle`]
    pub fn new() -> Self {
        let mut conversation = Self {
            log: Vec::new(),
            next_id: 0,
            pending_input: String::new(),
            busy: false,
            flow_mode: FlowMode::Idle,
        };
        conversation.push_bot(script::GREETING);
        conversation
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a user message and return it
    pub fn push_user(&mut self, content: impl Into<String>) -> &Message {
        let id = self.allocate_id();
        self.log.push(Message::user(id, content));
        self.log.last().unwrap()
    }

    /// Append a bot message and return it
    pub fn push_bot(&mut self, content: impl Into<String>) -> &Message {
        let id = self.allocate_id();
        self.log.push(Message::bot(id, content));
        self.log.last().unwrap()
    }

    /// The full message log, in insertion order
    pub fn log(&self) -> &[Message] {
        &self.log
    }

    pub fn flow_mode(&self) -> FlowMode {
        self.flow_mode
    }

    pub fn set_flow_mode(&mut self, mode: FlowMode) {
        self.flow_mode = mode;
    }

    /// True while an ask dispatch is outstanding
    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Text the user is currently composing, not yet part of the log
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn clear_pending_input(&mut self) {
        self.pending_input.clear();
    }

    /// Restore the freshly greeted state, discarding the log
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::Sender;

    #[test]
    fn test_new_conversation_starts_with_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.log().len(), 1);
        let greeting = &conversation.log()[0];
        assert_eq!(greeting.sender, Sender::Bot);
        assert_eq!(greeting.content, script::GREETING);
        assert_eq!(conversation.flow_mode(), FlowMode::Idle);
        assert!(!conversation.busy());
        assert!(conversation.pending_input().is_empty());
    }

    #[test]
    fn test_message_ids_are_monotonic() {
        let mut conversation = Conversation::new();
        conversation.push_user("first");
        conversation.push_bot("second");
        conversation.push_user("third");

        let ids: Vec<u64> = conversation.log().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_log_preserves_insertion_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("question");
        conversation.push_bot("answer");

        let contents: Vec<&str> = conversation
            .log()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec![script::GREETING, "question", "answer"]);
    }

    #[test]
    fn test_reset_restores_greeted_state() {
        let mut conversation = Conversation::new();
        conversation.push_user("question");
        conversation.set_flow_mode(FlowMode::AwaitingFeedback);
        conversation.set_pending_input("half-typed");

        conversation.reset();

        assert_eq!(conversation.log().len(), 1);
        assert_eq!(conversation.log()[0].content, script::GREETING);
        assert_eq!(conversation.flow_mode(), FlowMode::Idle);
        assert!(conversation.pending_input().is_empty());
        // Ids restart with the new conversation
        assert_eq!(conversation.log()[0].id.0, 0);
    }

    #[test]
    fn test_pending_input_roundtrip() {
        let mut conversation = Conversation::new();
        conversation.set_pending_input("typing...");
        assert_eq!(conversation.pending_input(), "typing...");
        conversation.clear_pending_input();
        assert!(conversation.pending_input().is_empty());
    }
}
