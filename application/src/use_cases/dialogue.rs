//! Dialogue controller use case.
//!
//! Owns the conversation state and the flow state machine. Every user
//! intent (text submission, feedback click, follow-up click) enters here,
//! mutates the conversation, and optionally issues exactly one backend
//! call. The presentation layer reads the resulting state and re-renders.
//!
//! Concurrency: the controller is driven from a single-threaded event loop
//! and needs no internal locking. The `busy` flag gates submissions while a
//! dispatch is outstanding; the presentation layer disables input during
//! that window, and the controller additionally ignores submissions that
//! slip through.

use crate::ports::answer_gateway::AnswerGateway;
use crate::ports::transcript::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use pilot_domain::{
    Conversation, Feedback, FlowMode, FollowUpChoice, InputSurface, Message, OutgoingQuestion,
    Submission, classify_submission, resolve_feedback, resolve_follow_up, script,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Controller for one support conversation
///
/// Created once at session start; the conversation it owns begins with the
/// bot greeting in [`FlowMode::Idle`] and cycles through the flow machine
/// for the life of the session. Every failure path lands back in `Idle`, so
/// the user can always keep typing.
pub struct DialogueController {
    conversation: Conversation,
    gateway: Arc<dyn AnswerGateway>,
    transcript: Arc<dyn TranscriptLogger>,
}

impl DialogueController {
    pub fn new(gateway: Arc<dyn AnswerGateway>) -> Self {
        Self {
            conversation: Conversation::new(),
            gateway,
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Create with a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Set a transcript logger (mutator).
    pub fn set_transcript_logger(&mut self, logger: Arc<dyn TranscriptLogger>) {
        self.transcript = logger;
    }

    // ==================== Views ====================

    /// The message log, in display order
    pub fn log(&self) -> &[Message] {
        self.conversation.log()
    }

    /// True while an ask dispatch is outstanding
    pub fn busy(&self) -> bool {
        self.conversation.busy()
    }

    /// Text the user is composing
    pub fn pending_input(&self) -> &str {
        self.conversation.pending_input()
    }

    pub fn flow_mode(&self) -> FlowMode {
        self.conversation.flow_mode()
    }

    /// The single control surface the presentation layer must show
    pub fn input_surface(&self) -> InputSurface {
        self.conversation.flow_mode().input_surface()
    }

    pub fn feedback_buttons_visible(&self) -> bool {
        self.conversation.flow_mode() == FlowMode::AwaitingFeedback
    }

    pub fn follow_up_buttons_visible(&self) -> bool {
        self.conversation.flow_mode() == FlowMode::AwaitingFollowUp
    }

    // ==================== Intents ====================

    /// Track the text the user is composing
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.conversation.set_pending_input(text);
    }

    /// Submit free text from the input field.
    ///
    /// Blank input and submissions arriving while busy are ignored. The
    /// text is classified against the current flow mode (an ordinary
    /// question, or sentinel-prefixed ticket content) and dispatched to the
    /// backend.
    pub async fn submit_text(&mut self, raw_text: &str) {
        if self.conversation.busy() {
            warn!("Text submission ignored: a dispatch is still outstanding");
            return;
        }
        let Some(submission) = Submission::try_new(raw_text) else {
            return;
        };

        let outgoing = classify_submission(self.conversation.flow_mode(), submission.text());
        self.conversation
            .set_flow_mode(outgoing.mode_before_dispatch);
        self.dispatch(outgoing).await;
    }

    /// Handle the answer to "did this solve your problem?".
    ///
    /// No-op outside [`FlowMode::AwaitingFeedback`]. Pure local transition,
    /// no backend call.
    pub fn choose_feedback(&mut self, feedback: Feedback) {
        if self.conversation.flow_mode() != FlowMode::AwaitingFeedback {
            debug!(?feedback, "Feedback intent ignored outside AwaitingFeedback");
            return;
        }

        let (line, next_mode) = resolve_feedback(feedback);
        self.conversation.push_bot(line);
        self.conversation.set_flow_mode(next_mode);
        self.transcript.log(TranscriptEvent::new(
            "feedback",
            serde_json::json!({
                "solved": feedback == Feedback::Solved,
            }),
        ));
    }

    /// Handle the choice between escalation paths.
    ///
    /// No-op outside [`FlowMode::AwaitingFollowUp`]. Choosing a ticket only
    /// prompts for the description; the actual ticket dispatch happens on
    /// the next text submission.
    pub fn choose_follow_up(&mut self, choice: FollowUpChoice) {
        if self.conversation.flow_mode() != FlowMode::AwaitingFollowUp {
            debug!(?choice, "Follow-up intent ignored outside AwaitingFollowUp");
            return;
        }

        let (line, next_mode) = resolve_follow_up(choice);
        self.conversation.push_bot(line);
        self.conversation.set_flow_mode(next_mode);
        self.transcript.log(TranscriptEvent::new(
            "follow_up_choice",
            serde_json::json!({
                "create_ticket": choice == FollowUpChoice::CreateTicket,
            }),
        ));
    }

    /// Discard the conversation and start over with a fresh greeting
    pub fn reset(&mut self) {
        debug!("Conversation reset");
        self.conversation.reset();
        self.transcript
            .log(TranscriptEvent::new("conversation_reset", serde_json::json!({})));
    }

    // ==================== Dispatch ====================

    /// Send a classified submission to the backend and fold the reply into
    /// the conversation. Exactly one gateway call per invocation.
    async fn dispatch(&mut self, outgoing: OutgoingQuestion) {
        if outgoing.visible {
            let message = self.conversation.push_user(&outgoing.text);
            self.transcript.log(TranscriptEvent::new(
                "user_message",
                serde_json::json!({
                    "id": message.id.0,
                    "content": message.content,
                }),
            ));
        }

        self.conversation.set_busy(true);

        match self.gateway.ask(&outgoing.text).await {
            Ok(reply) => {
                debug!(
                    follow_up_required = reply.follow_up_required,
                    "Received answer from backend"
                );
                let message = self.conversation.push_bot(&reply.answer);
                self.transcript.log(TranscriptEvent::new(
                    "bot_message",
                    serde_json::json!({
                        "id": message.id.0,
                        "content": message.content,
                        "follow_up_required": reply.follow_up_required,
                    }),
                ));
                let next_mode = if reply.follow_up_required {
                    FlowMode::AwaitingFeedback
                } else {
                    FlowMode::Idle
                };
                self.conversation.set_flow_mode(next_mode);
            }
            Err(e) => {
                warn!("Ask dispatch failed: {}", e);
                self.conversation.push_bot(script::DISPATCH_FAILURE);
                self.transcript.log(TranscriptEvent::new(
                    "dispatch_failed",
                    serde_json::json!({
                        "error": e.to_string(),
                    }),
                ));
                self.conversation.set_flow_mode(FlowMode::Idle);
            }
        }

        self.conversation.set_busy(false);
        self.conversation.clear_pending_input();
    }
}
