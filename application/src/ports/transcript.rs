//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording dialogue events
//! (messages appended, dispatches, failures) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the dialogue in a
//! machine-readable format (JSONL). It is observability, not conversation
//! state; nothing is ever read back.

use serde_json::Value;

/// A structured dialogue event for logging.
pub struct TranscriptEvent {
    /// Event type identifier (e.g., "user_message", "dispatch_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging dialogue events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible:
/// logging failures must never disturb the dialogue flow.
pub trait TranscriptLogger: Send + Sync {
    /// Record a dialogue event.
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when transcript logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
