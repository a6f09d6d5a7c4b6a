//! Fixed bot lines of the support dialogue
//!
//! Single source of truth shared by the controller and its tests.

/// First bot message of every conversation.
pub const GREETING: &str =
    "Hi, I'm Helpdesk Pilot, your corporate support assistant. How can I help you today?";

/// Appended when the user confirms the answer solved their problem.
pub const SOLVED_CONFIRMATION: &str =
    "Great, glad that helped! If you need anything else, just ask.";

/// Appended when the user says the answer did not solve their problem.
pub const HOW_TO_PROCEED: &str = "Understood. How would you like to proceed?";

/// Appended when the user chooses to open a ticket. The next text
/// submission is captured as the ticket description.
pub const TICKET_DETAILS_PROMPT: &str = "Alright. Please describe your problem in detail so an \
     expert can look into it. What you write next will be recorded in the ticket.";

/// Appended when the user chooses to keep explaining in the chat.
pub const EXPLAIN_MORE_PROMPT: &str =
    "Please describe your problem in more detail here in the chat.";

/// Appended when an ask dispatch fails (transport error or bad status).
pub const DISPATCH_FAILURE: &str = "Error: could not get a response from the server.";
