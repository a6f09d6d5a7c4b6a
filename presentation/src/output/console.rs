//! Console output formatter for conversation messages

use colored::Colorize;
use pilot_domain::{Message, Sender};

/// Formats conversation messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single log entry with its sender prefix
    pub fn format_message(message: &Message) -> String {
        match message.sender {
            Sender::Bot => format!("{} {}", "pilot>".cyan().bold(), message.content),
            Sender::User => format!("{} {}", "  you>".green().bold(), message.content),
        }
    }

    /// Format the numbered feedback options
    pub fn format_feedback_options() -> String {
        format!(
            "  {} Yes, that solved it    {} No, I need more help",
            "[1]".yellow().bold(),
            "[2]".yellow().bold()
        )
    }

    /// Format the numbered follow-up options
    pub fn format_follow_up_options() -> String {
        format!(
            "  {} Open a support ticket  {} Explain my problem further",
            "[1]".yellow().bold(),
            "[2]".yellow().bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pilot_domain::MessageId;

    #[test]
    fn test_bot_message_carries_pilot_prefix() {
        let message = Message::bot(MessageId(0), "Click 'Forgot password'.");
        let line = ConsoleFormatter::format_message(&message);
        assert!(line.contains("pilot>"));
        assert!(line.contains("Click 'Forgot password'."));
    }

    #[test]
    fn test_user_message_carries_you_prefix() {
        let message = Message::user(MessageId(1), "How do I reset my password?");
        let line = ConsoleFormatter::format_message(&message);
        assert!(line.contains("you>"));
        assert!(line.contains("How do I reset my password?"));
    }

    #[test]
    fn test_option_lines_number_both_choices() {
        let feedback = ConsoleFormatter::format_feedback_options();
        assert!(feedback.contains("[1]"));
        assert!(feedback.contains("[2]"));

        let follow_up = ConsoleFormatter::format_follow_up_options();
        assert!(follow_up.contains("ticket"));
        assert!(follow_up.contains("Explain"));
    }
}
