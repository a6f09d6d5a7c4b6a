//! REPL (Read-Eval-Print Loop) for the interactive support chat
//!
//! Reads whichever control surface the controller says is active: a
//! free-text prompt in Idle and ticket-description modes, numbered choice
//! prompts while the feedback or follow-up buttons are visible. Input is
//! only ever read between dispatches, so the controller's busy window
//! never sees a submission.

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::BusySpinner;
use pilot_application::{AnswerGateway, DialogueController, TranscriptLogger};
use pilot_domain::{Feedback, FollowUpChoice, InputSurface};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Interactive support chat REPL
pub struct ChatRepl {
    controller: DialogueController,
    show_progress: bool,
    history_file: Option<PathBuf>,
    rendered: usize,
}

impl ChatRepl {
    /// Create a new ChatRepl over the given backend gateway
    pub fn new(gateway: Arc<dyn AnswerGateway>) -> Self {
        Self {
            controller: DialogueController::new(gateway),
            show_progress: true,
            history_file: None,
            rendered: 0,
        }
    }

    /// Set whether to show the busy spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set a custom readline history file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Record the dialogue to a transcript logger
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.controller.set_transcript_logger(logger);
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("helpdesk-pilot").join("history.txt"))
        });

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.render_new_messages();

        loop {
            let keep_going = match self.controller.input_surface() {
                InputSurface::TextEntry => self.read_text(&mut rl).await?,
                InputSurface::FeedbackButtons => self.read_feedback(&mut rl)?,
                InputSurface::FollowUpButtons => self.read_follow_up(&mut rl)?,
            };
            if !keep_going {
                break;
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// One free-text round. Returns false when the REPL should exit.
    async fn read_text(&mut self, rl: &mut DefaultEditor) -> RlResult<bool> {
        match rl.readline(">>> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    return Ok(true);
                }

                if line.trim_start().starts_with('/') {
                    let exit = self.handle_command(line.trim());
                    self.render_new_messages();
                    return Ok(!exit);
                }

                let _ = rl.add_history_entry(line.as_str());
                self.process_submission(&line).await;
                Ok(true)
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(true)
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                Ok(false)
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                Ok(false)
            }
        }
    }

    /// One feedback-button round. Returns false when the REPL should exit.
    fn read_feedback(&mut self, rl: &mut DefaultEditor) -> RlResult<bool> {
        println!("{}", ConsoleFormatter::format_feedback_options());
        match rl.readline("choose [1-2]> ") {
            Ok(line) => {
                match parse_feedback(&line) {
                    Some(feedback) => {
                        self.controller.choose_feedback(feedback);
                        self.render_new_messages();
                    }
                    None => println!("Please answer 1 (solved) or 2 (not solved)."),
                }
                Ok(true)
            }
            Err(ReadlineError::Interrupted) => Ok(true),
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                Ok(false)
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                Ok(false)
            }
        }
    }

    /// One follow-up-button round. Returns false when the REPL should exit.
    fn read_follow_up(&mut self, rl: &mut DefaultEditor) -> RlResult<bool> {
        println!("{}", ConsoleFormatter::format_follow_up_options());
        match rl.readline("choose [1-2]> ") {
            Ok(line) => {
                match parse_follow_up(&line) {
                    Some(choice) => {
                        self.controller.choose_follow_up(choice);
                        self.render_new_messages();
                    }
                    None => println!("Please answer 1 (open a ticket) or 2 (explain more)."),
                }
                Ok(true)
            }
            Err(ReadlineError::Interrupted) => Ok(true),
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                Ok(false)
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                Ok(false)
            }
        }
    }

    async fn process_submission(&mut self, line: &str) {
        if self.show_progress {
            let spinner = BusySpinner::start("Contacting the knowledge base...");
            self.controller.submit_text(line).await;
            spinner.finish();
        } else {
            self.controller.submit_text(line).await;
        }
        self.render_new_messages();
    }

    /// Print log entries appended since the last render
    fn render_new_messages(&mut self) {
        for message in &self.controller.log()[self.rendered.min(self.controller.log().len())..] {
            println!("{}", ConsoleFormatter::format_message(message));
        }
        self.rendered = self.controller.log().len();
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Helpdesk Pilot - Support Chat       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /new      - Start a new conversation");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /new             - Start a new conversation");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/new" => {
                self.controller.reset();
                self.rendered = 0;
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}

/// Map a typed choice onto the feedback answer
fn parse_feedback(input: &str) -> Option<Feedback> {
    match input.trim().to_lowercase().as_str() {
        "1" | "y" | "yes" => Some(Feedback::Solved),
        "2" | "n" | "no" => Some(Feedback::NotSolved),
        _ => None,
    }
}

/// Map a typed choice onto the escalation path
fn parse_follow_up(input: &str) -> Option<FollowUpChoice> {
    match input.trim().to_lowercase().as_str() {
        "1" | "t" | "ticket" => Some(FollowUpChoice::CreateTicket),
        "2" | "e" | "explain" => Some(FollowUpChoice::ExplainMore),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feedback_accepts_numbers_and_words() {
        assert_eq!(parse_feedback("1"), Some(Feedback::Solved));
        assert_eq!(parse_feedback("yes"), Some(Feedback::Solved));
        assert_eq!(parse_feedback(" Y "), Some(Feedback::Solved));
        assert_eq!(parse_feedback("2"), Some(Feedback::NotSolved));
        assert_eq!(parse_feedback("no"), Some(Feedback::NotSolved));
        assert_eq!(parse_feedback("maybe"), None);
        assert_eq!(parse_feedback(""), None);
    }

    #[test]
    fn test_parse_follow_up_accepts_numbers_and_words() {
        assert_eq!(parse_follow_up("1"), Some(FollowUpChoice::CreateTicket));
        assert_eq!(parse_follow_up("ticket"), Some(FollowUpChoice::CreateTicket));
        assert_eq!(parse_follow_up("2"), Some(FollowUpChoice::ExplainMore));
        assert_eq!(parse_follow_up("explain"), Some(FollowUpChoice::ExplainMore));
        assert_eq!(parse_follow_up("3"), None);
    }
}
