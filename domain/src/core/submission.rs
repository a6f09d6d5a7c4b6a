//! Submission value object

use serde::{Deserialize, Serialize};

/// A piece of text the user submitted through the input field (Value Object)
///
/// The raw text is kept verbatim; a submission only exists if it contains
/// something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    text: String,
}

impl Submission {
    /// Try to create a new submission, returning None for blank input
    pub fn try_new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// Get the submitted text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_keeps_text_verbatim() {
        let s = Submission::try_new("  My printer won't connect ").unwrap();
        assert_eq!(s.text(), "  My printer won't connect ");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(Submission::try_new("").is_none());
        assert!(Submission::try_new("   ").is_none());
        assert!(Submission::try_new("\n\t").is_none());
    }

    #[test]
    fn test_into_text() {
        let s = Submission::try_new("hello").unwrap();
        assert_eq!(s.into_text(), "hello");
    }
}
