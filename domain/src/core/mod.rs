//! Core domain primitives

pub mod submission;

pub use submission::Submission;
