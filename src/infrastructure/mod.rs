//! Infrastructure layer - HTTP providers, clipboard and logging

pub mod clipboard;
pub mod llm;
pub mod logging;

pub use clipboard::{InMemoryClipboard, TerminalClipboard};
pub use llm::{HttpClient, OutcomeGenerator};
