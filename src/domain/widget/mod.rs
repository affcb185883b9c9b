//! Interactive widget state
//!
//! Each widget is an owned struct mutated only through its transition
//! methods. Nothing here is shared between widgets.

mod clipboard;
mod feedback;
mod generator;
mod prompt_template;

pub use clipboard::Clipboard;
pub use feedback::{CopyFeedback, DEFAULT_COPY_RESET};
pub use generator::{GeneratorWidget, DEFAULT_PLOS, DEFAULT_OUTCOME_COUNT};
pub use prompt_template::{PromptTemplateWidget, PREVIEW_LINES, USAGE_STEPS};

#[cfg(test)]
pub use clipboard::MockClipboard;
