use std::time::Duration;

use tracing::warn;

use super::{Clipboard, CopyFeedback, DEFAULT_COPY_RESET};
use crate::domain::curriculum::CourseLevel;
use crate::domain::prompt::{
    base_prompt, prompt_with_variation, FilledPrompt, PromptVariation, PROMPT_VARIATIONS,
};
use crate::domain::DomainError;

/// Lines shown before "Show Full Prompt"
pub const PREVIEW_LINES: usize = 12;

pub const USAGE_STEPS: [&str; 5] = [
    "Copy the prompt above",
    "Paste it into your preferred AI chat tool (ChatGPT, Claude, Gemini, etc.)",
    "Replace the bracketed placeholders with your course information",
    "Review and refine the generated CLOs as needed",
    "Ensure consistency across all sections of the same course",
];

/// UI state of the copyable prompt template
#[derive(Debug)]
pub struct PromptTemplateWidget {
    show_full: bool,
    expanded: Option<usize>,
    copied: CopyFeedback,
}

impl PromptTemplateWidget {
    pub fn new(copy_reset: Duration) -> Self {
        Self {
            show_full: false,
            expanded: None,
            copied: CopyFeedback::new(copy_reset),
        }
    }

    pub fn is_showing_full(&self) -> bool {
        self.show_full
    }

    pub fn toggle_full_prompt(&mut self) {
        self.show_full = !self.show_full;
    }

    /// Prompt text as currently displayed
    pub fn visible_prompt(&self) -> String {
        if self.show_full {
            base_prompt().to_string()
        } else {
            base_prompt()
                .lines()
                .take(PREVIEW_LINES)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    pub fn variations(&self) -> &'static [PromptVariation] {
        &PROMPT_VARIATIONS
    }

    /// Expand a variation's addition, or collapse it if already expanded.
    /// Only one variation is expanded at a time.
    pub fn toggle_variation(&mut self, index: usize) -> Result<(), DomainError> {
        if index >= PROMPT_VARIATIONS.len() {
            return Err(DomainError::validation(format!(
                "Variation {} does not exist",
                index
            )));
        }

        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };

        Ok(())
    }

    pub fn expanded_variation(&self) -> Option<&'static PromptVariation> {
        self.expanded.map(|i| &PROMPT_VARIATIONS[i])
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_copied()
    }

    /// Copy the base template
    pub fn copy_base(&mut self, clipboard: &dyn Clipboard) -> String {
        let text = base_prompt().to_string();
        self.copy(clipboard, &text);
        text
    }

    /// Copy the template with a level's additional context
    pub fn copy_variation(&mut self, level: CourseLevel, clipboard: &dyn Clipboard) -> String {
        let text = prompt_with_variation(level);
        self.copy(clipboard, &text);
        text
    }

    /// Copy the template with known course details filled in
    pub fn copy_filled(&mut self, prompt: &FilledPrompt, clipboard: &dyn Clipboard) -> String {
        let text = prompt.render();
        self.copy(clipboard, &text);
        text
    }

    // Best effort: a failed write is logged, the indicator still shows.
    fn copy(&mut self, clipboard: &dyn Clipboard, text: &str) {
        if let Err(e) = clipboard.write_text(text) {
            warn!(error = %e, "Failed to copy prompt to clipboard");
        }
        self.copied.trigger();
    }
}

impl Default for PromptTemplateWidget {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_RESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::ADDITIONAL_CONTEXT_SEPARATOR;
    use crate::domain::generation::CourseDetails;
    use crate::domain::widget::MockClipboard;

    #[test]
    fn test_preview_and_full_prompt() {
        let mut widget = PromptTemplateWidget::default();
        assert_eq!(widget.visible_prompt().lines().count(), PREVIEW_LINES);

        widget.toggle_full_prompt();
        assert!(widget.is_showing_full());
        assert_eq!(widget.visible_prompt(), base_prompt());
    }

    #[test]
    fn test_only_one_variation_expanded() {
        let mut widget = PromptTemplateWidget::default();
        assert!(widget.expanded_variation().is_none());

        widget.toggle_variation(0).unwrap();
        widget.toggle_variation(2).unwrap();
        assert_eq!(
            widget.expanded_variation().map(|v| v.level),
            Some(CourseLevel::Advanced)
        );

        widget.toggle_variation(2).unwrap();
        assert!(widget.expanded_variation().is_none());
        assert!(widget.toggle_variation(3).is_err());
    }

    #[tokio::test]
    async fn test_copy_variation_writes_extended_prompt() {
        let mut widget = PromptTemplateWidget::default();
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text.contains(ADDITIONAL_CONTEXT_SEPARATOR) && text.ends_with("basic skills."))
            .times(1)
            .returning(|_| Ok(()));

        widget.copy_variation(CourseLevel::Foundational, &clipboard);
        assert!(widget.is_copied());
    }

    #[tokio::test]
    async fn test_copy_failure_is_best_effort() {
        let mut widget = PromptTemplateWidget::default();
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(DomainError::clipboard("no terminal")));

        let text = widget.copy_base(&clipboard);
        assert_eq!(text, base_prompt());
        assert!(widget.is_copied());
    }

    #[tokio::test]
    async fn test_copy_filled_prompt() {
        let mut widget = PromptTemplateWidget::default();
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text.contains("Digital Foundations") && !text.contains("[ENTER COURSE NAME"))
            .times(1)
            .returning(|_| Ok(()));

        let prompt = FilledPrompt::new().course(CourseDetails {
            name: "Digital Foundations".to_string(),
            ..Default::default()
        });

        widget.copy_filled(&prompt, &clipboard);
        assert!(widget.is_copied());
    }
}
