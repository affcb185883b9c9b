//! Prompt command - prints or copies the DIY prompt template

use clap::Args;

use crate::domain::curriculum::CourseLevel;
use crate::domain::generation::CourseDetails;
use crate::domain::prompt::{prompt_with_variation, FilledPrompt};
use crate::domain::widget::{Clipboard, PromptTemplateWidget};
use crate::infrastructure::TerminalClipboard;

#[derive(Args, Clone, Debug, Default)]
pub struct PromptArgs {
    /// Append the additional context for a course level
    #[arg(long)]
    pub level: Option<CourseLevel>,

    /// Print the whole template instead of the preview
    #[arg(long)]
    pub full: bool,

    /// Copy the template to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Fill in the course name placeholder
    #[arg(long)]
    pub course_name: Option<String>,

    /// Fill in the course code placeholder
    #[arg(long)]
    pub course_code: Option<String>,

    /// Fill in the course description placeholder
    #[arg(long)]
    pub description: Option<String>,

    /// Fill in the PLO placeholder; repeat for several
    #[arg(long = "plo", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub plo: Vec<u8>,

    /// Fill in the number of outcomes
    #[arg(long, value_parser = clap::value_parser!(u8).range(3..=6))]
    pub count: Option<u8>,
}

impl PromptArgs {
    /// The filled template, when any course detail was given
    pub fn filled(&self) -> Option<FilledPrompt> {
        let has_details = self.course_name.is_some()
            || self.course_code.is_some()
            || self.description.is_some()
            || !self.plo.is_empty()
            || self.count.is_some();

        if !has_details {
            return None;
        }

        let mut prompt = FilledPrompt::new()
            .course(CourseDetails {
                code: self.course_code.clone().unwrap_or_default(),
                name: self.course_name.clone().unwrap_or_default(),
                description: self.description.clone().unwrap_or_default(),
                level: self.level.unwrap_or_default(),
            })
            .plos(&self.plo);

        if let Some(count) = self.count {
            prompt = prompt.outcome_count(count);
        }
        if let Some(level) = self.level {
            prompt = prompt.variation(level);
        }

        Some(prompt)
    }
}

pub async fn run(args: PromptArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let mut widget = PromptTemplateWidget::new(config.feedback.copied_reset());

    println!("{}", render(&args, &mut widget));

    if args.copy {
        copy(&args, &mut widget, &TerminalClipboard::stderr());
        eprintln!("Copied!");
    }

    Ok(())
}

/// Text to print. Level variants and filled templates are always shown in
/// full.
pub fn render(args: &PromptArgs, widget: &mut PromptTemplateWidget) -> String {
    if let Some(filled) = args.filled() {
        return filled.render();
    }

    match args.level {
        Some(level) => prompt_with_variation(level),
        None => {
            if args.full != widget.is_showing_full() {
                widget.toggle_full_prompt();
            }
            widget.visible_prompt()
        }
    }
}

/// Copy the selected template; returns the copied text
pub fn copy(args: &PromptArgs, widget: &mut PromptTemplateWidget, clipboard: &dyn Clipboard) -> String {
    if let Some(filled) = args.filled() {
        return widget.copy_filled(&filled, clipboard);
    }

    match args.level {
        Some(level) => widget.copy_variation(level, clipboard),
        None => widget.copy_base(clipboard),
    }
}
