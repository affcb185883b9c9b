//! The guide page, composed top to bottom as plain text

mod panels;

use std::fmt;

use crate::domain::widget::{GeneratorWidget, PromptTemplateWidget};

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    FrameworkOverview,
    WhyOutcomesFail,
    BeforeAfter,
    Generator,
    PromptTemplate,
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::FrameworkOverview,
        Section::WhyOutcomesFail,
        Section::BeforeAfter,
        Section::Generator,
        Section::PromptTemplate,
        Section::Footer,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Hero => "Course Learning Outcomes",
            Self::FrameworkOverview => "The PLO Framework",
            Self::WhyOutcomesFail => "Why Traditional CLOs Fail",
            Self::BeforeAfter => "Before & After",
            Self::Generator => "CLO Generator",
            Self::PromptTemplate => "DIY Prompt Template",
            Self::Footer => "About",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// The generator panel on its own, as shown by the interactive session
pub fn generator_summary(widget: &GeneratorWidget) -> String {
    panels::generator(widget)
}

/// Page composition over the two interactive widgets
#[derive(Debug)]
pub struct Page<'a> {
    generator: &'a GeneratorWidget,
    prompt: &'a PromptTemplateWidget,
}

impl<'a> Page<'a> {
    pub fn new(generator: &'a GeneratorWidget, prompt: &'a PromptTemplateWidget) -> Self {
        Self { generator, prompt }
    }

    pub fn sections(&self) -> &'static [Section] {
        &Section::ALL
    }

    pub fn render_section(&self, section: Section) -> String {
        match section {
            Section::Hero => panels::hero(),
            Section::FrameworkOverview => panels::framework_overview(),
            Section::WhyOutcomesFail => panels::why_outcomes_fail(),
            Section::BeforeAfter => panels::before_after(),
            Section::Generator => panels::generator(self.generator),
            Section::PromptTemplate => panels::prompt_template(self.prompt),
            Section::Footer => panels::footer(),
        }
    }

    /// Every section under an underlined heading, separated by blank lines
    pub fn render(&self) -> String {
        self.sections()
            .iter()
            .map(|section| {
                let heading = section.heading();
                format!(
                    "{}\n{}\n\n{}",
                    heading,
                    "=".repeat(heading.len()),
                    self.render_section(*section)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
