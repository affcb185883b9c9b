//! The "DIY" prompt: the generator's instructions rewritten for manual use.
//!
//! Course fields appear as bracketed placeholders, e.g.
//! `[ENTER COURSE NAME, e.g., Drawing for Communication]`. [`FilledPrompt`]
//! substitutes known values and leaves the rest for the user to edit.

use once_cell::sync::Lazy;

use crate::domain::curriculum::{BloomLevel, CourseLevel, PLO_CATALOG};
use crate::domain::generation::CourseDetails;

pub const ADDITIONAL_CONTEXT_SEPARATOR: &str = "\n\n---\n\n**Additional Context:**\n";

const CODE_PLACEHOLDER: &str = "[ENTER COURSE CODE, e.g., DESN 100]";
const NAME_PLACEHOLDER: &str = "[ENTER COURSE NAME, e.g., Drawing for Communication]";
const LEVEL_PLACEHOLDER: &str = "[foundational / intermediate / advanced]";
const DESCRIPTION_PLACEHOLDER: &str = "[ENTER BRIEF DESCRIPTION OF WHAT THE COURSE COVERS]";
const PLOS_PLACEHOLDER: &str = "[ENTER NUMBERS, e.g., 1, 2, 4, 5]";
const COUNT_PLACEHOLDER: &str = "[4-6]";

static BASE_PROMPT: Lazy<String> = Lazy::new(render_base_prompt);

/// A course-level variant of the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptVariation {
    pub level: CourseLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub addition: &'static str,
}

pub const PROMPT_VARIATIONS: [PromptVariation; 3] = [
    PromptVariation {
        level: CourseLevel::Foundational,
        title: "Foundational Course Template",
        description: "For 100-200 level introductory courses",
        addition: "Focus on Remember, Understand, and Apply levels of Bloom's Taxonomy. \
Students are building foundational knowledge and basic skills.",
    },
    PromptVariation {
        level: CourseLevel::Intermediate,
        title: "Intermediate Course Template",
        description: "For 300 level courses building on foundations",
        addition: "Focus on Apply and Analyze levels of Bloom's Taxonomy. \
Students should demonstrate application and begin critical analysis.",
    },
    PromptVariation {
        level: CourseLevel::Advanced,
        title: "Advanced/Capstone Template",
        description: "For 400+ level and senior courses",
        addition: "Focus on Analyze, Evaluate, and Create levels of Bloom's Taxonomy. \
Students should synthesize knowledge and create original work.",
    },
];

pub fn base_prompt() -> &'static str {
    BASE_PROMPT.as_str()
}

pub fn variation_for(level: CourseLevel) -> &'static PromptVariation {
    match level {
        CourseLevel::Foundational => &PROMPT_VARIATIONS[0],
        CourseLevel::Intermediate => &PROMPT_VARIATIONS[1],
        CourseLevel::Advanced => &PROMPT_VARIATIONS[2],
    }
}

/// Base prompt with the level's additional-context sentence appended
pub fn prompt_with_variation(level: CourseLevel) -> String {
    format!(
        "{}{}{}",
        base_prompt(),
        ADDITIONAL_CONTEXT_SEPARATOR,
        variation_for(level).addition
    )
}

fn render_base_prompt() -> String {
    let definitions = PLO_CATALOG
        .iter()
        .map(|plo| plo.definition_line())
        .collect::<Vec<_>>()
        .join("\n");

    let verbs = BloomLevel::ALL
        .iter()
        .map(|level| format!("**{}:** {}", level.name(), level.verbs().join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert curriculum designer specializing in writing measurable Course Learning Outcomes (CLOs) for higher education design programs.

I need you to write CLOs for the following course:

**Course Code:** {CODE_PLACEHOLDER}
**Course Name:** {NAME_PLACEHOLDER}
**Course Level:** {LEVEL_PLACEHOLDER}
**Course Description:** {DESCRIPTION_PLACEHOLDER}

**Target PLOs (select from list below):** {PLOS_PLACEHOLDER}

---

## Program Learning Outcomes Reference:
{definitions}

---

## Requirements for Each CLO:

1. **MEASURABLE**: Use action verbs from Bloom's Taxonomy
   - Foundational courses: {foundational}
   - Intermediate courses: {intermediate}
   - Advanced courses: {advanced}

2. **SPECIFIC**: Clearly state what the student will be able to do

3. **ASSESSABLE**: The outcome must be observable and can be evaluated

4. **PLO-ALIGNED**: Each CLO must explicitly connect to 1-3 of the target PLOs

5. **CONSISTENT**: Use parallel structure and consistent language

---

## Bloom's Taxonomy Action Verbs:

{verbs}

---

Please generate {COUNT_PLACEHOLDER} Course Learning Outcomes for this course. For each CLO, provide:
1. The complete CLO statement (starting with an action verb)
2. Which PLO(s) it aligns to
3. The Bloom's Taxonomy level

Format your response clearly with numbered outcomes.",
        foundational = level_verbs_note(CourseLevel::Foundational),
        intermediate = level_verbs_note(CourseLevel::Intermediate),
        advanced = level_verbs_note(CourseLevel::Advanced),
    )
}

fn level_verbs_note(level: CourseLevel) -> String {
    format!("{} verbs", level.bloom_summary())
}

/// The template with whatever course details are known filled in
#[derive(Debug, Clone, Default)]
pub struct FilledPrompt {
    course: CourseDetails,
    plos: Vec<u8>,
    outcome_count: Option<u8>,
    variation: Option<CourseLevel>,
}

impl FilledPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn course(mut self, course: CourseDetails) -> Self {
        self.course = course;
        self
    }

    pub fn plos(mut self, plos: &[u8]) -> Self {
        self.plos = plos.to_vec();
        self.plos.sort_unstable();
        self.plos.dedup();
        self
    }

    pub fn outcome_count(mut self, count: u8) -> Self {
        self.outcome_count = Some(count);
        self
    }

    pub fn variation(mut self, level: CourseLevel) -> Self {
        self.variation = Some(level);
        self
    }

    pub fn render(&self) -> String {
        let mut text = match self.variation {
            Some(level) => prompt_with_variation(level),
            None => base_prompt().to_string(),
        };

        let plos = self
            .plos
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let count = self.outcome_count.map(|c| c.to_string()).unwrap_or_default();
        let level = self.variation.map(|l| l.as_str()).unwrap_or_default();

        let substitutions = [
            (CODE_PLACEHOLDER, self.course.code.trim()),
            (NAME_PLACEHOLDER, self.course.name.trim()),
            (DESCRIPTION_PLACEHOLDER, self.course.description.trim()),
            (PLOS_PLACEHOLDER, plos.as_str()),
            (COUNT_PLACEHOLDER, count.as_str()),
            (LEVEL_PLACEHOLDER, level),
        ];

        for (placeholder, value) in substitutions {
            if !value.is_empty() {
                text = text.replace(placeholder, value);
            }
        }

        text
    }
}
