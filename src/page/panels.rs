//! Plain-text renderers for each page section

use std::fmt::Write;

use crate::domain::curriculum::{
    BloomLevel, COURSE_EXAMPLES, FAILURE_PROBLEMS, FOOTER_NOTE, HERO_FEATURES, HERO_SUBTITLE,
    HERO_TITLE, PLO_CATALOG,
};
use crate::domain::widget::{GeneratorWidget, PromptTemplateWidget, USAGE_STEPS};

pub(super) fn hero() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", HERO_TITLE);
    let _ = writeln!(out, "{}", HERO_SUBTITLE);
    let _ = writeln!(out);
    for feature in HERO_FEATURES {
        let _ = writeln!(out, "  * {}", feature);
    }
    out
}

pub(super) fn framework_overview() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Every course outcome should connect to at least one Program Learning Outcome."
    );
    let _ = writeln!(out);
    for plo in &PLO_CATALOG {
        let _ = writeln!(out, "  {}  [{}]", plo.reference_line(), plo.stage);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Bloom's Taxonomy action verbs:");
    for level in BloomLevel::ALL {
        let _ = writeln!(out, "  {}", level.verb_line());
    }
    out
}

pub(super) fn why_outcomes_fail() -> String {
    let mut out = String::new();
    for (i, problem) in FAILURE_PROBLEMS.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{}", problem.title);
        let _ = writeln!(out, "{}", problem.description);
        for example in &problem.weak {
            let _ = writeln!(out, "  x {} ({})", example.text, example.note);
        }
        for example in &problem.strong {
            let _ = writeln!(out, "  + {} [{}]", example.text, example.note);
        }
    }
    out
}

pub(super) fn before_after() -> String {
    let mut out = String::new();
    for (i, course) in COURSE_EXAMPLES.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let plos = course
            .plos
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{}: {} ({} credits, PLOs: {})",
            course.code, course.title, course.credits, plos
        );
        let _ = writeln!(out, "  Before:");
        for line in course.before {
            let _ = writeln!(out, "    - {}", line);
        }
        let _ = writeln!(out, "  After:");
        for line in course.after {
            let _ = writeln!(out, "    - {}", line);
        }
    }
    out
}

pub(super) fn generator(widget: &GeneratorWidget) -> String {
    let mut out = String::new();
    let course = widget.course();
    let plos = widget
        .selected_plos()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(
        out,
        "Provider: {} ({})",
        widget.provider().display_name(),
        widget.model()
    );
    let _ = writeln!(
        out,
        "API key: {}",
        if widget.has_api_key() { "set" } else { "not set" }
    );
    let _ = writeln!(
        out,
        "Course: {} {}",
        if course.code.is_empty() { "-" } else { course.code.as_str() },
        if course.name.is_empty() { "(no name)" } else { course.name.as_str() }
    );
    let _ = writeln!(out, "Level: {} ({})", course.level, course.level.bloom_summary());
    let _ = writeln!(out, "PLOs: {}", if plos.is_empty() { "none" } else { plos.as_str() });
    let _ = writeln!(out, "Outcomes requested: {}", widget.outcome_count());

    if widget.is_generating() {
        let _ = writeln!(out, "Generating...");
    }

    if let Some(error) = widget.error() {
        let _ = writeln!(out, "Error: {}", error);
    }

    if !widget.outcomes().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", widget.results_text());
    }
    out
}

pub(super) fn prompt_template(widget: &PromptTemplateWidget) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", widget.visible_prompt());
    if !widget.is_showing_full() {
        let _ = writeln!(out, "...");
    }
    let _ = writeln!(out);

    for variation in widget.variations() {
        let _ = writeln!(out, "  {}: {}", variation.title, variation.description);
    }
    if let Some(variation) = widget.expanded_variation() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", variation.addition);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "How to use this prompt:");
    for (i, step) in USAGE_STEPS.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }
    out
}

pub(super) fn footer() -> String {
    format!("{}\n", FOOTER_NOTE)
}
