//! Curriculum reference data
//!
//! Read-only catalogs shared by the generator, the manual prompt template and
//! the page panels: Program Learning Outcomes, Bloom's Taxonomy verbs, course
//! levels, and the before/after example content.

mod bloom;
mod content;
mod level;
mod plo;

pub use bloom::BloomLevel;
pub use content::{
    CourseExample, FailureProblem, ProblemExample, COURSE_EXAMPLES, FAILURE_PROBLEMS,
    FOOTER_NOTE, HERO_FEATURES, HERO_SUBTITLE, HERO_TITLE,
};
pub use level::CourseLevel;
pub use plo::{find_plo, is_valid_plo, Plo, ProgressionStage, PLO_CATALOG};
