use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::BloomLevel;
use crate::domain::DomainError;

/// Course level, which decides the Bloom levels an outcome should target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    #[default]
    Foundational,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [
        CourseLevel::Foundational,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foundational => "foundational",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn bloom_levels(&self) -> &'static [BloomLevel] {
        match self {
            Self::Foundational => &[BloomLevel::Remember, BloomLevel::Understand, BloomLevel::Apply],
            Self::Intermediate => &[BloomLevel::Apply, BloomLevel::Analyze],
            Self::Advanced => &[BloomLevel::Analyze, BloomLevel::Evaluate, BloomLevel::Create],
        }
    }

    /// `Remember, Understand, Apply`
    pub fn bloom_summary(&self) -> String {
        self.bloom_levels()
            .iter()
            .map(BloomLevel::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn allows_verb(&self, verb: &str) -> bool {
        self.bloom_levels()
            .iter()
            .any(|level| level.verbs().iter().any(|v| v.eq_ignore_ascii_case(verb)))
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "foundational" => Ok(Self::Foundational),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(DomainError::validation(format!(
                "Unknown course level '{}', expected foundational, intermediate or advanced",
                other
            ))),
        }
    }
}
