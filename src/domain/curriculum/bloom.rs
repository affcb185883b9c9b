use std::fmt;

/// Bloom's Taxonomy cognitive levels, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BloomLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl BloomLevel {
    pub const ALL: [BloomLevel; 6] = [
        BloomLevel::Remember,
        BloomLevel::Understand,
        BloomLevel::Apply,
        BloomLevel::Analyze,
        BloomLevel::Evaluate,
        BloomLevel::Create,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Remember => "Remember",
            Self::Understand => "Understand",
            Self::Apply => "Apply",
            Self::Analyze => "Analyze",
            Self::Evaluate => "Evaluate",
            Self::Create => "Create",
        }
    }

    /// Action verbs that are acceptable at this level
    pub fn verbs(&self) -> &'static [&'static str] {
        match self {
            Self::Remember => &["Define", "Identify", "List", "Name", "Recall", "Recognize", "State"],
            Self::Understand => &[
                "Classify", "Describe", "Discuss", "Explain", "Interpret", "Summarize", "Translate",
            ],
            Self::Apply => &["Apply", "Demonstrate", "Execute", "Implement", "Produce", "Solve", "Use"],
            Self::Analyze => &[
                "Analyze", "Compare", "Contrast", "Differentiate", "Examine", "Organize", "Relate",
            ],
            Self::Evaluate => &["Assess", "Critique", "Evaluate", "Judge", "Justify", "Recommend", "Support"],
            Self::Create => &[
                "Compose", "Construct", "Create", "Design", "Develop", "Formulate", "Generate",
            ],
        }
    }

    /// `Apply: Apply, Demonstrate, ...`
    pub fn verb_line(&self) -> String {
        format!("{}: {}", self.name(), self.verbs().join(", "))
    }
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        let mut sorted = BloomLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, BloomLevel::ALL);
        assert!(BloomLevel::Remember < BloomLevel::Create);
    }

    #[test]
    fn test_every_level_has_seven_verbs() {
        for level in BloomLevel::ALL {
            assert_eq!(level.verbs().len(), 7, "{} verbs", level);
        }
    }

    #[test]
    fn test_verb_line() {
        assert_eq!(
            BloomLevel::Evaluate.verb_line(),
            "Evaluate: Assess, Critique, Evaluate, Judge, Justify, Recommend, Support"
        );
    }
}
