use std::fmt;

/// Where in the degree a PLO is expected to be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionStage {
    Learn,
    Practice,
    Mastery,
}

impl fmt::Display for ProgressionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Learn => write!(f, "learn"),
            Self::Practice => write!(f, "practice"),
            Self::Mastery => write!(f, "mastery"),
        }
    }
}

/// A Program Learning Outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plo {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// Kind of outcome the PLO collects, used by the manual template
    pub focus: &'static str,
    pub stage: ProgressionStage,
}

impl Plo {
    /// `PLO 1: Visual Vocabulary - Fluency in design language`
    pub fn reference_line(&self) -> String {
        format!("PLO {}: {} - {}", self.id, self.title, self.description)
    }

    /// Reference line with the focus note appended
    pub fn definition_line(&self) -> String {
        format!("{} ({})", self.reference_line(), self.focus)
    }
}

pub const PLO_CATALOG: [Plo; 6] = [
    Plo {
        id: 1,
        title: "Visual Vocabulary",
        description: "Fluency in design language",
        focus: "knowledge-based outcomes",
        stage: ProgressionStage::Learn,
    },
    Plo {
        id: 2,
        title: "Technical Skills",
        description: "Proficiency in design tools",
        focus: "software-based outcomes",
        stage: ProgressionStage::Practice,
    },
    Plo {
        id: 3,
        title: "Design Methodologies",
        description: "Apply design systems & methods",
        focus: "design-thinking based outcomes",
        stage: ProgressionStage::Practice,
    },
    Plo {
        id: 4,
        title: "Design Process",
        description: "Engage in research, ideation, prototyping",
        focus: "process-based outcomes",
        stage: ProgressionStage::Mastery,
    },
    Plo {
        id: 5,
        title: "Career Readiness",
        description: "Communication, professionalism, problem-solving",
        focus: "professional outcomes",
        stage: ProgressionStage::Mastery,
    },
    Plo {
        id: 6,
        title: "Well-Being",
        description: "Principles for self, others, community",
        focus: "holistic outcome",
        stage: ProgressionStage::Mastery,
    },
];

pub fn find_plo(id: u8) -> Option<&'static Plo> {
    PLO_CATALOG.iter().find(|p| p.id == id)
}

pub fn is_valid_plo(id: u8) -> bool {
    find_plo(id).is_some()
}
