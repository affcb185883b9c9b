//! Static copy for the page panels

pub const HERO_TITLE: &str = "Writing Better Course Learning Outcomes";

pub const HERO_SUBTITLE: &str = "A practical guide for design faculty: connect every course to the \
program's goals with measurable, PLO-aligned outcomes.";

pub const HERO_FEATURES: [&str; 3] = [
    "Why traditional CLOs fail",
    "Connect course to program goals",
    "Create CLOs with AI assistance",
];

pub const FOOTER_NOTE: &str = "This resource was developed to help design faculty create measurable, \
PLO-aligned Course Learning Outcomes that support student success and meet accreditation standards.";

/// A course with its outcomes before and after the rewrite
#[derive(Debug, Clone, Copy)]
pub struct CourseExample {
    pub code: &'static str,
    pub title: &'static str,
    pub credits: u8,
    pub plos: &'static [u8],
    pub before: [&'static str; 4],
    pub after: [&'static str; 4],
}

pub const COURSE_EXAMPLES: [CourseExample; 3] = [
    CourseExample {
        code: "DESN 100",
        title: "Drawing for Communication",
        credits: 4,
        plos: &[1, 2, 4, 5],
        before: [
            "Discover how Drawing can be interpreted and refined",
            "Develop an understanding of 3-D form",
            "Demonstrate problem-solving and representational drawing",
            "Create a habit of experimentation and iteration",
        ],
        after: [
            "Identify visually communicated elements of observational drawing",
            "Demonstrate foundational drawing techniques for sketching and ideation",
            "Translate ideas into pictorial form using visual methods",
            "Explain the design elements and principles",
        ],
    },
    CourseExample {
        code: "DESN 200",
        title: "Visual Thinking and Making",
        credits: 4,
        plos: &[1, 3, 4, 5, 6],
        before: [
            "Establish a practice of drawing",
            "Combine exploration to apply refinement",
            "Demonstrate interpretive art explorations",
            "Develop visual thinking skills",
        ],
        after: [
            "Analyze works of design using design frameworks and methodologies",
            "Develop and document iterative ideation processes and methods",
            "Construct functional prototypes using a variety of materials",
            "Articulate observations about a visual work of design",
        ],
    },
    CourseExample {
        code: "DESN 216",
        title: "Digital Foundations",
        credits: 4,
        plos: &[1, 2, 3, 4, 5],
        before: [
            "Differentiate between raster and vector",
            "Apply essential use of tools",
            "Issue: Affected previous versions",
            "Make specific actions",
        ],
        after: [
            "Differentiate between raster and vector graphic formats",
            "Produce raster and vector graphics to industry standards",
            "Produce digital compositions using color theory principles",
            "Communicate the work using appropriate design vocabulary",
        ],
    },
];

/// One example line on a problem card. `note` is the issue for weak
/// examples and the tag for strong ones.
#[derive(Debug, Clone, Copy)]
pub struct ProblemExample {
    pub text: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FailureProblem {
    pub title: &'static str,
    pub description: &'static str,
    pub weak: [ProblemExample; 3],
    pub strong: [ProblemExample; 3],
}

pub const FAILURE_PROBLEMS: [FailureProblem; 3] = [
    FailureProblem {
        title: "Unmeasurable Language",
        description: "Vague verbs make it impossible to assess whether students have achieved the outcome.",
        weak: [
            ProblemExample {
                text: "Understand the principles of design",
                note: "\"Understand\" cannot be observed or measured",
            },
            ProblemExample {
                text: "Appreciate visual aesthetics",
                note: "\"Appreciate\" is internal and subjective",
            },
            ProblemExample {
                text: "Know the history of graphic design",
                note: "\"Know\" offers no evidence of learning",
            },
        ],
        strong: [
            ProblemExample {
                text: "Identify and apply the principles of design in compositions",
                note: "Identify, Apply",
            },
            ProblemExample {
                text: "Critique visual works using established aesthetic frameworks",
                note: "Critique",
            },
            ProblemExample {
                text: "Trace the evolution of graphic design movements and their influences",
                note: "Trace",
            },
        ],
    },
    FailureProblem {
        title: "Section Inconsistency",
        description: "When different sections of the same course have different outcomes, \
assessment and accreditation become impossible.",
        weak: [
            ProblemExample {
                text: "Section A: \"Create digital artwork\"",
                note: "Vague scope, no standards mentioned",
            },
            ProblemExample {
                text: "Section B: \"Master Adobe Creative Suite\"",
                note: "Tool-focused, not outcome-focused",
            },
            ProblemExample {
                text: "Section C: \"Explore creative expression\"",
                note: "Unmeasurable, no clear deliverable",
            },
        ],
        strong: [
            ProblemExample {
                text: "All sections: \"Produce digital compositions using industry-standard raster and vector tools\"",
                note: "Consistent",
            },
            ProblemExample {
                text: "All sections use identical SLO language with same assessment rubrics",
                note: "Standardized",
            },
            ProblemExample {
                text: "Course coordinator reviews ensure alignment across instructors",
                note: "Governed",
            },
        ],
    },
    FailureProblem {
        title: "Weak PLO Alignment",
        description: "Course outcomes must map clearly to Program Learning Outcomes, \
showing how courses contribute to the degree's goals.",
        weak: [
            ProblemExample {
                text: "SLO exists in isolation with no PLO mapping",
                note: "Cannot demonstrate program coherence",
            },
            ProblemExample {
                text: "Forced mapping: \"This relates to PLO 3 somehow\"",
                note: "Weak or artificial connections",
            },
            ProblemExample {
                text: "All SLOs map to same PLO",
                note: "Missing coverage of program outcomes",
            },
        ],
        strong: [
            ProblemExample {
                text: "Each SLO explicitly references 1-3 relevant PLOs",
                note: "Explicit",
            },
            ProblemExample {
                text: "Curriculum map shows progression across courses",
                note: "Mapped",
            },
            ProblemExample {
                text: "Assessment data aggregates to show PLO achievement",
                note: "Measurable",
            },
        ],
    },
];
