use super::GenerationRequest;
use crate::domain::curriculum::{find_plo, CourseLevel};
use crate::domain::llm::Message;

pub const DEFAULT_COURSE_DESCRIPTION: &str =
    "A design course focusing on fundamental skills and concepts.";

const ROLE: &str = "You are an expert curriculum designer specializing in writing measurable \
Course Learning Outcomes (CLOs) for higher education design programs.";

/// The instruction pair sent to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    pub system: String,
    pub user: String,
}

impl Instructions {
    pub fn for_request(request: &GenerationRequest) -> Self {
        Self {
            system: build_system_prompt(request.course.level, &request.plos),
            user: build_user_prompt(request),
        }
    }

    /// System and user content as a role-tagged message list
    pub fn messages(&self) -> Vec<Message> {
        vec![Message::system(&self.system), Message::user(&self.user)]
    }
}

/// Role, PLO context, level-appropriate verbs and the JSON output contract.
/// Unknown PLO ids are skipped.
pub fn build_system_prompt(level: CourseLevel, plos: &[u8]) -> String {
    let mut ids = plos.to_vec();
    ids.sort_unstable();
    ids.dedup();

    let plo_lines = ids
        .iter()
        .filter_map(|id| find_plo(*id))
        .map(|plo| plo.reference_line())
        .collect::<Vec<_>>()
        .join("\n");

    let verb_lines = level
        .bloom_levels()
        .iter()
        .map(|bloom| format!("- {}", bloom.verb_line()))
        .collect::<Vec<_>>()
        .join("\n");

    let summary = level.bloom_summary();

    format!(
        "{ROLE}

CONTEXT:
You are writing CLOs for a {level}-level course that must align to specific Program Learning Outcomes (PLOs).

PROGRAM LEARNING OUTCOMES TO ALIGN WITH:
{plo_lines}

REQUIREMENTS FOR EACH CLO:
1. MEASURABLE: Use action verbs from Bloom's Taxonomy (appropriate level: {summary})
2. SPECIFIC: Clearly state what the student will be able to do
3. ASSESSABLE: The outcome must be observable and can be evaluated
4. PLO-ALIGNED: Each CLO must explicitly connect to 1-3 of the provided PLOs
5. CONSISTENT: Use parallel structure and consistent language

BLOOM'S TAXONOMY VERBS FOR THIS LEVEL:
{verb_lines}

For a {level} course, focus on: {summary} levels.

OUTPUT FORMAT:
Return a JSON array of CLOs. Each CLO should have:
- \"text\": The complete CLO statement starting with an action verb
- \"plos\": Array of PLO numbers this aligns to (e.g., [1, 4])
- \"bloomLevel\": The Bloom's level (e.g., \"{example_level}\")
- \"verb\": The action verb used

Example output:
{example}

Return ONLY the JSON array, no additional text.",
        example_level = level.bloom_levels()[level.bloom_levels().len() - 1],
        example = example_output(level),
    )
}

pub fn build_user_prompt(request: &GenerationRequest) -> String {
    let course = &request.course;
    let code = non_empty(&course.code).unwrap_or("N/A");
    let description = non_empty(&course.description).unwrap_or(DEFAULT_COURSE_DESCRIPTION);

    format!(
        "Generate {count} Course Learning Outcomes (CLOs) for the following course:

Course Code: {code}
Course Name: {name}
Course Description: {description}

Remember to:
- Start each CLO with an action verb appropriate for {level}-level coursework
- Map each CLO to relevant PLOs from the provided list
- Ensure outcomes are measurable and assessable",
        count = request.outcome_count,
        name = course.name.trim(),
        level = course.level,
    )
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Sample output using a verb from the level
fn example_output(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Foundational => {
            r#"[
  {
    "text": "Demonstrate foundational drawing techniques for sketching and ideation processes",
    "plos": [1, 4],
    "bloomLevel": "Apply",
    "verb": "Demonstrate"
  }
]"#
        }
        CourseLevel::Intermediate => {
            r#"[
  {
    "text": "Analyze works of design using design frameworks and methodologies",
    "plos": [1, 3],
    "bloomLevel": "Analyze",
    "verb": "Analyze"
  }
]"#
        }
        CourseLevel::Advanced => {
            r#"[
  {
    "text": "Construct functional prototypes using a variety of materials",
    "plos": [3, 4],
    "bloomLevel": "Create",
    "verb": "Construct"
  }
]"#
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::{BloomLevel, PLO_CATALOG};
    use crate::domain::generation::{ApiKey, CourseDetails, ProviderId};

    fn request(level: CourseLevel) -> GenerationRequest {
        GenerationRequest {
            id: 1,
            provider: ProviderId::Anthropic,
            model: "claude-sonnet-4-20250514".to_string(),
            api_key: ApiKey::new("sk-ant-test"),
            course: CourseDetails {
                code: "DESN 100".to_string(),
                name: "Drawing for Communication".to_string(),
                description: String::new(),
                level,
            },
            plos: vec![5, 1, 4],
            outcome_count: 5,
        }
    }

    #[test]
    fn test_system_prompt_lists_selected_plos_in_order() {
        let prompt = build_system_prompt(CourseLevel::Foundational, &[5, 1, 4]);

        let first = prompt.find("PLO 1: Visual Vocabulary").unwrap();
        let fourth = prompt.find("PLO 4: Design Process").unwrap();
        let fifth = prompt.find("PLO 5: Career Readiness").unwrap();
        assert!(first < fourth && fourth < fifth);
        assert!(!prompt.contains("PLO 2:"));
        assert!(!prompt.contains("PLO 6:"));
    }

    #[test]
    fn test_system_prompt_only_lists_level_verbs() {
        for level in CourseLevel::ALL {
            let prompt = build_system_prompt(level, &[1]);
            for bloom in BloomLevel::ALL {
                let listed = prompt.contains(&bloom.verb_line());
                assert_eq!(
                    listed,
                    level.bloom_levels().contains(&bloom),
                    "{} course, {} verbs",
                    level,
                    bloom
                );
            }
        }
    }

    #[test]
    fn test_example_verb_matches_level() {
        assert!(build_system_prompt(CourseLevel::Advanced, &[3]).contains("\"verb\": \"Construct\""));
        assert!(CourseLevel::Advanced.allows_verb("Construct"));
        assert!(CourseLevel::Intermediate.allows_verb("Analyze"));
        assert!(CourseLevel::Foundational.allows_verb("Demonstrate"));
    }

    #[test]
    fn test_system_prompt_skips_unknown_plos() {
        let prompt = build_system_prompt(CourseLevel::Intermediate, &[2, 9, 2]);
        assert_eq!(prompt.matches("PLO 2: Technical Skills").count(), 1);
        assert!(!prompt.contains("PLO 9"));
    }

    #[test]
    fn test_user_prompt_defaults() {
        let mut req = request(CourseLevel::Advanced);
        req.course.code = "  ".to_string();

        let prompt = build_user_prompt(&req);
        assert!(prompt.starts_with("Generate 5 Course Learning Outcomes"));
        assert!(prompt.contains("Course Code: N/A"));
        assert!(prompt.contains("Course Name: Drawing for Communication"));
        assert!(prompt.contains(&format!("Course Description: {}", DEFAULT_COURSE_DESCRIPTION)));
        assert!(prompt.contains("advanced-level coursework"));
    }

    #[test]
    fn test_instructions_messages() {
        let instructions = request(CourseLevel::Foundational).instructions();
        let messages = instructions.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, instructions.system);
        assert!(messages[1].content.contains("Course Code: DESN 100"));
        for plo in PLO_CATALOG.iter().filter(|p| [1, 4, 5].contains(&p.id)) {
            assert!(instructions.system.contains(&plo.reference_line()));
        }
    }
}
