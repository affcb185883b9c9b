use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::GenerationError;

/// Matches a reply wrapped in a single Markdown code fence
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[a-zA-Z]*\s*(.*?)\s*```\s*$").expect("valid code fence regex")
});

/// One generated Course Learning Outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOutcome {
    pub text: String,
    #[serde(alias = "categories")]
    pub plos: Vec<u8>,
    #[serde(rename = "bloomLevel", alias = "level")]
    pub bloom_level: String,
    pub verb: String,
}

/// Decode the model's reply as an outcome array
pub fn parse_outcomes(text: &str) -> Result<Vec<GeneratedOutcome>, GenerationError> {
    let payload = CODE_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text)
        .trim();

    if payload.is_empty() {
        return Err(GenerationError::malformed("empty response from provider"));
    }

    serde_json::from_str(payload).map_err(|e| GenerationError::malformed(e.to_string()))
}

/// Plain-text layout used by "Copy All"
pub fn format_for_clipboard(outcomes: &[GeneratedOutcome]) -> String {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| {
            let plos = outcome
                .plos
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");

            format!(
                "{}. {} (PLOs: {} | Bloom's Level: {})",
                i + 1,
                outcome.text,
                plos,
                outcome.bloom_level
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(text: &str, plos: &[u8], level: &str, verb: &str) -> GeneratedOutcome {
        GeneratedOutcome {
            text: text.to_string(),
            plos: plos.to_vec(),
            bloom_level: level.to_string(),
            verb: verb.to_string(),
        }
    }

    #[test]
    fn test_parse_plain_array() {
        let text = r#"[{"text": "Identify visual elements", "plos": [1], "bloomLevel": "Remember", "verb": "Identify"}]"#;
        let parsed = parse_outcomes(text).unwrap();
        assert_eq!(parsed, vec![outcome("Identify visual elements", &[1], "Remember", "Identify")]);
    }

    #[test]
    fn test_parse_accepts_alias_fields() {
        let text = r#"[{"text": "Critique works", "categories": [3, 5], "level": "Evaluate", "verb": "Critique"}]"#;
        let parsed = parse_outcomes(text).unwrap();
        assert_eq!(parsed[0].plos, vec![3, 5]);
        assert_eq!(parsed[0].bloom_level, "Evaluate");
    }

    #[test]
    fn test_parse_strips_code_fence() {
        let text = "```json\n[{\"text\": \"Use tools\", \"plos\": [2], \"bloomLevel\": \"Apply\", \"verb\": \"Use\"}]\n```";
        let parsed = parse_outcomes(text).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].verb, "Use");
    }

    #[test]
    fn test_parse_strips_single_line_fence() {
        let item = r#"{"text": "Use tools", "plos": [2], "bloomLevel": "Apply", "verb": "Use"}"#;

        for text in [format!("```json [{}] ```", item), format!("```[{}]```", item)] {
            let parsed = parse_outcomes(&text).unwrap();
            assert_eq!(parsed, vec![outcome("Use tools", &[2], "Apply", "Use")], "{}", text);
        }
    }

    #[test]
    fn test_parse_rejects_prose() {
        let error = parse_outcomes("Here are your outcomes: 1. Define...").unwrap_err();
        assert!(matches!(error, GenerationError::MalformedResponse { .. }));
        assert!(error.to_string().starts_with("Failed to generate CLOs: "));
    }

    #[test]
    fn test_parse_rejects_object_and_missing_fields() {
        assert!(parse_outcomes(r#"{"text": "x"}"#).is_err());
        assert!(parse_outcomes(r#"[{"text": "x", "plos": [1]}]"#).is_err());
        assert!(parse_outcomes("   ").is_err());
    }

    #[test]
    fn test_format_for_clipboard() {
        let outcomes = vec![
            outcome("Define design terms", &[1], "Remember", "Define"),
            outcome("Produce raster graphics", &[2, 4], "Apply", "Produce"),
            outcome("Explain color theory", &[1, 3, 5], "Understand", "Explain"),
        ];

        let text = format_for_clipboard(&outcomes);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        for (i, (line, outcome)) in lines.iter().zip(&outcomes).enumerate() {
            assert!(line.starts_with(&format!("{}. ", i + 1)));
            assert!(line.contains(&outcome.text));
            assert!(line.contains(&outcome.bloom_level));
        }
        assert_eq!(
            lines[1],
            "2. Produce raster graphics (PLOs: 2, 4 | Bloom's Level: Apply)"
        );
        assert!(lines[2].contains("PLOs: 1, 3, 5"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_for_clipboard(&[]), "");
    }
}
