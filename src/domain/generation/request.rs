use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GenerationError, Instructions, ProviderId};
use crate::domain::curriculum::CourseLevel;

/// Outcome counts the form offers
pub const OUTCOME_COUNTS: [u8; 4] = [3, 4, 5, 6];

/// User-supplied provider credential. Never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        self.0.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            f.write_str("ApiKey(<empty>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

/// Course fields from the generator form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub code: String,
    pub name: String,
    pub description: String,
    pub level: CourseLevel,
}

/// A single generation attempt, composed from the form state when the user
/// triggers it
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Fence id; only the latest id may apply its result
    pub id: u64,
    pub provider: ProviderId,
    pub model: String,
    pub api_key: ApiKey,
    pub course: CourseDetails,
    /// Selected PLO ids, ascending
    pub plos: Vec<u8>,
    pub outcome_count: u8,
}

impl GenerationRequest {
    /// Local checks done before any network call
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.api_key.is_blank() {
            return Err(GenerationError::MissingApiKey);
        }

        if self.course.name.trim().is_empty() {
            return Err(GenerationError::MissingCourseName);
        }

        Ok(())
    }

    pub fn instructions(&self) -> Instructions {
        Instructions::for_request(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: &str, name: &str) -> GenerationRequest {
        GenerationRequest {
            id: 1,
            provider: ProviderId::OpenAi,
            model: "gpt-4o".to_string(),
            api_key: ApiKey::new(key),
            course: CourseDetails {
                name: name.to_string(),
                ..Default::default()
            },
            plos: vec![1, 2],
            outcome_count: 4,
        }
    }

    #[test]
    fn test_missing_key_checked_first() {
        assert_eq!(request("", "").validate(), Err(GenerationError::MissingApiKey));
        assert_eq!(request("   ", "Drawing").validate(), Err(GenerationError::MissingApiKey));
    }

    #[test]
    fn test_missing_course_name() {
        assert_eq!(
            request("sk-test", "  ").validate(),
            Err(GenerationError::MissingCourseName)
        );
    }

    #[test]
    fn test_valid_request() {
        assert!(request("sk-test", "Drawing for Communication").validate().is_ok());
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret-value");
        let printed = format!("{:?}", request("sk-secret-value", "Drawing"));
        assert!(!printed.contains("sk-secret-value"));
        assert_eq!(format!("{:?}", key), "ApiKey(<redacted>)");
        assert_eq!(key.expose(), "sk-secret-value");
    }
}
