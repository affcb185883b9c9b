use thiserror::Error;

/// Failures of a generation attempt. `Display` is the message shown to the
/// user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Please enter your API key")]
    MissingApiKey,

    #[error("Please enter a course name")]
    MissingCourseName,

    #[error("A generation is already in progress")]
    Busy,

    #[error("Network error contacting {provider}: {message}")]
    Transport { provider: String, message: String },

    /// Non-success status with a vendor-supplied message
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("API request failed")]
    ApiFallback { status: u16 },

    #[error("Failed to generate CLOs: {message}")]
    MalformedResponse { message: String },
}

impl GenerationError {
    pub fn transport(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Error for a non-success status, preferring the vendor's own message
    pub fn from_status(status: u16, vendor_message: Option<String>) -> Self {
        match vendor_message {
            Some(message) if !message.trim().is_empty() => Self::Api { status, message },
            _ => Self::ApiFallback { status },
        }
    }

    /// True for failures caught before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::MissingCourseName | Self::Busy)
    }
}
