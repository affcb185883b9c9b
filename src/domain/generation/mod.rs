//! Outcome generation domain
//!
//! Provider catalog, the request composed from form state, the instruction
//! text sent to the model, the provider adapter seam, and parsing of the
//! returned outcome array.

mod adapter;
mod error;
mod instructions;
mod outcome;
mod provider;
mod request;
mod service;

pub use adapter::{ProviderAdapter, ProviderRequest};
pub use error::GenerationError;
pub use instructions::{build_system_prompt, build_user_prompt, Instructions, DEFAULT_COURSE_DESCRIPTION};
pub use outcome::{format_for_clipboard, parse_outcomes, GeneratedOutcome};
pub use provider::{ProviderId, ProviderInfo, PROVIDERS};
pub use request::{ApiKey, CourseDetails, GenerationRequest, OUTCOME_COUNTS};
pub use service::OutcomeService;

#[cfg(test)]
pub use service::mock::MockOutcomeService;
