//! Domain layer - curriculum content, generation contracts and widget state

pub mod curriculum;
pub mod error;
pub mod generation;
pub mod llm;
pub mod prompt;
pub mod widget;

pub use curriculum::{BloomLevel, CourseLevel, Plo, PLO_CATALOG};
pub use error::DomainError;
pub use generation::{
    ApiKey, CourseDetails, GeneratedOutcome, GenerationError, GenerationRequest, Instructions,
    OutcomeService, ProviderAdapter, ProviderId, ProviderRequest,
};
pub use llm::{Message, MessageRole};
pub use widget::{Clipboard, CopyFeedback, GeneratorWidget, PromptTemplateWidget};
