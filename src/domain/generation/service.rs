use async_trait::async_trait;
use std::fmt::Debug;

use super::{GeneratedOutcome, GenerationError, GenerationRequest};

/// Anything that can turn a validated request into outcomes. Implemented by
/// the HTTP dispatcher in the infrastructure layer.
#[async_trait]
pub trait OutcomeService: Send + Sync + Debug {
    /// Perform exactly one generation attempt
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<GeneratedOutcome>, GenerationError>;
}
