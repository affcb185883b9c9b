use std::collections::BTreeSet;
use std::time::Duration;

use tracing::{debug, warn};

use super::{Clipboard, CopyFeedback, DEFAULT_COPY_RESET};
use crate::domain::curriculum::{is_valid_plo, CourseLevel};
use crate::domain::generation::{
    format_for_clipboard, ApiKey, CourseDetails, GeneratedOutcome, GenerationError,
    GenerationRequest, OutcomeService, ProviderId, OUTCOME_COUNTS,
};
use crate::domain::DomainError;

pub const DEFAULT_PLOS: [u8; 4] = [1, 2, 4, 5];
pub const DEFAULT_OUTCOME_COUNT: u8 = 4;

/// Form and result state of the AI outcome generator
#[derive(Debug)]
pub struct GeneratorWidget {
    provider: ProviderId,
    model: String,
    api_key: ApiKey,
    course: CourseDetails,
    selected_plos: BTreeSet<u8>,
    outcome_count: u8,
    outcomes: Vec<GeneratedOutcome>,
    error: Option<String>,
    /// Id of the request whose result may still be applied
    in_flight: Option<u64>,
    last_request_id: u64,
    copied: CopyFeedback,
}

impl GeneratorWidget {
    pub fn new(copy_reset: Duration) -> Self {
        let provider = ProviderId::default();

        Self {
            provider,
            model: provider.default_model().to_string(),
            api_key: ApiKey::default(),
            course: CourseDetails::default(),
            selected_plos: DEFAULT_PLOS.into_iter().collect(),
            outcome_count: DEFAULT_OUTCOME_COUNT,
            outcomes: Vec::new(),
            error: None,
            in_flight: None,
            last_request_id: 0,
            copied: CopyFeedback::new(copy_reset),
        }
    }

    pub fn provider(&self) -> ProviderId {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_blank()
    }

    pub fn course(&self) -> &CourseDetails {
        &self.course
    }

    /// Selected PLO ids, ascending
    pub fn selected_plos(&self) -> Vec<u8> {
        self.selected_plos.iter().copied().collect()
    }

    pub fn outcome_count(&self) -> u8 {
        self.outcome_count
    }

    pub fn outcomes(&self) -> &[GeneratedOutcome] {
        &self.outcomes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_copied()
    }

    /// The trigger is disabled while busy or while required fields are empty
    pub fn can_generate(&self) -> bool {
        !self.is_generating() && self.has_api_key() && !self.course.name.trim().is_empty()
    }

    pub fn select_provider(&mut self, provider: ProviderId) {
        self.provider = provider;
        self.model = provider.default_model().to_string();
    }

    pub fn select_model(&mut self, model: &str) -> Result<(), DomainError> {
        let info = self.provider.info();

        if !info.has_model(model) {
            return Err(DomainError::validation(format!(
                "Model '{}' is not offered by {} (available: {})",
                model,
                info.name,
                info.models.join(", ")
            )));
        }

        self.model = model.to_string();
        Ok(())
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = ApiKey::new(key);
    }

    pub fn set_course_name(&mut self, name: impl Into<String>) {
        self.course.name = name.into();
    }

    pub fn set_course_code(&mut self, code: impl Into<String>) {
        self.course.code = code.into();
    }

    pub fn set_course_description(&mut self, description: impl Into<String>) {
        self.course.description = description.into();
    }

    pub fn set_course_level(&mut self, level: CourseLevel) {
        self.course.level = level;
    }

    /// Flip membership of a PLO; returns whether it is now selected
    pub fn toggle_plo(&mut self, id: u8) -> Result<bool, DomainError> {
        if !is_valid_plo(id) {
            return Err(DomainError::validation(format!(
                "PLO {} does not exist (expected 1-6)",
                id
            )));
        }

        if self.selected_plos.remove(&id) {
            Ok(false)
        } else {
            self.selected_plos.insert(id);
            Ok(true)
        }
    }

    /// Replace the whole selection. Nothing changes if any id is unknown.
    pub fn select_plos(&mut self, ids: &[u8]) -> Result<(), DomainError> {
        if let Some(id) = ids.iter().find(|id| !is_valid_plo(**id)) {
            return Err(DomainError::validation(format!(
                "PLO {} does not exist (expected 1-6)",
                id
            )));
        }

        self.selected_plos = ids.iter().copied().collect();
        Ok(())
    }

    pub fn set_outcome_count(&mut self, count: u8) -> Result<(), DomainError> {
        if !OUTCOME_COUNTS.contains(&count) {
            return Err(DomainError::validation(format!(
                "Outcome count must be one of 3, 4, 5 or 6 (got {})",
                count
            )));
        }

        self.outcome_count = count;
        Ok(())
    }

    /// Validate the form and start a generation attempt.
    ///
    /// On success the previous results and error are cleared, the widget is
    /// marked busy, and the returned request carries the id that
    /// [`complete_generation`](Self::complete_generation) must echo back.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, GenerationError> {
        if self.is_generating() {
            return Err(GenerationError::Busy);
        }

        let request = GenerationRequest {
            id: self.last_request_id + 1,
            provider: self.provider,
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            course: self.course.clone(),
            plos: self.selected_plos(),
            outcome_count: self.outcome_count,
        };

        if let Err(e) = request.validate() {
            self.error = Some(e.to_string());
            return Err(e);
        }

        self.last_request_id = request.id;
        self.in_flight = Some(request.id);
        self.error = None;
        self.outcomes.clear();

        debug!(request_id = request.id, provider = %request.provider, "Generation started");
        Ok(request)
    }

    /// Apply the result of request `id`. Stale results are dropped and
    /// `false` is returned.
    pub fn complete_generation(
        &mut self,
        id: u64,
        result: Result<Vec<GeneratedOutcome>, GenerationError>,
    ) -> bool {
        if self.in_flight != Some(id) {
            debug!(request_id = id, "Discarding stale generation result");
            return false;
        }

        self.in_flight = None;

        match result {
            Ok(outcomes) => {
                self.outcomes = outcomes;
                self.error = None;
            }
            Err(e) => {
                warn!(request_id = id, error = %e, "Generation failed");
                self.outcomes.clear();
                self.error = Some(e.to_string());
            }
        }

        true
    }

    /// Abandon the in-flight request; its result will be ignored
    pub fn cancel_generation(&mut self) {
        if let Some(id) = self.in_flight.take() {
            debug!(request_id = id, "Generation cancelled");
        }
    }

    /// Run one full generation through `service`
    pub async fn generate(&mut self, service: &dyn OutcomeService) -> Result<(), GenerationError> {
        let request = self.begin_generation()?;
        let result = service.generate(&request).await;
        let failure = result.as_ref().err().cloned();

        self.complete_generation(request.id, result);

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Text produced by "Copy All"
    pub fn results_text(&self) -> String {
        format_for_clipboard(&self.outcomes)
    }

    /// Copy the results and show the indicator. Returns `false` when there is
    /// nothing to copy.
    pub fn copy_results(&mut self, clipboard: &dyn Clipboard) -> Result<bool, DomainError> {
        if self.outcomes.is_empty() {
            return Ok(false);
        }

        clipboard.write_text(&self.results_text())?;
        self.copied.trigger();
        Ok(true)
    }
}

impl Default for GeneratorWidget {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_RESET)
    }
}
