//! LLM-backed cost suggestion generation.
//!
//! [`CostSuggestionGenerator`] turns a [`CostSuggestionRequest`] into a
//! prompt, sends it through an injected [`LlmBackend`] with fixed sampling
//! parameters, and returns the parsed, shape-checked response.

mod client;
mod config;
mod wire;

pub use client::{
    FailingLlmBackend, LlmBackend, MockLlmBackend, OpenAiCompatibleBackend, RecordingLlmBackend,
};
pub use config::{
    API_KEY_VAR, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENDPOINT_VAR, LlmConfig, TIMEOUT_VAR,
};
pub use wire::{ChatMessage, ChatRequest, ResponseFormat, Role};

use jobcost_error::GenerationError;
use jobcost_ports::CostSuggester;
use jobcost_schema::{CostSuggestionRequest, CostSuggestionResponse};
use tracing::{debug, error, info};

/// Chat model used for every call.
pub const MODEL: &str = "gpt-4o";
/// Low temperature keeps suggestions close to deterministic.
pub const TEMPERATURE: f64 = 0.3;
/// Candidates requested per call.
pub const CANDIDATES: u32 = 1;

/// Generates cost suggestions through a completion backend.
///
/// Holds no state between calls. Each [`generate`](Self::generate) issues
/// exactly one backend call; there is no retry.
pub struct CostSuggestionGenerator {
    backend: Box<dyn LlmBackend>,
}

impl CostSuggestionGenerator {
    pub fn new(backend: Box<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    /// Generator talking to the configured OpenAI-compatible endpoint.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(Box::new(OpenAiCompatibleBackend::from_config(config)))
    }

    /// The request body sent for `request`: two system turns, the request as
    /// compact JSON in the user turn, and the fixed sampling parameters.
    pub fn chat_request(request: &CostSuggestionRequest) -> Result<ChatRequest, GenerationError> {
        let prompt = jobcost_suggest_prompt::build_prompt(request).map_err(|e| {
            error!(error = %e, "could not serialize cost suggestion request");
            GenerationError::prompt()
        })?;

        let mut messages: Vec<ChatMessage> =
            prompt.system.into_iter().map(ChatMessage::system).collect();
        messages.push(ChatMessage::user(prompt.user));

        Ok(ChatRequest {
            model: MODEL.to_string(),
            messages,
            temperature: TEMPERATURE,
            n: CANDIDATES,
            response_format: ResponseFormat::json_object(),
        })
    }

    pub fn generate(
        &self,
        request: &CostSuggestionRequest,
    ) -> Result<CostSuggestionResponse, GenerationError> {
        let chat = Self::chat_request(request)?;

        info!(
            model = MODEL,
            job = %request.job.name,
            existing_groups = request.cost_groups.len(),
            "requesting cost suggestions"
        );

        let text = self.backend.complete(&chat).map_err(|e| {
            let cause = format!("{e:#}");
            error!(%cause, "completion service call failed");
            GenerationError::transport()
        })?;
        debug!(bytes = text.len(), "completion text received");

        let response = jobcost_suggest_parse::parse_suggestion_response(&text).map_err(|e| {
            error!(error = %e, "completion text rejected");
            e
        })?;

        info!(
            groups = response.group_count(),
            categories = response.category_count(),
            "cost suggestions generated"
        );
        Ok(response)
    }
}

impl CostSuggester for CostSuggestionGenerator {
    fn suggest(
        &self,
        request: &CostSuggestionRequest,
    ) -> Result<CostSuggestionResponse, GenerationError> {
        self.generate(request)
    }
}
