use crate::config::LlmConfig;
use crate::wire::{ChatCompletion, ChatRequest};
use anyhow::{Context, Result};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Abstraction over chat-completion APIs. Enables testing with mocks.
///
/// Returns the message text of the first candidate.
pub trait LlmBackend {
    fn complete(&self, request: &ChatRequest) -> Result<String>;
}

/// Backend that speaks the OpenAI chat completions protocol.
pub struct OpenAiCompatibleBackend {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl OpenAiCompatibleBackend {
    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            endpoint: config.api_endpoint.clone(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

impl LlmBackend for OpenAiCompatibleBackend {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .build()?;

        let resp = client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .context("completion API request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            anyhow::bail!("completion API returned {status}: {text}");
        }

        let completion: ChatCompletion = resp.json().context("decode completion response")?;
        completion
            .into_first_content()
            .ok_or_else(|| anyhow::anyhow!("no candidate content in completion response"))
    }
}

impl fmt::Debug for OpenAiCompatibleBackend {
    #[mutants::skip] // diagnostics only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatibleBackend")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Backend that answers every call with fixed text.
///
/// Also used by the CLI to replay recorded responses.
pub struct MockLlmBackend {
    pub response: String,
}

impl LlmBackend for MockLlmBackend {
    fn complete(&self, _request: &ChatRequest) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// Mock backend that always fails.
pub struct FailingLlmBackend;

impl LlmBackend for FailingLlmBackend {
    fn complete(&self, _request: &ChatRequest) -> Result<String> {
        anyhow::bail!("LLM backend failed (mock)")
    }
}

/// Mock backend that keeps every request it receives.
///
/// Clones share the same log, so a test can hand one clone to the generator
/// and inspect the other.
#[derive(Clone)]
pub struct RecordingLlmBackend {
    response: Option<String>,
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

impl RecordingLlmBackend {
    /// Records, then answers with `response`.
    pub fn replying(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            calls: Arc::default(),
        }
    }

    /// Records, then fails.
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl LlmBackend for RecordingLlmBackend {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        self.calls
            .lock()
            .map_err(|_| anyhow::anyhow!("recording backend lock poisoned"))?
            .push(request.clone());
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("LLM backend failed (recording mock)"),
        }
    }
}
