use jobcost_error::ConfigError;
use std::fmt;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const ENDPOINT_VAR: &str = "JOBCOST_LLM_ENDPOINT";
pub const TIMEOUT_VAR: &str = "JOBCOST_LLM_TIMEOUT_SECS";

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the completion service.
///
/// Model and sampling parameters are not configurable; they are fixed by
/// the generator.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    pub api_endpoint: String,
    /// API key for authentication
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(jobcost_env::process_env)
    }

    /// Load through `lookup`.
    ///
    /// `OPENAI_API_KEY` is required and must not be blank. The endpoint and
    /// timeout fall back to defaults when unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = jobcost_env::require(&lookup, API_KEY_VAR)?;

        let api_endpoint = match jobcost_env::optional(&lookup, ENDPOINT_VAR) {
            Some(raw) => validate_endpoint(raw.trim())?,
            None => DEFAULT_ENDPOINT.to_string(),
        };

        let timeout_secs = match jobcost_env::parse_optional::<u64, _>(&lookup, TIMEOUT_VAR)? {
            Some(0) => return Err(ConfigError::invalid(TIMEOUT_VAR, "must be at least 1")),
            Some(secs) => secs,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_endpoint,
            api_key,
            timeout_secs,
        })
    }
}

fn validate_endpoint(raw: &str) -> Result<String, ConfigError> {
    let url = url::Url::parse(raw).map_err(|e| ConfigError::invalid(ENDPOINT_VAR, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(ConfigError::invalid(
            ENDPOINT_VAR,
            format!("unsupported scheme {other:?}"),
        )),
    }
}

impl fmt::Debug for LlmConfig {
    #[mutants::skip] // diagnostics only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_endpoint", &self.api_endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
