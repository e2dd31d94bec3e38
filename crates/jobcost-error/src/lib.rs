//! Error types for job cost suggestion generation.
//!
//! Two families exist:
//! - [`ConfigError`]: startup configuration is unusable (for example the API
//!   key is missing). Raised before any network call.
//! - [`GenerationError`]: a single generation call failed. The public signal
//!   only carries the [`GenerationErrorKind`] and optional key/value context;
//!   the underlying transport cause is logged at the call site and dropped.

use std::fmt;

/// Configuration problems detected at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not set")]
    MissingVar { name: String },
    #[error("{name} is set but empty")]
    EmptyVar { name: String },
    #[error("invalid {name}: {reason}")]
    Invalid { name: String, reason: String },
}

impl ConfigError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingVar { name: name.into() }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::EmptyVar { name: name.into() }
    }

    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending setting.
    pub fn name(&self) -> &str {
        match self {
            ConfigError::MissingVar { name }
            | ConfigError::EmptyVar { name }
            | ConfigError::Invalid { name, .. } => name,
        }
    }
}

/// Which stage of a generation call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// The request value could not be turned into a prompt.
    Prompt,
    /// The completion service could not be reached, rejected the call, or
    /// returned no candidate text.
    Transport,
    /// The candidate text is not valid JSON.
    Parse,
    /// The JSON does not match the `groups`/`children` shape.
    Shape,
}

impl GenerationErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            GenerationErrorKind::Prompt => "prompt construction failed",
            GenerationErrorKind::Transport => "service call failed",
            GenerationErrorKind::Parse => "response parse failed",
            GenerationErrorKind::Shape => "response shape invalid",
        }
    }
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationErrorKind::Prompt => write!(f, "prompt"),
            GenerationErrorKind::Transport => write!(f, "transport"),
            GenerationErrorKind::Parse => write!(f, "parse"),
            GenerationErrorKind::Shape => write!(f, "shape"),
        }
    }
}

/// A failed generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    context: Vec<(String, String)>,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind) -> Self {
        Self {
            kind,
            context: Vec::new(),
        }
    }

    pub fn prompt() -> Self {
        Self::new(GenerationErrorKind::Prompt)
    }

    pub fn transport() -> Self {
        Self::new(GenerationErrorKind::Transport)
    }

    pub fn parse() -> Self {
        Self::new(GenerationErrorKind::Parse)
    }

    pub fn shape() -> Self {
        Self::new(GenerationErrorKind::Shape)
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    pub fn kind(&self) -> GenerationErrorKind {
        self.kind
    }

    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Value recorded under `key`, if any.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_transport_error(&self) -> bool {
        self.kind == GenerationErrorKind::Transport
    }

    pub fn is_parse_error(&self) -> bool {
        self.kind == GenerationErrorKind::Parse
    }

    pub fn is_shape_error(&self) -> bool {
        self.kind == GenerationErrorKind::Shape
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())?;

        if !self.context.is_empty() {
            write!(f, " (")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for GenerationError {}

pub type Result<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kind_display() {
        assert_eq!(GenerationErrorKind::Transport.to_string(), "transport");
        assert_eq!(GenerationErrorKind::Parse.to_string(), "parse");
        assert_eq!(GenerationErrorKind::Shape.to_string(), "shape");
        assert_eq!(GenerationErrorKind::Prompt.to_string(), "prompt");
    }

    #[test]
    fn generation_error_messages() {
        assert_eq!(GenerationError::transport().to_string(), "service call failed");
        assert_eq!(GenerationError::parse().to_string(), "response parse failed");
        assert_eq!(GenerationError::shape().to_string(), "response shape invalid");
    }

    #[test]
    fn context_rendered_in_display() {
        let err = GenerationError::shape()
            .with_context("path", "groups[0].children")
            .with_context("expected", "array");
        assert_eq!(
            err.to_string(),
            "response shape invalid (path=groups[0].children, expected=array)"
        );
        assert_eq!(err.context_value("expected"), Some("array"));
        assert_eq!(err.context_value("missing"), None);
    }

    #[test]
    fn kind_predicates() {
        assert!(GenerationError::transport().is_transport_error());
        assert!(GenerationError::parse().is_parse_error());
        assert!(GenerationError::shape().is_shape_error());
        assert!(!GenerationError::prompt().is_transport_error());
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::missing("OPENAI_API_KEY").to_string(),
            "OPENAI_API_KEY is not set"
        );
        assert_eq!(
            ConfigError::empty("OPENAI_API_KEY").to_string(),
            "OPENAI_API_KEY is set but empty"
        );
        let invalid = ConfigError::invalid("JOBCOST_LLM_TIMEOUT_SECS", "must be positive");
        assert_eq!(
            invalid.to_string(),
            "invalid JOBCOST_LLM_TIMEOUT_SECS: must be positive"
        );
        assert_eq!(invalid.name(), "JOBCOST_LLM_TIMEOUT_SECS");
    }

    proptest! {
        #[test]
        fn display_always_starts_with_kind_message(
            key in "[a-z]{1,8}",
            value in "[ -~]{0,20}",
        ) {
            for kind in [
                GenerationErrorKind::Prompt,
                GenerationErrorKind::Transport,
                GenerationErrorKind::Parse,
                GenerationErrorKind::Shape,
            ] {
                let err = GenerationError::new(kind).with_context(key.clone(), value.clone());
                let text = err.to_string();
                prop_assert!(text.starts_with(kind.message()));
                let expected = format!("{key}={value}");
                prop_assert!(text.contains(&expected));
            }
        }
    }
}
