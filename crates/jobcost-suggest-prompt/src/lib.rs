//! Prompt construction for cost suggestions.
//!
//! The prompt is fully determined by the request: two fixed system turns
//! (output format, then role) followed by one user turn holding the request
//! serialized as compact JSON.

use jobcost_schema::{CostGroup, CostSuggestionRequest, CostSuggestionResponse};

const FORMAT_PREFIX: &str =
    "Output all responses in JSON. The response should follow the format like ";

const ROLE_INSTRUCTION: &str = "You generate Cost Groups for a job, each with its children Cost \
categories. The request describes the job by name and notes, and may include a description of \
the company and the Cost Groups it already uses. Come up with new ideas: treat the information \
in the request as inspiration, not as a limit on what you suggest.";

/// Messages for one completion call, in send order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub system: Vec<String>,
    pub user: String,
}

/// Response skeleton embedded in the format instruction: one group with an
/// empty name and no children.
pub fn example_response() -> CostSuggestionResponse {
    CostSuggestionResponse::new(vec![CostGroup::empty("")])
}

/// First system turn: answer in JSON shaped like [`example_response`].
pub fn format_instruction() -> String {
    let skeleton = serde_json::to_string(&example_response())
        .unwrap_or_else(|_| r#"{"groups":[{"name":"","children":[]}]}"#.to_string());
    format!("{FORMAT_PREFIX}{skeleton}")
}

/// Second system turn: what the assistant is for.
pub fn role_instruction() -> &'static str {
    ROLE_INSTRUCTION
}

/// User turn: the whole request as compact JSON.
pub fn user_message(request: &CostSuggestionRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string(request)
}

pub fn build_prompt(request: &CostSuggestionRequest) -> Result<Prompt, serde_json::Error> {
    Ok(Prompt {
        system: vec![format_instruction(), role_instruction().to_string()],
        user: user_message(request)?,
    })
}
