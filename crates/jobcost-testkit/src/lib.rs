//! Shared fixtures for jobcost tests: canned requests and responses,
//! completion bodies, a BDD harness, proptest strategies and a mocked
//! completion endpoint.

use jobcost_schema::{CostGroup, CostSuggestionRequest, CostSuggestionResponse};

pub mod bdd;
pub mod http;
pub mod proptest;

/// The first canned job: name and notes only.
pub fn bare_request() -> CostSuggestionRequest {
    jobcost_samples::sample(1)
        .expect("canned sample 1 exists")
        .request
}

pub fn request_with_groups() -> CostSuggestionRequest {
    CostSuggestionRequest::new("Multi-day Construction Project", "3 day project downtown")
        .with_company("Heavy Rentals sells machinery like bobcats, excavators, and bulldozers")
        .with_cost_group(CostGroup::new("Truck Delivery", ["Truck 1", "Truck 2"]))
        .with_cost_group(CostGroup::new("Delivery Labor", ["DSR1", "DSR2"]))
}

pub fn small_response() -> CostSuggestionResponse {
    CostSuggestionResponse::new(vec![
        CostGroup::new("Equipment Rental", ["Bobcat Rental", "Concrete Mixer Rental"]),
        CostGroup::new("Labor", ["Operator Wages"]),
        CostGroup::empty("Permits and Fees"),
    ])
}

/// Body of an OpenAI-style chat completion whose single candidate carries
/// `content` as its message text.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// Completion body for a recorded sample response.
pub fn recorded_completion_body(sample: usize) -> String {
    completion_body(jobcost_samples::recorded_response(sample).unwrap_or("{}"))
}
