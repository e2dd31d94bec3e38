//! Proptest strategies for jobcost property-based testing
//!
//! Reusable strategies for generating requests and responses across the
//! jobcost crates.

use jobcost_schema::{Company, CostGroup, CostSuggestionRequest, CostSuggestionResponse, Job};
use proptest::prelude::*;

/// Free text as a user or a model might write it: unicode, quotes,
/// backslashes, newlines, and the empty string.
pub fn strategy_free_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 ,.()&'-]{1,60}",
        "\\PC{0,40}",
        "[\"\\\\\n\t ]{1,5}[a-z]{0,10}",
    ]
}

/// Strategy for generating a cost group with up to 8 children
pub fn strategy_cost_group() -> impl Strategy<Value = CostGroup> {
    (
        strategy_free_text(),
        prop::collection::vec(strategy_free_text(), 0..8),
    )
        .prop_map(|(name, children)| CostGroup { name, children })
}

pub fn strategy_company() -> impl Strategy<Value = Option<Company>> {
    prop::option::of(strategy_free_text().prop_map(|description| Company { description }))
}

pub fn strategy_job() -> impl Strategy<Value = Job> {
    (strategy_free_text(), strategy_free_text()).prop_map(|(name, notes)| Job { name, notes })
}

/// Strategy for generating requests, with or without company and groups
pub fn strategy_request() -> impl Strategy<Value = CostSuggestionRequest> {
    (
        strategy_company(),
        strategy_job(),
        prop::collection::vec(strategy_cost_group(), 0..6),
    )
        .prop_map(|(company, job, cost_groups)| CostSuggestionRequest {
            company,
            job,
            cost_groups,
        })
}

/// Strategy for generating well-shaped responses
pub fn strategy_response() -> impl Strategy<Value = CostSuggestionResponse> {
    prop::collection::vec(strategy_cost_group(), 0..10).prop_map(CostSuggestionResponse::new)
}
