//! Fuzz harness for request decoding and prompt construction
//!
//! Any request that decodes must also produce a prompt whose user message
//! decodes back to the same request.

#![no_main]

use jobcost_schema::CostSuggestionRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(req) = serde_json::from_slice::<CostSuggestionRequest>(data) else {
        return;
    };

    let prompt = jobcost_suggest_prompt::build_prompt(&req).expect("prompt for decoded request");
    let back: CostSuggestionRequest =
        serde_json::from_str(&prompt.user).expect("user message is request JSON");
    assert_eq!(back, req);
});
