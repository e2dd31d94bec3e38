//! Fuzz harness for completion text parsing
//!
//! Target: `jobcost_suggest_parse::parse_suggestion_response`

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(resp) = jobcost_suggest_parse::parse_suggestion_response(text) {
        // Accepted text must survive a second pass unchanged.
        let again = serde_json::to_string(&resp).expect("serialize accepted response");
        let reparsed = jobcost_suggest_parse::parse_suggestion_response(&again)
            .expect("reparse accepted response");
        assert_eq!(reparsed, resp);
    }
});
