//! Mocked chat-completions endpoint for backend and CLI tests.
//!
//! Built on `httpmock`'s blocking server. Each helper registers one mock and
//! returns it so tests can assert how many calls reached it.

use httpmock::Mock;
use httpmock::prelude::*;

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// API key the helpers expect in the `authorization` header.
pub const TEST_API_KEY: &str = "sk-test";

/// Chat-completions URL on `server`.
pub fn completions_url(server: &MockServer) -> String {
    server.url(COMPLETIONS_PATH)
}

/// Answers every request, whatever its method, path or headers, with
/// `status` and `body`. Its hit count is the number of calls the server saw.
pub fn any_request<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    let body = body.to_string();
    server.mock(|_when, then| {
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Answers an authenticated POST to the completions path with a completion
/// whose single candidate carries `content`.
pub fn completion<'a>(server: &'a MockServer, content: &str) -> Mock<'a> {
    completion_with_status(server, 200, &crate::completion_body(content))
}

/// Answers an authenticated POST to the completions path with `status` and a
/// raw `body`.
pub fn completion_with_status<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS_PATH)
            .header("authorization", format!("Bearer {TEST_API_KEY}"));
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}
