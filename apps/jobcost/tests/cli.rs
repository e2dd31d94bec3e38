//! End-to-end tests for the `jobcost` binary.

use assert_cmd::Command;
use httpmock::MockServer;
use jobcost_testkit::http::{
    TEST_API_KEY, any_request, completion, completion_with_status, completions_url,
};
use predicates::prelude::*;

fn jobcost() -> Command {
    let mut cmd = Command::cargo_bin("jobcost").unwrap();
    cmd.env_remove("OPENAI_API_KEY")
        .env_remove("JOBCOST_LLM_ENDPOINT")
        .env_remove("JOBCOST_LLM_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn list_prints_sample_labels() {
    jobcost()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("E1: Job Name and Notes"))
        .stdout(predicate::str::contains(
            "E2: Job Name, Notes, and Company Description",
        ))
        .stdout(predicate::str::contains(
            "E3: Job Name, Notes, and Existing Cost Groups",
        ));
}

#[test]
fn missing_key_fails_before_contacting_service() {
    let server = MockServer::start();
    let mock = any_request(&server, 200, &jobcost_testkit::completion_body(r#"{"groups":[]}"#));

    jobcost()
        .env("JOBCOST_LLM_ENDPOINT", completions_url(&server))
        .args(["--example", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("OPENAI_API_KEY"));

    assert_eq!(mock.hits(), 0);
}

#[test]
fn empty_key_fails_before_selection() {
    let server = MockServer::start();
    let mock = any_request(&server, 200, &jobcost_testkit::completion_body(r#"{"groups":[]}"#));

    // No --example and no stdin: the key check must fail first, not the menu.
    jobcost()
        .env("OPENAI_API_KEY", "   ")
        .env("JOBCOST_LLM_ENDPOINT", completions_url(&server))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY is set but empty"))
        .stderr(predicate::str::contains("Select an example").not());

    assert_eq!(mock.hits(), 0);
}

#[test]
fn replay_first_example_prints_five_groups() {
    let output = jobcost()
        .args(["--replay", "--example", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let groups = json["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 5);
    assert_eq!(groups[0]["name"], "Venue and Setup");
    assert_eq!(groups[0]["children"].as_array().unwrap().len(), 5);
}

#[test]
fn replay_second_example_reports_shape_error() {
    jobcost()
        .args(["--replay", "--example=2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("response shape invalid"));
}

#[test]
fn out_of_range_example_fails() {
    jobcost()
        .args(["--replay", "--example", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 3"));
}

#[test]
fn menu_selection_from_stdin() {
    jobcost()
        .arg("--replay")
        .write_stdin("3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Select an example"))
        .stdout(predicate::str::contains("\"groups\""));
}

#[test]
fn menu_without_answer_fails() {
    jobcost()
        .arg("--replay")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no example selected"));
}

#[test]
fn live_call_against_mocked_service() {
    let server = MockServer::start();
    let mock = completion(&server, jobcost_samples::recorded_response(1).unwrap());

    let output = jobcost()
        .env("OPENAI_API_KEY", TEST_API_KEY)
        .env("JOBCOST_LLM_ENDPOINT", completions_url(&server))
        .args(["--example", "1", "--pretty"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("\n  \"groups\""));
    assert_eq!(stdout_json(&output)["groups"].as_array().unwrap().len(), 5);

    // The mock only matches the bearer key, so one hit proves it was sent.
    assert_eq!(mock.hits(), 1);
}

#[test]
fn service_error_exits_non_zero() {
    let server = MockServer::start();
    let mock = completion_with_status(&server, 500, r#"{"error":{"message":"boom"}}"#);

    jobcost()
        .env("OPENAI_API_KEY", TEST_API_KEY)
        .env("JOBCOST_LLM_ENDPOINT", completions_url(&server))
        .args(["--example", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("service call failed"));

    assert_eq!(mock.hits(), 1);
}

#[test]
fn logging_flags_are_accepted() {
    jobcost()
        .args(["--replay", "--example", "1", "-vv", "--no-color", "--no-timestamps"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cost suggestions generated"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn invalid_endpoint_is_a_config_error() {
    jobcost()
        .env("OPENAI_API_KEY", "sk-test")
        .env("JOBCOST_LLM_ENDPOINT", "ftp://example.com")
        .args(["--example", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JOBCOST_LLM_ENDPOINT"));
}
