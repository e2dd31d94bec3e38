//! Parsing of completion text into a [`CostSuggestionResponse`].
//!
//! Two stages, each with its own error kind:
//! 1. JSON syntax (`Parse`).
//! 2. Shape: an object with a `groups` array whose items are objects with a
//!    string `name` and a `children` array of strings (`Shape`). The first
//!    violation is reported with its JSON path under the `path` context key.
//!
//! Unknown extra keys are ignored. Accepted data is returned as-is: no
//! trimming, no reordering, no deduplication.

use jobcost_error::GenerationError;
use jobcost_schema::{CostGroup, CostSuggestionResponse};
use serde_json::{Map, Value};

/// Parse candidate text into a validated response.
pub fn parse_suggestion_response(text: &str) -> Result<CostSuggestionResponse, GenerationError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        GenerationError::parse()
            .with_context("line", e.line().to_string())
            .with_context("column", e.column().to_string())
    })?;
    validate_shape(&value)
}

/// Shape-check an already parsed JSON value.
pub fn validate_shape(value: &Value) -> Result<CostSuggestionResponse, GenerationError> {
    let root = value
        .as_object()
        .ok_or_else(|| violation("$", "object", value))?;

    let groups = match root.get("groups") {
        Some(Value::Array(items)) => items,
        Some(other) => return Err(violation("groups", "array", other)),
        None => return Err(missing("groups")),
    };

    groups
        .iter()
        .enumerate()
        .map(|(i, item)| group_at(i, item))
        .collect::<Result<Vec<_>, _>>()
        .map(CostSuggestionResponse::new)
}

fn group_at(index: usize, item: &Value) -> Result<CostGroup, GenerationError> {
    let path = format!("groups[{index}]");
    let obj: &Map<String, Value> = item
        .as_object()
        .ok_or_else(|| violation(&path, "object", item))?;

    let name = match obj.get("name") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(violation(&format!("{path}.name"), "string", other)),
        None => return Err(missing(&format!("{path}.name"))),
    };

    let children = match obj.get("children") {
        Some(Value::Array(items)) => items,
        Some(other) => return Err(violation(&format!("{path}.children"), "array", other)),
        None => return Err(missing(&format!("{path}.children"))),
    };

    let children = children
        .iter()
        .enumerate()
        .map(|(j, child)| match child {
            Value::String(s) => Ok(s.clone()),
            other => Err(violation(&format!("{path}.children[{j}]"), "string", other)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CostGroup { name, children })
}

fn missing(path: &str) -> GenerationError {
    GenerationError::shape()
        .with_context("path", path)
        .with_context("expected", "present")
}

fn violation(path: &str, expected: &str, found: &Value) -> GenerationError {
    GenerationError::shape()
        .with_context("path", path)
        .with_context("expected", expected)
        .with_context("found", json_type(found))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
