//! Value types for the job cost suggestion contract.
//!
//! A [`CostSuggestionRequest`] describes a job (and optionally the company and
//! its existing cost groups). A [`CostSuggestionResponse`] is the validated
//! breakdown returned by the completion service. Both are plain values: built
//! per call, never mutated, dropped afterwards.

pub mod request;
pub mod response;

pub use request::{Company, CostSuggestionRequest, Job};
pub use response::CostSuggestionResponse;

use serde::{Deserialize, Serialize};

/// A named cost group and the cost categories under it.
///
/// Used both for the existing groups sent with a request and for the groups
/// suggested in a response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostGroup {
    pub name: String,
    pub children: Vec<String>,
}

impl CostGroup {
    pub fn new<I, S>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// A group with no cost categories yet.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}
