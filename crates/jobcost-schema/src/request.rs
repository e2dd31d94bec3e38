use crate::CostGroup;
use serde::{Deserialize, Serialize};

/// Brief description of the company and the services it provides.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    /// Free-text notes about the job.
    pub notes: String,
}

/// Input for one suggestion call.
///
/// The whole value is serialized as the user turn of the prompt, so field
/// names on the wire are camelCase and an absent `company` is left out
/// entirely rather than sent as `null`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CostSuggestionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    pub job: Job,
    /// Commonly used cost groups, in the order the caller ranks them.
    #[serde(default)]
    pub cost_groups: Vec<CostGroup>,
}

impl CostSuggestionRequest {
    pub fn new(name: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            company: None,
            job: Job {
                name: name.into(),
                notes: notes.into(),
            },
            cost_groups: Vec::new(),
        }
    }

    pub fn with_company(mut self, description: impl Into<String>) -> Self {
        self.company = Some(Company {
            description: description.into(),
        });
        self
    }

    pub fn with_cost_group(mut self, group: CostGroup) -> Self {
        self.cost_groups.push(group);
        self
    }
}
