use crate::CostGroup;
use serde::{Deserialize, Serialize};

/// Suggested cost breakdown for a job.
///
/// Only produced after the service output passed the shape check, so
/// `groups` and every `children` list are always present (possibly empty).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostSuggestionResponse {
    pub groups: Vec<CostGroup>,
}

impl CostSuggestionResponse {
    pub fn new(groups: Vec<CostGroup>) -> Self {
        Self { groups }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// First group with the given name.
    pub fn group(&self, name: &str) -> Option<&CostGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Total number of cost categories across all groups.
    pub fn category_count(&self) -> usize {
        self.groups.iter().map(|g| g.children.len()).sum()
    }
}
