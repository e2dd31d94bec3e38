//! Property tests for request and response wire forms.

use jobcost_schema::{CostSuggestionRequest, CostSuggestionResponse};
use jobcost_testkit::proptest::{strategy_request, strategy_response};
use proptest::prelude::*;

proptest! {
    #[test]
    fn request_json_uses_camel_case_keys(req in strategy_request()) {
        let value = serde_json::to_value(&req).unwrap();
        let obj = value.as_object().unwrap();

        prop_assert!(obj.contains_key("costGroups"));
        prop_assert!(!obj.contains_key("cost_groups"));
        prop_assert_eq!(obj.contains_key("company"), req.company.is_some());
        prop_assert_eq!(obj["job"]["name"].as_str(), Some(req.job.name.as_str()));
        prop_assert_eq!(obj["job"]["notes"].as_str(), Some(req.job.notes.as_str()));
    }

    #[test]
    fn request_decodes_to_same_value(req in strategy_request()) {
        let json = serde_json::to_string(&req).unwrap();
        let back: CostSuggestionRequest = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, req);
    }

    #[test]
    fn response_category_count_sums_children(resp in strategy_response()) {
        let expected: usize = resp.groups.iter().map(|g| g.children.len()).sum();
        prop_assert_eq!(resp.category_count(), expected);
        prop_assert_eq!(resp.group_count(), resp.groups.len());
    }

    #[test]
    fn response_group_lookup_finds_first_match(resp in strategy_response()) {
        for group in &resp.groups {
            let found = resp.group(&group.name).unwrap();
            prop_assert_eq!(&found.name, &group.name);
        }
    }

    #[test]
    fn response_order_preserved(resp in strategy_response()) {
        let json = serde_json::to_string(&resp).unwrap();
        let back: CostSuggestionResponse = serde_json::from_str(&json).unwrap();
        let names: Vec<_> = back.groups.iter().map(|g| g.name.clone()).collect();
        let original: Vec<_> = resp.groups.iter().map(|g| g.name.clone()).collect();
        prop_assert_eq!(names, original);
    }
}
