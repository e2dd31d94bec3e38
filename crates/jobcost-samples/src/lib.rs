//! Canned requests for the `jobcost` CLI.
//!
//! Samples are numbered from 1. Each comes with the text a completion service
//! actually returned for it, which the CLI can replay without a network call.

use jobcost_schema::{CostGroup, CostSuggestionRequest};

/// A named sample request.
#[derive(Clone, Debug)]
pub struct Sample {
    pub number: usize,
    pub label: &'static str,
    pub request: CostSuggestionRequest,
}

pub const SAMPLE_COUNT: usize = 3;

const MULTI_DAY_NAME: &str = "Multi-day Construction Project";
const MULTI_DAY_NOTES: &str =
    "Delivery of bobcat and concrete mixer for a 3 day construction project in downtown area.";

/// All samples in menu order.
pub fn samples() -> Vec<Sample> {
    (1..=SAMPLE_COUNT).filter_map(sample).collect()
}

/// Sample by its 1-based number.
pub fn sample(number: usize) -> Option<Sample> {
    let (label, request) = match number {
        1 => (
            "E1: Job Name and Notes",
            CostSuggestionRequest::new(
                "Corporate Park Gathering",
                "100 person outside gathering for a monthly town hall meeting",
            ),
        ),
        2 => (
            "E2: Job Name, Notes, and Company Description",
            CostSuggestionRequest::new(MULTI_DAY_NAME, MULTI_DAY_NOTES).with_company(
                "Heavy Rentals sells machinery like bobcats, excavators, and bulldozers",
            ),
        ),
        3 => (
            "E3: Job Name, Notes, and Existing Cost Groups",
            CostSuggestionRequest::new(MULTI_DAY_NAME, MULTI_DAY_NOTES)
                .with_cost_group(CostGroup::new("Truck Delivery", ["Truck 1", "Truck 2"]))
                .with_cost_group(CostGroup::new("Delivery Labor", ["DSR1", "DSR2"])),
        ),
        _ => return None,
    };

    Some(Sample {
        number,
        label,
        request,
    })
}

/// Text the completion service returned for a sample.
///
/// The response for sample 2 nests `{name, children}` objects inside
/// `children`, which the response parser rejects.
pub fn recorded_response(number: usize) -> Option<&'static str> {
    match number {
        1 => Some(RECORDED_1),
        2 => Some(RECORDED_2),
        3 => Some(RECORDED_3),
        _ => None,
    }
}

const RECORDED_1: &str = r#"{
  "groups": [
    {
      "name": "Venue and Setup",
      "children": [
        "Venue Rental",
        "Tent and Canopy Rental",
        "Seating and Tables",
        "Stage and Podium Setup",
        "Decorations"
      ]
    },
    {
      "name": "Audio and Visual",
      "children": ["Sound System Rental", "Microphones", "Projector and Screen", "Lighting"]
    },
    {
      "name": "Catering",
      "children": ["Food and Beverages", "Catering Staff", "Utensils and Plates", "Beverage Station"]
    },
    {
      "name": "Entertainment",
      "children": ["Live Band or DJ", "Guest Speaker Fees", "Interactive Activities"]
    },
    {
      "name": "Miscellaneous",
      "children": ["Permits and Licenses", "Security", "Cleaning Services", "Insurance"]
    }
  ]
}"#;

const RECORDED_2: &str = r#"{
  "groups": [
    {
      "name": "Equipment Rental",
      "children": [
        { "name": "Bobcat Rental", "children": [] },
        { "name": "Concrete Mixer Rental", "children": [] }
      ]
    },
    {
      "name": "Delivery and Pickup",
      "children": [
        { "name": "Delivery Fee", "children": [] },
        { "name": "Pickup Fee", "children": [] }
      ]
    },
    {
      "name": "Labor",
      "children": [
        { "name": "Operator Wages", "children": [] },
        { "name": "Overtime Charges", "children": [] }
      ]
    },
    {
      "name": "Materials",
      "children": [
        { "name": "Fuel Costs", "children": [] },
        { "name": "Concrete", "children": [] }
      ]
    },
    {
      "name": "Permits and Fees",
      "children": [
        { "name": "City Permits", "children": [] },
        { "name": "Inspection Fees", "children": [] }
      ]
    }
  ]
}"#;

const RECORDED_3: &str = r#"{
  "groups": [
    {
      "name": "Truck Delivery",
      "children": ["Truck 1", "Truck 2", "Bobcat Delivery", "Concrete Mixer Delivery"]
    },
    {
      "name": "Delivery Labor",
      "children": ["DSR1", "DSR2", "Bobcat Operator", "Concrete Mixer Operator"]
    },
    {
      "name": "Equipment Rental",
      "children": ["Bobcat Rental", "Concrete Mixer Rental"]
    },
    {
      "name": "Site Preparation",
      "children": ["Site Inspection", "Site Clearing", "Safety Setup"]
    },
    {
      "name": "Materials",
      "children": ["Concrete", "Rebar", "Gravel"]
    }
  ]
}"#;
