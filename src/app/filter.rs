// src/app/filter.rs
// The filter-matching engine: a field-to-constraint map over display items with fail-closed handling of unrecognized fields.

use std::collections::BTreeMap;

use regex::Regex;

use crate::app::model::Item;

// --- Filter Fields ---

/// The closed set of fields a filter constraint may address. Anything else
/// maps to `Unknown`, which rejects the whole filter for every item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Tags,
    IdeaName,
    CutterName,
    Unknown,
}

impl FilterField {
    pub fn parse(key: &str) -> Self {
        match key {
            "tags" => FilterField::Tags,
            "ideaName" => FilterField::IdeaName,
            "cutterName" => FilterField::CutterName,
            _ => FilterField::Unknown,
        }
    }
}

// --- Filter ---

/// A mapping from field name to a single string constraint. Keys are
/// unique and their order is irrelevant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    entries: BTreeMap<String, String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: &str) {
        self.entries.insert(field.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// --- Matching ---

/// Stateless predicate deciding whether `item` satisfies every constraint
/// in `filter`. Short-circuits on the first failing field; a constraint on
/// an unrecognized field rejects the item outright.
pub fn is_match(item: &Item, filter: &Filter) -> bool {
    for (field, value) in &filter.entries {
        let passes = match FilterField::parse(field) {
            // Exact element containment, not substring.
            FilterField::Tags => item.tags.iter().any(|tag| tag == value),
            FilterField::IdeaName => pattern_matches(&item.idea_name, value),
            FilterField::CutterName => pattern_matches(&item.cutter_name, value),
            FilterField::Unknown => false,
        };
        if !passes {
            return false;
        }
    }
    true
}

/// The constraint is interpreted as a regular-expression pattern against
/// the field. A pattern that fails to compile fails the constraint.
fn pattern_matches(field: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(field),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            idea_name: "Star cookie".to_string(),
            idea_image: "star.png".to_string(),
            cutter_name: "Metal star".to_string(),
            cutter_image: "cutter.png".to_string(),
            tags: vec!["holiday".to_string(), "winter".to_string()],
        }
    }

    fn filter_of(constraints: &[(&str, &str)]) -> Filter {
        let mut filter = Filter::new();
        for (field, value) in constraints {
            filter.set(field, value);
        }
        filter
    }

    #[test]
    fn empty_filter_passes_everything() {
        assert!(is_match(&sample_item(), &Filter::new()));
    }

    #[test]
    fn tag_constraint_requires_exact_containment() {
        let item = sample_item();
        assert!(is_match(&item, &filter_of(&[("tags", "holiday")])));
        // "holi" is a substring of an element but not an element itself.
        assert!(!is_match(&item, &filter_of(&[("tags", "holi")])));
        assert!(!is_match(&item, &filter_of(&[("tags", "summer")])));
    }

    #[test]
    fn name_constraints_match_as_patterns() {
        let item = sample_item();
        assert!(is_match(&item, &filter_of(&[("ideaName", "Star")])));
        assert!(is_match(&item, &filter_of(&[("ideaName", "^Star c")])));
        assert!(is_match(&item, &filter_of(&[("cutterName", "star$")])));
        assert!(!is_match(&item, &filter_of(&[("ideaName", "Tree")])));
    }

    #[test]
    fn all_present_constraints_must_pass() {
        let item = sample_item();
        let both = filter_of(&[("tags", "holiday"), ("ideaName", "Star")]);
        assert!(is_match(&item, &both));
        let one_failing = filter_of(&[("tags", "holiday"), ("ideaName", "Tree")]);
        assert!(!is_match(&item, &one_failing));
    }

    #[test]
    fn unrecognized_field_rejects_regardless_of_other_keys() {
        let item = sample_item();
        let filter = filter_of(&[("tags", "holiday"), ("color", "red")]);
        assert!(!is_match(&item, &filter));
    }

    #[test]
    fn malformed_pattern_fails_the_constraint() {
        let item = sample_item();
        assert!(!is_match(&item, &filter_of(&[("ideaName", "(unclosed")])));
    }

    #[test]
    fn unknown_field_names_parse_to_unknown() {
        assert_eq!(FilterField::parse("tags"), FilterField::Tags);
        assert_eq!(FilterField::parse("ideaName"), FilterField::IdeaName);
        assert_eq!(FilterField::parse("cutterName"), FilterField::CutterName);
        assert_eq!(FilterField::parse("ideaImage"), FilterField::Unknown);
        assert_eq!(FilterField::parse(""), FilterField::Unknown);
    }
}
