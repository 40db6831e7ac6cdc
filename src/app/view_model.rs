// src/app/view_model.rs
// Composes the entity projection and the filter engine into the ordered, filtered row list backing both the table and the grid.

use crate::app::filter::{self, Filter};
use crate::app::model::{idea_to_item, Idea, Item};

/// Maps every idea through the display projection and, when a filter is
/// present, retains only matching items. The result is a subsequence of
/// `data` in its original order; no re-sorting happens here. Pure function:
/// callers may cache the result, but correctness never depends on it.
pub fn visible_items(data: &[Idea], filter: Option<&Filter>) -> Vec<Item> {
    let items = data.iter().map(idea_to_item);
    match filter {
        Some(f) if !f.is_empty() => items.filter(|item| filter::is_match(item, f)).collect(),
        _ => items.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(name: &str, tags: &[&str]) -> Idea {
        Idea {
            name: name.to_string(),
            cutter: format!("{} cutter", name),
            idea_image: format!("{}.png", name.to_lowercase()),
            cutter_image: String::new(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[test]
    fn no_filter_projects_every_idea() {
        let data = vec![idea("Star", &["holiday"]), idea("Tree", &["green"])];
        let rows = visible_items(&data, None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].idea_name, "Star");
        assert_eq!(rows[0].cutter_name, "Star cutter");
    }

    #[test]
    fn data_document_with_matching_tag_produces_one_row() {
        let json = r#"[{"name":"Star","cutter":"Metal star","ideaImage":"star.png","cutterImage":"cutter.png","tags":["holiday"]}]"#;
        let data: Vec<Idea> = serde_json::from_str(json).expect("document should parse");

        let mut holiday = Filter::new();
        holiday.set("tags", "holiday");
        let rows = visible_items(&data, Some(&holiday));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].idea_name, "Star");

        // A non-matching tag filters everything out, which the UI renders
        // as the explicit empty-state affordance.
        let mut winter = Filter::new();
        winter.set("tags", "winter");
        assert!(visible_items(&data, Some(&winter)).is_empty());
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let data = vec![
            idea("Star", &["keep"]),
            idea("Tree", &["drop"]),
            idea("Bell", &["keep"]),
            idea("Moon", &["keep"]),
        ];
        let mut filter = Filter::new();
        filter.set("tags", "keep");
        let names: Vec<String> = visible_items(&data, Some(&filter))
            .into_iter()
            .map(|item| item.idea_name)
            .collect();
        assert_eq!(names, vec!["Star", "Bell", "Moon"]);
    }

    #[test]
    fn empty_filter_behaves_like_no_filter() {
        let data = vec![idea("Star", &["holiday"])];
        let rows = visible_items(&data, Some(&Filter::new()));
        assert_eq!(rows.len(), 1);
    }
}
