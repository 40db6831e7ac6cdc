// src/app/model.rs
// The persisted and display-derived entity shapes: Idea (stored in the external data document), Item (the table projection), and the add-form draft.

use serde::{Deserialize, Serialize};

// --- Persisted Entity ---

/// A single catalog entry as stored in the externally-owned data document.
/// `name` is the unique key within the collection; the storage layer does
/// not enforce this, so duplicates in a loaded document are tolerated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub name: String,
    #[serde(default)]
    pub cutter: String,
    #[serde(default)]
    pub idea_image: String,
    #[serde(default)]
    pub cutter_image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// --- Display Projection ---

/// Display-only projection of an `Idea`, recomputed on every data change
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub idea_name: String,
    pub idea_image: String,
    pub cutter_name: String,
    pub cutter_image: String,
    pub tags: Vec<String>,
}

/// Renames `name` to `idea_name` and `cutter` to `cutter_name`; images and
/// tags are carried over verbatim. No validation happens here.
pub fn idea_to_item(idea: &Idea) -> Item {
    Item {
        idea_name: idea.name.clone(),
        idea_image: idea.idea_image.clone(),
        cutter_name: idea.cutter.clone(),
        cutter_image: idea.cutter_image.clone(),
        tags: idea.tags.clone(),
    }
}

// --- Add Form Draft ---

/// Field-level validation errors for an `IdeaDraft`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub name: Option<String>,
}

/// Working state of the add-idea form. Tags are edited as one
/// comma-separated string and parsed on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaDraft {
    pub name: String,
    pub cutter: String,
    pub idea_image: String,
    pub cutter_image: String,
    pub tags_string: String,
}

impl IdeaDraft {
    /// Splits the tags string on commas, trimming whitespace and dropping
    /// empty segments.
    pub fn parse_tags(&self) -> Vec<String> {
        self.tags_string
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validates the draft and assembles the `Idea` to persist. The name
    /// must be non-empty and must not collide with an existing entry.
    pub fn validate(&self, existing_names: &[&str]) -> Result<Idea, DraftErrors> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftErrors {
                name: Some("Name is required".to_string()),
            });
        }
        if existing_names.iter().any(|existing| *existing == name) {
            return Err(DraftErrors {
                name: Some(format!("An idea named '{}' already exists", name)),
            });
        }
        Ok(Idea {
            name: name.to_string(),
            cutter: self.cutter.trim().to_string(),
            idea_image: self.idea_image.clone(),
            cutter_image: self.cutter_image.clone(),
            tags: self.parse_tags(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_idea() -> Idea {
        Idea {
            name: "Star".to_string(),
            cutter: "Metal star".to_string(),
            idea_image: "star.png".to_string(),
            cutter_image: "cutter.png".to_string(),
            tags: vec!["holiday".to_string(), "winter".to_string()],
        }
    }

    #[test]
    fn idea_to_item_renames_and_preserves_fields() {
        let idea = sample_idea();
        let item = idea_to_item(&idea);
        assert_eq!(item.idea_name, "Star");
        assert_eq!(item.cutter_name, "Metal star");
        assert_eq!(item.idea_image, "star.png");
        assert_eq!(item.cutter_image, "cutter.png");
        assert_eq!(item.tags, idea.tags);
    }

    #[test]
    fn idea_round_trips_through_camel_case_json() {
        let json = r#"{"name":"Star","cutter":"Metal star","ideaImage":"star.png","cutterImage":"cutter.png","tags":["holiday"]}"#;
        let idea: Idea = serde_json::from_str(json).expect("document should parse");
        assert_eq!(idea.idea_image, "star.png");
        assert_eq!(idea.cutter_image, "cutter.png");
        let serialized = serde_json::to_string(&idea).expect("idea should serialize");
        assert!(serialized.contains("\"ideaImage\""));
        assert!(serialized.contains("\"cutterImage\""));
    }

    #[test]
    fn sparse_document_entries_fill_defaults() {
        let idea: Idea = serde_json::from_str(r#"{"name":"Bare"}"#).expect("should parse");
        assert_eq!(idea.name, "Bare");
        assert!(idea.cutter.is_empty());
        assert!(idea.tags.is_empty());
    }

    #[test]
    fn draft_with_empty_name_is_rejected() {
        let draft = IdeaDraft {
            name: "   ".to_string(),
            ..IdeaDraft::default()
        };
        let errors = draft.validate(&[]).expect_err("empty name must not validate");
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
    }

    #[test]
    fn draft_with_duplicate_name_is_rejected() {
        let draft = IdeaDraft {
            name: "Star".to_string(),
            ..IdeaDraft::default()
        };
        let errors = draft
            .validate(&["Star", "Tree"])
            .expect_err("duplicate name must not validate");
        assert!(errors.name.is_some());
    }

    #[test]
    fn valid_draft_assembles_idea_with_parsed_tags() {
        let draft = IdeaDraft {
            name: " Tree ".to_string(),
            cutter: "Plastic tree".to_string(),
            idea_image: "tree.png".to_string(),
            cutter_image: "tree-cutter.png".to_string(),
            tags_string: "holiday, winter, , green".to_string(),
        };
        let idea = draft.validate(&["Star"]).expect("draft should validate");
        assert_eq!(idea.name, "Tree");
        assert_eq!(idea.tags, vec!["holiday", "winter", "green"]);
    }
}
