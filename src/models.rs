//! Data Model
//!
//! TopGrid and Category value types. Field names serialize in camelCase so
//! persisted collections and share tokens from the original web app decode
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// One ranked slot within a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Label of the slot (e.g. "Best Film")
    pub category_name: String,
    /// The chosen item for this slot
    pub choice_name: String,
    /// Image reference, stored as-is (never fetched or validated)
    pub image_url: String,
}

impl Category {
    pub fn new(category_name: &str, choice_name: &str, image_url: &str) -> Self {
        Self {
            category_name: category_name.to_string(),
            choice_name: choice_name.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// All three fields filled in
    pub fn is_complete(&self) -> bool {
        !self.category_name.is_empty() && !self.choice_name.is_empty() && !self.image_url.is_empty()
    }
}

/// A titled, ordered collection of categories
///
/// Titles are unique across the collection (case-sensitive exact match);
/// category order defines display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopGrid {
    pub title: String,
    pub categories: Vec<Category>,
}

impl TopGrid {
    pub fn new(title: &str, categories: Vec<Category>) -> Self {
        Self {
            title: title.to_string(),
            categories,
        }
    }

    /// Save-time validation: non-empty title, every category complete.
    /// A grid with zero categories is valid.
    pub fn validate(&self) -> GridResult<()> {
        if self.title.is_empty() {
            return Err(GridError::Validation(
                "TopGrid title cannot be empty".to_string(),
            ));
        }
        if self.categories.iter().any(|c| !c.is_complete()) {
            return Err(GridError::Validation(
                "All fields must be filled out in each category".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_grid() {
        let grid = TopGrid::new(
            "Movies",
            vec![Category::new("Best Film", "Inception", "http://x/i.png")],
        );
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let grid = TopGrid::new("", vec![]);
        assert!(matches!(grid.validate(), Err(GridError::Validation(_))));
    }

    #[test]
    fn test_empty_category_field_rejected() {
        for category in [
            Category::new("", "Inception", "http://x/i.png"),
            Category::new("Best Film", "", "http://x/i.png"),
            Category::new("Best Film", "Inception", ""),
        ] {
            let grid = TopGrid::new("Movies", vec![category]);
            assert!(matches!(grid.validate(), Err(GridError::Validation(_))));
        }
    }

    #[test]
    fn test_zero_categories_is_valid() {
        let grid = TopGrid::new("Empty but titled", vec![]);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_camel_case_serialization() {
        let grid = TopGrid::new(
            "Movies",
            vec![Category::new("Best Film", "Inception", "http://x/i.png")],
        );
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.contains("\"categoryName\""));
        assert!(json.contains("\"choiceName\""));
        assert!(json.contains("\"imageUrl\""));
    }
}
