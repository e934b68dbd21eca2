//! Category model and create/update payload.

use bodega_core::CategoryId;
use serde::{Deserialize, Serialize};

use crate::store::Entity;
use crate::table::{FieldValue, TableRow};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier; immutable after creation.
    #[serde(rename = "_id")]
    pub id: CategoryId,
    /// Unique display label.
    #[serde(rename = "category")]
    pub name: String,
    /// Optional image reference (URL).
    #[serde(rename = "categoryImage", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create/update payload for a category.
///
/// Sent as `{category, categoryImage}` to the add and update endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryDraft {
    #[serde(rename = "category")]
    pub name: String,
    #[serde(rename = "categoryImage", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CategoryDraft {
    /// A draft with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
        }
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

impl TableRow for Category {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::text(&self.name)),
            "image" => self.image.as_deref().map(FieldValue::text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"_id": "cat-1", "category": "Beverages", "categoryImage": "https://cdn/img.png"}"#;
        let category: Category = serde_json::from_str(json).expect("deserialize");
        assert_eq!(category.id, CategoryId::new("cat-1"));
        assert_eq!(category.name, "Beverages");
        assert_eq!(category.image.as_deref(), Some("https://cdn/img.png"));
    }

    #[test]
    fn test_image_is_optional() {
        let json = r#"{"_id": "cat-2", "category": "Snacks"}"#;
        let category: Category = serde_json::from_str(json).expect("deserialize");
        assert!(category.image.is_none());
    }

    #[test]
    fn test_draft_serializes_to_request_body() {
        let draft = CategoryDraft::new("Beverages").with_image("https://cdn/img.png");
        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"category": "Beverages", "categoryImage": "https://cdn/img.png"})
        );
    }
}
