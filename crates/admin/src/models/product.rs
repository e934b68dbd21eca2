//! Product model and create/update payload.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bodega_core::{CategoryId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Entity;
use crate::table::{FieldValue, TableRow};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier; immutable after creation.
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    /// Typed foreign key to the owning category.
    pub category: CategoryId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: String,
    /// Non-negative unit price.
    pub price: Decimal,
    /// Units on hand; absent on older records.
    #[serde(default)]
    pub stock: u32,
    /// Stored image references (URLs).
    #[serde(rename = "imageURL", default)]
    pub images: Vec<String>,
    #[serde(rename = "featuredFlag", default)]
    pub featured: bool,
}

/// A base64-encoded image carried in a product create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Encode raw image bytes for upload.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(BASE64.encode(bytes))
    }

    /// The encoded payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Create/update payload for a product.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductDraft {
    pub name: String,
    /// Typed foreign key to the owning category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub brand: String,
    pub price: Decimal,
    pub stock: u32,
    /// Images to upload alongside the draft.
    #[serde(rename = "base64Images")]
    pub images: Vec<ImagePayload>,
    #[serde(rename = "featuredFlag")]
    pub featured: bool,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl TableRow for Product {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::text(&self.name)),
            "category" => Some(FieldValue::text(self.category.as_str())),
            "description" => Some(FieldValue::text(&self.description)),
            "brand" => Some(FieldValue::text(&self.brand)),
            "price" => Some(FieldValue::Number(self.price)),
            "stock" => Some(FieldValue::Number(Decimal::from(self.stock))),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "_id": "prd-1",
            "name": "Oat Milk",
            "category": "cat-1",
            "description": "Barista blend",
            "brand": "Grove",
            "price": "4.50",
            "stock": 12,
            "imageURL": ["https://cdn/oat.png"],
            "featuredFlag": true
        }"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, ProductId::new("prd-1"));
        assert_eq!(product.category, CategoryId::new("cat-1"));
        assert_eq!(product.price, "4.50".parse::<Decimal>().unwrap());
        assert_eq!(product.images, vec!["https://cdn/oat.png".to_string()]);
        assert!(product.featured);
    }

    #[test]
    fn test_stock_defaults_on_older_records() {
        // Records written before the stock column existed omit it.
        let json = r#"{"_id": "prd-2", "name": "Beans", "category": "cat-1", "price": "9.25"}"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.stock, 0);
        assert!(product.images.is_empty());
        assert!(!product.featured);
    }

    #[test]
    fn test_image_payload_is_base64() {
        let payload = ImagePayload::from_bytes(b"hello");
        assert_eq!(payload.as_str(), "aGVsbG8=");
    }

    #[test]
    fn test_draft_serializes_images_under_wire_name() {
        let draft = ProductDraft {
            name: "Oat Milk".to_string(),
            category: Some(CategoryId::new("cat-1")),
            price: "4.50".parse().unwrap(),
            images: vec![ImagePayload::from_bytes(b"img")],
            ..ProductDraft::default()
        };
        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(json["base64Images"][0], "aW1n");
        assert_eq!(json["category"], "cat-1");
        // Empty optional text fields stay off the wire.
        assert!(json.get("brand").is_none());
    }
}
