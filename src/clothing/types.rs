//! Types for wardrobe items and image uploads

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single item of clothing in a user's wardrobe.
///
/// Items are created by the backend when an image is uploaded and are
/// read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Opaque, stable item identifier
    pub item_id: String,

    /// Free-form category label ("shirt", "rain_coat", ...); compared
    /// case-insensitively everywhere
    pub category: String,

    /// Narrower category assigned by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Dominant color; absent when the backend could not determine one
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Path of the item image; absent means no visual representation
    #[serde(default)]
    pub image_url: Option<String>,

    /// AI-generated metadata attached at upload time
    #[serde(default)]
    pub metadata: Option<ItemMetadata>,

    /// ISO-8601 creation timestamp; items embedded in recommendations omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ClothingItem {
    /// Formality level of this item, defaulting to 2 when the metadata does
    /// not carry one.
    pub fn formality_level(&self) -> i64 {
        self.metadata
            .as_ref()
            .and_then(|metadata| metadata.formality_level)
            .unwrap_or(2)
    }

    /// Color for display purposes; "Unknown" when none was determined.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or("Unknown")
    }

    /// Classifier confidence for this item, if the analysis produced one.
    pub fn confidence_score(&self) -> Option<f64> {
        self.metadata.as_ref()?.ai_analysis.as_ref()?.confidence_score
    }
}

/// Metadata bag stored on a clothing item.
///
/// Only the keys the client consumes are modeled; everything else the
/// backend stores survives round-trips through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Formality level, conventionally 1-4; treated as 2 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality_level: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_analysis: Option<ColorAnalysis>,

    /// Keys not explicitly modeled
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Result of the backend's vision analysis of an uploaded image.
///
/// All fields are optional: an upload can succeed with degraded analysis
/// data and consumers must tolerate any of these being absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_colors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality_level: Option<i64>,

    /// Classifier confidence in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,

    /// Which classification path produced this result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_method: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Result of the backend's color palette analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_colors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_harmony_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_match: Option<Value>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Response to a clothing image upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    /// Identifier of the newly created item
    pub item_id: String,

    /// The user the item was stored under
    pub user_id: String,

    /// Vision analysis of the image; absent on degraded uploads
    #[serde(default)]
    pub ai_analysis: Option<AiAnalysis>,

    /// Color analysis of the image; absent on degraded uploads
    #[serde(default)]
    pub color_analysis: Option<ColorAnalysis>,

    /// Server-side path the image was stored at
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Envelope of the item listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemListResponse {
    pub success: bool,

    #[serde(default)]
    pub user_id: Option<String>,

    pub items: Vec<ClothingItem>,

    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn backend_item_json() -> Value {
        json!({
            "item_id": "item-1",
            "category": "shirt",
            "subcategory": "general",
            "color": "Red",
            "brand": "Nike",
            "image_url": "uploads/abc.jpg",
            "metadata": {
                "formality_level": 3,
                "ai_analysis": {
                    "category": "shirt",
                    "dominant_colors": ["red", "white"],
                    "confidence_score": 0.92,
                    "classification_method": "heuristic_enhanced",
                    "raw_predictions": ["shirt", "blouse"]
                },
                "color_analysis": {
                    "dominant_colors": ["red"],
                    "color_harmony_score": 0.8,
                    "color_scheme": "monochromatic"
                },
                "original_filename": "IMG_0042.jpg"
            },
            "created_at": "2024-05-01T10:30:00"
        })
    }

    #[test]
    fn item_parses_with_typed_metadata() {
        let item: ClothingItem = serde_json::from_value(backend_item_json()).unwrap();

        assert_eq!(item.item_id, "item-1");
        assert_eq!(item.formality_level(), 3);
        assert_eq!(item.display_color(), "Red");
        assert_eq!(item.confidence_score(), Some(0.92));

        let metadata = item.metadata.as_ref().unwrap();
        let analysis = metadata.ai_analysis.as_ref().unwrap();
        assert_eq!(
            analysis.dominant_colors.as_deref(),
            Some(["red".to_string(), "white".to_string()].as_slice())
        );
    }

    #[test]
    fn unmodeled_metadata_keys_land_in_the_residual_maps() {
        let item: ClothingItem = serde_json::from_value(backend_item_json()).unwrap();

        let metadata = item.metadata.as_ref().unwrap();
        assert_eq!(metadata.extra["original_filename"], json!("IMG_0042.jpg"));

        let analysis = metadata.ai_analysis.as_ref().unwrap();
        assert_eq!(analysis.extra["raw_predictions"], json!(["shirt", "blouse"]));
    }

    #[test]
    fn sparse_item_defaults() {
        let item: ClothingItem = serde_json::from_value(json!({
            "item_id": "item-2",
            "category": "pants"
        }))
        .unwrap();

        assert_eq!(item.display_color(), "Unknown");
        assert_eq!(item.formality_level(), 2);
        assert_eq!(item.confidence_score(), None);
        assert!(item.brand.is_none());
        assert!(item.image_url.is_none());
    }

    #[test]
    fn upload_response_tolerates_missing_analysis() {
        let response: UploadResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Clothing item analyzed and saved successfully",
            "item_id": "item-3",
            "user_id": "user-1"
        }))
        .unwrap();

        assert!(response.success);
        assert!(response.ai_analysis.is_none());
        assert!(response.color_analysis.is_none());
        assert!(response.image_path.is_none());
    }
}
