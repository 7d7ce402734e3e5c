//! Types for outfit recommendations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::clothing::ClothingItem;

/// Mood tags offered by the standard picker. The request contract accepts
/// any string; unknown values are forwarded to the backend as-is.
pub const SUGGESTED_MOODS: &[&str] = &[
    "confident",
    "relaxed",
    "creative",
    "professional",
    "romantic",
    "adventurous",
];

/// Occasion tags offered by the standard picker; any string is accepted.
pub const SUGGESTED_OCCASIONS: &[&str] =
    &["work", "casual", "date", "party", "workout", "formal"];

/// A curated subset of a wardrobe presented as a cohesive recommendation.
///
/// Items are embedded in full — the backend never references them by id
/// alone — and their order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub outfit_id: String,

    pub items: Vec<ClothingItem>,

    /// Mood tag echoed from the request that produced this outfit
    pub mood: String,

    /// Occasion tag echoed from the request
    pub occasion: String,

    /// Engine confidence in [0, 1]
    pub confidence_score: f64,

    #[serde(default)]
    pub style_description: String,

    #[serde(default)]
    pub color_harmony: bool,

    #[serde(default)]
    pub weather_appropriate: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// An outfit as ranked by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    #[serde(flatten)]
    pub outfit: Outfit,

    /// How the recommendation was produced ("rule_based", "ai_enhanced", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_method: Option<String>,

    /// Ranking score after preference adjustments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_score: Option<f64>,
}

impl OutfitRecommendation {
    /// Score to rank or display this recommendation by: the final score when
    /// the engine assigned one, the raw confidence otherwise.
    pub fn score(&self) -> f64 {
        self.final_score.unwrap_or(self.outfit.confidence_score)
    }
}

/// Weather context forwarded verbatim with a recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl WeatherContext {
    /// Create an empty weather context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weather condition ("hot", "cold", "rainy", "mild", ...)
    pub fn with_condition(mut self, condition: &str) -> Self {
        self.condition = Some(condition.to_string());
        self
    }
}

/// Envelope of the recommendation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<OutfitRecommendation>,
}
