// ABOUTME: Product and nutrient profile models mapped to Open Food Facts field names
// ABOUTME: RawProduct, ProductRecord, NutrientProfile, and Recommendation definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Allergen information as supplied by the source record
///
/// Open Food Facts usually delivers a comma-separated tag string, but some
/// records carry a list instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Allergens {
    /// Single tag string (e.g. `"en:gluten,en:milk"`)
    Text(String),
    /// Explicit list of tags
    List(Vec<String>),
}

/// Raw candidate as returned by the search API
///
/// Only the fields the pipeline reads are typed; everything else is retained
/// in `extra` so the first candidate can be re-serialized verbatim for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    /// Display product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Short product name, preferred for the extracted record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviated_product_name: Option<String>,
    /// Allergen tags, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Allergens>,
    /// Ordered, increasingly specific category tags (generic root first)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories_hierarchy: Vec<String>,
    /// Nutrient mapping keyed by source field name (values verbatim)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub nutriments: HashMap<String, Value>,
    /// All remaining source fields, preserved for display
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Normalized nutrient profile per 100g
///
/// Required keys are always present after extraction. Optional keys are
/// sparse by design: absent means unknown, never zero, and they are omitted
/// from serialized output entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// NOVA processing classification, preserved verbatim from the source
    /// (integer or numeric string); coerced only at the gate
    #[serde(rename = "nova-group")]
    pub nova_group: Value,
    /// Composite nutrition quality score (lower is generally better)
    #[serde(rename = "nutrition-score-fr_100g")]
    pub nutrition_score_fr_100g: f64,
    /// Protein in grams per 100g
    pub proteins_100g: f64,
    /// Saturated fat in grams per 100g
    #[serde(rename = "saturated-fat_100g")]
    pub saturated_fat_100g: f64,
    /// Total fat in grams per 100g
    pub fat_100g: f64,
    /// Energy per 100g
    pub energy_100g: f64,
    /// Carbohydrates in grams per 100g
    pub carbohydrates_100g: f64,
    /// Salt in grams per 100g, when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt_100g: Option<f64>,
    /// Sugars in grams per 100g, when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars_100g: Option<f64>,
    /// pH per 100g, when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph_100g: Option<f64>,
}

/// Normalized record extracted from the top search candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Short product name, when the source supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// At most the first 3 category tags, source order preserved
    pub categories: Vec<String>,
    /// Normalized nutrient profile
    pub nutrients: NutrientProfile,
    /// Allergen tags, when the source supplies them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Allergens>,
}

/// A single lower-processing alternative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Display product name
    pub name: String,
    /// Nutrient profile built from the candidate's own nutrient mapping
    pub nutrients: NutrientProfile,
}

/// Recommendations grouped by the category query that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecommendations {
    /// Normalized category text used as the search query
    pub category: String,
    /// Qualifying alternatives, in search response order
    pub recommendations: Vec<Recommendation>,
}
