// ABOUTME: Nutrient extraction from raw search candidates into normalized records
// ABOUTME: Required keys fail with MissingField; optional keys stay sparse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! Nutrient Extractor
//!
//! Takes the head of a candidate list and produces a [`ProductRecord`].
//! Required nutrient keys must be present in the candidate's nutrient mapping
//! or extraction fails with a `MissingField` error naming the key. Optional
//! keys are copied only when present: absent means unknown, and substituting
//! a zero would conflate "no energy" with "energy not measured".

use crate::errors::{AppError, AppResult};
use crate::models::{NutrientProfile, ProductRecord, RawProduct};
use serde_json::Value;
use std::collections::HashMap;

/// Maximum number of category tags copied to the extracted record
pub const MAX_CATEGORIES: usize = 3;

/// Extract a normalized record from the first candidate
///
/// # Errors
/// Returns `EmptyResult` if the candidate list is empty, `MissingField` if a
/// required nutrient key is absent, and `InvalidFormat` if a required value
/// is present but not numeric.
pub fn extract_first(candidates: &[RawProduct]) -> AppResult<ProductRecord> {
    let first = candidates
        .first()
        .ok_or_else(|| AppError::empty_result("product search"))?;

    let nutrients = extract_profile(&first.nutriments)?;
    let categories = first
        .categories_hierarchy
        .iter()
        .take(MAX_CATEGORIES)
        .cloned()
        .collect();

    Ok(ProductRecord {
        name: first.abbreviated_product_name.clone(),
        categories,
        nutrients,
        allergens: first.allergens.clone(),
    })
}

/// Build a nutrient profile from a candidate's nutrient mapping
///
/// The processing class is copied verbatim (the gate coerces it later); all
/// other required keys must carry numeric values. Numeric strings are
/// accepted because the source data mixes them with plain numbers.
///
/// # Errors
/// Returns `MissingField` for an absent required key and `InvalidFormat` for
/// a required value that is not numeric.
pub fn extract_profile(nutriments: &HashMap<String, Value>) -> AppResult<NutrientProfile> {
    Ok(NutrientProfile {
        nova_group: require_value(nutriments, "nova-group")?.clone(),
        nutrition_score_fr_100g: require_number(nutriments, "nutrition-score-fr_100g")?,
        proteins_100g: require_number(nutriments, "proteins_100g")?,
        saturated_fat_100g: require_number(nutriments, "saturated-fat_100g")?,
        fat_100g: require_number(nutriments, "fat_100g")?,
        energy_100g: require_number(nutriments, "energy_100g")?,
        carbohydrates_100g: require_number(nutriments, "carbohydrates_100g")?,
        salt_100g: optional_number(nutriments, "salt_100g"),
        sugars_100g: optional_number(nutriments, "sugars_100g"),
        ph_100g: optional_number(nutriments, "ph_100g"),
    })
}

fn require_value<'a>(nutriments: &'a HashMap<String, Value>, key: &str) -> AppResult<&'a Value> {
    nutriments
        .get(key)
        .ok_or_else(|| AppError::missing_field(key))
}

fn require_number(nutriments: &HashMap<String, Value>, key: &str) -> AppResult<f64> {
    let value = require_value(nutriments, key)?;
    as_number(value).ok_or_else(|| AppError::invalid_format(key, value))
}

fn optional_number(nutriments: &HashMap<String, Value>, key: &str) -> Option<f64> {
    nutriments.get(key).and_then(as_number)
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nutriments(entries: &[(&str, Value)]) -> HashMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn test_as_number_accepts_numeric_strings() {
        assert_eq!(as_number(&json!("3.4")), Some(3.4));
        assert_eq!(as_number(&json!(" 12 ")), Some(12.0));
        assert_eq!(as_number(&json!(7)), Some(7.0));
        assert_eq!(as_number(&json!("plenty")), None);
        assert_eq!(as_number(&json!(null)), None);
    }

    #[test]
    fn test_require_number_reports_missing_key() {
        let map = nutriments(&[("proteins_100g", json!(3.0))]);
        let error = require_number(&map, "fat_100g").unwrap_err();
        assert!(error.message.contains("fat_100g"));
    }

    #[test]
    fn test_optional_number_skips_non_numeric_values() {
        let map = nutriments(&[("salt_100g", json!("trace"))]);
        assert_eq!(optional_number(&map, "salt_100g"), None);
    }
}
