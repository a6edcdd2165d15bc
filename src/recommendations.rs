// ABOUTME: Processing-class gate and per-category recommendation engine
// ABOUTME: Filters search candidates to strictly lower NOVA classifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! Processing-Class Gate and Recommendation Engine
//!
//! The gate coerces the extracted record's NOVA value to an integer and
//! decides whether alternatives are worth fetching (class 1 products are
//! already minimally processed). The engine then issues one fresh search per
//! category tag and keeps candidates whose classification is strictly lower
//! than the original product's — always the original's, never the best seen
//! so far.

use crate::errors::{AppError, AppResult};
use crate::external::ProductSearch;
use crate::extractor::extract_profile;
use crate::models::{CategoryRecommendations, NutrientProfile, ProductRecord, RawProduct, Recommendation};
use serde_json::Value;
use tracing::{debug, warn};

/// The least-processed NOVA classification; such products get no suggestions
pub const LEAST_PROCESSED_CLASS: i64 = 1;

/// Fixed per-category suggestion budget
pub const SUGGESTION_BUDGET: usize = 3;

/// Coerce the record's processing classification to an integer
///
/// Accepts integer numbers, integral floats, and integer-formatted strings.
///
/// # Errors
/// Returns `InvalidClassification` for anything else.
pub fn processing_class(profile: &NutrientProfile) -> AppResult<i64> {
    coerce_class(&profile.nova_group)
        .ok_or_else(|| AppError::invalid_classification(&profile.nova_group))
}

/// Gate rule: anything above the least-processed class triggers suggestions
#[must_use]
pub const fn should_recommend(class: i64) -> bool {
    class != LEAST_PROCESSED_CLASS
}

/// Strip a leading namespace prefix from a category tag
///
/// Category tags carry a language namespace (`en:biscuits`); the search query
/// wants only the text after the first colon. Tags without a colon pass
/// through unchanged.
#[must_use]
pub fn strip_namespace_prefix(tag: &str) -> &str {
    tag.split_once(':').map_or(tag, |(_, rest)| rest)
}

fn coerce_class(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Per-category recommendation engine over an injectable search collaborator
pub struct RecommendationEngine<'a, S: ProductSearch + ?Sized> {
    search: &'a S,
    budget: usize,
}

impl<'a, S: ProductSearch + ?Sized> RecommendationEngine<'a, S> {
    /// Create an engine with the fixed suggestion budget
    pub fn new(search: &'a S) -> Self {
        Self {
            search,
            budget: SUGGESTION_BUDGET,
        }
    }

    /// Create an engine with a custom per-category budget
    pub fn with_budget(search: &'a S, budget: usize) -> Self {
        Self { search, budget }
    }

    /// Fetch lower-processing alternatives for each category of the record
    ///
    /// Queries are issued serially, in category order, one per tag. Candidates
    /// qualify when their nutrient mapping contains a `nova-group` key that
    /// coerces to an integer strictly below `threshold`. The first
    /// min(budget, qualifying) candidates are taken in response order; no
    /// dedup across categories. A candidate whose profile cannot be built is
    /// skipped with a warning, never failing the run.
    ///
    /// # Errors
    /// Returns a transport error if any category search fails.
    pub async fn recommend(
        &self,
        record: &ProductRecord,
        threshold: i64,
    ) -> AppResult<Vec<CategoryRecommendations>> {
        let mut groups = Vec::with_capacity(record.categories.len());

        for tag in &record.categories {
            let category = strip_namespace_prefix(tag);
            debug!(category, threshold, "searching for lower-processing alternatives");
            let candidates = self.search.search(category).await?;
            groups.push(CategoryRecommendations {
                category: category.to_owned(),
                recommendations: self.select(&candidates, threshold),
            });
        }

        Ok(groups)
    }

    fn select(&self, candidates: &[RawProduct], threshold: i64) -> Vec<Recommendation> {
        let qualifying: Vec<&RawProduct> = candidates
            .iter()
            .filter(|candidate| qualifies(candidate, threshold))
            .collect();
        let take = self.budget.min(qualifying.len());

        let mut picked = Vec::with_capacity(take);
        for candidate in &qualifying[..take] {
            match build_recommendation(candidate) {
                Ok(recommendation) => picked.push(recommendation),
                Err(error) => {
                    warn!(%error, "skipping recommendation candidate");
                }
            }
        }
        picked
    }
}

fn qualifies(candidate: &RawProduct, threshold: i64) -> bool {
    candidate
        .nutriments
        .get("nova-group")
        .and_then(coerce_class)
        .is_some_and(|class| class < threshold)
}

fn build_recommendation(candidate: &RawProduct) -> AppResult<Recommendation> {
    let name = candidate
        .product_name
        .clone()
        .ok_or_else(|| AppError::missing_field("product_name"))?;
    Ok(Recommendation {
        name,
        nutrients: extract_profile(&candidate.nutriments)?,
    })
}
