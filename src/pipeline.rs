// ABOUTME: Search-extract-recommend pipeline orchestration
// ABOUTME: Produces a structured report; printing is left to the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! Pipeline orchestration.
//!
//! Three stages, strictly in order: one search for the query, extraction of
//! the first candidate, and — when the gate fires — one search per category
//! tag for alternatives. Given a fixed search double the whole run is pure:
//! repeated runs yield identical reports.

use crate::errors::{AppError, AppResult};
use crate::external::ProductSearch;
use crate::extractor;
use crate::models::{CategoryRecommendations, ProductRecord};
use crate::recommendations::{self, RecommendationEngine};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    /// The first search candidate, re-serialized verbatim
    pub raw_first: Value,
    /// The normalized record extracted from that candidate
    pub record: ProductRecord,
    /// Lower-processing alternatives, grouped per category; empty when the
    /// product is already minimally processed
    pub recommendations: Vec<CategoryRecommendations>,
}

/// Run the full pipeline for a free-text query
///
/// # Errors
/// Returns `EmptyResult` when the search yields no candidates, `MissingField`
/// or `InvalidFormat` when the first candidate's nutrient mapping is
/// incomplete, `InvalidClassification` when its processing class is not
/// integer-coercible, and a transport error when any search fails.
pub async fn run<S: ProductSearch + ?Sized>(search: &S, query: &str) -> AppResult<PipelineReport> {
    info!(query, "searching Open Food Facts");
    let candidates = search.search(query).await?;

    let first = candidates
        .first()
        .ok_or_else(|| AppError::empty_result(query))?;
    let raw_first = serde_json::to_value(first)
        .map_err(|e| AppError::serialization(format!("candidate re-serialization failed: {e}")))?;

    let record = extractor::extract_first(&candidates)?;
    let class = recommendations::processing_class(&record.nutrients)?;

    let groups = if recommendations::should_recommend(class) {
        info!(class, "product is processed, fetching alternatives");
        RecommendationEngine::new(search)
            .recommend(&record, class)
            .await?
    } else {
        info!(class, "product is minimally processed, no suggestions");
        Vec::new()
    };

    Ok(PipelineReport {
        raw_first,
        record,
        recommendations: groups,
    })
}
