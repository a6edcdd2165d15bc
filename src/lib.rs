// ABOUTME: Open Food Facts nutrient profiling library with recommendation support
// ABOUTME: Exposes the search client, extraction, gate, and recommendation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! # Nutriscan
//!
//! Queries the Open Food Facts database by free-text search, extracts a
//! normalized nutrient profile for the top match, and — when the match is
//! heavily processed according to its NOVA classification — re-queries the
//! database per category tag for lower-processing alternatives.
//!
//! The pipeline is a single linear sequence: search, extract, then
//! conditionally recommend. All network calls are issued serially; nothing
//! here parallelizes or retries.

/// Unified error handling (error codes, `AppError`, `AppResult`)
pub mod errors;
/// Open Food Facts HTTP client and the injectable search trait
pub mod external;
/// Nutrient extraction from raw search candidates
pub mod extractor;
/// Structured logging setup
pub mod logging;
/// Typed product and nutrient data model
pub mod models;
/// Search-extract-recommend pipeline orchestration
pub mod pipeline;
/// Processing-class gate and recommendation engine
pub mod recommendations;

pub use errors::{AppError, AppResult, ErrorCode};
pub use external::{OffClient, OffClientConfig, ProductSearch};
pub use models::{
    Allergens, CategoryRecommendations, NutrientProfile, ProductRecord, RawProduct, Recommendation,
};
pub use pipeline::PipelineReport;
pub use recommendations::RecommendationEngine;
