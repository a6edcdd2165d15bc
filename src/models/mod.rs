// ABOUTME: Typed data model for products, nutrient profiles, and recommendations
// ABOUTME: Re-exports the product module types used across the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! Data model shared by the extraction and recommendation stages.

/// Product records, nutrient profiles, and recommendation shapes
pub mod product;

pub use product::{
    Allergens, CategoryRecommendations, NutrientProfile, ProductRecord, RawProduct, Recommendation,
};
