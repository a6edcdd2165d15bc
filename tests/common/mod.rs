// ABOUTME: Shared test fixtures and the recording in-memory search double
// ABOUTME: Builds raw product JSON with complete or deliberately broken nutriments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use nutriscan::{AppResult, ProductSearch, RawProduct};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory search double that records every issued query
///
/// Unknown queries return an empty candidate list, mirroring a live search
/// that finds nothing.
pub struct RecordingSearch {
    responses: HashMap<String, Vec<RawProduct>>,
    queries: Mutex<Vec<String>>,
}

impl Default for RecordingSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSearch {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Register the candidate list returned for a query
    ///
    /// `products` is a JSON array in the shape of the search response's
    /// `products` field.
    pub fn with_response(mut self, query: &str, products: Value) -> Self {
        let parsed: Vec<RawProduct> = serde_json::from_value(products).unwrap();
        self.responses.insert(query.to_owned(), parsed);
        self
    }

    /// All queries issued so far, in order
    pub fn issued_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductSearch for RecordingSearch {
    async fn search(&self, query: &str) -> AppResult<Vec<RawProduct>> {
        self.queries.lock().unwrap().push(query.to_owned());
        Ok(self.responses.get(query).cloned().unwrap_or_default())
    }
}

/// Search double that fails every request with a transport error
pub struct FailingSearch;

#[async_trait]
impl ProductSearch for FailingSearch {
    async fn search(&self, _query: &str) -> AppResult<Vec<RawProduct>> {
        Err(nutriscan::AppError::transport(
            "Open Food Facts",
            "connection refused",
        ))
    }
}

/// Complete nutrient mapping with the given processing class
pub fn complete_nutriments(nova: Value) -> Value {
    json!({
        "nova-group": nova,
        "nutrition-score-fr_100g": 14,
        "proteins_100g": 5.1,
        "saturated-fat_100g": 9.3,
        "fat_100g": 21.0,
        "energy_100g": 2000,
        "carbohydrates_100g": 62.0
    })
}

/// Raw product JSON with a complete nutrient mapping
pub fn product(name: &str, nova: Value, categories: &[&str]) -> Value {
    json!({
        "product_name": name,
        "abbreviated_product_name": name,
        "categories_hierarchy": categories,
        "nutriments": complete_nutriments(nova)
    })
}

/// Raw product JSON with one required nutrient key removed
pub fn product_missing(name: &str, nova: Value, missing_key: &str) -> Value {
    let mut value = product(name, nova, &[]);
    value["nutriments"]
        .as_object_mut()
        .unwrap()
        .remove(missing_key);
    value
}
