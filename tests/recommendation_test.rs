// ABOUTME: Integration tests for the processing-class gate and recommendation engine
// ABOUTME: Covers strict threshold filtering, budgets, query order, and skip policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriscan::extractor::extract_first;
use nutriscan::recommendations::{processing_class, should_recommend, RecommendationEngine};
use nutriscan::{ErrorCode, RawProduct};
use serde_json::{json, Value};

mod common;

fn record_with_categories(nova: Value, categories: &[&str]) -> nutriscan::ProductRecord {
    let list: Vec<RawProduct> =
        serde_json::from_value(json!([common::product("Subject", nova, categories)])).unwrap();
    extract_first(&list).unwrap()
}

#[tokio::test]
async fn every_emitted_recommendation_beats_the_threshold() {
    let search = common::RecordingSearch::new().with_response(
        "biscuits",
        json!([
            common::product("Class One", json!(1), &[]),
            common::product("Class Three", json!(3), &[]),
            common::product("Class Two", json!(2), &[]),
            common::product("Class Four", json!(4), &[]),
        ]),
    );

    let record = record_with_categories(json!(4), &["en:biscuits"]);
    let threshold = processing_class(&record.nutrients).unwrap();
    let groups = RecommendationEngine::new(&search)
        .recommend(&record, threshold)
        .await
        .unwrap();

    assert_eq!(groups.len(), 1);
    let names: Vec<&str> = groups[0]
        .recommendations
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    // Response order, threshold-beating classes only, Class Four excluded
    assert_eq!(names, vec!["Class One", "Class Three", "Class Two"]);
}

#[tokio::test]
async fn per_category_budget_caps_at_three() {
    let search = common::RecordingSearch::new().with_response(
        "biscuits",
        json!([
            common::product("A", json!(1), &[]),
            common::product("B", json!(1), &[]),
            common::product("C", json!(2), &[]),
            common::product("D", json!(1), &[]),
            common::product("E", json!(2), &[]),
        ]),
    );

    let record = record_with_categories(json!(4), &["en:biscuits"]);
    let groups = RecommendationEngine::new(&search)
        .recommend(&record, 4)
        .await
        .unwrap();

    let names: Vec<&str> = groups[0]
        .recommendations
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn candidates_without_a_coercible_class_never_qualify() {
    let mut no_class = common::product("No Class", json!(1), &[]);
    no_class["nutriments"].as_object_mut().unwrap().remove("nova-group");
    let mut garbage_class = common::product("Garbage Class", json!(1), &[]);
    garbage_class["nutriments"]["nova-group"] = json!("ultra");

    let search = common::RecordingSearch::new().with_response(
        "biscuits",
        Value::Array(vec![
            no_class,
            garbage_class,
            common::product("Qualifies", json!(2), &[]),
        ]),
    );

    let record = record_with_categories(json!(4), &["en:biscuits"]);
    let groups = RecommendationEngine::new(&search)
        .recommend(&record, 4)
        .await
        .unwrap();

    let names: Vec<&str> = groups[0]
        .recommendations
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Qualifies"]);
}

#[tokio::test]
async fn one_query_per_category_with_prefix_stripped_in_order() {
    let search = common::RecordingSearch::new();
    let record = record_with_categories(json!(4), &["en:biscuits", "en:snacks", "fr:gouters"]);

    RecommendationEngine::new(&search)
        .recommend(&record, 4)
        .await
        .unwrap();

    assert_eq!(
        search.issued_queries(),
        vec!["biscuits", "snacks", "gouters"]
    );
}

#[tokio::test]
async fn broken_candidate_is_skipped_without_failing_the_run() {
    let search = common::RecordingSearch::new().with_response(
        "biscuits",
        json!([
            common::product_missing("Broken", json!(1), "proteins_100g"),
            common::product("Intact", json!(2), &[]),
        ]),
    );

    let record = record_with_categories(json!(4), &["en:biscuits"]);
    let groups = RecommendationEngine::new(&search)
        .recommend(&record, 4)
        .await
        .unwrap();

    let names: Vec<&str> = groups[0]
        .recommendations
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Intact"]);
}

#[tokio::test]
async fn transport_failure_aborts_the_recommendation_run() {
    let record = record_with_categories(json!(4), &["en:biscuits"]);
    let error = RecommendationEngine::new(&common::FailingSearch)
        .recommend(&record, 4)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::TransportError);
}

#[test]
fn gate_fires_only_above_the_least_processed_class() {
    assert!(!should_recommend(1));
    for class in 2..=4 {
        assert!(should_recommend(class));
    }
}

#[test]
fn non_coercible_classification_fails_the_gate() {
    let record = record_with_categories(json!("ultra-processed"), &[]);
    let error = processing_class(&record.nutrients).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidClassification);
}

#[test]
fn string_classification_is_coerced() {
    let record = record_with_categories(json!("4"), &[]);
    assert_eq!(processing_class(&record.nutrients).unwrap(), 4);
}
