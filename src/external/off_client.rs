// ABOUTME: Open Food Facts text-search API client with mandatory User-Agent
// ABOUTME: Implements the ProductSearch trait over the legacy search.pl endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! Open Food Facts API Client
//!
//! Client for the Open Food Facts text-search endpoint. The database is free
//! to query; the only requirement is a client-identifying User-Agent string.
//!
//! # API Reference
//! Open Food Facts search API: <https://wiki.openfoodfacts.org/API/Read/Search>
//!
//! # Example
//! ```rust,no_run
//! use nutriscan::external::{OffClient, OffClientConfig, ProductSearch};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OffClient::new(OffClientConfig::default())?;
//! let candidates = client.search("cookie").await?;
//! # Ok(())
//! # }
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::RawProduct;
use async_trait::async_trait;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of candidates requested per search
const DEFAULT_PAGE_SIZE: u32 = 24;

/// Open Food Facts client configuration
#[derive(Debug, Clone)]
pub struct OffClientConfig {
    /// Client-identifying User-Agent string (mandatory, must be non-empty)
    pub user_agent: String,
    /// Base URL for the Open Food Facts instance
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of candidates requested per search (1-100)
    pub page_size: u32,
}

impl Default for OffClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("nutriscan - Rust - Version {}", env!("CARGO_PKG_VERSION")),
            base_url: "https://world.openfoodfacts.org".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl OffClientConfig {
    /// Load configuration from the environment, falling back to defaults
    ///
    /// Recognized variables: `OFF_USER_AGENT`, `OFF_BASE_URL`,
    /// `OFF_TIMEOUT_SECS`, `OFF_PAGE_SIZE`. None are required.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            user_agent: env::var("OFF_USER_AGENT").unwrap_or(defaults.user_agent),
            base_url: env::var("OFF_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("OFF_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            page_size: env::var("OFF_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_size),
        }
    }
}

/// Injectable search collaborator
///
/// The single seam between the pipeline and the network. Production code uses
/// [`OffClient`]; tests substitute an in-memory double.
#[async_trait]
pub trait ProductSearch: Send + Sync {
    /// Search for products by free-text query
    ///
    /// Returns candidates in the order ranked by the service. An empty result
    /// is not an error at this level; the caller decides whether zero
    /// candidates is acceptable.
    ///
    /// # Errors
    /// Returns a transport error if the request cannot be completed.
    async fn search(&self, query: &str) -> AppResult<Vec<RawProduct>>;
}

/// Search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<RawProduct>,
}

/// Open Food Facts API client
#[derive(Debug, Clone)]
pub struct OffClient {
    config: OffClientConfig,
    http_client: reqwest::Client,
}

impl OffClient {
    /// Create a new client from the given configuration
    ///
    /// # Errors
    /// Returns a configuration error if the User-Agent is empty (the service
    /// requires one) or the HTTP client cannot be built.
    pub fn new(config: OffClientConfig) -> AppResult<Self> {
        if config.user_agent.trim().is_empty() {
            return Err(AppError::config(
                "Open Food Facts requires a client-identifying User-Agent",
            ));
        }

        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config("failed to build HTTP client").with_source(e))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl ProductSearch for OffClient {
    async fn search(&self, query: &str) -> AppResult<Vec<RawProduct>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_input("search query cannot be empty"));
        }

        let url = format!("{}/cgi/search.pl", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
                ("page_size", &self.config.page_size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::transport("Open Food Facts", e.to_string()).with_source(e))?;

        if !response.status().is_success() {
            return Err(AppError::transport(
                "Open Food Facts",
                format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::serialization(format!("search response decode failed: {e}")))?;

        Ok(body.products)
    }
}
