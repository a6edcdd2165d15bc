// ABOUTME: External service integrations for product data retrieval
// ABOUTME: Exposes the Open Food Facts client and the injectable search trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! External API integrations.
//!
//! The pipeline never talks to the network directly; it goes through the
//! [`ProductSearch`] trait so tests can substitute an in-memory double.

/// Open Food Facts API client
pub mod off_client;

pub use off_client::{OffClient, OffClientConfig, ProductSearch};
