// ABOUTME: Unified error handling for the search-extract-recommend pipeline
// ABOUTME: Defines the error code taxonomy, AppError with source chaining, and AppResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! # Unified Error Handling
//!
//! Every pipeline stage returns a tagged [`AppResult`] instead of panicking,
//! so each failure mode is observable in tests. The taxonomy distinguishes
//! transport failures, empty search results, missing or malformed nutrient
//! fields, and non-coercible processing classifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The search collaborator could not complete a request
    #[serde(rename = "TRANSPORT_ERROR")]
    TransportError,
    /// A search returned zero candidates
    #[serde(rename = "EMPTY_RESULT")]
    EmptyResult,
    /// A required nutrient key is absent from a candidate's nutrient mapping
    #[serde(rename = "MISSING_FIELD")]
    MissingField,
    /// The processing classification is not coercible to an integer
    #[serde(rename = "INVALID_CLASSIFICATION")]
    InvalidClassification,
    /// A nutrient value is present but not numeric
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// Caller-supplied input is unusable (e.g. empty query)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A response body could not be decoded or a record could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Client configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
}

impl ErrorCode {
    /// Get a human-readable description for this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TransportError => "The search service could not complete the request",
            Self::EmptyResult => "The search returned no candidates",
            Self::MissingField => "A required nutrient field is missing",
            Self::InvalidClassification => "The processing classification is not an integer",
            Self::InvalidFormat => "A nutrient value has an unexpected format",
            Self::InvalidInput => "The provided input is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::ConfigError => "Configuration error encountered",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Transport failure while talking to an external service
    pub fn transport(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TransportError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Search returned zero candidates for the given query
    pub fn empty_result(query: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::EmptyResult,
            format!("no candidates returned for query '{}'", query.into()),
        )
    }

    /// A required nutrient key is absent, naming the key
    pub fn missing_field(key: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("required field '{}' is absent", key.into()),
        )
    }

    /// The processing classification value cannot be coerced to an integer
    pub fn invalid_classification(value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidClassification,
            format!("processing class '{value}' is not integer-coercible"),
        )
    }

    /// A nutrient value is present but not numeric
    pub fn invalid_format(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidFormat,
            format!("field '{}' has non-numeric value '{value}'", key.into()),
        )
    }

    /// Invalid caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Serialization or deserialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
