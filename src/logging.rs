// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Initializes tracing-subscriber from the RUST_LOG environment variable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! Structured logging setup with environment-driven filtering.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Initialize logging from the environment
///
/// Reads `RUST_LOG` for the filter directive, defaulting to `info`. Logs go
/// to stderr so the report on stdout stays machine-readable.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
