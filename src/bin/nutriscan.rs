// ABOUTME: Process entry point running the search-extract-recommend pipeline
// ABOUTME: Prints the raw candidate, extracted record, and recommendation listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Project

//! # Nutriscan Binary
//!
//! Runs the pipeline for a fixed query and prints the three report sections
//! as human-readable text to stdout. The contract takes no command-line
//! arguments; client configuration comes from the environment with working
//! defaults.

use anyhow::Result;
use nutriscan::external::{OffClient, OffClientConfig};
use nutriscan::{logging, pipeline};

/// Query issued at startup
const QUERY: &str = "cookie";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let client = OffClient::new(OffClientConfig::from_env())?;
    let report = pipeline::run(&client, QUERY).await?;

    println!("{}", serde_json::to_string(&report.raw_first)?);
    println!("{}", serde_json::to_string(&report.record)?);

    if !report.recommendations.is_empty() {
        println!("RECOMMENDATIONS (based on processing class):");
        for group in &report.recommendations {
            for recommendation in &group.recommendations {
                println!("{}", serde_json::to_string(recommendation)?);
            }
        }
    }

    Ok(())
}
