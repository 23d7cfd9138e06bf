// ABOUTME: Environment configuration for the dataset location and query defaults
// ABOUTME: Reads FASTFOOD_* variables with typed parsing and documented fallbacks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration

use crate::formatters::OutputFormat;
use anyhow::{Context, Result};
use fastfood_core::constants::{dataset, env_vars, limits};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Runtime settings of the finder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinderConfig {
    /// Menu CSV location
    pub data_path: PathBuf,
    /// Alternatives returned when the caller does not ask for a count
    pub default_top_n: usize,
    /// Rendering used when the caller does not pick one
    pub output_format: OutputFormat,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(dataset::DEFAULT_DATA_FILE),
            default_top_n: limits::DEFAULT_TOP_N,
            output_format: OutputFormat::default(),
        }
    }
}

impl FinderConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `FASTFOOD_DEFAULT_TOP_N` is not a positive integer or
    /// `FASTFOOD_OUTPUT_FORMAT` names an unknown format
    pub fn from_env() -> Result<Self> {
        let default_top_n: usize = env_var_or(
            env_vars::DEFAULT_TOP_N,
            &limits::DEFAULT_TOP_N.to_string(),
        )
        .trim()
        .parse()
        .with_context(|| format!("Invalid {} value", env_vars::DEFAULT_TOP_N))?;
        if default_top_n == 0 {
            anyhow::bail!("{} must be at least 1", env_vars::DEFAULT_TOP_N);
        }

        let output_format = match env::var(env_vars::OUTPUT_FORMAT) {
            Ok(raw) => raw
                .parse::<OutputFormat>()
                .with_context(|| format!("Invalid {} value", env_vars::OUTPUT_FORMAT))?,
            Err(_) => OutputFormat::default(),
        };

        let config = Self {
            data_path: PathBuf::from(env_var_or(env_vars::DATA_PATH, dataset::DEFAULT_DATA_FILE)),
            default_top_n,
            output_format,
        };

        info!(
            data_path = %config.data_path.display(),
            default_top_n = config.default_top_n,
            output_format = %config.output_format,
            "Loaded finder configuration from environment"
        );
        Ok(config)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
