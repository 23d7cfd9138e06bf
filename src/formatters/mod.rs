// ABOUTME: Output format abstraction and text rendering of query results
// ABOUTME: Text for people, JSON (via serde_json) for scripts; no filtering or ranking happens here
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default, human-readable blocks mirroring the comparison layout
//! - **JSON**: Pretty-printed serialization of the result structs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fastfood_finder::formatters::{format_json, render_comparison, ComparisonDetail};
//!
//! let result = context.find_alternatives("Big Mac", 3)?;
//! println!("{}", render_comparison("Big Mac", &result, ComparisonDetail::Summary));
//! println!("{}", format_json(&result)?);
//! ```

/// Anchor vs alternatives rendering
pub mod comparison;
/// Meal plan rendering
pub mod meal_plan;

pub use comparison::{render_comparison, render_nutrition_info, ComparisonDetail};
pub use meal_plan::render_meal_plan;

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Serialize any result struct to pretty-printed JSON
///
/// # Errors
///
/// Returns `SerializationError` if serialization fails
pub fn format_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Render a nutrient amount: two decimals at most, trailing zeros dropped
#[must_use]
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid printing "-0"
    let rounded = if rounded.abs() < f64::EPSILON { 0.0 } else { rounded };
    format!("{rounded}")
}

/// Render a signed difference with an explicit `+` for increases
#[must_use]
pub fn format_delta(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.abs() < f64::EPSILON {
        "0".to_owned()
    } else {
        format!("{rounded:+}")
    }
}
