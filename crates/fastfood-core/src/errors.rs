// ABOUTME: Unified error type, error codes, and result alias for all finder operations
// ABOUTME: Distinguishes query failures (not found, no alternatives, no data) from input and IO errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Query-level
//! failures are reported as distinct [`ErrorCode`]s so the presentation layer can
//! render an accurate message instead of an empty result.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Query outcomes (1000-1999)
    /// No menu item matches the query substring
    #[serde(rename = "NOT_FOUND")]
    NotFound = 1000,
    /// The item exists but nothing beats it on every dominance predicate
    #[serde(rename = "NO_ALTERNATIVES")]
    NoAlternatives = 1001,
    /// Chain or plausibility filters left no meal candidates
    #[serde(rename = "INSUFFICIENT_DATA")]
    InsufficientData = 1002,

    // Validation (3000-3999)
    /// Caller supplied an invalid value (non-numeric profile, `top_n` of zero, ...)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Dataset (4000-4999)
    /// The dataset file could not be read or parsed
    #[serde(rename = "DATASET_UNREADABLE")]
    DatasetUnreadable = 4000,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal Errors (9000-9999)
    /// Output serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Process exit code used by the CLI for this error
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::NotFound | Self::NoAlternatives | Self::InsufficientData => 1,
            Self::InvalidInput => 2,
            Self::DatasetUnreadable | Self::ConfigInvalid => 3,
            Self::SerializationError | Self::InternalError => 70,
        }
    }

    /// Whether this code describes a query outcome rather than a malfunction
    #[must_use]
    pub const fn is_query_outcome(self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::NoAlternatives | Self::InsufficientData
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NotFound => "No menu item matches the query",
            Self::NoAlternatives => "No healthier alternatives were found",
            Self::InsufficientData => "No items available for meal planning",
            Self::InvalidInput => "The provided input is invalid",
            Self::DatasetUnreadable => "The menu dataset could not be read",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
            Self::InternalError => "An internal error occurred",
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
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// No item matches the query
    #[must_use]
    pub fn not_found(query: &str) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("Item '{query}' not found in the dataset"),
        )
    }

    /// Item found but no candidate satisfies the dominance filter
    #[must_use]
    pub fn no_alternatives(query: &str) -> Self {
        Self::new(
            ErrorCode::NoAlternatives,
            format!("No healthier alternatives found for '{query}'"),
        )
    }

    /// Meal candidate set is empty for a chain
    #[must_use]
    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InsufficientData, message)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Dataset could not be read
    #[must_use]
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatasetUnreadable, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error payload for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

/// Conversion from `anyhow::Error` to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(format!("{error:#}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_outcomes_are_distinguishable() {
        let not_found = AppError::not_found("Whopper");
        let none_better = AppError::no_alternatives("Whopper");

        assert_ne!(not_found.code, none_better.code);
        assert!(not_found.code.is_query_outcome());
        assert!(!ErrorCode::DatasetUnreadable.is_query_outcome());
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::insufficient_data("no items available for 'Nowhere'");
        let text = error.to_string();

        assert!(text.starts_with("No items available for meal planning"));
        assert!(text.contains("Nowhere"));
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::no_alternatives("Salad"));
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("NO_ALTERNATIVES"));
        assert!(json.contains("Salad"));
    }

    #[test]
    fn test_exit_codes_are_nonzero() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::InvalidInput,
            ErrorCode::DatasetUnreadable,
            ErrorCode::InternalError,
        ] {
            assert_ne!(code.exit_code(), 0);
        }
    }
}
