// ABOUTME: Main library entry point for the fast-food healthier-alternatives finder
// ABOUTME: Dataset loading, health scoring, alternative search, meal planning, and caloric estimation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Fastfood Finder
//!
//! Loads a fast-food nutrition menu, scores every item, and answers two kinds of
//! question: which items are healthier than a given one, and what a day of meals
//! from one chain could look like under a caloric budget.
//!
//! ## Architecture
//!
//! - **Dataset**: header normalization, CSV loading, and the immutable [`MenuContext`]
//! - **Intelligence**: health score, dominance filter, meal allocator, BMR/TDEE
//! - **Formatters**: text and JSON rendering of results
//! - **Config**: environment settings and tunable algorithm parameters
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fastfood_finder::config::IntelligenceConfig;
//! use fastfood_finder::dataset::MenuContext;
//! use fastfood_finder::errors::AppResult;
//! use std::path::Path;
//!
//! fn main() -> AppResult<()> {
//!     let config = IntelligenceConfig::load()?;
//!     let context = MenuContext::load(Path::new("FastFoodNutritionMenuV2.csv"), config.nutrition)?;
//!
//!     let result = context.find_alternatives("Big Mac", 3)?;
//!     for alternative in &result.alternatives {
//!         println!("{} ({})", alternative.item, alternative.company);
//!     }
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;
/// Application constants
pub mod constants;
/// Menu dataset loading and the query context
pub mod dataset;
/// Unified error handling
pub mod errors;
/// Output rendering (text, JSON)
pub mod formatters;
/// Scoring, alternatives, meal allocation, and caloric estimation
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Menu data models
pub mod models;

pub use dataset::MenuContext;
pub use errors::{AppError, AppResult, ErrorCode};
