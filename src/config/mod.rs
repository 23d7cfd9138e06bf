// ABOUTME: Configuration management module for dataset location and tunable algorithm parameters
// ABOUTME: Groups environment settings and intelligence (scoring, allocation, BMR) configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration module
//!
//! - **Environment**: dataset path, default result count, output format
//! - **Intelligence**: BMR coefficients, activity factors, health-score weights,
//!   and meal allocation thresholds

/// Environment configuration
pub mod environment;
/// Intelligence module configuration
pub mod intelligence;

pub use environment::FinderConfig;
pub use intelligence::{
    ActivityFactorsConfig, BmrConfig, ConfigError, HealthScoreWeights, IntelligenceConfig,
    MealAllocationConfig, NutritionConfig, SlotProportions,
};
