// ABOUTME: Core data models for the fast-food alternatives finder
// ABOUTME: Re-exports MenuRecord, Nutrient, and NutrientProfile
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! - `MenuRecord`: one retained menu row, identified by `row_id`
//! - `Nutrient`: the fixed ten-field nutrient schema
//! - `NutrientProfile`: the ten values of one record

mod menu;
mod nutrient;

pub use menu::{MenuRecord, RowId};
pub use nutrient::{Nutrient, NutrientProfile};
