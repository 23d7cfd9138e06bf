// ABOUTME: Data model re-exports from the fastfood-core crate
// ABOUTME: MenuRecord, Nutrient, and NutrientProfile under crate::models
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models

pub use fastfood_core::models::*;
