// ABOUTME: Core types and constants for the fast-food alternatives finder
// ABOUTME: Foundation crate with error handling, menu models, and constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Fastfood Core
//!
//! Foundation crate providing shared types and constants for the fast-food
//! alternatives finder. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Canonical column identifiers, keyword lists, and service names
//! - **models**: Menu records and the fixed nutrient schema

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MenuRecord`, `Nutrient`, `NutrientProfile`)
pub mod models;
