// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, synthetic menu records, and temporary CSV fixtures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `fastfood_finder`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use fastfood_finder::config::NutritionConfig;
use fastfood_finder::dataset::MenuContext;
use fastfood_finder::models::{MenuRecord, NutrientProfile};
use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Header row with the spacing variants seen in published menu exports
pub const MENU_HEADER: &str = "Company,Item,Calories,Total Fat (g),Saturated_Fat(g),Trans Fat(g),Cholesterol (mg), Sodium (mg) ,Carbs(g),Fiber(g),Sugars(g),Protein (g)";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Record with the five comparison fields set and everything else zero
pub fn comparison_record(
    company: &str,
    item: &str,
    calories: f64,
    fat: f64,
    sugars: f64,
    fiber: f64,
    protein: f64,
) -> MenuRecord {
    let nutrients = NutrientProfile {
        calories,
        total_fat_g: fat,
        sugars_g: sugars,
        fiber_g: fiber,
        protein_g: protein,
        ..NutrientProfile::default()
    };
    MenuRecord::new(0, company, item, nutrients)
}

/// Record shaped for the meal allocator: calories, protein, fat, carbs
pub fn meal_record(company: &str, item: &str, calories: f64, protein: f64, fat: f64) -> MenuRecord {
    let nutrients = NutrientProfile {
        calories,
        protein_g: protein,
        total_fat_g: fat,
        carbs_g: calories / 10.0,
        ..NutrientProfile::default()
    };
    MenuRecord::new(0, company, item, nutrients)
}

/// Context over records with default nutrition settings
pub fn context_from(records: Vec<MenuRecord>) -> MenuContext {
    init_test_logging();
    MenuContext::from_records(records, NutritionConfig::default())
}

/// A small menu spanning three chains
pub fn sample_menu() -> Vec<MenuRecord> {
    vec![
        comparison_record("Burger Barn", "Double Bacon Burger", 900.0, 55.0, 12.0, 2.0, 45.0),
        comparison_record("Burger Barn", "Classic Burger", 550.0, 28.0, 9.0, 2.0, 28.0),
        comparison_record("Burger Barn", "Grilled Chicken Sandwich", 420.0, 12.0, 8.0, 3.0, 36.0),
        comparison_record("Burger Barn", "Side Salad", 60.0, 3.0, 3.0, 2.0, 2.0),
        comparison_record("Taco Town", "Steak Burrito", 700.0, 24.0, 6.0, 9.0, 40.0),
        comparison_record("Taco Town", "Chicken Bowl", 520.0, 16.0, 5.0, 10.0, 42.0),
        comparison_record("Taco Town", "Cola Drink", 250.0, 0.0, 65.0, 0.0, 0.0),
        comparison_record("Sub Stop", "Turkey Sub", 380.0, 6.0, 7.0, 5.0, 24.0),
    ]
}

/// Write `body` under the standard header into a temporary CSV file
pub fn write_menu_csv(body: &str) -> NamedTempFile {
    write_raw_csv(&format!("{MENU_HEADER}\n{body}"))
}

/// Write arbitrary CSV content into a temporary file
pub fn write_raw_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
