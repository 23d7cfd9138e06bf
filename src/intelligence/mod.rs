// ABOUTME: Query algorithms over the loaded menu: scoring, alternatives, meal allocation, caloric needs
// ABOUTME: Pure functions over record slices; the menu context wires them to one dataset
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Intelligence Module
//!
//! - `statistics` - population z-score standardization
//! - `health_score` - normalized signed-weight score used to rank alternatives
//! - `alternatives` - dominance filter and ranking
//! - `meal_allocator` - greedy three-slot meal packing with its own raw-value score
//! - `nutrition_calculator` - Harris-Benedict BMR and TDEE

/// Healthier-alternative search
pub mod alternatives;
/// Normalized health score
pub mod health_score;
/// Greedy meal allocation
pub mod meal_allocator;
/// BMR and TDEE estimation
pub mod nutrition_calculator;
/// Column statistics
pub mod statistics;

pub use alternatives::{dominates, find_alternatives, AlternativesResult};
pub use health_score::{compute_health_scores, ScoredDataset, ScoredRecord};
pub use meal_allocator::{
    allocate_meals, meal_health_score, MealPlan, MealSlot, MealSlotKind, MealTotals,
};
pub use nutrition_calculator::{
    calculate_harris_benedict, calculate_tdee, caloric_target, ActivityLevel, CaloricProfile,
    Gender,
};
