// ABOUTME: Greedy three-slot meal allocator for a single chain under a daily calorie target
// ABOUTME: Filters implausible items and condiments, ranks by meal health score, packs each slot once
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Meal allocation.
//!
//! Candidates come from one chain. Each slot gets a share of the daily target
//! and is filled by a single pass over candidates sorted by
//! [`meal_health_score`], skipping anything that would overflow the slot or was
//! already used by name anywhere in the plan.

use crate::config::intelligence::MealAllocationConfig;
use crate::errors::{AppError, AppResult};
use fastfood_core::models::{MenuRecord, NutrientProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// Position of a slot within the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlotKind {
    /// First meal
    Breakfast,
    /// Second meal
    Lunch,
    /// Third meal
    Dinner,
}

impl MealSlotKind {
    /// Slots in allocation order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }

    /// 1-based position in the day
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Breakfast => 1,
            Self::Lunch => 2,
            Self::Dinner => 3,
        }
    }
}

impl fmt::Display for MealSlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Running totals of a slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
}

impl MealTotals {
    fn add(&mut self, nutrients: &NutrientProfile) {
        self.calories += nutrients.calories;
        self.protein_g += nutrients.protein_g;
        self.fat_g += nutrients.total_fat_g;
        self.carbs_g += nutrients.carbs_g;
    }
}

/// One meal of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Which meal this is
    pub kind: MealSlotKind,
    /// Calorie ceiling for the slot
    pub budget: f64,
    /// Assigned records in assignment order
    pub items: Vec<MenuRecord>,
    /// Sums over `items`
    pub totals: MealTotals,
}

/// A day of meals from one chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Chain as requested by the caller
    pub chain: String,
    /// Daily calorie target the budgets derive from
    pub daily_target: f64,
    /// Breakfast, lunch, dinner
    pub slots: Vec<MealSlot>,
}

impl MealPlan {
    /// Totals across every slot
    #[must_use]
    pub fn day_totals(&self) -> MealTotals {
        self.slots
            .iter()
            .fold(MealTotals::default(), |mut acc, slot| {
                acc.calories += slot.totals.calories;
                acc.protein_g += slot.totals.protein_g;
                acc.fat_g += slot.totals.fat_g;
                acc.carbs_g += slot.totals.carbs_g;
                acc
            })
    }

    /// Number of assigned items across the day
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.items.len()).sum()
    }
}

/// Allocator ranking score on raw values: `2 x protein - fat - sugars + fiber`.
///
/// Independent of the normalized health score used for alternatives.
#[must_use]
pub fn meal_health_score(nutrients: &NutrientProfile) -> f64 {
    2.0f64.mul_add(nutrients.protein_g, -nutrients.total_fat_g) - nutrients.sugars_g
        + nutrients.fiber_g
}

/// Copy of a record with the allocator's fields made non-negative
fn with_absolute_values(record: &MenuRecord) -> MenuRecord {
    let mut adjusted = record.clone();
    let nutrients = &mut adjusted.nutrients;
    nutrients.calories = nutrients.calories.abs();
    nutrients.protein_g = nutrients.protein_g.abs();
    nutrients.total_fat_g = nutrients.total_fat_g.abs();
    nutrients.carbs_g = nutrients.carbs_g.abs();
    nutrients.fiber_g = nutrients.fiber_g.abs();
    nutrients.sugars_g = nutrients.sugars_g.abs();
    adjusted
}

fn is_plausible_meal(nutrients: &NutrientProfile, config: &MealAllocationConfig) -> bool {
    nutrients.calories > config.min_calories
        && nutrients.protein_g > config.min_protein_g
        && nutrients.total_fat_g < config.max_fat_g
}

fn is_excluded_item(item: &str, keywords: &[String]) -> bool {
    let item = item.to_lowercase();
    keywords
        .iter()
        .any(|keyword| item.contains(&keyword.to_lowercase()))
}

/// Chain records that survive the plausibility and keyword filters, best first
#[must_use]
pub fn meal_candidates(
    records: &[MenuRecord],
    chain: &str,
    config: &MealAllocationConfig,
) -> Vec<MenuRecord> {
    let mut candidates: Vec<(MenuRecord, f64)> = records
        .iter()
        .filter(|record| record.is_from(chain))
        .map(with_absolute_values)
        .filter(|record| is_plausible_meal(&record.nutrients, config))
        .filter(|record| !is_excluded_item(&record.item, &config.excluded_keywords))
        .map(|record| {
            let score = meal_health_score(&record.nutrients);
            (record, score)
        })
        .collect();

    // descending, stable for ties
    candidates.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    candidates.into_iter().map(|(record, _)| record).collect()
}

/// Build a three-slot plan for `chain` under `daily_target` kcal
///
/// # Errors
///
/// - `InvalidInput` if `daily_target` is not a positive finite number
/// - `InsufficientData` if the chain has no record passing the candidate filters
pub fn allocate_meals(
    records: &[MenuRecord],
    daily_target: f64,
    chain: &str,
    config: &MealAllocationConfig,
) -> AppResult<MealPlan> {
    if !daily_target.is_finite() || daily_target <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Daily calorie target must be a positive number, got {daily_target}"
        )));
    }

    let chain_records = records.iter().filter(|record| record.is_from(chain)).count();
    if chain_records == 0 {
        return Err(AppError::insufficient_data(format!(
            "No items available for chain '{chain}'"
        )));
    }

    let candidates = meal_candidates(records, chain, config);
    debug!(
        chain,
        chain_records,
        candidates = candidates.len(),
        "Filtered meal candidates"
    );
    if candidates.is_empty() {
        return Err(AppError::insufficient_data(format!(
            "No items available for chain '{chain}' after meal filters"
        )));
    }

    let proportions = &config.slot_proportions;
    let budgets = [
        (MealSlotKind::Breakfast, proportions.breakfast * daily_target),
        (MealSlotKind::Lunch, proportions.lunch * daily_target),
        (MealSlotKind::Dinner, proportions.dinner * daily_target),
    ];

    let mut used: HashSet<&str> = HashSet::new();
    let mut slots = Vec::with_capacity(budgets.len());

    for (kind, budget) in budgets {
        let mut items = Vec::new();
        let mut totals = MealTotals::default();

        for candidate in &candidates {
            if used.contains(candidate.item.as_str()) {
                continue;
            }
            if totals.calories + candidate.nutrients.calories > budget {
                continue;
            }
            used.insert(candidate.item.as_str());
            totals.add(&candidate.nutrients);
            items.push(candidate.clone());
        }

        debug!(
            slot = %kind,
            budget,
            items = items.len(),
            calories = totals.calories,
            "Filled meal slot"
        );
        slots.push(MealSlot {
            kind,
            budget,
            items,
            totals,
        });
    }

    let plan = MealPlan {
        chain: chain.to_owned(),
        daily_target,
        slots,
    };
    info!(
        chain,
        daily_target,
        items = plan.item_count(),
        "Meal plan allocated"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(item: &str, calories: f64, protein: f64, fat: f64) -> MenuRecord {
        let nutrients = NutrientProfile {
            calories,
            protein_g: protein,
            total_fat_g: fat,
            ..NutrientProfile::default()
        };
        MenuRecord::new(0, "Chain", item, nutrients)
    }

    #[test]
    fn test_meal_health_score_formula() {
        let nutrients = NutrientProfile {
            protein_g: 30.0,
            total_fat_g: 10.0,
            sugars_g: 5.0,
            fiber_g: 3.0,
            ..NutrientProfile::default()
        };
        assert!((meal_health_score(&nutrients) - 48.0).abs() < 1e-12);
    }

    #[test]
    fn test_plausibility_bounds_are_exclusive() {
        let config = MealAllocationConfig::default();
        assert!(!is_plausible_meal(&meal("a", 100.0, 20.0, 10.0).nutrients, &config));
        assert!(!is_plausible_meal(&meal("b", 300.0, 10.0, 10.0).nutrients, &config));
        assert!(!is_plausible_meal(&meal("c", 300.0, 20.0, 80.0).nutrients, &config));
        assert!(is_plausible_meal(&meal("d", 101.0, 11.0, 79.0).nutrients, &config));
    }

    #[test]
    fn test_keyword_exclusion_is_case_insensitive() {
        let keywords = MealAllocationConfig::default().excluded_keywords;
        assert!(is_excluded_item("Chocolate MILKshake", &keywords));
        assert!(is_excluded_item("Honey Mustard Sauce", &keywords));
        assert!(!is_excluded_item("Grilled Chicken Sandwich", &keywords));
    }

    #[test]
    fn test_negative_values_made_absolute() {
        let record = meal("Negative", -350.0, -25.0, 12.0);
        let adjusted = with_absolute_values(&record);
        assert!((adjusted.nutrients.calories - 350.0).abs() < f64::EPSILON);
        assert!((adjusted.nutrients.protein_g - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_target_rejected() {
        let records = vec![meal("Burger", 500.0, 30.0, 20.0)];
        let config = MealAllocationConfig::default();
        for target in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let error = allocate_meals(&records, target, "Chain", &config).unwrap_err();
            assert_eq!(error.code, crate::errors::ErrorCode::InvalidInput);
        }
    }
}
