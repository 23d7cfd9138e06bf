// ABOUTME: Integration tests for the single-chain greedy meal allocator
// ABOUTME: Slot budgets, plan-wide item uniqueness, candidate filters, and insufficient data
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{context_from, meal_record};
use fastfood_finder::config::MealAllocationConfig;
use fastfood_finder::errors::ErrorCode;
use fastfood_finder::intelligence::meal_allocator::{
    allocate_meals, meal_candidates, MealPlan, MealSlotKind,
};
use fastfood_finder::models::MenuRecord;
use std::collections::HashSet;

fn grill_menu() -> Vec<MenuRecord> {
    vec![
        meal_record("Grill", "Big Steak", 750.0, 60.0, 30.0),
        meal_record("Grill", "Chicken Plate", 500.0, 45.0, 10.0),
        meal_record("Grill", "Turkey Wrap", 400.0, 30.0, 8.0),
        meal_record("Grill", "Bean Bowl", 300.0, 20.0, 5.0),
        meal_record("Grill", "Fish Sandwich", 350.0, 18.0, 12.0),
        meal_record("Grill", "Egg Muffin", 250.0, 15.0, 9.0),
        meal_record("Other Place", "Mega Protein Plate", 400.0, 90.0, 5.0),
    ]
}

fn slot_items(plan: &MealPlan, kind: MealSlotKind) -> Vec<&str> {
    plan.slots
        .iter()
        .find(|slot| slot.kind == kind)
        .unwrap()
        .items
        .iter()
        .map(|record| record.item.as_str())
        .collect()
}

// ============================================================================
// Budgets And Greedy Fill
// ============================================================================

#[test]
fn test_budgets_split_daily_target() {
    let context = context_from(grill_menu());

    let plan = context.allocate_meals(2000.0, "Grill").unwrap();

    let budgets: Vec<f64> = plan.slots.iter().map(|slot| slot.budget).collect();
    assert_eq!(plan.slots.len(), 3);
    assert!((budgets[0] - 600.0).abs() < 1e-9);
    assert!((budgets[1] - 700.0).abs() < 1e-9);
    assert!((budgets[2] - 700.0).abs() < 1e-9);
    assert_eq!(plan.slots[0].kind, MealSlotKind::Breakfast);
    assert_eq!(plan.slots[2].kind, MealSlotKind::Dinner);
}

#[test]
fn test_greedy_fill_follows_meal_score_order() {
    let context = context_from(grill_menu());

    let plan = context.allocate_meals(2000.0, "Grill").unwrap();

    assert_eq!(slot_items(&plan, MealSlotKind::Breakfast), vec!["Chicken Plate"]);
    assert_eq!(
        slot_items(&plan, MealSlotKind::Lunch),
        vec!["Turkey Wrap", "Bean Bowl"]
    );
    assert_eq!(
        slot_items(&plan, MealSlotKind::Dinner),
        vec!["Fish Sandwich", "Egg Muffin"]
    );
}

#[test]
fn test_item_over_every_budget_is_never_assigned() {
    let context = context_from(grill_menu());

    let plan = context.allocate_meals(2000.0, "Grill").unwrap();

    assert!(plan
        .slots
        .iter()
        .flat_map(|slot| &slot.items)
        .all(|record| record.item != "Big Steak"));
}

#[test]
fn test_slot_totals_match_items_and_stay_within_budget() {
    let context = context_from(grill_menu());

    let plan = context.allocate_meals(1800.0, "Grill").unwrap();

    for slot in &plan.slots {
        let calories: f64 = slot.items.iter().map(|r| r.nutrients.calories).sum();
        let protein: f64 = slot.items.iter().map(|r| r.nutrients.protein_g).sum();
        let fat: f64 = slot.items.iter().map(|r| r.nutrients.total_fat_g).sum();
        let carbs: f64 = slot.items.iter().map(|r| r.nutrients.carbs_g).sum();

        assert!(slot.totals.calories <= slot.budget);
        assert!((slot.totals.calories - calories).abs() < 1e-9);
        assert!((slot.totals.protein_g - protein).abs() < 1e-9);
        assert!((slot.totals.fat_g - fat).abs() < 1e-9);
        assert!((slot.totals.carbs_g - carbs).abs() < 1e-9);
    }

    let day = plan.day_totals();
    let summed: f64 = plan.slots.iter().map(|slot| slot.totals.calories).sum();
    assert!((day.calories - summed).abs() < 1e-9);
}

#[test]
fn test_item_names_are_unique_across_the_plan() {
    let mut menu = grill_menu();
    // same name, another size
    menu.push(meal_record("Grill", "Chicken Plate", 480.0, 44.0, 9.0));
    menu.push(meal_record("Grill", "Chicken Plate", 200.0, 22.0, 4.0));
    let context = context_from(menu);

    let plan = context.allocate_meals(3000.0, "Grill").unwrap();

    let names: Vec<&str> = plan
        .slots
        .iter()
        .flat_map(|slot| slot.items.iter().map(|r| r.item.as_str()))
        .collect();
    let distinct: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(names.len(), distinct.len());
    assert_eq!(plan.item_count(), names.len());
}

#[test]
fn test_small_target_may_leave_slots_empty() {
    let context = context_from(grill_menu());

    let plan = context.allocate_meals(500.0, "Grill").unwrap();

    // budgets 150/175/175 are below every candidate
    assert_eq!(plan.item_count(), 0);
    assert_eq!(plan.slots.len(), 3);
}

// ============================================================================
// Candidate Filters
// ============================================================================

#[test]
fn test_chain_match_is_case_insensitive_and_exclusive() {
    let context = context_from(grill_menu());

    let plan = context.allocate_meals(2000.0, "  grill ").unwrap();

    assert!(plan
        .slots
        .iter()
        .flat_map(|slot| &slot.items)
        .all(|record| record.company == "Grill"));
}

#[test]
fn test_candidate_filters_drop_implausible_and_excluded_items() {
    let menu = vec![
        meal_record("Cafe", "Protein Coffee Shake", 300.0, 30.0, 5.0),
        meal_record("Cafe", "Dipping Sauce", 150.0, 12.0, 10.0),
        meal_record("Cafe", "Cookie", 90.0, 12.0, 4.0),
        meal_record("Cafe", "Fries", 400.0, 5.0, 20.0),
        meal_record("Cafe", "Triple Stack", 1500.0, 80.0, 95.0),
        meal_record("Cafe", "Chicken Salad", 350.0, 30.0, 12.0),
    ];

    let candidates = meal_candidates(&menu, "Cafe", &MealAllocationConfig::default());

    let names: Vec<&str> = candidates.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(names, vec!["Chicken Salad"]);
}

#[test]
fn test_negative_values_are_made_absolute() {
    let menu = vec![meal_record("Cafe", "Odd Entry", -300.0, -25.0, -8.0)];

    let candidates = meal_candidates(&menu, "Cafe", &MealAllocationConfig::default());

    assert_eq!(candidates.len(), 1);
    assert!((candidates[0].nutrients.calories - 300.0).abs() < f64::EPSILON);
    assert!((candidates[0].nutrients.protein_g - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_custom_thresholds_change_candidates() {
    let menu = grill_menu();
    let config = MealAllocationConfig {
        min_protein_g: 40.0,
        ..MealAllocationConfig::default()
    };

    let candidates = meal_candidates(&menu, "Grill", &config);

    let names: Vec<&str> = candidates.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(names, vec!["Big Steak", "Chicken Plate"]);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unknown_chain_is_insufficient_data() {
    let context = context_from(grill_menu());

    let error = context.allocate_meals(2000.0, "Nowhere").unwrap_err();

    assert_eq!(error.code, ErrorCode::InsufficientData);
}

#[test]
fn test_chain_without_candidates_is_insufficient_data() {
    let menu = vec![
        meal_record("Drinks Co", "Orange Juice", 200.0, 2.0, 0.0),
        meal_record("Drinks Co", "Cola Drink", 250.0, 0.0, 0.0),
    ];

    let error = allocate_meals(&menu, 2000.0, "Drinks Co", &MealAllocationConfig::default())
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InsufficientData);
}

#[test]
fn test_non_positive_target_is_invalid_input() {
    let context = context_from(grill_menu());

    for target in [0.0, -100.0, f64::NAN, f64::INFINITY] {
        let error = context.allocate_meals(target, "Grill").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
