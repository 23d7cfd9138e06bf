// ABOUTME: Text rendering of a three-slot meal plan with per-item macros and slot totals
// ABOUTME: Pure presentation over MealPlan; calories rounded, grams to one decimal
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::intelligence::meal_allocator::MealPlan;
use std::fmt::Write;

/// Render a meal plan slot by slot
#[must_use]
pub fn render_meal_plan(plan: &MealPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Meal Plan for {} ({:.0} kcal/day)",
        plan.chain, plan.daily_target
    );

    for slot in &plan.slots {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Meal {} ({}) Suggestions, budget {:.0} cal:",
            slot.kind.ordinal(),
            slot.kind,
            slot.budget
        );
        if slot.items.is_empty() {
            let _ = writeln!(out, "No items fit this budget");
        }
        for item in &slot.items {
            let nutrients = &item.nutrients;
            let _ = writeln!(out, "{} - {:.0} cal", item.item, nutrients.calories);
            let _ = writeln!(
                out,
                "Protein: {:.1}g | Fat: {:.1}g | Carbs: {:.1}g",
                nutrients.protein_g, nutrients.total_fat_g, nutrients.carbs_g
            );
        }
        let totals = &slot.totals;
        let _ = writeln!(
            out,
            "-> Meal Total: {:.0} cal | Protein: {:.1}g | Fat: {:.1}g | Carbs: {:.1}g",
            totals.calories, totals.protein_g, totals.fat_g, totals.carbs_g
        );
    }

    let day = plan.day_totals();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Day Total: {:.0} cal | Protein: {:.1}g | Fat: {:.1}g | Carbs: {:.1}g",
        day.calories, day.protein_g, day.fat_g, day.carbs_g
    );
    out
}
