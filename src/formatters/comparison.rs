// ABOUTME: Text rendering of an anchor item against its healthier alternatives
// ABOUTME: Shows unnormalized values with signed differences; summary or full nutrient coverage
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{format_amount, format_delta};
use crate::intelligence::alternatives::AlternativesResult;
use fastfood_core::models::{MenuRecord, Nutrient};
use std::fmt::Write;

/// Which nutrients a comparison lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonDetail {
    /// Calories, total fat, protein, carbs
    #[default]
    Summary,
    /// All ten nutrients
    Full,
}

impl ComparisonDetail {
    const SUMMARY: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::TotalFat,
        Nutrient::Protein,
        Nutrient::Carbs,
    ];

    /// Nutrients rendered at this level of detail
    #[must_use]
    pub const fn nutrients(self) -> &'static [Nutrient] {
        match self {
            Self::Summary => &Self::SUMMARY,
            Self::Full => &Nutrient::ALL,
        }
    }
}

fn nutrient_line(nutrient: Nutrient, value: f64) -> String {
    format!(
        "{}: {}{}",
        nutrient.label(),
        format_amount(value),
        nutrient.unit()
    )
}

/// Render the anchor block followed by every alternative with its differences
#[must_use]
pub fn render_comparison(
    query: &str,
    result: &AlternativesResult,
    detail: ComparisonDetail,
) -> String {
    let anchor = &result.anchor;
    let mut out = String::new();

    let _ = writeln!(out, "Nutritional Comparison for '{query}':");
    if result.is_ambiguous() {
        let _ = writeln!(
            out,
            "({} items matched; comparing against the first)",
            result.match_count
        );
    }
    let _ = writeln!(out, "Selected Item:");
    let _ = writeln!(out, "Company: {}", anchor.company);
    let _ = writeln!(out, "Item: {}", anchor.item);
    for &nutrient in detail.nutrients() {
        let _ = writeln!(out, "{}", nutrient_line(nutrient, anchor.nutrients.get(nutrient)));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Healthier Alternatives:");
    for alternative in &result.alternatives {
        let _ = writeln!(out);
        let _ = writeln!(out, "Company: {}", alternative.company);
        let _ = writeln!(out, "Item: {}", alternative.item);
        for &nutrient in detail.nutrients() {
            let value = alternative.nutrients.get(nutrient);
            let delta = value - anchor.nutrients.get(nutrient);
            let _ = writeln!(
                out,
                "{} (Difference: {}{})",
                nutrient_line(nutrient, value),
                format_delta(delta),
                nutrient.unit()
            );
        }
    }

    out
}

/// Render every nutrient of each matched record
#[must_use]
pub fn render_nutrition_info(records: &[MenuRecord]) -> String {
    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "Company: {}", record.company);
        let _ = writeln!(out, "Item: {}", record.item);
        for nutrient in Nutrient::ALL {
            let _ = writeln!(out, "{}", nutrient_line(nutrient, record.nutrients.get(nutrient)));
        }
    }
    out
}
