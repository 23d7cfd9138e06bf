// ABOUTME: Immutable menu context holding the loaded dataset and its health scores
// ABOUTME: Entry point for alternative search, meal allocation, nutrition lookup, and chain listing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::loader::{load_menu_csv, LoadSummary, MenuDataset};
use crate::config::intelligence::NutritionConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::alternatives::{self, validate_query, AlternativesResult};
use crate::intelligence::health_score::{compute_health_scores, ScoredDataset};
use crate::intelligence::meal_allocator::{self, MealPlan};
use fastfood_core::models::MenuRecord;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// Loaded, scored menu data plus the configuration the queries run with.
///
/// Built once per process and only read afterwards.
#[derive(Debug, Clone)]
pub struct MenuContext {
    dataset: MenuDataset,
    scores: ScoredDataset,
    summary: LoadSummary,
    nutrition: NutritionConfig,
}

impl MenuContext {
    /// Score a dataset and wrap it
    #[must_use]
    pub fn new(dataset: MenuDataset, summary: LoadSummary, nutrition: NutritionConfig) -> Self {
        let scores = compute_health_scores(
            dataset.records(),
            dataset.features(),
            &nutrition.health_score,
        );
        Self {
            dataset,
            scores,
            summary,
            nutrition,
        }
    }

    /// Build a context from in-memory records
    #[must_use]
    pub fn from_records(records: Vec<MenuRecord>, nutrition: NutritionConfig) -> Self {
        let dataset = MenuDataset::from_records(records);
        let summary = LoadSummary {
            total_rows: dataset.len(),
            retained_rows: dataset.len(),
            dropped_rows: 0,
            missing_features: Vec::new(),
        };
        Self::new(dataset, summary, nutrition)
    }

    /// Load the CSV at `path` and score it
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or lacks identity columns
    pub fn load(path: &Path, nutrition: NutritionConfig) -> AppResult<Self> {
        let (dataset, summary) = load_menu_csv(path)?;
        let context = Self::new(dataset, summary, nutrition);
        info!(scored = context.scores.len(), "Menu context ready");
        Ok(context)
    }

    /// Cleaned records
    #[must_use]
    pub const fn dataset(&self) -> &MenuDataset {
        &self.dataset
    }

    /// Health scores keyed by row identity
    #[must_use]
    pub const fn scores(&self) -> &ScoredDataset {
        &self.scores
    }

    /// Counts from loading
    #[must_use]
    pub const fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    /// Configuration used by the queries
    #[must_use]
    pub const fn nutrition(&self) -> &NutritionConfig {
        &self.nutrition
    }

    /// Up to `top_n` healthier alternatives to the first item matching `query`
    ///
    /// # Errors
    ///
    /// `InvalidInput`, `NotFound`, or `NoAlternatives`
    pub fn find_alternatives(&self, query: &str, top_n: usize) -> AppResult<AlternativesResult> {
        alternatives::find_alternatives(self.dataset.records(), &self.scores, query, top_n)
    }

    /// A day of meals from `chain` under `daily_target` kcal
    ///
    /// # Errors
    ///
    /// `InvalidInput` or `InsufficientData`
    pub fn allocate_meals(&self, daily_target: f64, chain: &str) -> AppResult<MealPlan> {
        meal_allocator::allocate_meals(
            self.dataset.records(),
            daily_target,
            chain,
            &self.nutrition.meal_allocation,
        )
    }

    /// Every record whose item name contains `query`
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank query, `NotFound` when nothing matches
    pub fn nutrition_info(&self, query: &str) -> AppResult<Vec<MenuRecord>> {
        let query = validate_query(query)?;
        let matches: Vec<MenuRecord> = alternatives::matching_records(self.dataset.records(), query)
            .into_iter()
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(AppError::not_found(query));
        }
        Ok(matches)
    }

    /// Distinct chain names, sorted
    #[must_use]
    pub fn chains(&self) -> Vec<String> {
        self.dataset
            .records()
            .iter()
            .map(|record| record.company.trim())
            .filter(|company| !company.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}
