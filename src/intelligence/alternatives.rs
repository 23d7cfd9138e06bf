// ABOUTME: Healthier-alternative search: substring match, dominance filter, and health-score ranking
// ABOUTME: Distinguishes an unknown item from an item with nothing better on every predicate
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Alternative finder.
//!
//! The anchor is the first record (in dataset order) whose item name contains
//! the query case-insensitively. A candidate must be at least as good as the
//! anchor on calories and fiber and strictly better on fat, sugars, and protein.

use super::health_score::ScoredDataset;
use crate::errors::{AppError, AppResult};
use fastfood_core::models::{MenuRecord, NutrientProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Anchor record plus its ranked alternatives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativesResult {
    /// Record the query resolved to
    pub anchor: MenuRecord,
    /// Alternatives, best-ranked first, at most `top_n`
    pub alternatives: Vec<MenuRecord>,
    /// How many records matched the query (the anchor is the first of them)
    pub match_count: usize,
}

impl AlternativesResult {
    /// True when more than one record matched and the anchor was picked by order
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        self.match_count > 1
    }
}

/// Whether `candidate` beats `anchor` on every comparison rule
#[must_use]
pub fn dominates(candidate: &NutrientProfile, anchor: &NutrientProfile) -> bool {
    candidate.calories <= anchor.calories
        && candidate.total_fat_g < anchor.total_fat_g
        && candidate.sugars_g < anchor.sugars_g
        && candidate.fiber_g >= anchor.fiber_g
        && candidate.protein_g > anchor.protein_g
}

/// Records whose item name contains `query` case-insensitively, in dataset order
#[must_use]
pub fn matching_records<'a>(records: &'a [MenuRecord], query: &str) -> Vec<&'a MenuRecord> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| record.item_contains(&needle))
        .collect()
}

/// Validate a free-text item query
///
/// # Errors
///
/// Returns `InvalidInput` when the query is empty after trimming
pub fn validate_query(query: &str) -> AppResult<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("Item query must not be empty"));
    }
    Ok(trimmed)
}

/// Find up to `top_n` healthier alternatives to the item matching `query`
///
/// # Errors
///
/// - `InvalidInput` if `top_n` is zero or the query is blank
/// - `NotFound` if no item name contains the query
/// - `NoAlternatives` if nothing passes the dominance filter
pub fn find_alternatives(
    records: &[MenuRecord],
    scores: &ScoredDataset,
    query: &str,
    top_n: usize,
) -> AppResult<AlternativesResult> {
    if top_n == 0 {
        return Err(AppError::invalid_input("top_n must be at least 1"));
    }
    let query = validate_query(query)?;

    let matches = matching_records(records, query);
    let Some(anchor) = matches.first().copied() else {
        return Err(AppError::not_found(query));
    };
    debug!(
        query,
        match_count = matches.len(),
        anchor.row_id = anchor.row_id,
        anchor.item = %anchor.item,
        "Resolved query anchor"
    );

    let mut candidates: Vec<(&MenuRecord, f64)> = records
        .iter()
        .filter(|record| dominates(&record.nutrients, &anchor.nutrients))
        .map(|record| {
            let score = scores.score(record.row_id).unwrap_or(f64::INFINITY);
            (record, score)
        })
        .collect();

    if candidates.is_empty() {
        return Err(AppError::no_alternatives(query));
    }

    // stable: equal scores keep dataset order
    candidates.sort_by(|(_, a), (_, b)| a.total_cmp(b));

    let alternatives: Vec<MenuRecord> = candidates
        .into_iter()
        .take(top_n)
        .map(|(record, _)| record.clone())
        .collect();

    info!(
        query,
        candidates = alternatives.len(),
        "Found healthier alternatives"
    );

    Ok(AlternativesResult {
        anchor: anchor.clone(),
        alternatives,
        match_count: matches.len(),
    })
}
