// ABOUTME: Normalized health score used to rank alternatives
// ABOUTME: Standardizes each weighted nutrient over the whole record set, then sums with signed weights
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Health scoring.
//!
//! Scores are set-relative: the mean and deviation of each nutrient come from
//! the records passed in, so the full dataset must be scored once rather than
//! per query.

use super::statistics::ColumnStats;
use crate::config::intelligence::HealthScoreWeights;
use fastfood_core::models::{MenuRecord, Nutrient, RowId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Health score of one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// Identity of the scored record
    pub row_id: RowId,
    /// Weighted sum of standardized nutrients
    pub health_score: f64,
}

/// Health scores keyed by row identity
#[derive(Debug, Clone, Default)]
pub struct ScoredDataset {
    records: Vec<ScoredRecord>,
    by_row: HashMap<RowId, f64>,
}

impl ScoredDataset {
    /// Score of a record, if it was part of the scored set
    #[must_use]
    pub fn score(&self, row_id: RowId) -> Option<f64> {
        self.by_row.get(&row_id).copied()
    }

    /// Scored records in input order
    #[must_use]
    pub fn records(&self) -> &[ScoredRecord] {
        &self.records
    }

    /// Number of scored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing was scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Score every record: `sum(weight_f * z_f)` over the given features, where `z_f`
/// is the population z-score of feature `f` across `records`.
#[must_use]
pub fn compute_health_scores(
    records: &[MenuRecord],
    features: &[Nutrient],
    weights: &HealthScoreWeights,
) -> ScoredDataset {
    let mut totals = vec![0.0; records.len()];

    for &nutrient in features {
        let weight = weights.weight(nutrient);
        if weight.abs() <= f64::EPSILON {
            continue;
        }

        let column: Vec<f64> = records
            .iter()
            .map(|record| record.nutrients.get(nutrient))
            .collect();
        let stats = ColumnStats::from_values(&column);
        debug!(
            feature = nutrient.column_name(),
            mean = stats.mean,
            std_dev = stats.std_dev,
            "Standardizing feature"
        );

        for (total, value) in totals.iter_mut().zip(&column) {
            *total = weight.mul_add(stats.z_score(*value), *total);
        }
    }

    let scored: Vec<ScoredRecord> = records
        .iter()
        .zip(totals)
        .map(|(record, health_score)| ScoredRecord {
            row_id: record.row_id,
            health_score,
        })
        .collect();
    let by_row = scored
        .iter()
        .map(|record| (record.row_id, record.health_score))
        .collect();

    ScoredDataset {
        records: scored,
        by_row,
    }
}
