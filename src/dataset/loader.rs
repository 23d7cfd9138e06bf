// ABOUTME: Menu dataset loader reading CSV via polars and coercing the ten nutrient fields
// ABOUTME: Rows with any non-numeric nutrient are dropped and counted in the load summary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Dataset loading.
//!
//! Every column is read as text so that numeric coercion happens in one place
//! ([`coerce_nutrient`]) with one rule: a value is valid when it parses as a
//! finite `f64` after trimming. Rows failing that rule for any nutrient are
//! excluded; they are not imputed.

use super::columns::ColumnResolver;
use crate::errors::{AppError, AppResult};
use fastfood_core::constants::columns;
use fastfood_core::models::{MenuRecord, Nutrient, NutrientProfile};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// One source row before coercion, as text
#[derive(Debug, Clone, Default)]
pub struct RawMenuRow {
    /// Company cell (`None` when the cell or column is absent)
    pub company: Option<String>,
    /// Item cell
    pub item: Option<String>,
    /// Nutrient cells indexed by [`Nutrient::index`]
    pub nutrients: [Option<String>; 10],
}

impl RawMenuRow {
    /// Build a row from company, item, and nutrient cells in canonical order
    #[must_use]
    pub fn new(company: &str, item: &str, nutrients: [&str; 10]) -> Self {
        Self {
            company: Some(company.to_owned()),
            item: Some(item.to_owned()),
            nutrients: nutrients.map(|cell| Some(cell.to_owned())),
        }
    }
}

/// Outcome counts of one dataset load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Rows present in the source
    pub total_rows: usize,
    /// Rows retained after coercion
    pub retained_rows: usize,
    /// Rows excluded because a nutrient value was missing or non-numeric
    pub dropped_rows: usize,
    /// Canonical features with no matching source column
    pub missing_features: Vec<Nutrient>,
}

/// Cleaned menu data plus the canonical feature list
#[derive(Debug, Clone, Default)]
pub struct MenuDataset {
    records: Vec<MenuRecord>,
    features: Vec<Nutrient>,
}

impl MenuDataset {
    /// Build a dataset from already-valid records.
    ///
    /// Row ids are reassigned to record positions so they stay a dense identity.
    #[must_use]
    pub fn from_records(records: Vec<MenuRecord>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(row_id, record)| MenuRecord { row_id, ..record })
            .collect();
        Self {
            records,
            features: Nutrient::ALL.to_vec(),
        }
    }

    /// Coerce raw rows, dropping any row with an invalid nutrient value
    #[must_use]
    pub fn from_raw_rows(
        rows: Vec<RawMenuRow>,
        missing_features: Vec<Nutrient>,
    ) -> (Self, LoadSummary) {
        let total_rows = rows.len();
        let mut records = Vec::with_capacity(total_rows);

        for row in rows {
            let Some(nutrients) = coerce_row(&row.nutrients) else {
                continue;
            };
            let row_id = records.len();
            records.push(MenuRecord::new(
                row_id,
                row.company.unwrap_or_default(),
                row.item.unwrap_or_default(),
                nutrients,
            ));
        }

        let summary = LoadSummary {
            total_rows,
            retained_rows: records.len(),
            dropped_rows: total_rows - records.len(),
            missing_features,
        };

        (
            Self {
                records,
                features: Nutrient::ALL.to_vec(),
            },
            summary,
        )
    }

    /// Retained records in source order
    #[must_use]
    pub fn records(&self) -> &[MenuRecord] {
        &self.records
    }

    /// Canonical nutrient feature list
    #[must_use]
    pub fn features(&self) -> &[Nutrient] {
        &self.features
    }

    /// Record by row identity
    #[must_use]
    pub fn get(&self, row_id: usize) -> Option<&MenuRecord> {
        self.records.get(row_id)
    }

    /// Number of retained records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record was retained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse one nutrient cell. Valid values are finite numbers after trimming.
#[must_use]
pub fn coerce_nutrient(cell: Option<&str>) -> Option<f64> {
    cell.map(str::trim)
        .filter(|text| !text.is_empty())
        .and_then(|text| text.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn coerce_row(cells: &[Option<String>; 10]) -> Option<NutrientProfile> {
    let mut values = [0.0; 10];
    for (slot, cell) in values.iter_mut().zip(cells) {
        *slot = coerce_nutrient(cell.as_deref())?;
    }
    Some(NutrientProfile::from_values(values)).filter(NutrientProfile::is_finite)
}

/// Load and clean the menu CSV at `path`
///
/// # Errors
///
/// Returns `DatasetUnreadable` if the file cannot be read or parsed as CSV, and
/// `InvalidInput` if the `Company` or `Item` column is missing.
pub fn load_menu_csv(path: &Path) -> AppResult<(MenuDataset, LoadSummary)> {
    info!(path = %path.display(), "Loading menu dataset");

    // Infer nothing: every column arrives as text and coercion stays in our hands
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|e| {
            AppError::dataset(format!("Failed to read CSV '{}'", path.display())).with_source(e)
        })?;

    let (dataset, summary) = dataset_from_frame(&df)?;

    info!(
        rows.total = summary.total_rows,
        rows.retained = summary.retained_rows,
        rows.dropped = summary.dropped_rows,
        "Menu dataset loaded"
    );
    Ok((dataset, summary))
}

/// Convert a string-typed data frame into a cleaned dataset
///
/// # Errors
///
/// Returns `InvalidInput` if the `Company` or `Item` column is missing, or
/// `DatasetUnreadable` if a column cannot be read as text.
pub fn dataset_from_frame(df: &DataFrame) -> AppResult<(MenuDataset, LoadSummary)> {
    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str().to_owned())
        .collect();
    let resolver = ColumnResolver::new(&headers);
    debug!(headers = ?resolver.normalized_headers(), "Normalized dataset headers");

    let company_column = required_column(&resolver, columns::COMPANY)?;
    let item_column = required_column(&resolver, columns::ITEM)?;

    let companies = text_column(df, company_column)?;
    let items = text_column(df, item_column)?;

    let mut missing_features = Vec::new();
    let mut nutrient_columns: Vec<Option<Vec<Option<String>>>> = Vec::with_capacity(10);
    for nutrient in Nutrient::ALL {
        match resolver.resolve(nutrient.column_name()) {
            Some(raw) => nutrient_columns.push(Some(text_column(df, raw)?)),
            None => {
                warn!(feature = nutrient.column_name(), "Missing feature column in dataset");
                missing_features.push(nutrient);
                nutrient_columns.push(None);
            }
        }
    }

    let rows = (0..df.height())
        .map(|index| RawMenuRow {
            company: companies.get(index).cloned().flatten(),
            item: items.get(index).cloned().flatten(),
            nutrients: std::array::from_fn(|position| {
                nutrient_columns
                    .get(position)
                    .and_then(Option::as_ref)
                    .and_then(|column| column.get(index).cloned().flatten())
            }),
        })
        .collect();

    Ok(MenuDataset::from_raw_rows(rows, missing_features))
}

fn required_column<'a>(resolver: &'a ColumnResolver, canonical: &str) -> AppResult<&'a str> {
    resolver.resolve(canonical).ok_or_else(|| {
        AppError::invalid_input(format!("Dataset is missing the required '{canonical}' column"))
    })
}

fn text_column(df: &DataFrame, name: &str) -> AppResult<Vec<Option<String>>> {
    let series = df
        .column(name)
        .and_then(|column| column.as_materialized_series().cast(&DataType::String))
        .map_err(|e| AppError::dataset(format!("Failed to read column '{name}'")).with_source(e))?;
    let values = series
        .str()
        .map_err(|e| AppError::dataset(format!("Column '{name}' is not text")).with_source(e))?
        .into_iter()
        .map(|value| value.map(str::to_owned))
        .collect();
    Ok(values)
}
