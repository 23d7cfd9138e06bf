// ABOUTME: Menu record model keyed by row identity rather than item name
// ABOUTME: One retained row of the menu dataset with company, item, and nutrient values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::nutrient::NutrientProfile;
use serde::{Deserialize, Serialize};

/// Stable identity of a retained dataset row.
///
/// Item names repeat across chains and sizes, so scores and lookups are keyed
/// by this id instead.
pub type RowId = usize;

/// One menu item with its nutrient values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    /// Position of this record in the retained dataset
    pub row_id: RowId,
    /// Restaurant chain
    pub company: String,
    /// Menu item name (not unique)
    pub item: String,
    /// Nutrient values as found in the source
    pub nutrients: NutrientProfile,
}

impl MenuRecord {
    /// Create a new record
    #[must_use]
    pub fn new(
        row_id: RowId,
        company: impl Into<String>,
        item: impl Into<String>,
        nutrients: NutrientProfile,
    ) -> Self {
        Self {
            row_id,
            company: company.into(),
            item: item.into(),
            nutrients,
        }
    }

    /// Case-insensitive substring match against the item name.
    ///
    /// `needle_lower` must already be lower-cased.
    #[must_use]
    pub fn item_contains(&self, needle_lower: &str) -> bool {
        self.item.to_lowercase().contains(needle_lower)
    }

    /// Case-insensitive company equality
    #[must_use]
    pub fn is_from(&self, company: &str) -> bool {
        self.company.trim().to_lowercase() == company.trim().to_lowercase()
    }
}
