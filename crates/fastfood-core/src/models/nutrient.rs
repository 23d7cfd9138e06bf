// ABOUTME: Fixed ten-field nutrient schema shared by loading, scoring, and rendering
// ABOUTME: Nutrient enum with canonical column ids plus the NutrientProfile value struct
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::columns;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten numeric nutrient fields of a menu record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Total fat (g)
    TotalFat,
    /// Saturated fat (g)
    SaturatedFat,
    /// Trans fat (g)
    TransFat,
    /// Cholesterol (mg)
    Cholesterol,
    /// Sodium (mg)
    Sodium,
    /// Carbohydrates (g)
    Carbs,
    /// Dietary fiber (g)
    Fiber,
    /// Sugars (g)
    Sugars,
    /// Protein (g)
    Protein,
}

impl Nutrient {
    /// All nutrients in canonical column order
    pub const ALL: [Self; 10] = [
        Self::Calories,
        Self::TotalFat,
        Self::SaturatedFat,
        Self::TransFat,
        Self::Cholesterol,
        Self::Sodium,
        Self::Carbs,
        Self::Fiber,
        Self::Sugars,
        Self::Protein,
    ];

    /// Canonical (normalized) column identifier
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Calories => columns::CALORIES,
            Self::TotalFat => columns::TOTAL_FAT,
            Self::SaturatedFat => columns::SATURATED_FAT,
            Self::TransFat => columns::TRANS_FAT,
            Self::Cholesterol => columns::CHOLESTEROL,
            Self::Sodium => columns::SODIUM,
            Self::Carbs => columns::CARBS,
            Self::Fiber => columns::FIBER,
            Self::Sugars => columns::SUGARS,
            Self::Protein => columns::PROTEIN,
        }
    }

    /// Human label for rendering
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::TotalFat => "Total Fat",
            Self::SaturatedFat => "Saturated Fat",
            Self::TransFat => "Trans Fat",
            Self::Cholesterol => "Cholesterol",
            Self::Sodium => "Sodium",
            Self::Carbs => "Carbs",
            Self::Fiber => "Fiber",
            Self::Sugars => "Sugars",
            Self::Protein => "Protein",
        }
    }

    /// Display unit suffix (empty for calories)
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "",
            Self::Cholesterol | Self::Sodium => "mg",
            Self::TotalFat
            | Self::SaturatedFat
            | Self::TransFat
            | Self::Carbs
            | Self::Fiber
            | Self::Sugars
            | Self::Protein => "g",
        }
    }

    /// Position in [`Nutrient::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ten nutrient values of one menu item, as found in the source data
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy (kcal)
    pub calories: f64,
    /// Total fat (g)
    pub total_fat_g: f64,
    /// Saturated fat (g)
    pub saturated_fat_g: f64,
    /// Trans fat (g)
    pub trans_fat_g: f64,
    /// Cholesterol (mg)
    pub cholesterol_mg: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Dietary fiber (g)
    pub fiber_g: f64,
    /// Sugars (g)
    pub sugars_g: f64,
    /// Protein (g)
    pub protein_g: f64,
}

impl NutrientProfile {
    /// Build a profile from values ordered as [`Nutrient::ALL`]
    #[must_use]
    pub const fn from_values(values: [f64; 10]) -> Self {
        let [
            calories,
            total_fat_g,
            saturated_fat_g,
            trans_fat_g,
            cholesterol_mg,
            sodium_mg,
            carbs_g,
            fiber_g,
            sugars_g,
            protein_g,
        ] = values;
        Self {
            calories,
            total_fat_g,
            saturated_fat_g,
            trans_fat_g,
            cholesterol_mg,
            sodium_mg,
            carbs_g,
            fiber_g,
            sugars_g,
            protein_g,
        }
    }

    /// Values ordered as [`Nutrient::ALL`]
    #[must_use]
    pub const fn to_values(&self) -> [f64; 10] {
        [
            self.calories,
            self.total_fat_g,
            self.saturated_fat_g,
            self.trans_fat_g,
            self.cholesterol_mg,
            self.sodium_mg,
            self.carbs_g,
            self.fiber_g,
            self.sugars_g,
            self.protein_g,
        ]
    }

    /// Value of a single nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::TotalFat => self.total_fat_g,
            Nutrient::SaturatedFat => self.saturated_fat_g,
            Nutrient::TransFat => self.trans_fat_g,
            Nutrient::Cholesterol => self.cholesterol_mg,
            Nutrient::Sodium => self.sodium_mg,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fiber => self.fiber_g,
            Nutrient::Sugars => self.sugars_g,
            Nutrient::Protein => self.protein_g,
        }
    }

    /// True when every value is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_values().iter().all(|value| value.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_order_matches_nutrient_order() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let profile = NutrientProfile::from_values(values);

        for nutrient in Nutrient::ALL {
            assert!((profile.get(nutrient) - values[nutrient.index()]).abs() < f64::EPSILON);
        }
        assert_eq!(profile.to_values(), values);
    }

    #[test]
    fn test_non_finite_profile_detected() {
        let mut profile = NutrientProfile::default();
        assert!(profile.is_finite());

        profile.sodium_mg = f64::NAN;
        assert!(!profile.is_finite());
    }

    #[test]
    fn test_units() {
        assert_eq!(Nutrient::Sodium.unit(), "mg");
        assert_eq!(Nutrient::Protein.unit(), "g");
        assert_eq!(Nutrient::Calories.unit(), "");
        assert_eq!(Nutrient::Sodium.column_name(), "Sodium_(mg)");
    }
}
