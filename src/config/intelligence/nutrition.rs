// ABOUTME: Nutrition configuration for caloric estimation, health scoring, and meal allocation
// ABOUTME: Harris-Benedict coefficients, activity factors, slot proportions, and candidate filters
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition Configuration
//!
//! Provides the tunable numbers behind every calculation:
//! BMR coefficients, TDEE multipliers, health-score weights, and the meal
//! allocator's budgets and candidate filters.
//!
//! # References
//!
//! - BMR: Roza & Shizgal (1984) revision of Harris & Benedict (1919)
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use fastfood_core::constants::meal_filters;
use fastfood_core::models::Nutrient;
use serde::{Deserialize, Serialize};

/// Nutrition Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Meal allocator budgets and candidate filters
    pub meal_allocation: MealAllocationConfig,
    /// Signed weights of the normalized health score
    pub health_score: HealthScoreWeights,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Revised Harris-Benedict equation:
/// `BMR = constant + weight_coef x kg + height_coef x cm - age_coef x years`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male constant (88.362)
    pub hb_male_constant: f64,
    /// Male weight coefficient (13.397)
    pub hb_male_weight_coef: f64,
    /// Male height coefficient (4.799)
    pub hb_male_height_coef: f64,
    /// Male age coefficient, subtracted (5.677)
    pub hb_male_age_coef: f64,
    /// Female constant (447.593)
    pub hb_female_constant: f64,
    /// Female weight coefficient (9.247)
    pub hb_female_weight_coef: f64,
    /// Female height coefficient (3.098)
    pub hb_female_height_coef: f64,
    /// Female age coefficient, subtracted (4.330)
    pub hb_female_age_coef: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

/// Share of the daily target assigned to each meal slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlotProportions {
    /// First slot of the day (0.30)
    pub breakfast: f64,
    /// Second slot (0.35)
    pub lunch: f64,
    /// Third slot (0.35)
    pub dinner: f64,
}

impl Default for SlotProportions {
    fn default() -> Self {
        Self {
            breakfast: 0.30,
            lunch: 0.35,
            dinner: 0.35,
        }
    }
}

/// Meal allocator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealAllocationConfig {
    /// Slot budgets as fractions of the daily target
    pub slot_proportions: SlotProportions,
    /// Candidates need strictly more energy than this (kcal)
    pub min_calories: f64,
    /// Candidates need strictly more protein than this (g)
    pub min_protein_g: f64,
    /// Candidates need strictly less fat than this (g)
    pub max_fat_g: f64,
    /// Item-name substrings excluding beverages and condiments (matched lower-case)
    pub excluded_keywords: Vec<String>,
}

impl Default for MealAllocationConfig {
    fn default() -> Self {
        Self {
            slot_proportions: SlotProportions::default(),
            min_calories: meal_filters::MIN_CALORIES,
            min_protein_g: meal_filters::MIN_PROTEIN_G,
            max_fat_g: meal_filters::MAX_FAT_G,
            excluded_keywords: meal_filters::EXCLUDED_ITEM_KEYWORDS
                .iter()
                .map(|keyword| (*keyword).to_owned())
                .collect(),
        }
    }
}

impl MealAllocationConfig {
    /// Tolerance when checking that slot proportions do not exceed the whole day
    const PROPORTION_SUM_TOLERANCE: f64 = 1e-9;

    /// Validate proportions and thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a proportion is outside (0, 1] or a
    /// threshold is negative or non-finite, and `ConfigError::InvalidWeights` if the
    /// proportions add up to more than the whole day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let proportions = [
            ("breakfast", self.slot_proportions.breakfast),
            ("lunch", self.slot_proportions.lunch),
            ("dinner", self.slot_proportions.dinner),
        ];

        for (name, value) in proportions {
            if value.is_nan() || value <= 0.0 || value > 1.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} proportion must be in (0.0, 1.0], got {value}"
                )));
            }
        }

        let sum: f64 = proportions.iter().map(|(_, value)| value).sum();
        if sum > 1.0 + Self::PROPORTION_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "slot proportions must sum to at most 1.0, got {sum}"
            )));
        }

        let thresholds = [
            ("min_calories", self.min_calories),
            ("min_protein_g", self.min_protein_g),
            ("max_fat_g", self.max_fat_g),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Signed weights applied to standardized nutrients in the health score.
///
/// Alternatives are ranked ascending by the resulting score. Carbs and sugars are
/// excluded (weight 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScoreWeights {
    /// Calories (-1)
    pub calories: f64,
    /// Total fat (-1)
    pub total_fat: f64,
    /// Saturated fat (-1)
    pub saturated_fat: f64,
    /// Trans fat (-1)
    pub trans_fat: f64,
    /// Cholesterol (-1)
    pub cholesterol: f64,
    /// Sodium (-1)
    pub sodium: f64,
    /// Carbohydrates (0)
    pub carbs: f64,
    /// Fiber (+1)
    pub fiber: f64,
    /// Sugars (0)
    pub sugars: f64,
    /// Protein (+1)
    pub protein: f64,
}

impl Default for HealthScoreWeights {
    fn default() -> Self {
        Self {
            calories: -1.0,
            total_fat: -1.0,
            saturated_fat: -1.0,
            trans_fat: -1.0,
            cholesterol: -1.0,
            sodium: -1.0,
            carbs: 0.0,
            fiber: 1.0,
            sugars: 0.0,
            protein: 1.0,
        }
    }
}

impl HealthScoreWeights {
    /// Weight of one nutrient
    #[must_use]
    pub const fn weight(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::TotalFat => self.total_fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::TransFat => self.trans_fat,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Sodium => self.sodium,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugars => self.sugars,
            Nutrient::Protein => self.protein,
        }
    }

    /// Nutrients that contribute to the score (non-zero weight)
    #[must_use]
    pub fn weighted_nutrients(&self) -> Vec<Nutrient> {
        Nutrient::ALL
            .into_iter()
            .filter(|nutrient| self.weight(*nutrient).abs() > f64::EPSILON)
            .collect()
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            hb_male_constant: 88.362,
            hb_male_weight_coef: 13.397,
            hb_male_height_coef: 4.799,
            hb_male_age_coef: 5.677,
            hb_female_constant: 447.593,
            hb_female_weight_coef: 9.247,
            hb_female_height_coef: 3.098,
            hb_female_age_coef: 4.330,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}
