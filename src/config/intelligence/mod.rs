// ABOUTME: Intelligence configuration container with env overrides and validation
// ABOUTME: Wraps NutritionConfig and loads it from defaults plus FASTFOOD_* variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Intelligence Configuration Module
//!
//! Configuration is built from defaults, then environment overrides, then
//! validated. It is passed explicitly to whatever needs it; there is no global
//! instance.

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, HealthScoreWeights, MealAllocationConfig, NutritionConfig,
    SlotProportions,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Environment variables overriding meal allocation defaults
pub mod env_overrides {
    /// Plausibility threshold: minimum calories (exclusive)
    pub const MEAL_MIN_CALORIES: &str = "FASTFOOD_MEAL_MIN_CALORIES";
    /// Plausibility threshold: minimum protein in grams (exclusive)
    pub const MEAL_MIN_PROTEIN: &str = "FASTFOOD_MEAL_MIN_PROTEIN";
    /// Plausibility threshold: maximum fat in grams (exclusive)
    pub const MEAL_MAX_FAT: &str = "FASTFOOD_MEAL_MAX_FAT";
    /// Breakfast share of the daily target
    pub const SLOT_BREAKFAST: &str = "FASTFOOD_SLOT_BREAKFAST";
    /// Lunch share of the daily target
    pub const SLOT_LUNCH: &str = "FASTFOOD_SLOT_LUNCH";
    /// Dinner share of the daily target
    pub const SLOT_DINNER: &str = "FASTFOOD_SLOT_DINNER";
}

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for caloric estimation, scoring, and meal allocation
    pub nutrition: NutritionConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            min_calories = config.nutrition.meal_allocation.min_calories,
            min_protein_g = config.nutrition.meal_allocation.min_protein_g,
            max_fat_g = config.nutrition.meal_allocation.max_fat_g,
            "Intelligence configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        let bmr_coefficients = [
            nutr.bmr.hb_male_weight_coef,
            nutr.bmr.hb_male_height_coef,
            nutr.bmr.hb_female_weight_coef,
            nutr.bmr.hb_female_height_coef,
        ];
        if bmr_coefficients.iter().any(|coef| *coef <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive".to_owned(),
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5".to_owned(),
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        nutr.meal_allocation.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let meal = &mut self.nutrition.meal_allocation;

        Self::apply_env_var(env_overrides::MEAL_MIN_CALORIES, &mut meal.min_calories)?;
        Self::apply_env_var(env_overrides::MEAL_MIN_PROTEIN, &mut meal.min_protein_g)?;
        Self::apply_env_var(env_overrides::MEAL_MAX_FAT, &mut meal.max_fat_g)?;

        Self::apply_env_var(
            env_overrides::SLOT_BREAKFAST,
            &mut meal.slot_proportions.breakfast,
        )?;
        Self::apply_env_var(env_overrides::SLOT_LUNCH, &mut meal.slot_proportions.lunch)?;
        Self::apply_env_var(env_overrides::SLOT_DINNER, &mut meal.slot_proportions.dinner)?;

        Ok(self)
    }
}
