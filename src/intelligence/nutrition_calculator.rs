// ABOUTME: Caloric estimation using the revised Harris-Benedict equation and activity multipliers
// ABOUTME: BMR, TDEE, lossy parsing of gender and activity text, and metric/imperial profiles
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition Calculator Module
//!
//! Estimates the daily caloric budget that drives the meal allocator.
//!
//! # Scientific References
//!
//! - Harris, J.A., & Benedict, F.G. (1919). A biometric study of human basal metabolism.
//!   *Proceedings of the National Academy of Sciences*, 4(12), 370-373.
//!   <https://doi.org/10.1073/pnas.4.12.370>
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>

use crate::config::intelligence::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use fastfood_core::constants::units;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl Gender {
    /// Parse free text: `male` in any case selects [`Gender::Male`], anything else
    /// selects [`Gender::Female`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    #[default]
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Parse free text such as `"Lightly Active"` or `"very_active"`.
    ///
    /// Unrecognized text falls back to [`ActivityLevel::Sedentary`].
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let normalized = s
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "lightly active" => Self::LightlyActive,
            "moderately active" => Self::ModeratelyActive,
            "very active" => Self::VeryActive,
            "extra active" => Self::ExtraActive,
            _ => Self::Sedentary,
        }
    }

    /// Human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly active",
            Self::ModeratelyActive => "moderately active",
            Self::VeryActive => "very active",
            Self::ExtraActive => "extra active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metabolic profile of one person, in metric units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CaloricProfile {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
}

impl CaloricProfile {
    /// Create a profile from metric values
    #[must_use]
    pub const fn metric(
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            age,
            gender,
            activity_level,
        }
    }

    /// Create a profile from pounds, feet, and inches
    #[must_use]
    pub fn imperial(
        weight_lbs: f64,
        height_ft: f64,
        height_in: f64,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            weight_kg: pounds_to_kg(weight_lbs),
            height_cm: feet_inches_to_cm(height_ft, height_in),
            age,
            gender,
            activity_level,
        }
    }
}

/// Convert pounds to kilograms
#[must_use]
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * units::KG_PER_LB
}

/// Convert a height in feet plus inches to centimeters
#[must_use]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet.mul_add(units::INCHES_PER_FOOT, inches) * units::CM_PER_INCH
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// Formula:
/// - Men: `88.362 + 13.397 x kg + 4.799 x cm - 5.677 x years`
/// - Otherwise: `447.593 + 9.247 x kg + 3.098 x cm - 4.330 x years`
///
/// # Reference
/// Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
///
/// # Errors
///
/// Returns an error if weight or height is not a positive finite number, or age is zero
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be a positive number"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be a positive number"));
    }
    if age == 0 {
        return Err(AppError::invalid_input("Age must be at least 1 year"));
    }

    let (constant, weight_coef, height_coef, age_coef) = match gender {
        Gender::Male => (
            config.hb_male_constant,
            config.hb_male_weight_coef,
            config.hb_male_height_coef,
            config.hb_male_age_coef,
        ),
        Gender::Female => (
            config.hb_female_constant,
            config.hb_female_weight_coef,
            config.hb_female_height_coef,
            config.hb_female_age_coef,
        ),
    };

    let age_component = age_coef * f64::from(age);
    Ok(height_coef.mul_add(height_cm, weight_coef.mul_add(weight_kg, constant)) - age_component)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2 (little/no exercise)
/// - Lightly active: 1.375 (1-3 days/week)
/// - Moderately active: 1.55 (3-5 days/week)
/// - Very active: 1.725 (6-7 days/week)
/// - Extra active: 1.9 (hard training 2x/day)
///
/// # Errors
///
/// Returns an error if BMR is not a positive finite number
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    Ok(bmr * activity_factor)
}

/// Daily caloric target (TDEE) for a profile
///
/// # Errors
///
/// Returns an error if the profile values are out of range
pub fn caloric_target(profile: &CaloricProfile, config: &NutritionConfig) -> AppResult<f64> {
    let bmr = calculate_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    calculate_tdee(bmr, profile.activity_level, &config.activity_factors)
}
