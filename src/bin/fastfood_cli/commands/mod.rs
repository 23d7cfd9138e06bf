// ABOUTME: Command implementations for fastfood-cli
// ABOUTME: One module per subcommand plus the shared profile arguments
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub mod alternatives;
pub mod chains;
pub mod info;
pub mod plan;
pub mod tdee;

use clap::Args;
use fastfood_finder::errors::{AppError, AppResult};
use fastfood_finder::intelligence::nutrition_calculator::{ActivityLevel, CaloricProfile, Gender};

/// Body measurements in imperial units
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Body weight in pounds
    #[arg(long)]
    pub weight_lbs: Option<f64>,

    /// Height, whole feet
    #[arg(long)]
    pub height_ft: Option<f64>,

    /// Height, remaining inches
    #[arg(long)]
    pub height_in: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// "male" selects the male equation; anything else the female one
    #[arg(long)]
    pub gender: Option<String>,

    /// Sedentary, Lightly Active, Moderately Active, Very Active, Extra Active
    #[arg(long)]
    pub activity: Option<String>,
}

impl ProfileArgs {
    /// Build a metric profile, rejecting missing or non-positive measurements
    pub fn to_profile(&self) -> AppResult<CaloricProfile> {
        let weight_lbs = require_positive("--weight-lbs", self.weight_lbs)?;
        let height_ft = require_non_negative("--height-ft", self.height_ft)?;
        let height_in = require_non_negative("--height-in", self.height_in.or(Some(0.0)))?;
        let age = self
            .age
            .filter(|age| *age > 0)
            .ok_or_else(|| {
                AppError::invalid_input("--age must be a whole number of years above 0")
            })?;
        let gender = self
            .gender
            .as_deref()
            .map(Gender::from_str_lossy)
            .ok_or_else(|| AppError::invalid_input("--gender is required"))?;
        let activity = self
            .activity
            .as_deref()
            .map(ActivityLevel::from_str_lossy)
            .unwrap_or_default();

        let profile =
            CaloricProfile::imperial(weight_lbs, height_ft, height_in, age, gender, activity);
        if profile.height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be greater than zero"));
        }
        Ok(profile)
    }
}

fn require_positive(flag: &str, value: Option<f64>) -> AppResult<f64> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(_) => Err(AppError::invalid_input(format!(
            "{flag} must be a number greater than zero"
        ))),
        None => Err(AppError::invalid_input(format!("{flag} is required"))),
    }
}

fn require_non_negative(flag: &str, value: Option<f64>) -> AppResult<f64> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(_) => Err(AppError::invalid_input(format!(
            "{flag} must be a number of at least zero"
        ))),
        None => Err(AppError::invalid_input(format!("{flag} is required"))),
    }
}
