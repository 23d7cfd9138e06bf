// ABOUTME: tdee subcommand - estimated daily caloric needs from body measurements
// ABOUTME: Harris-Benedict BMR scaled by the activity factor; needs no dataset
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::ProfileArgs;
use crate::helpers::display;
use fastfood_finder::config::NutritionConfig;
use fastfood_finder::errors::AppResult;
use fastfood_finder::formatters::OutputFormat;
use fastfood_finder::intelligence::nutrition_calculator::{
    calculate_harris_benedict, calculate_tdee, ActivityLevel, Gender,
};
use fastfood_finder::logging::AppLogger;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct TdeeReport {
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    bmr: f64,
    tdee: f64,
}

pub fn run(args: &ProfileArgs, nutrition: &NutritionConfig, format: OutputFormat) -> AppResult<()> {
    let started = Instant::now();
    let result = estimate(args, nutrition);
    AppLogger::log_query(
        "tdee",
        args.activity.as_deref().unwrap_or("sedentary"),
        result.as_ref().map(|_| ()).map_err(|e| e.code),
        started.elapsed(),
    );
    let report = result?;

    display::emit(format, &report, |r| {
        format!(
            "Profile: {:.1} kg, {:.1} cm, {} years, {}, {}\nBasal metabolic rate: {:.2} calories\nBased on your inputs, your estimated daily caloric intake is: {:.2} calories.",
            r.weight_kg, r.height_cm, r.age, r.gender, r.activity_level, r.bmr, r.tdee
        )
    })
}

fn estimate(args: &ProfileArgs, nutrition: &NutritionConfig) -> AppResult<TdeeReport> {
    let profile = args.to_profile()?;
    let bmr = calculate_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &nutrition.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &nutrition.activity_factors)?;

    Ok(TdeeReport {
        weight_kg: profile.weight_kg,
        height_cm: profile.height_cm,
        age: profile.age,
        gender: profile.gender,
        activity_level: profile.activity_level,
        bmr,
        tdee,
    })
}
