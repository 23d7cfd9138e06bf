// ABOUTME: plan subcommand - breakfast, lunch, and dinner from one chain under a daily target
// ABOUTME: Target comes from --tdee or is estimated from the profile arguments
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::ProfileArgs;
use crate::helpers::display;
use fastfood_finder::dataset::MenuContext;
use fastfood_finder::errors::{AppError, AppResult};
use fastfood_finder::formatters::{render_meal_plan, OutputFormat};
use fastfood_finder::intelligence::nutrition_calculator::caloric_target;
use fastfood_finder::logging::AppLogger;
use std::time::Instant;
use tracing::debug;

pub fn run(
    context: &MenuContext,
    chain: &str,
    tdee: Option<f64>,
    profile: &ProfileArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let daily_target = match tdee {
        Some(target) => target,
        None => {
            let profile = profile.to_profile()?;
            let target = caloric_target(&profile, context.nutrition())?;
            debug!(daily_target = target, "Estimated daily target from profile");
            target
        }
    };
    if !daily_target.is_finite() || daily_target <= 0.0 {
        return Err(AppError::invalid_input(
            "Daily calorie target must be a number greater than zero",
        ));
    }

    let started = Instant::now();
    let plan = context.allocate_meals(daily_target, chain);
    AppLogger::log_query(
        "plan",
        chain,
        plan.as_ref().map(|_| ()).map_err(|e| e.code),
        started.elapsed(),
    );

    display::emit(format, &plan?, render_meal_plan)
}
