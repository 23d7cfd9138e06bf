// ABOUTME: info subcommand - every nutrient of each item matching a name fragment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::helpers::display;
use fastfood_finder::dataset::MenuContext;
use fastfood_finder::errors::AppResult;
use fastfood_finder::formatters::{render_nutrition_info, OutputFormat};
use fastfood_finder::logging::AppLogger;
use std::time::Instant;

pub fn run(context: &MenuContext, item: &str, format: OutputFormat) -> AppResult<()> {
    let started = Instant::now();
    let records = context.nutrition_info(item);
    AppLogger::log_query(
        "info",
        item,
        records.as_ref().map(|_| ()).map_err(|e| e.code),
        started.elapsed(),
    );

    display::emit(format, &records?, |r| render_nutrition_info(r))
}
