// ABOUTME: alternatives subcommand - healthier items that dominate the queried one
// ABOUTME: Prints the anchor with the ranked alternatives and their nutrient differences
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::helpers::display;
use fastfood_finder::dataset::MenuContext;
use fastfood_finder::errors::AppResult;
use fastfood_finder::formatters::{render_comparison, ComparisonDetail, OutputFormat};
use fastfood_finder::logging::AppLogger;
use std::time::Instant;

pub fn run(
    context: &MenuContext,
    item: &str,
    top_n: usize,
    full: bool,
    format: OutputFormat,
) -> AppResult<()> {
    let started = Instant::now();
    let result = context.find_alternatives(item, top_n);
    AppLogger::log_query(
        "alternatives",
        item,
        result.as_ref().map(|_| ()).map_err(|e| e.code),
        started.elapsed(),
    );
    let result = result?;

    let detail = if full {
        ComparisonDetail::Full
    } else {
        ComparisonDetail::Summary
    };
    display::emit(format, &result, |r| render_comparison(item.trim(), r, detail))
}
