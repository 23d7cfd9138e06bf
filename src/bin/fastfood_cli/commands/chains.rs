// ABOUTME: chains subcommand - distinct restaurant chains in the loaded dataset
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::helpers::display;
use fastfood_finder::dataset::MenuContext;
use fastfood_finder::errors::AppResult;
use fastfood_finder::formatters::OutputFormat;

pub fn run(context: &MenuContext, format: OutputFormat) -> AppResult<()> {
    let chains = context.chains();
    display::emit(format, &chains, |names| names.join("\n"))
}
