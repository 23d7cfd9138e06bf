// ABOUTME: Output helpers for fastfood-cli
// ABOUTME: Results go to stdout as text or JSON; errors go to stderr
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use fastfood_finder::errors::{AppError, AppResult, ErrorResponse, ErrorResponseDetails};
use fastfood_finder::formatters::{format_json, OutputFormat};
use serde::Serialize;

/// Print a result in the selected format
pub fn emit<T, F>(format: OutputFormat, data: &T, render: F) -> AppResult<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    let output = match format {
        OutputFormat::Text => render(data),
        OutputFormat::Json => format_json(data)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Report an error on stderr
pub fn display_error(error: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Text => eprintln!("Error: {error}"),
        OutputFormat::Json => {
            let response = ErrorResponse {
                error: ErrorResponseDetails {
                    code: error.code,
                    message: error.message.clone(),
                },
            };
            match format_json(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("Error: {error}"),
            }
        }
    }
}
