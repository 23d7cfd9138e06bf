// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates defaults, environment handling, and query outcome logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fastfood_finder::errors::ErrorCode;
use fastfood_finder::logging::{AppLogger, LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::time::Duration;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "menu-batch");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "menu-batch");

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "fastfood-cli");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Compact);
}

#[test]
fn test_verbose_override() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
}

#[test]
fn test_query_logging_accepts_every_outcome() {
    let elapsed = Duration::from_millis(3);
    AppLogger::log_query("alternatives", "Big Mac", Ok(()), elapsed);
    AppLogger::log_query("alternatives", "Lobster", Err(ErrorCode::NotFound), elapsed);
    AppLogger::log_query("plan", "Nowhere", Err(ErrorCode::DatasetUnreadable), elapsed);
}
