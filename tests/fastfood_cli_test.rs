// ABOUTME: Integration tests for the fastfood-cli binary
// ABOUTME: Runs subcommands against a temporary menu and checks output and exit codes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Integration tests for the fastfood-cli binary.
//!
//! These tests verify command structure, rendered output, and error handling.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::write_menu_csv;
use std::process::Command;
use tempfile::NamedTempFile;

/// Helper to run a CLI command and capture its output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fastfood-cli"))
        .args(args)
        .env_remove("FASTFOOD_DATA_PATH")
        .env_remove("FASTFOOD_OUTPUT_FORMAT")
        .env_remove("FASTFOOD_DEFAULT_TOP_N")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn menu_file() -> NamedTempFile {
    write_menu_csv(
        "Burger Barn,Classic Burger,550,28,10,1,80,900,45,2,9,28\n\
         Burger Barn,Grilled Chicken Sandwich,420,12,3,0,70,800,40,3,8,36\n\
         Burger Barn,Cola Drink,250,0,0,0,0,40,65,0,65,0\n\
         Taco Town,Chicken Bowl,520,16,5,0,95,1100,50,10,5,42",
    )
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["alternatives", "plan", "tdee", "info", "chains"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_alternatives_text_output() {
    let menu = menu_file();
    let path = menu.path().to_str().unwrap();

    let (exit_code, stdout, stderr) = run_cli(&["--data", path, "alternatives", "classic"]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Nutritional Comparison for 'classic':"));
    assert!(stdout.contains("Item: Grilled Chicken Sandwich"));
    assert!(stdout.contains("Item: Chicken Bowl"));
}

#[test]
fn test_alternatives_json_output() {
    let menu = menu_file();
    let path = menu.path().to_str().unwrap();

    let (exit_code, stdout, _stderr) = run_cli(&[
        "--data", path, "--format", "json", "alternatives", "classic", "--top", "1",
    ]);

    assert_eq!(exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["anchor"]["item"], "Classic Burger");
    assert_eq!(json["alternatives"].as_array().unwrap().len(), 1);
}

#[test]
fn test_unknown_item_exits_with_query_outcome_code() {
    let menu = menu_file();
    let path = menu.path().to_str().unwrap();

    let (exit_code, stdout, stderr) = run_cli(&["--data", path, "alternatives", "lobster"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("lobster"));
}

#[test]
fn test_plan_with_explicit_target() {
    let menu = menu_file();
    let path = menu.path().to_str().unwrap();

    let (exit_code, stdout, stderr) = run_cli(&[
        "--data", path, "plan", "--chain", "burger barn", "--tdee", "2000",
    ]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Meal 1 (Breakfast) Suggestions"));
    assert!(stdout.contains("Grilled Chicken Sandwich - 420 cal"));
    assert!(!stdout.contains("Cola Drink"));
}

#[test]
fn test_plan_for_unknown_chain_is_insufficient_data() {
    let menu = menu_file();
    let path = menu.path().to_str().unwrap();

    let (exit_code, _stdout, stderr) =
        run_cli(&["--data", path, "plan", "--chain", "Nowhere", "--tdee", "2000"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No items available"));
}

#[test]
fn test_tdee_needs_no_dataset() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "--data",
        "/nonexistent/menu.csv",
        "tdee",
        "--weight-lbs",
        "150",
        "--height-ft",
        "5",
        "--height-in",
        "6",
        "--age",
        "28",
        "--gender",
        "female",
        "--activity",
        "Lightly Active",
    ]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.contains("estimated daily caloric intake"));
}

#[test]
fn test_non_numeric_profile_is_rejected_by_parser() {
    let (exit_code, _stdout, stderr) = run_cli(&["tdee", "--weight-lbs", "heavy", "--age", "30"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("weight-lbs"));
}

#[test]
fn test_missing_profile_value_is_invalid_input() {
    let (exit_code, _stdout, stderr) = run_cli(&["tdee", "--weight-lbs", "150", "--age", "30"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--height-ft"));
}

#[test]
fn test_missing_dataset_exits_with_dataset_code() {
    let (exit_code, _stdout, _stderr) = run_cli(&["--data", "/nonexistent/menu.csv", "chains"]);
    assert_eq!(exit_code, 3);
}

#[test]
fn test_chains_and_info() {
    let menu = menu_file();
    let path = menu.path().to_str().unwrap();

    let (chains_code, chains, _) = run_cli(&["--data", path, "chains"]);
    let (info_code, info, _) = run_cli(&["--data", path, "info", "bowl"]);

    assert_eq!(chains_code, 0);
    assert_eq!(chains.trim(), "Burger Barn\nTaco Town");
    assert_eq!(info_code, 0);
    assert!(info.contains("Sodium: 1100mg"));
}
