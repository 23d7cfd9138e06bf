// ABOUTME: fastfood-cli - command-line front-end for the healthier-alternatives finder
// ABOUTME: Parses and validates inputs, runs one query against the loaded menu, prints the result
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Three healthier alternatives to the first item containing "big mac"
//! fastfood-cli alternatives "big mac"
//!
//! # Five alternatives, every nutrient, as JSON
//! fastfood-cli --format json alternatives "whopper" --top 5 --full
//!
//! # Day plan from a known daily target
//! fastfood-cli plan --chain "McDonald's" --tdee 2200
//!
//! # Day plan from a profile (imperial units)
//! fastfood-cli plan --chain Wendys --weight-lbs 180 --height-ft 5 --height-in 10 \
//!     --age 35 --gender male --activity "moderately active"
//!
//! # Estimated daily caloric needs only
//! fastfood-cli tdee --weight-lbs 150 --height-ft 5 --height-in 6 --age 28 --gender female
//!
//! # Full nutrition for every matching item, and the chain list
//! fastfood-cli info nuggets
//! fastfood-cli chains
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use fastfood_finder::config::{FinderConfig, IntelligenceConfig};
use fastfood_finder::dataset::MenuContext;
use fastfood_finder::errors::{AppError, AppResult};
use fastfood_finder::formatters::OutputFormat;
use fastfood_finder::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use commands::ProfileArgs;

#[derive(Parser)]
#[command(
    name = "fastfood-cli",
    version,
    about = "Find healthier fast-food alternatives and plan a day of meals",
    long_about = "Loads a fast-food nutrition menu, ranks healthier alternatives to an item, and builds single-chain meal plans sized to your daily caloric needs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Menu CSV path (defaults to FASTFOOD_DATA_PATH, then FastFoodNutritionMenuV2.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format: text or json (defaults to FASTFOOD_OUTPUT_FORMAT, then text)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Healthier alternatives to the first item whose name contains ITEM
    Alternatives {
        /// Item name or fragment (case-insensitive)
        item: String,

        /// Number of alternatives to show
        #[arg(long)]
        top: Option<usize>,

        /// Compare every nutrient instead of the summary set
        #[arg(long)]
        full: bool,
    },

    /// A day of meals from one chain under a caloric budget
    Plan {
        /// Restaurant chain (case-insensitive)
        #[arg(long)]
        chain: String,

        /// Daily calorie target; replaces the profile arguments
        #[arg(long, conflicts_with_all = ["weight_lbs", "height_ft", "height_in", "age", "gender", "activity"])]
        tdee: Option<f64>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Estimated daily caloric needs (Harris-Benedict BMR x activity factor)
    Tdee {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Full nutrition for every item whose name contains ITEM
    Info {
        /// Item name or fragment (case-insensitive)
        item: String,
    },

    /// List the chains present in the dataset
    Chains,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::display::display_error(&error, format.unwrap_or_default());
            ExitCode::from(error.code.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let finder = FinderConfig::from_env().map_err(|e| AppError::config(format!("{e:#}")))?;
    let intelligence = IntelligenceConfig::load()?;

    let format = cli.format.unwrap_or(finder.output_format);
    let data_path = cli.data.unwrap_or(finder.data_path);
    debug!(data_path = %data_path.display(), %format, "Resolved CLI settings");

    let load_context = || MenuContext::load(&data_path, intelligence.nutrition.clone());

    match cli.command {
        Command::Tdee { profile } => commands::tdee::run(&profile, &intelligence.nutrition, format),
        Command::Alternatives { item, top, full } => commands::alternatives::run(
            &load_context()?,
            &item,
            top.unwrap_or(finder.default_top_n),
            full,
            format,
        ),
        Command::Plan {
            chain,
            tdee,
            profile,
        } => commands::plan::run(&load_context()?, &chain, tdee, &profile, format),
        Command::Info { item } => commands::info::run(&load_context()?, &item, format),
        Command::Chains => commands::chains::run(&load_context()?, format),
    }
}
