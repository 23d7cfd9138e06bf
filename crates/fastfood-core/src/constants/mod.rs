// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Column identifiers, keyword filters, unit conversions, and service names
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large list.

/// Canonical column identifiers after header normalization
pub mod columns {
    /// Restaurant chain column
    pub const COMPANY: &str = "Company";
    /// Menu item name column
    pub const ITEM: &str = "Item";
    /// Energy (kcal)
    pub const CALORIES: &str = "Calories";
    /// Total fat (g)
    pub const TOTAL_FAT: &str = "Total_Fat(g)";
    /// Saturated fat (g)
    pub const SATURATED_FAT: &str = "Saturated_Fat(g)";
    /// Trans fat (g)
    pub const TRANS_FAT: &str = "Trans_Fat(g)";
    /// Cholesterol (mg)
    pub const CHOLESTEROL: &str = "Cholesterol(mg)";
    /// Sodium (mg)
    pub const SODIUM: &str = "Sodium_(mg)";
    /// Carbohydrates (g)
    pub const CARBS: &str = "Carbs(g)";
    /// Fiber (g)
    pub const FIBER: &str = "Fiber(g)";
    /// Sugars (g)
    pub const SUGARS: &str = "Sugars(g)";
    /// Protein (g)
    pub const PROTEIN: &str = "Protein(g)";
}

/// Meal planning filters
pub mod meal_filters {
    /// Item-name substrings that mark beverages and condiments
    pub const EXCLUDED_ITEM_KEYWORDS: [&str; 8] = [
        "drink", "soda", "coffee", "juice", "milk", "packet", "syrup", "sauce",
    ];
    /// Items at or below this energy are treated as sides (kcal)
    pub const MIN_CALORIES: f64 = 100.0;
    /// Items at or below this protein are treated as incomplete meals (g)
    pub const MIN_PROTEIN_G: f64 = 10.0;
    /// Items at or above this fat are treated as implausible entries (g)
    pub const MAX_FAT_G: f64 = 80.0;
}

/// Unit conversion factors
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_LB: f64 = 0.453_592;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Inches per foot
    pub const INCHES_PER_FOOT: f64 = 12.0;
}

/// Query defaults
pub mod limits {
    /// Default number of alternatives returned
    pub const DEFAULT_TOP_N: usize = 3;
}

/// Service names used in structured logs
pub mod service_names {
    /// The command-line front-end
    pub const FASTFOOD_CLI: &str = "fastfood-cli";
    /// The library crate target used for log filtering
    pub const FASTFOOD_FINDER: &str = "fastfood_finder";
}

/// Environment variable names
pub mod env_vars {
    /// Path to the menu CSV
    pub const DATA_PATH: &str = "FASTFOOD_DATA_PATH";
    /// Default alternatives count
    pub const DEFAULT_TOP_N: &str = "FASTFOOD_DEFAULT_TOP_N";
    /// Output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "FASTFOOD_OUTPUT_FORMAT";
}

/// Dataset location defaults
pub mod dataset {
    /// Dataset file name used when no path is configured
    pub const DEFAULT_DATA_FILE: &str = "FastFoodNutritionMenuV2.csv";
}
