// ABOUTME: Menu dataset module: header normalization, CSV loading, and the query context
// ABOUTME: Produces the immutable MenuContext every query runs against
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Header normalization and lookup
pub mod columns;
/// Loaded dataset with scores and query methods
pub mod context;
/// CSV loading and numeric coercion
pub mod loader;

pub use columns::{normalize_column_name, ColumnResolver};
pub use context::MenuContext;
pub use loader::{load_menu_csv, LoadSummary, MenuDataset, RawMenuRow};
