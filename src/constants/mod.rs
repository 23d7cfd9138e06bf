// ABOUTME: Constant re-exports from the fastfood-core crate
// ABOUTME: Column identifiers, meal filters, units, and environment variable names
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module

pub use fastfood_core::constants::*;
