// ABOUTME: Error handling re-exports from the fastfood-core crate
// ABOUTME: Keeps crate::errors paths stable for the finder and its binary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling System
//!
//! See [`fastfood_core::errors`] for the definitions.

pub use fastfood_core::errors::*;
