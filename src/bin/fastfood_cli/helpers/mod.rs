// ABOUTME: Helper modules for fastfood-cli
// ABOUTME: Output and error display shared by every subcommand
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub mod display;
