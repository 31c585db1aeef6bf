// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Toolkit Console Rust SDK
//!
//! Typed access to the console proxy's same-origin JSON API.

pub mod client;
pub mod types;

pub use client::{ConsoleClient, ConsoleClientError};
pub use types::*;
