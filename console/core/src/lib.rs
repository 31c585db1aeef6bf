// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Toolkit Console Core
//!
//! Pass-through proxy between the admin console and the remote
//! content-generation backend.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Domain types, backend client, proxy contract and HTTP surface

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
