// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Domain Layer
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Entity views, resource paths, credentials and the backend seam

pub mod backend;
pub mod console_config;
pub mod credentials;
pub mod entities;
pub mod resource;
