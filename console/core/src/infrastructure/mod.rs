// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Infrastructure Layer
//!
//! # Architecture
//!
//! - **Layer:** Infrastructure Layer
//! - **Purpose:** Adapters for external systems (the content-generation backend)

pub mod backend_client;

pub use backend_client::HttpBackendClient;
