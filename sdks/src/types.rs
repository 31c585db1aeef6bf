// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Types
//!
//! Request payloads accepted by the console proxy.
//!
//! # Architecture
//!
//! - **Layer:** Client SDK
//! - **Purpose:** Implements request payload types

use serde::{Deserialize, Serialize};

pub use toolkit_core::domain::entities::ContentType;

/// Fields for a new worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerDraft {
    pub name: String,
    pub description: String,
    pub output_type: ContentType,
    pub prompt: String,
}

/// Fields an update may change. The output type is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerUpdate {
    pub name: String,
    pub description: String,
    pub prompt: String,
}

/// `tenantId/brandId/workerId` triple addressing a worker's generations.
#[derive(Debug, Clone, Copy)]
pub struct GenerationScope<'a> {
    pub tenant_id: &'a str,
    pub brand_id: &'a str,
    pub worker_id: &'a str,
}
