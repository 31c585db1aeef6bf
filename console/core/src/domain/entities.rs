// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Entities
//!
//! Read-only views of the documents owned by the backend. The proxy relays
//! these as opaque JSON; the typed forms exist for rendering only, so every
//! field besides the identifiers is optional or defaulted and unknown
//! enum values decode to `Unknown`.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Implements entity views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Dynamically-typed settings the console never interprets.
pub type OpaqueSettings = HashMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    Text,
    Image,
    Video,
    Audio,
    #[serde(other)]
    Unknown,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "TEXT",
            ContentType::Image => "IMAGE",
            ContentType::Video => "VIDEO",
            ContentType::Audio => "AUDIO",
            ContentType::Unknown => "UNKNOWN",
        }
    }
}

/// Lifecycle shared by generations, sources and compass runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Processing => "PROCESSING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
            JobStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceType {
    Sample,
    Guidelines,
    Knowledge,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub tenant_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Never rendered.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub settings: OpaqueSettings,
    #[serde(default)]
    pub concurrency_limits: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub settings: OpaqueSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub source_id: String,
    pub tenant_id: String,
    pub brand_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_type: Option<SourceType>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub analysis_results: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub prompt_id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub prompt_text: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub settings: OpaqueSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub worker_id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub output_type: Option<ContentType>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub settings: OpaqueSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<GenerationMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationMetadata {
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub generation_id: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub worker_id: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub result: Option<GenerationResult>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompassProgress {
    #[serde(default)]
    pub total_workers: u32,
    #[serde(default)]
    pub completed_workers: u32,
    #[serde(default)]
    pub percent_complete: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCompass {
    pub status: JobStatus,
    #[serde(default)]
    pub generations: Vec<Value>,
    #[serde(default)]
    pub triggered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub progress: CompassProgress,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compass_decodes_with_progress() {
        let compass: BrandCompass = serde_json::from_value(json!({
            "status": "PROCESSING",
            "generations": [{"generation_id": "G1"}],
            "triggered_at": "2026-01-02T03:04:05Z",
            "progress": {"total_workers": 4, "completed_workers": 1, "percent_complete": 25}
        }))
        .unwrap();

        assert_eq!(compass.status, JobStatus::Processing);
        assert_eq!(compass.generations.len(), 1);
        assert!(compass.completed_at.is_none());
        assert_eq!(compass.progress.completed_workers, 1);
        assert_eq!(compass.progress.percent_complete, 25.0);
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let generation: Generation = serde_json::from_value(json!({
            "generation_id": "G1",
            "status": "QUEUED"
        }))
        .unwrap();
        assert_eq!(generation.status, Some(JobStatus::Unknown));
        assert!(!JobStatus::Unknown.is_terminal());
    }

    #[test]
    fn test_settings_stay_opaque() {
        let brand: Brand = serde_json::from_value(json!({
            "brand_id": "B1",
            "tenant_id": "T1",
            "settings": {"tone": ["bold", "warm"], "nested": {"depth": 2}}
        }))
        .unwrap();
        assert_eq!(brand.settings["nested"], json!({"depth": 2}));
    }

    #[test]
    fn test_tenant_api_key_not_serialized() {
        let tenant: Tenant = serde_json::from_value(json!({
            "tenant_id": "T1",
            "api_key": "secret"
        }))
        .unwrap();
        let rendered = serde_json::to_string(&tenant).unwrap();
        assert!(!rendered.contains("secret"));
    }
}
