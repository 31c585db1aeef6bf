// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Resource Paths
//!
//! Backend paths nest identifiers in a fixed order:
//! `tenant/{t}/brand/{b}/(source|worker|compass)/...` and
//! `tenant/{t}/(prompt|worker)/...`. The builders below only expose the
//! transitions the backend understands, so an out-of-order path cannot be
//! expressed.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Implements backend resource path construction

use std::fmt;

/// A fully built backend path, kept as raw (unencoded) segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Start a path at the tenant scope.
    pub fn tenant(tenant_id: impl Into<String>) -> TenantPath {
        TenantPath {
            segments: vec!["tenant".to_string(), tenant_id.into()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

fn extend(mut segments: Vec<String>, tail: &[&str]) -> Vec<String> {
    segments.extend(tail.iter().map(|s| s.to_string()));
    segments
}

/// `tenant/{t}`
#[derive(Debug, Clone)]
pub struct TenantPath {
    segments: Vec<String>,
}

impl TenantPath {
    pub fn brands(self) -> ResourcePath {
        ResourcePath {
            segments: extend(self.segments, &["brand"]),
        }
    }

    pub fn brand(self, brand_id: impl Into<String>) -> BrandPath {
        let mut segments = extend(self.segments, &["brand"]);
        segments.push(brand_id.into());
        BrandPath { segments }
    }

    pub fn prompts(self) -> ResourcePath {
        ResourcePath {
            segments: extend(self.segments, &["prompt"]),
        }
    }

    pub fn prompt(self, prompt_id: impl Into<String>) -> ResourcePath {
        let mut segments = extend(self.segments, &["prompt"]);
        segments.push(prompt_id.into());
        ResourcePath { segments }
    }

    pub fn workers(self) -> ResourcePath {
        ResourcePath {
            segments: extend(self.segments, &["worker"]),
        }
    }

    pub fn worker(self, worker_id: impl Into<String>) -> ResourcePath {
        let mut segments = extend(self.segments, &["worker"]);
        segments.push(worker_id.into());
        ResourcePath { segments }
    }
}

impl From<TenantPath> for ResourcePath {
    fn from(path: TenantPath) -> Self {
        ResourcePath {
            segments: path.segments,
        }
    }
}

/// `tenant/{t}/brand/{b}`
#[derive(Debug, Clone)]
pub struct BrandPath {
    segments: Vec<String>,
}

impl BrandPath {
    pub fn sources(self) -> ResourcePath {
        ResourcePath {
            segments: extend(self.segments, &["source"]),
        }
    }

    pub fn source(self, source_id: impl Into<String>) -> ResourcePath {
        let mut segments = extend(self.segments, &["source"]);
        segments.push(source_id.into());
        ResourcePath { segments }
    }

    /// Workers addressed under a brand are only used to reach generations.
    pub fn worker(self, worker_id: impl Into<String>) -> BrandWorkerPath {
        let mut segments = extend(self.segments, &["worker"]);
        segments.push(worker_id.into());
        BrandWorkerPath { segments }
    }

    pub fn compass(self) -> ResourcePath {
        ResourcePath {
            segments: extend(self.segments, &["compass"]),
        }
    }

    pub fn compass_trigger(self) -> ResourcePath {
        ResourcePath {
            segments: extend(self.segments, &["compass", "trigger"]),
        }
    }
}

impl From<BrandPath> for ResourcePath {
    fn from(path: BrandPath) -> Self {
        ResourcePath {
            segments: path.segments,
        }
    }
}

/// `tenant/{t}/brand/{b}/worker/{w}`
#[derive(Debug, Clone)]
pub struct BrandWorkerPath {
    segments: Vec<String>,
}

impl BrandWorkerPath {
    pub fn generations(self) -> ResourcePath {
        ResourcePath {
            segments: extend(self.segments, &["generation"]),
        }
    }

    pub fn generation(self, generation_id: impl Into<String>) -> ResourcePath {
        let mut segments = extend(self.segments, &["generation"]);
        segments.push(generation_id.into());
        ResourcePath { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_path_nests_in_order() {
        let path = ResourcePath::tenant("T1")
            .brand("B1")
            .worker("W1")
            .generations();
        assert_eq!(path.to_string(), "tenant/T1/brand/B1/worker/W1/generation");

        let path = ResourcePath::tenant("T1")
            .brand("B1")
            .worker("W1")
            .generation("G1");
        assert_eq!(
            path.to_string(),
            "tenant/T1/brand/B1/worker/W1/generation/G1"
        );
    }

    #[test]
    fn test_tenant_scoped_paths() {
        assert_eq!(ResourcePath::from(ResourcePath::tenant("T1")).to_string(), "tenant/T1");
        assert_eq!(ResourcePath::tenant("T1").brands().to_string(), "tenant/T1/brand");
        assert_eq!(ResourcePath::tenant("T1").prompt("P1").to_string(), "tenant/T1/prompt/P1");
        assert_eq!(ResourcePath::tenant("T1").workers().to_string(), "tenant/T1/worker");
    }

    #[test]
    fn test_compass_paths() {
        assert_eq!(
            ResourcePath::tenant("T1").brand("B1").compass().to_string(),
            "tenant/T1/brand/B1/compass"
        );
        assert_eq!(
            ResourcePath::tenant("T1").brand("B1").compass_trigger().segments(),
            &["tenant", "T1", "brand", "B1", "compass", "trigger"]
        );
    }

    #[test]
    fn test_segments_are_kept_raw() {
        let path = ResourcePath::tenant("a/b").brand("c d").sources();
        assert_eq!(path.segments()[1], "a/b");
        assert_eq!(path.segments()[3], "c d");
    }
}
