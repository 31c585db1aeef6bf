// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Backend Gateway
//!
//! Domain interface for the remote content-generation backend.
//! Implementations live in `infrastructure/backend_client.rs`.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Anti-corruption seam between proxy handlers and the backend

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use super::credentials::ApiKey;
use super::resource::ResourcePath;

/// Issues exactly one outbound request per call. No retries.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, BackendError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl BackendMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendMethod::Get => "GET",
            BackendMethod::Post => "POST",
            BackendMethod::Put => "PUT",
            BackendMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for BackendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct BackendRequest {
    pub method: BackendMethod,
    pub path: ResourcePath,
    /// Sent as `application/json` when present.
    pub body: Option<Value>,
    pub api_key: ApiKey,
}

/// A 2xx backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendResponse {
    pub status: u16,
    /// `None` when the body was empty or not JSON.
    pub body: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Backend rejected request with HTTP {status}: {detail}")]
    Rejected { status: u16, detail: String },

    #[error("Backend returned HTTP {status} without a JSON body")]
    MalformedBody { status: u16 },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    /// Backend status code, when the backend was reached.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Rejected { status, .. } | BackendError::MalformedBody { status } => {
                Some(*status)
            }
            BackendError::Unavailable(_) | BackendError::InvalidUrl(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_when_backend_answered() {
        let rejected = BackendError::Rejected {
            status: 403,
            detail: "forbidden".to_string(),
        };
        assert_eq!(rejected.status(), Some(403));
        assert_eq!(BackendError::Unavailable("refused".into()).status(), None);
    }
}
