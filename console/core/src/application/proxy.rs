// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Proxy Service
//!
//! Applies the request contract shared by every route:
//! required-parameter check, then exactly one backend call, then the
//! response envelope. Backend rejection and transport failure collapse
//! into the same fixed per-action message; the detail is only logged.
//!
//! # Architecture
//!
//! - **Layer:** Application Layer
//! - **Purpose:** Implements the backend-proxy request contract

use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use super::actions::ProxyAction;
use super::params::{Field, ProxyParams};
use crate::domain::backend::{BackendError, BackendGateway, BackendRequest};
use crate::domain::credentials::ApiKey;

pub const MISSING_PARAMETERS: &str = "Missing required parameters";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Missing required parameters")]
    MissingParameters { missing: Vec<Field> },

    #[error("{message}")]
    Backend {
        message: &'static str,
        #[source]
        source: BackendError,
    },
}

impl ProxyError {
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::MissingParameters { .. } => 400,
            ProxyError::Backend { .. } => 500,
        }
    }

    /// Client-facing text for the `error` field.
    pub fn client_message(&self) -> &'static str {
        match self {
            ProxyError::MissingParameters { .. } => MISSING_PARAMETERS,
            ProxyError::Backend { message, .. } => *message,
        }
    }
}

#[derive(Clone)]
pub struct ProxyService {
    backend: Arc<dyn BackendGateway>,
}

impl ProxyService {
    pub fn new(backend: Arc<dyn BackendGateway>) -> Self {
        Self { backend }
    }

    /// Run one proxied call and return the JSON to relay with status 200.
    pub async fn execute(
        &self,
        action: ProxyAction,
        params: &ProxyParams,
    ) -> Result<Value, ProxyError> {
        let missing = params.missing(action.required_fields());
        if !missing.is_empty() {
            debug!(
                action = ?action,
                missing = ?missing.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
                "Rejecting request with missing parameters"
            );
            return Err(ProxyError::MissingParameters { missing });
        }

        let api_key = params
            .text(Field::ApiKey)
            .and_then(|key| ApiKey::new(key.into_owned()))
            .ok_or_else(|| ProxyError::MissingParameters {
                missing: vec![Field::ApiKey],
            })?;

        let path = action
            .backend_path(params)
            .map_err(|e| ProxyError::MissingParameters { missing: vec![e.0] })?;

        let request = BackendRequest {
            method: action.method(),
            path,
            body: action.backend_body(params),
            api_key,
        };
        let path = request.path.clone();

        let fail = |source: BackendError| {
            warn!(
                action = ?action,
                path = %path,
                backend_status = ?source.status(),
                "Backend call failed: {}",
                source
            );
            ProxyError::Backend {
                message: action.failure_message(),
                source,
            }
        };

        let response = self.backend.send(request).await.map_err(&fail)?;

        if !action.relays_body() {
            return Ok(json!({ "success": true }));
        }

        response
            .body
            .ok_or(BackendError::MalformedBody {
                status: response.status,
            })
            .map_err(fail)
    }
}
