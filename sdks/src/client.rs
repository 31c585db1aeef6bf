// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

use reqwest::{Client, Method, Response};
use serde_json::{json, Value};

use toolkit_core::domain::credentials::ApiKey;

use crate::types::{GenerationScope, WorkerDraft, WorkerUpdate};

#[derive(Debug, thiserror::Error)]
pub enum ConsoleClientError {
    #[error("Failed to reach console proxy: {0}")]
    Transport(#[from] reqwest::Error),

    /// The proxy answered with an `{error}` envelope.
    #[error("{message}")]
    Proxy { status: u16, message: String },

    #[error("Invalid response from console proxy: {0}")]
    InvalidResponse(String),
}

/// Client for the console proxy API.
///
/// Holds the operator's key for the lifetime of one session; the key is
/// sent with each request and never written anywhere else.
pub struct ConsoleClient {
    base_url: String,
    client: Client,
    api_key: ApiKey,
}

impl ConsoleClient {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_tenant(&self, tenant_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(Method::GET, "/api/tenant", &[("tenantId", tenant_id)])
            .await
    }

    pub async fn get_brand(&self, tenant_id: &str, brand_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::GET,
            "/api/brand",
            &[("tenantId", tenant_id), ("brandId", brand_id)],
        )
        .await
    }

    pub async fn list_brands(&self, tenant_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(Method::GET, "/api/brand/list", &[("tenantId", tenant_id)])
            .await
    }

    pub async fn get_source(
        &self,
        tenant_id: &str,
        brand_id: &str,
        source_id: &str,
    ) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::GET,
            "/api/source",
            &[
                ("tenantId", tenant_id),
                ("brandId", brand_id),
                ("sourceId", source_id),
            ],
        )
        .await
    }

    pub async fn list_sources(&self, tenant_id: &str, brand_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::GET,
            "/api/source/list",
            &[("tenantId", tenant_id), ("brandId", brand_id)],
        )
        .await
    }

    pub async fn get_prompt(&self, tenant_id: &str, prompt_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::GET,
            "/api/prompt",
            &[("tenantId", tenant_id), ("promptId", prompt_id)],
        )
        .await
    }

    pub async fn list_prompts(&self, tenant_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(Method::GET, "/api/prompt/list", &[("tenantId", tenant_id)])
            .await
    }

    pub async fn get_worker(&self, tenant_id: &str, worker_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::GET,
            "/api/worker",
            &[("tenantId", tenant_id), ("workerId", worker_id)],
        )
        .await
    }

    pub async fn list_workers(&self, tenant_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(Method::GET, "/api/worker/list", &[("tenantId", tenant_id)])
            .await
    }

    pub async fn create_worker(
        &self,
        tenant_id: &str,
        worker: &WorkerDraft,
    ) -> Result<Value, ConsoleClientError> {
        let body = json!({
            "tenantId": tenant_id,
            "apiKey": self.api_key.expose(),
            "name": worker.name,
            "description": worker.description,
            "output_type": worker.output_type,
            "prompt": worker.prompt,
        });
        self.body(Method::POST, "/api/worker/create", body).await
    }

    pub async fn update_worker(
        &self,
        tenant_id: &str,
        worker_id: &str,
        update: &WorkerUpdate,
    ) -> Result<Value, ConsoleClientError> {
        let body = json!({
            "tenantId": tenant_id,
            "workerId": worker_id,
            "apiKey": self.api_key.expose(),
            "name": update.name,
            "description": update.description,
            "prompt": update.prompt,
        });
        self.body(Method::PUT, "/api/worker/update", body).await
    }

    pub async fn delete_worker(&self, tenant_id: &str, worker_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::DELETE,
            "/api/worker/delete",
            &[("tenantId", tenant_id), ("workerId", worker_id)],
        )
        .await
    }

    pub async fn create_generation(
        &self,
        scope: GenerationScope<'_>,
        context: Option<&str>,
    ) -> Result<Value, ConsoleClientError> {
        let mut body = json!({
            "tenantId": scope.tenant_id,
            "brandId": scope.brand_id,
            "workerId": scope.worker_id,
            "apiKey": self.api_key.expose(),
        });
        if let Some(context) = context.filter(|c| !c.is_empty()) {
            body["context"] = Value::String(context.to_string());
        }
        self.body(Method::POST, "/api/generation/create", body).await
    }

    pub async fn get_generation(
        &self,
        scope: GenerationScope<'_>,
        generation_id: &str,
    ) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::GET,
            "/api/generation",
            &[
                ("tenantId", scope.tenant_id),
                ("brandId", scope.brand_id),
                ("workerId", scope.worker_id),
                ("generationId", generation_id),
            ],
        )
        .await
    }

    pub async fn list_generations(&self, scope: GenerationScope<'_>) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::GET,
            "/api/generation/list",
            &[
                ("tenantId", scope.tenant_id),
                ("brandId", scope.brand_id),
                ("workerId", scope.worker_id),
            ],
        )
        .await
    }

    pub async fn compass_status(&self, tenant_id: &str, brand_id: &str) -> Result<Value, ConsoleClientError> {
        self.query(
            Method::GET,
            "/api/brand-compass/status",
            &[("tenantId", tenant_id), ("brandId", brand_id)],
        )
        .await
    }

    pub async fn trigger_compass(&self, tenant_id: &str, brand_id: &str) -> Result<Value, ConsoleClientError> {
        let body = json!({
            "tenantId": tenant_id,
            "brandId": brand_id,
            "apiKey": self.api_key.expose(),
        });
        self.body(Method::POST, "/api/brand-compass/trigger", body).await
    }

    /// Parameters in the query string, as the proxy reads them for GET and DELETE.
    async fn query(
        &self,
        method: Method,
        route: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, ConsoleClientError> {
        let url = format!("{}{}", self.base_url, route);
        let mut pairs = params.to_vec();
        pairs.push(("apiKey", self.api_key.expose()));

        tracing::debug!(%method, route, "Calling console proxy");
        let response = self.client.request(method, &url).query(&pairs).send().await?;
        Self::read(response).await
    }

    async fn body(&self, method: Method, route: &str, body: Value) -> Result<Value, ConsoleClientError> {
        let url = format!("{}{}", self.base_url, route);

        tracing::debug!(%method, route, "Calling console proxy");
        let response = self.client.request(method, &url).json(&body).send().await?;
        Self::read(response).await
    }

    async fn read(response: Response) -> Result<Value, ConsoleClientError> {
        let status = response.status();
        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text).map_err(|e| {
            ConsoleClientError::InvalidResponse(format!("HTTP {}: {}", status, e))
        })?;

        if status.is_success() {
            return Ok(value);
        }

        let message = value["error"]
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("Request failed with HTTP {}", status));
        Err(ConsoleClientError::Proxy {
            status: status.as_u16(),
            message,
        })
    }
}
