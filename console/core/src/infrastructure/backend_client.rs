// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

// Backend HTTP Client
//
// reqwest-backed implementation of the BackendGateway seam. One call, one
// outbound request: no retries and no timeout beyond the client default.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use crate::domain::backend::{
    BackendError, BackendGateway, BackendMethod, BackendRequest, BackendResponse,
};
use crate::domain::resource::ResourcePath;

pub struct HttpBackendClient {
    client: Client,
    base_url: Url,
}

impl HttpBackendClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append the path to the base URL, encoding each segment on its own.
    pub fn url_for(&self, path: &ResourcePath) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.segments());
        Ok(url)
    }
}

fn to_reqwest(method: BackendMethod) -> Method {
    match method {
        BackendMethod::Get => Method::GET,
        BackendMethod::Post => Method::POST,
        BackendMethod::Put => Method::PUT,
        BackendMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl BackendGateway for HttpBackendClient {
    async fn send(&self, request: BackendRequest) -> Result<BackendResponse, BackendError> {
        let url = self.url_for(&request.path)?;
        debug!(method = %request.method, path = %request.path, "Forwarding request to backend");

        let mut req = self
            .client
            .request(to_reqwest(request.method), url)
            .header(AUTHORIZATION, request.api_key.bearer());

        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        let body = if bytes.is_empty() {
            None
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!(status = status.as_u16(), "Backend body is not JSON: {}", e);
                    None
                }
            }
        };

        Ok(BackendResponse {
            status: status.as_u16(),
            body,
        })
    }
}
