// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put, MethodRouter},
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::application::{ProxyAction, ProxyError, ProxyParams, ProxyService};
use crate::domain::backend::BackendMethod;

pub struct AppState {
    pub proxy: ProxyService,
    pub start_time: Instant,
}

/// Build the proxy router: one route per catalogue action plus `/health`.
pub fn app(proxy: ProxyService) -> Router {
    let state = Arc::new(AppState {
        proxy,
        start_time: Instant::now(),
    });

    let mut router = Router::new().route("/health", get(health_handler));
    for action in ProxyAction::ALL {
        router = router.route(action.route(), proxy_route(action));
    }

    router
        .fallback(not_found_handler)
        // The query string carries the API key; spans record the path only.
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "proxy_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }))
        .with_state(state)
}

fn proxy_route(action: ProxyAction) -> MethodRouter<Arc<AppState>> {
    let handler = move |State(state): State<Arc<AppState>>,
                        Query(query): Query<HashMap<String, String>>,
                        body: Bytes| async move {
        proxy_handler(&state, action, query, body).await
    };

    match action.method() {
        BackendMethod::Get => get(handler),
        BackendMethod::Post => post(handler),
        BackendMethod::Put => put(handler),
        BackendMethod::Delete => delete(handler),
    }
}

async fn proxy_handler(
    state: &AppState,
    action: ProxyAction,
    query: HashMap<String, String>,
    body: Bytes,
) -> Response {
    let params = ProxyParams::from_query(query).merge_body(&body);
    match state.proxy.execute(action, &params).await {
        Ok(relayed) => (StatusCode::OK, Json(relayed)).into_response(),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "uptime_seconds": state.start_time.elapsed().as_secs(),
    }))
}

async fn not_found_handler() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_status() {
        let missing = ProxyError::MissingParameters { missing: vec![] };
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);

        let failed = ProxyError::Backend {
            message: "Failed to fetch worker data",
            source: crate::domain::backend::BackendError::Unavailable("refused".into()),
        };
        assert_eq!(
            failed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
