// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Proxy HTTP server
//!
//! Binds the console router and serves it until Ctrl+C or SIGTERM.
//!
//! # Architecture
//!
//! - **Layer:** Interface / Presentation Layer
//! - **Purpose:** Implements proxy server startup and graceful shutdown

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use toolkit_core::{
    application::ProxyService, domain::console_config::ConsoleConfig,
    infrastructure::HttpBackendClient, presentation::api::app,
};

/// Wire the proxy from configuration. The backend client is the only
/// process-wide state and is shared by all requests.
pub fn build_router(config: &ConsoleConfig) -> Result<axum::Router> {
    let base_url = config
        .backend_url()
        .context("Invalid backend base URL")?;
    let backend = Arc::new(HttpBackendClient::new(base_url));
    Ok(app(ProxyService::new(backend)))
}

pub async fn start_server(config: ConsoleConfig) -> Result<()> {
    config
        .validate()
        .context("Configuration validation failed")?;

    let router = build_router(&config)?;

    let addr = config.listen_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(
        backend = %config.spec.backend.base_url,
        "Console proxy listening on {}",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Console proxy shutting down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
