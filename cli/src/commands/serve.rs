// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! `toolkit serve`: run the console proxy in the foreground

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use toolkit_core::domain::console_config::ConsoleConfig;

use crate::server::start_server;

#[derive(Args, Debug)]
pub struct ServeCommand {
    /// Listen port (overrides config)
    #[arg(long, env = "TOOLKIT_PORT")]
    pub port: Option<u16>,

    /// Listen address (overrides config)
    #[arg(long, env = "TOOLKIT_BIND_ADDRESS")]
    pub host: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(long, env = "TOOLKIT_API_BASE_URL")]
    pub backend_url: Option<String>,
}

impl ServeCommand {
    pub fn apply(&self, config: &mut ConsoleConfig) {
        if let Some(port) = self.port {
            config.spec.server.port = port;
        }
        if let Some(host) = &self.host {
            config.spec.server.bind_address = host.clone();
        }
        if let Some(url) = &self.backend_url {
            config.spec.backend.base_url = url.clone();
        }
    }
}

pub async fn execute(command: ServeCommand, config_path: Option<PathBuf>) -> Result<()> {
    let mut config =
        ConsoleConfig::load_or_default(config_path).context("Failed to load configuration")?;
    command.apply(&mut config);

    start_server(config).await
}
