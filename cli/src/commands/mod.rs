// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for the Toolkit CLI

pub mod brand;
pub mod compass;
pub mod config;
pub mod generation;
pub mod prompt;
pub mod serve;
pub mod source;
pub mod tenant;
pub mod worker;

pub use self::brand::BrandCommand;
pub use self::compass::CompassCommand;
pub use self::config::ConfigCommand;
pub use self::generation::GenerationCommand;
pub use self::prompt::PromptCommand;
pub use self::source::SourceCommand;
pub use self::tenant::TenantCommand;
pub use self::worker::WorkerCommand;

use anyhow::{bail, Result};
use clap::Args;

use toolkit_core::domain::credentials::ApiKey;
use toolkit_sdk::ConsoleClient;

use crate::output::OutputMode;

/// Connection options shared by every resource command.
#[derive(Args, Debug, Clone)]
pub struct ProxyArgs {
    /// Base URL of a running console proxy
    #[arg(
        long,
        global = true,
        env = "TOOLKIT_PROXY_URL",
        default_value = "http://127.0.0.1:3000"
    )]
    pub proxy_url: String,

    /// Backend API key, forwarded as the bearer credential
    #[arg(long, global = true, env = "TOOLKIT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Tenant all resource commands are scoped to
    #[arg(long, global = true, env = "TOOLKIT_TENANT_ID")]
    pub tenant: Option<String>,

    /// Result rendering
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Card)]
    pub output: OutputMode,
}

/// A resolved tenant scope plus the client that calls the proxy.
pub struct Session {
    pub client: ConsoleClient,
    pub tenant: String,
    pub output: OutputMode,
}

impl ProxyArgs {
    pub fn session(&self) -> Result<Session> {
        let Some(api_key) = self.api_key.clone().and_then(ApiKey::new) else {
            bail!("An API key is required. Pass --api-key or set TOOLKIT_API_KEY.");
        };
        let tenant = match self.tenant.as_deref().map(str::trim) {
            Some(tenant) if !tenant.is_empty() => tenant.to_string(),
            _ => bail!("A tenant is required. Pass --tenant or set TOOLKIT_TENANT_ID."),
        };

        Ok(Session {
            client: ConsoleClient::new(&self.proxy_url, api_key),
            tenant,
            output: self.output,
        })
    }
}
