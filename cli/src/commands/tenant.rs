// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Tenant commands
//!
//! Commands: get

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::output::{print_value, tenant_card};

use super::ProxyArgs;

#[derive(Subcommand)]
pub enum TenantCommand {
    /// Show the tenant's profile
    Get,
}

pub async fn handle_command(command: TenantCommand, args: &ProxyArgs) -> Result<()> {
    let session = args.session()?;

    match command {
        TenantCommand::Get => {
            let tenant = session
                .client
                .get_tenant(&session.tenant)
                .await
                .context("Failed to fetch tenant")?;
            print_value(&tenant, session.output, tenant_card);
        }
    }

    Ok(())
}
