// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Brand commands
//!
//! Commands: get, list

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::output::{brand_card, print_value};

use super::ProxyArgs;

#[derive(Subcommand)]
pub enum BrandCommand {
    /// Show one brand
    Get {
        /// Brand ID
        #[arg(value_name = "BRAND_ID")]
        brand_id: String,
    },

    /// List the tenant's brands
    List,
}

pub async fn handle_command(command: BrandCommand, args: &ProxyArgs) -> Result<()> {
    let session = args.session()?;
    let client = &session.client;

    let value = match command {
        BrandCommand::Get { brand_id } => client
            .get_brand(&session.tenant, &brand_id)
            .await
            .with_context(|| format!("Failed to fetch brand {}", brand_id))?,
        BrandCommand::List => client
            .list_brands(&session.tenant)
            .await
            .context("Failed to list brands")?,
    };

    print_value(&value, session.output, brand_card);
    Ok(())
}
