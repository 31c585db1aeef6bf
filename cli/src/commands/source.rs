// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Source commands
//!
//! Commands: get, list

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::output::{print_value, source_card};

use super::ProxyArgs;

#[derive(Subcommand)]
pub enum SourceCommand {
    /// Show one source with its analysis results
    Get {
        /// Brand the source belongs to
        #[arg(long, value_name = "BRAND_ID")]
        brand: String,

        /// Source ID
        #[arg(value_name = "SOURCE_ID")]
        source_id: String,
    },

    /// List a brand's sources
    List {
        /// Brand ID
        #[arg(long, value_name = "BRAND_ID")]
        brand: String,
    },
}

pub async fn handle_command(command: SourceCommand, args: &ProxyArgs) -> Result<()> {
    let session = args.session()?;
    let client = &session.client;

    let value = match command {
        SourceCommand::Get { brand, source_id } => client
            .get_source(&session.tenant, &brand, &source_id)
            .await
            .with_context(|| format!("Failed to fetch source {}", source_id))?,
        SourceCommand::List { brand } => client
            .list_sources(&session.tenant, &brand)
            .await
            .with_context(|| format!("Failed to list sources of brand {}", brand))?,
    };

    print_value(&value, session.output, source_card);
    Ok(())
}
