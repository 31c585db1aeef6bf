// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Brand compass commands
//!
//! Commands: status, trigger

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use crate::output::{compass_card, print_value};

use super::ProxyArgs;

#[derive(Subcommand)]
pub enum CompassCommand {
    /// Show the latest compass run for a brand
    Status {
        /// Brand ID
        #[arg(long, value_name = "BRAND_ID")]
        brand: String,
    },

    /// Start a compass run, then show its status once
    Trigger {
        /// Brand ID
        #[arg(long, value_name = "BRAND_ID")]
        brand: String,
    },
}

pub async fn handle_command(command: CompassCommand, args: &ProxyArgs) -> Result<()> {
    let session = args.session()?;
    let client = &session.client;

    let brand = match command {
        CompassCommand::Status { brand } => brand,
        CompassCommand::Trigger { brand } => {
            client
                .trigger_compass(&session.tenant, &brand)
                .await
                .with_context(|| format!("Failed to trigger brand compass for {}", brand))?;
            println!("{}", format!("✓ Brand compass triggered for {}", brand).green());
            brand
        }
    };

    let status = client
        .compass_status(&session.tenant, &brand)
        .await
        .with_context(|| format!("Failed to fetch brand compass status for {}", brand))?;
    print_value(&status, session.output, compass_card);
    Ok(())
}
