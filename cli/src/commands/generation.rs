// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Generation commands
//!
//! Commands: create, get, list

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use toolkit_sdk::GenerationScope;

use crate::output::{generation_card, print_value};

use super::ProxyArgs;

/// Brand and worker a generation belongs to.
#[derive(Args, Debug, Clone)]
pub struct WorkerScope {
    /// Brand ID
    #[arg(long, value_name = "BRAND_ID")]
    brand: String,

    /// Worker ID
    #[arg(long, value_name = "WORKER_ID")]
    worker: String,
}

impl WorkerScope {
    fn within<'a>(&'a self, tenant_id: &'a str) -> GenerationScope<'a> {
        GenerationScope {
            tenant_id,
            brand_id: &self.brand,
            worker_id: &self.worker,
        }
    }
}

#[derive(Subcommand)]
pub enum GenerationCommand {
    /// Start a generation; poll it with `generation get`
    Create {
        #[command(flatten)]
        scope: WorkerScope,

        /// Extra context for this run
        #[arg(long)]
        context: Option<String>,
    },

    /// Show one generation and its result
    Get {
        #[command(flatten)]
        scope: WorkerScope,

        /// Generation ID
        #[arg(value_name = "GENERATION_ID")]
        generation_id: String,
    },

    /// List a worker's generations
    List {
        #[command(flatten)]
        scope: WorkerScope,
    },
}

pub async fn handle_command(command: GenerationCommand, args: &ProxyArgs) -> Result<()> {
    let session = args.session()?;
    let client = &session.client;

    let value = match &command {
        GenerationCommand::Create { scope, context } => {
            let created = client
                .create_generation(scope.within(&session.tenant), context.as_deref())
                .await
                .context("Failed to create generation")?;
            println!("{}", "✓ Generation started".green());
            created
        }
        GenerationCommand::Get {
            scope,
            generation_id,
        } => client
            .get_generation(scope.within(&session.tenant), generation_id)
            .await
            .with_context(|| format!("Failed to fetch generation {}", generation_id))?,
        GenerationCommand::List { scope } => client
            .list_generations(scope.within(&session.tenant))
            .await
            .with_context(|| format!("Failed to list generations of worker {}", scope.worker))?,
    };

    print_value(&value, session.output, generation_card);
    Ok(())
}
