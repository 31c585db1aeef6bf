// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Prompt commands
//!
//! Commands: get, list

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::output::{print_value, prompt_card};

use super::ProxyArgs;

#[derive(Subcommand)]
pub enum PromptCommand {
    /// Show one prompt
    Get {
        /// Prompt ID
        #[arg(value_name = "PROMPT_ID")]
        prompt_id: String,
    },

    /// List the tenant's prompts
    List,
}

pub async fn handle_command(command: PromptCommand, args: &ProxyArgs) -> Result<()> {
    let session = args.session()?;
    let client = &session.client;

    let value = match command {
        PromptCommand::Get { prompt_id } => client
            .get_prompt(&session.tenant, &prompt_id)
            .await
            .with_context(|| format!("Failed to fetch prompt {}", prompt_id))?,
        PromptCommand::List => client
            .list_prompts(&session.tenant)
            .await
            .context("Failed to list prompts")?,
    };

    print_value(&value, session.output, prompt_card);
    Ok(())
}
