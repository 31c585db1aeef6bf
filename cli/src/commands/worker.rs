// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Worker commands
//!
//! Commands: get, list, create, update, delete

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use toolkit_sdk::{ContentType, WorkerDraft, WorkerUpdate};

use crate::output::{print_value, worker_card};

use super::ProxyArgs;

#[derive(Subcommand)]
pub enum WorkerCommand {
    /// Show one worker
    Get {
        /// Worker ID
        #[arg(value_name = "WORKER_ID")]
        worker_id: String,
    },

    /// List the tenant's workers
    List,

    /// Create a worker
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// TEXT, IMAGE, VIDEO or AUDIO
        #[arg(long, value_parser = parse_content_type)]
        output_type: ContentType,

        /// Prompt template text
        #[arg(long)]
        prompt: String,
    },

    /// Update a worker's name, description and prompt
    Update {
        /// Worker ID
        #[arg(value_name = "WORKER_ID")]
        worker_id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        prompt: String,
    },

    /// Delete a worker
    Delete {
        /// Worker ID
        #[arg(value_name = "WORKER_ID")]
        worker_id: String,
    },
}

pub async fn handle_command(command: WorkerCommand, args: &ProxyArgs) -> Result<()> {
    let session = args.session()?;
    let client = &session.client;

    let value = match command {
        WorkerCommand::Get { worker_id } => client
            .get_worker(&session.tenant, &worker_id)
            .await
            .with_context(|| format!("Failed to fetch worker {}", worker_id))?,
        WorkerCommand::List => client
            .list_workers(&session.tenant)
            .await
            .context("Failed to list workers")?,
        WorkerCommand::Create {
            name,
            description,
            output_type,
            prompt,
        } => {
            let draft = WorkerDraft {
                name,
                description,
                output_type,
                prompt,
            };
            let created = client
                .create_worker(&session.tenant, &draft)
                .await
                .context("Failed to create worker")?;
            println!("{}", format!("✓ Worker created: {}", draft.name).green());
            created
        }
        WorkerCommand::Update {
            worker_id,
            name,
            description,
            prompt,
        } => {
            let update = WorkerUpdate {
                name,
                description,
                prompt,
            };
            let updated = client
                .update_worker(&session.tenant, &worker_id, &update)
                .await
                .with_context(|| format!("Failed to update worker {}", worker_id))?;
            println!("{}", format!("✓ Worker {} updated", worker_id).green());
            updated
        }
        WorkerCommand::Delete { worker_id } => {
            client
                .delete_worker(&session.tenant, &worker_id)
                .await
                .with_context(|| format!("Failed to delete worker {}", worker_id))?;
            println!("{}", format!("✓ Worker {} removed", worker_id).green());
            return Ok(());
        }
    };

    print_value(&value, session.output, worker_card);
    Ok(())
}

fn parse_content_type(value: &str) -> Result<ContentType, String> {
    let parsed: ContentType =
        serde_json::from_value(serde_json::Value::String(value.trim().to_ascii_uppercase()))
            .map_err(|e| e.to_string())?;
    match parsed {
        ContentType::Unknown => Err(format!(
            "unsupported output type '{}' (expected TEXT, IMAGE, VIDEO or AUDIO)",
            value
        )),
        known => Ok(known),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_type() {
        assert_eq!(parse_content_type("text").unwrap(), ContentType::Text);
        assert_eq!(parse_content_type(" Image ").unwrap(), ContentType::Image);
        assert!(parse_content_type("pdf").is_err());
    }
}
