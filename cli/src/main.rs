// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0

//! # Toolkit Console CLI
//!
//! The `toolkit` binary runs the admin-console proxy and drives it.
//!
//! ## Commands
//!
//! - `toolkit serve` - Run the pass-through proxy in the foreground
//! - `toolkit config show|validate|generate` - Configuration management
//! - `toolkit tenant|brand|source|prompt|worker|generation|compass ...` -
//!   Resource operations sent through a running proxy

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use toolkit_console::commands::{
    self, serve::ServeCommand, BrandCommand, CompassCommand, ConfigCommand, GenerationCommand,
    PromptCommand, ProxyArgs, SourceCommand, TenantCommand, WorkerCommand,
};
use toolkit_core::domain::console_config::ConsoleConfig;

/// Toolkit Console - admin proxy for the content-generation backend
#[derive(Parser)]
#[command(name = "toolkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(
        short,
        long,
        global = true,
        env = "TOOLKIT_CONFIG_PATH",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); defaults to the config value
    #[arg(long, global = true, env = "TOOLKIT_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(flatten)]
    proxy: ProxyArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the console proxy
    #[command(name = "serve")]
    Serve(ServeCommand),

    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Tenant profile
    #[command(name = "tenant")]
    Tenant {
        #[command(subcommand)]
        command: TenantCommand,
    },

    /// Brand operations
    #[command(name = "brand")]
    Brand {
        #[command(subcommand)]
        command: BrandCommand,
    },

    /// Brand source operations
    #[command(name = "source")]
    Source {
        #[command(subcommand)]
        command: SourceCommand,
    },

    /// Prompt operations
    #[command(name = "prompt")]
    Prompt {
        #[command(subcommand)]
        command: PromptCommand,
    },

    /// Worker management
    #[command(name = "worker")]
    Worker {
        #[command(subcommand)]
        command: WorkerCommand,
    },

    /// Generation operations
    #[command(name = "generation")]
    Generation {
        #[command(subcommand)]
        command: GenerationCommand,
    },

    /// Brand compass runs
    #[command(name = "compass")]
    Compass {
        #[command(subcommand)]
        command: CompassCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = match &cli.log_level {
        Some(level) => level.clone(),
        None => ConsoleConfig::load_or_default(cli.config.clone())
            .map(|config| config.spec.logging.level)
            .unwrap_or_else(|_| "info".to_string()),
    };
    init_logging(&level)?;

    match cli.command {
        Some(Commands::Serve(command)) => commands::serve::execute(command, cli.config).await,
        Some(Commands::Config { command }) => {
            commands::config::handle_command(command, cli.config).await
        }
        Some(Commands::Tenant { command }) => {
            commands::tenant::handle_command(command, &cli.proxy).await
        }
        Some(Commands::Brand { command }) => {
            commands::brand::handle_command(command, &cli.proxy).await
        }
        Some(Commands::Source { command }) => {
            commands::source::handle_command(command, &cli.proxy).await
        }
        Some(Commands::Prompt { command }) => {
            commands::prompt::handle_command(command, &cli.proxy).await
        }
        Some(Commands::Worker { command }) => {
            commands::worker::handle_command(command, &cli.proxy).await
        }
        Some(Commands::Generation { command }) => {
            commands::generation::handle_command(command, &cli.proxy).await
        }
        Some(Commands::Compass { command }) => {
            commands::compass::handle_command(command, &cli.proxy).await
        }
        None => {
            // No command provided - show help
            eprintln!("{}", "No command specified. Use --help for usage.".yellow());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_reach_subcommands() {
        let cli = Cli::try_parse_from([
            "toolkit",
            "worker",
            "get",
            "W1",
            "--tenant",
            "T1",
            "--api-key",
            "K1",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.proxy.tenant.as_deref(), Some("T1"));
        assert_eq!(cli.proxy.output, toolkit_console::output::OutputMode::Json);
        assert!(matches!(cli.command, Some(Commands::Worker { .. })));
    }
}
