// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! bidgate - Job admission and retry decisions for a compute node

mod commands;
mod output;

use anyhow::Result;
use bidgate_core::{EvalContext, NodeConfig};
use clap::{Parser, Subcommand};
use commands::{retry, select};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "bidgate",
    version,
    about = "Bidgate - Decide which jobs a compute node bids on"
)]
struct Cli {
    /// Node configuration file (defaults to the per-user config, if any)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether to bid on a job offer
    Select(select::SelectArgs),
    /// Decide whether to retry a failed operation
    Retry(retry::RetryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = load_config(cli.config.as_deref())?;

    let ctx = EvalContext::new();
    let token = ctx.cancellation_token().clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    match cli.command {
        Commands::Select(args) => select::select(args, &config, ctx).await,
        Commands::Retry(args) => retry::retry(args, &config, ctx).await,
    }
}

fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("BIDGATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

/// An explicit `--config` must load; the per-user file is optional
fn load_config(explicit: Option<&Path>) -> Result<NodeConfig> {
    if let Some(path) = explicit {
        return Ok(NodeConfig::load(path)?);
    }
    match NodeConfig::default_path() {
        Ok(path) if path.exists() => Ok(NodeConfig::load(&path)?),
        _ => Ok(NodeConfig::default()),
    }
}
