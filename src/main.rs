//! codiff: cost-aware line diff MCP server.
//!
//! Parses the mode flags, initializes logging, and runs the stdio serve
//! loop. Everything per-call lives in the library.

use anyhow::{Context, Result};
use clap::Parser;
use codiff::{server, CostModel, OperatingMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "codiff")]
#[command(version)]
#[command(about = "Cost-aware line diff MCP server", long_about = None)]
#[command(after_help = "MODES:
    (default)     Change-only diffs; warns when a diff costs more than the inputs
    -s            Token-saving: delegates small near-identical texts to the caller
    -a            Accuracy: includes unchanged text for full context
    -s -a         Both: delegation plus full-context diffs

The server speaks MCP over stdio and exposes a single `codiff` tool.")]
struct Cli {
    /// Enable token-saving mode (delegation and change-only output)
    #[arg(short = 's', long = "save-tokens")]
    save_tokens: bool,

    /// Enable accuracy mode (include unchanged text in diffs)
    #[arg(short = 'a', long = "accuracy")]
    accuracy: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Stdout carries the protocol, so logs go to stderr.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let mode = OperatingMode::new(cli.save_tokens, cli.accuracy);
    let model = CostModel::default();

    eprintln!("Codiff MCP Server running on stdio{}", mode.banner_suffix());

    server::serve(mode, &model).context("fatal transport error")
}
