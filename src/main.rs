#![forbid(unsafe_code)]
use anyhow::Result;
use clap::Parser;
use dirtree::cli::Args;
use dirtree::tree::{print_tree, TreeConfig};
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse();
    let config = TreeConfig::default();

    debug!(
        path = %args.path.display(),
        excludes = ?config.excludes.names().collect::<Vec<_>>(),
        "printing tree"
    );

    print_tree(&args.path, &config)
}

/// Diagnostics go to stderr so stdout carries only the tree.
/// Verbosity comes from `RUST_LOG` (default: warn).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
