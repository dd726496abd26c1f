//! CLI entry point.
//!
//! # Responsibility
//! - Verify `figma_schema_core` linkage with a deterministic probe.
//! - Decode a node document from disk and print a per-type summary.

use anyhow::{Context, Result};
use clap::Parser;
use figma_schema_core::{codec, default_log_level, init_logging, Node};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(name = "figma_schema", version)]
struct Cli {
    /// One of trace|debug|info|warn|error.
    #[clap(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. File logging is off without it.
    #[clap(long)]
    log_dir: Option<String>,
    /// JSON file holding a single node (usually the `document` field of a file response).
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let Some(path) = cli.file else {
        println!("figma_schema_core ping={}", figma_schema_core::ping());
        println!("figma_schema_core version={}", figma_schema_core::core_version());
        return Ok(());
    };

    let root: Node = codec::from_path(&path)
        .with_context(|| format!("failed to decode node from `{}`", path.display()))?;
    let counts = root.count_by_type();
    info!(
        "event=summarize module=cli status=ok root_type={} node_types={}",
        root.node_type().as_str(),
        counts.len()
    );

    println!("root id={} name={}", root.id, root.name);
    let mut lines: Vec<(&str, usize)> = counts
        .into_iter()
        .map(|(node_type, count)| (node_type.as_str(), count))
        .collect();
    lines.sort_unstable_by_key(|(name, _)| *name);
    for (name, count) in lines {
        println!("{name}={count}");
    }
    Ok(())
}
