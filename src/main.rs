mod app;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use forcelab::SessionConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON graph topology (`node_count`, `edges`, optional `labels`).
    #[arg(long)]
    graph: Option<PathBuf>,
    /// JSON session config; unspecified fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the initial node placement.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of iterations the timeline can hold, iteration 0 included.
    #[arg(long)]
    capacity: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_path(path)
            .with_context(|| format!("failed to load session config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    config
        .validate()
        .context("invalid session configuration")?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 960.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fruchterman-Reingold Visualization",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::ForceLabApp::new(
                cc,
                config,
                args.graph,
                args.seed,
            )))
        }),
    )
    .map_err(|error| anyhow!("viewer failed: {error}"))
}
