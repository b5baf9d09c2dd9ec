#![allow(non_snake_case)]

mod app;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Petal Showcase - pink & white theme demo
#[derive(Parser, Debug)]
#[command(name = "petal-desktop")]
#[command(about = "Petal Showcase - a fixed demo page for the pink & white theme")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(short, long, default_value = "Petal Showcase")]
    title: String,

    /// Write the page as a static HTML file instead of opening a window
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if let Some(path) = args.export {
        return match export(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Export failed: {:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    tracing::info!(
        "Starting '{}' at {}x{}",
        args.title,
        args.width,
        args.height
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    ExitCode::SUCCESS
}

fn export(path: PathBuf) -> anyhow::Result<()> {
    let written = petal_ui::export_document(&path)
        .with_context(|| format!("Failed to export showcase page to {}", path.display()))?;
    println!("{}", written.display());
    Ok(())
}
