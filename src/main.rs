#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use resizer_core::logging::LoggingBuilder;
use resizer_core::{ResizerConfig, TargetSize};

/// Global configuration, set from command line
static CONFIG: OnceLock<ResizerConfig> = OnceLock::new();

/// Get the configuration (set from command line or default)
pub fn get_config() -> ResizerConfig {
    CONFIG.get().cloned().unwrap_or_else(|| {
        ResizerConfig::new(default_download_dir())
    })
}

fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Image Resizer - square PNG icons from any image
#[derive(Parser, Debug)]
#[command(name = "resizer-desktop")]
#[command(about = "Image Resizer - export 64x64 or 96x96 PNG icons")]
struct Args {
    /// Directory downloads are saved to (defaults to the system Downloads folder)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Initially selected size: 64, 96, server or plugin
    #[arg(short, long, default_value_t = TargetSize::Server)]
    size: TargetSize,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Largest accepted image file, in MiB
    #[arg(long, default_value_t = 50)]
    max_file_mb: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(ref dir) = args.log_dir {
        logging = logging.with_jsonl_dir(dir);
    }
    let log_path = logging.init()?;

    let download_dir = args.output_dir.unwrap_or_else(default_download_dir);
    let config = ResizerConfig::new(download_dir)
        .with_default_size(args.size)
        .with_max_file_size(args.max_file_mb.saturating_mul(1024 * 1024));

    tracing::info!(
        download_dir = %config.download_dir.display(),
        size = %config.default_size,
        log_file = ?log_path,
        "Starting Image Resizer"
    );

    let _ = CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("Image Resizer")
        .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 560.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
