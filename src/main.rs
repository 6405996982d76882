#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod sections;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::PortfolioConfig;
use tracing_subscriber::EnvFilter;

/// Settings fixed for the lifetime of the window, set from command line
#[derive(Clone, Copy, Debug, Default)]
pub struct LaunchOptions {
    pub config: PortfolioConfig,
    /// Treat the pointer as coarse regardless of what the webview reports
    pub force_coarse_pointer: bool,
}

static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Get the launch options (set from command line or default)
pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().copied().unwrap_or_default()
}

/// Portfolio - single-page personal portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio rendered in a desktop webview")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Behave as on a touch device: no tilt, no cursor ring
    #[arg(long)]
    coarse_pointer: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = PortfolioConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
    match serde_json::to_string(&config) {
        Ok(json) => tracing::debug!(config = %json, "Effect configuration"),
        Err(e) => tracing::warn!("Could not serialize configuration: {}", e),
    }

    let _ = LAUNCH.set(LaunchOptions {
        config,
        force_coarse_pointer: args.coarse_pointer,
    });

    tracing::info!(
        width = args.width,
        height = args.height,
        coarse_pointer = args.coarse_pointer,
        "Starting portfolio"
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(portfolio_core::PROFILE.name)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
