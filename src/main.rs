#![allow(non_snake_case)]

mod app;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use panelkit_core::{GridOptions, LayoutConfig};
use tracing_subscriber::EnvFilter;

/// Global layout config, set once from the config file and command line
static LAYOUT: OnceLock<LayoutConfig> = OnceLock::new();

/// Global compact flag, set from command line
static COMPACT: OnceLock<bool> = OnceLock::new();

/// Get the layout config (set at startup or default)
pub fn get_layout() -> LayoutConfig {
    LAYOUT.get().cloned().unwrap_or_default()
}

/// Whether wrappers should render in compact form
pub fn get_compact() -> bool {
    COMPACT.get().copied().unwrap_or(false)
}

/// Default config location: `<config dir>/panelkit/layout.toml`
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("panelkit")
        .join("layout.toml")
}

/// panelkit gallery - every wrapper on one screen
#[derive(Parser, Debug)]
#[command(name = "panelkit-gallery")]
#[command(about = "panelkit - browse the presentational components with live layout options")]
struct Args {
    /// Layout config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed column count for grids
    #[arg(long)]
    columns: Option<u32>,

    /// Minimum card width for auto-fitted grids (CSS length)
    #[arg(long)]
    min_card_width: Option<String>,

    /// Render wrappers in their compact form
    #[arg(long)]
    compact: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

impl Args {
    /// Command-line grid flags override whatever the config file set
    fn apply_overrides(&self, mut config: LayoutConfig) -> LayoutConfig {
        config.grid = override_grid(config.grid, self.columns, self.min_card_width.clone());
        config
    }
}

fn override_grid(
    mut grid: GridOptions,
    columns: Option<u32>,
    min_card_width: Option<String>,
) -> GridOptions {
    if let Some(columns) = columns {
        grid = grid.with_columns(columns);
    }
    if let Some(width) = min_card_width {
        grid = grid.with_min_card_width(width);
    }
    grid
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let layout = LayoutConfig::load_or_default(Some(config_path.as_path()))
        .with_context(|| format!("loading layout config {:?}", config_path))?;
    let layout = args.apply_overrides(layout);

    tracing::info!(
        "Starting gallery: grid {:?}, loader {:?}, compact {}",
        layout.grid,
        layout.loader,
        args.compact
    );

    let _ = LAYOUT.set(layout);
    let _ = COMPACT.set(args.compact);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("panelkit gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
