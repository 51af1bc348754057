//! rTimelane library root.
//! Exposes the booking layout engine, the CLI parser and the high-level
//! run() function used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::io::IsTerminal;
use std::path::Path;

pub use crate::core::layout::{
    LayoutOptions, TimelineLayout, compute_bar_style, compute_layout, compute_now_marker_position,
    overlaps, pack_into_rows,
};
pub use crate::utils::time::time_to_minutes;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let color = !cli.no_color && !cli.test && std::io::stdout().is_terminal();

    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force, cli.test),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Layout { .. } => cli::commands::layout::handle(&cli.command, cfg, color),
        Commands::Now { .. } => cli::commands::now::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
