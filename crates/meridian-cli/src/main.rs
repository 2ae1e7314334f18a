//! Meridian CLI Application
//!
//! Command-line interface for browsing timezones and their current time.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ListZonesArgs};
use log::info;
use meridian_core::ExplorerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        base_url,
        no_color,
        snapshot,
        snapshot_file,
        command,
    } = Args::parse();

    let explorer = ExplorerBuilder::new()
        .with_base_url(base_url)
        .build()
        .context("Failed to initialize explorer")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(explorer, renderer, snapshot_file);

    info!("Meridian started");

    let outcome = match command {
        Some(List(args)) => cli.list_zones(&args.into()).await,
        Some(Show(args)) => cli.show_zone(&args.into()).await,
        Some(Browse) => cli.browse().await,
        // Snapshot commands never touch the network or the live store.
        Some(State { command }) => return cli.handle_state_command(command),
        None => cli.list_zones(&ListZonesArgs::default().into()).await,
    };

    if snapshot {
        cli.save_snapshot()?;
    }
    outcome
}
