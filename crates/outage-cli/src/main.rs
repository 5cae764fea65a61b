//! Outage CLI Application
//!
//! Command-line interface for the shutdown protocol planning tool.

mod args;
mod chart;
mod cli;
mod renderer;
mod svg;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ListStepsArgs};
use log::info;
use outage_core::StepStoreBuilder;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let store = StepStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize step store")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, renderer);

    info!("Outage planner started");

    match command {
        Some(Commands::Step { command }) => cli.handle_step_command(command).await,
        Some(Commands::Window { command }) => cli.handle_window_command(command).await,
        Some(Commands::Gantt(gantt_args)) => cli.render_gantt(&gantt_args),
        Some(Commands::Demo(demo_args)) => cli.seed_demo(demo_args).await,
        None => cli.list_steps(&ListStepsArgs::default()),
    }
}
