use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DemoArgs, GanttArgs, StepCommands, WindowCommands};

/// Main command-line interface for the Outage shutdown planner
///
/// Outage is a planning tool for industrial plant shutdown protocols. It
/// manages the protocol's schedulable steps (dates, durations,
/// dependencies, statuses), the overall outage window, and renders the
/// schedule as a Gantt chart in the terminal or as an SVG export.
#[derive(Parser)]
#[command(version, about, name = "outage")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/outage/outage.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Outage CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage protocol steps
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Manage the overall shutdown window
    #[command(alias = "w")]
    Window {
        #[command(subcommand)]
        command: WindowCommands,
    },
    /// Render the protocol as a Gantt chart
    #[command(alias = "g")]
    Gantt(GanttArgs),
    /// Seed a demonstration protocol
    Demo(DemoArgs),
}
