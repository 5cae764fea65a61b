//! Command-line interface definitions and handlers.
//!
//! Implements the parameter wrapper pattern: each subcommand has a clap
//! argument struct that converts into the core's framework-free parameter
//! types, keeping clap concerns out of the domain layer. Handlers call
//! the store, wrap the outcome in the core's display types and hand the
//! markdown to the terminal renderer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use jiff::Zoned;
use outage_core::display::{CreateResult, DeleteResult, OperationStatus, Steps, UpdateResult};
use outage_core::gantt::{self, GanttConfig};
use outage_core::params::{CreateStep, UpdateStep};
use outage_core::{DurationUnit, StepStatus, StepStore};

use crate::chart;
use crate::renderer::TerminalRenderer;
use crate::svg;

/// Available step subcommands
#[derive(Subcommand)]
pub enum StepCommands {
    /// Add a new step to the protocol
    #[command(alias = "a")]
    Add(AddStepArgs),
    /// List all steps
    #[command(alias = "ls")]
    List(ListStepsArgs),
    /// Show a single step
    Show {
        /// ID of the step to show
        id: u64,
    },
    /// Update fields of an existing step
    Update(UpdateStepArgs),
    /// Delete a step (removes it from other steps' dependencies)
    #[command(alias = "rm")]
    Delete {
        /// ID of the step to delete
        id: u64,
    },
    /// Mark a step done (sticky until explicitly changed)
    Done {
        /// ID of the step to mark done
        id: u64,
    },
    /// Set a step's status explicitly
    Status {
        /// ID of the step
        id: u64,
        /// New status
        #[arg(value_enum)]
        status: StatusArg,
    },
    /// Rebuild the step order from the given id sequence
    Reorder {
        /// Step ids in their new order (steps left out are dropped)
        #[arg(required = true)]
        ids: Vec<u64>,
    },
    /// Shift a step by whole days, keeping its duration
    #[command(alias = "mv")]
    Move {
        /// ID of the step to move
        id: u64,
        /// Day delta, negative moves earlier
        #[arg(allow_hyphen_values = true)]
        days: i64,
    },
    /// Check whether a step's dependencies are all done
    CanStart {
        /// ID of the step to check
        id: u64,
    },
}

/// Available window subcommands
#[derive(Subcommand)]
pub enum WindowCommands {
    /// Set the overall shutdown window
    Set {
        /// First day of the outage (YYYY-MM-DD)
        start: Date,
        /// Last day of the outage (YYYY-MM-DD)
        end: Date,
    },
    /// Show the current shutdown window
    Show,
}

/// Duration unit argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitArg {
    Days,
    Hours,
    Minutes,
}

impl From<UnitArg> for DurationUnit {
    fn from(val: UnitArg) -> Self {
        match val {
            UnitArg::Days => DurationUnit::Days,
            UnitArg::Hours => DurationUnit::Hours,
            UnitArg::Minutes => DurationUnit::Minutes,
        }
    }
}

/// Step status argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    NotStarted,
    InProgress,
    Done,
    Late,
}

impl From<StatusArg> for StepStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::NotStarted => StepStatus::NotStarted,
            StatusArg::InProgress => StepStatus::InProgress,
            StatusArg::Done => StepStatus::Done,
            StatusArg::Late => StepStatus::Late,
        }
    }
}

/// Add a new step
#[derive(Args)]
pub struct AddStepArgs {
    /// Name of the step
    pub name: String,
    /// Detailed description of the work
    #[arg(short, long)]
    pub description: Option<String>,
    /// First day of the step (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub start: Option<Date>,
    /// Last day of the step (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub end: Option<Date>,
    /// Duration magnitude, defaults to 1
    #[arg(long)]
    pub duration: Option<f64>,
    /// Unit of the duration, defaults to days
    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,
    /// Team or person responsible
    #[arg(long)]
    pub responsible: Option<String>,
    /// Technical post / functional location code
    #[arg(long)]
    pub post: Option<String>,
    /// Display color (hex)
    #[arg(long)]
    pub color: Option<String>,
    /// Ids of predecessor steps
    #[arg(long = "depends-on", value_delimiter = ',')]
    pub depends_on: Vec<u64>,
    /// Free-form note
    #[arg(long)]
    pub comment: Option<String>,
}

impl From<AddStepArgs> for CreateStep {
    fn from(val: AddStepArgs) -> Self {
        CreateStep {
            name: val.name,
            description: val.description,
            start_date: val.start,
            end_date: val.end,
            duration: val.duration,
            duration_unit: val.unit.map(Into::into),
            responsible: val.responsible,
            technical_post: val.post,
            color: val.color,
            dependencies: val.depends_on,
            comment: val.comment,
        }
    }
}

/// List steps
#[derive(Args, Default)]
pub struct ListStepsArgs {
    /// Sort by start date instead of manual order
    #[arg(long)]
    pub by_date: bool,
}

/// Update an existing step
#[derive(Args)]
pub struct UpdateStepArgs {
    /// ID of the step to update
    pub id: u64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// New first day (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<Date>,
    /// New last day (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<Date>,
    /// New duration magnitude
    #[arg(long)]
    pub duration: Option<f64>,
    /// New duration unit
    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,
    /// New responsible team or person
    #[arg(long)]
    pub responsible: Option<String>,
    /// New technical post code
    #[arg(long)]
    pub post: Option<String>,
    /// New display color (hex)
    #[arg(long)]
    pub color: Option<String>,
    /// Replacement predecessor list
    #[arg(long = "depends-on", value_delimiter = ',')]
    pub depends_on: Option<Vec<u64>>,
    /// New free-form note
    #[arg(long)]
    pub comment: Option<String>,
}

impl From<UpdateStepArgs> for UpdateStep {
    fn from(val: UpdateStepArgs) -> Self {
        UpdateStep {
            name: val.name,
            description: val.description,
            start_date: val.start,
            end_date: val.end,
            duration: val.duration,
            duration_unit: val.unit.map(Into::into),
            responsible: val.responsible,
            technical_post: val.post,
            color: val.color,
            dependencies: val.depends_on,
            comment: val.comment,
        }
    }
}

/// Render the Gantt chart
#[derive(Args, Default)]
pub struct GanttArgs {
    /// Terminal cells per calendar day
    #[arg(long, default_value_t = 2)]
    pub cell_width: usize,
    /// Also write an SVG export to this path
    #[arg(long)]
    pub svg: Option<PathBuf>,
}

/// Seed the demonstration protocol
#[derive(Args, Default)]
pub struct DemoArgs {
    /// Replace existing steps without asking
    #[arg(long)]
    pub force: bool,
    /// First day of the protocol; defaults to a week from today
    #[arg(long)]
    pub start: Option<Date>,
}

/// CLI handler that connects parsed commands to the step store.
pub struct Cli {
    store: StepStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: StepStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn handle_step_command(mut self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Add(args) => {
                let params: CreateStep = args.into();
                params.validate()?;
                let step = self.store.add_step(&params).await;
                self.renderer.render(&CreateResult::new(step).to_string())
            }
            StepCommands::List(args) => self.list_steps(&args),
            StepCommands::Show { id } => match self.store.get_step(id) {
                Some(step) => self.renderer.render(&step.to_string()),
                None => self.renderer.render(&OperationStatus::not_found(id).to_string()),
            },
            StepCommands::Update(args) => {
                let id = args.id;
                let patch: UpdateStep = args.into();
                patch.validate()?;
                if patch.is_empty() {
                    return self
                        .renderer
                        .render(&OperationStatus::failure("Nothing to update".to_string()).to_string());
                }
                if self.store.update_step(id, patch).await {
                    self.render_updated(id)
                } else {
                    self.renderer.render(&OperationStatus::not_found(id).to_string())
                }
            }
            StepCommands::Delete { id } => {
                let name = self.store.get_step(id).map(|s| s.name.clone());
                if self.store.delete_step(id).await {
                    let name = name.unwrap_or_default();
                    self.renderer.render(&DeleteResult::new(id, name).to_string())
                } else {
                    self.renderer.render(&OperationStatus::not_found(id).to_string())
                }
            }
            StepCommands::Done { id } => self.set_status(id, StepStatus::Done).await,
            StepCommands::Status { id, status } => self.set_status(id, status.into()).await,
            StepCommands::Reorder { ids } => {
                self.store.reorder(&ids).await;
                let message = format!("Order updated, {} step(s) kept", self.store.len());
                self.renderer.render(&OperationStatus::success(message).to_string())
            }
            StepCommands::Move { id, days } => {
                let config = GanttConfig::default();
                let Some(step) = self.store.get_step(id) else {
                    return self.renderer.render(&OperationStatus::not_found(id).to_string());
                };
                match gantt::apply_drag(step, days as f64 * config.day_width, config.day_width) {
                    Some(patch) => {
                        self.store.update_step(id, patch).await;
                        self.render_updated(id)
                    }
                    None => self
                        .renderer
                        .render(&OperationStatus::success("No movement".to_string()).to_string()),
                }
            }
            StepCommands::CanStart { id } => {
                if self.store.get_step(id).is_none() {
                    return self.renderer.render(&OperationStatus::not_found(id).to_string());
                }
                let message = if self.store.can_start(id) {
                    format!("Step {id} can start: all dependencies are done")
                } else {
                    format!("Step {id} cannot start yet: unfinished dependencies")
                };
                self.renderer.render(&OperationStatus::success(message).to_string())
            }
        }
    }

    pub async fn handle_window_command(mut self, command: WindowCommands) -> Result<()> {
        match command {
            WindowCommands::Set { start, end } => {
                self.store.set_window(start, end).await;
                self.renderer.render(&self.store.window().to_string())
            }
            WindowCommands::Show => self.renderer.render(&self.store.window().to_string()),
        }
    }

    pub fn render_gantt(&self, args: &GanttArgs) -> Result<()> {
        let today = Zoned::now().date();
        let steps = self.store.steps_by_date();

        if let Some(path) = &args.svg {
            let config = GanttConfig::default();
            let document = svg::render_svg(&steps, today, &config);
            std::fs::write(path, document)
                .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
            self.renderer
                .render(&OperationStatus::success(format!("SVG written to {}", path.display())).to_string())?;
        }

        let chart = chart::render_text_chart(&steps, today, args.cell_width.max(1));
        println!("{chart}");
        Ok(())
    }

    pub async fn seed_demo(mut self, args: DemoArgs) -> Result<()> {
        if !self.store.is_empty() && !args.force {
            return self.renderer.render(
                &OperationStatus::failure(
                    "Steps already exist; pass --force to replace them".to_string(),
                )
                .to_string(),
            );
        }

        let start = args
            .start
            .unwrap_or_else(|| Zoned::now().date().saturating_add(jiff::Span::new().days(7)));
        let count = self.store.seed_example_protocol(start).await;
        self.renderer
            .render(&OperationStatus::success(format!("Seeded {count} example step(s)")).to_string())
    }

    pub fn list_steps(&self, args: &ListStepsArgs) -> Result<()> {
        let steps = if args.by_date {
            self.store.steps_by_date()
        } else {
            self.store.steps_by_order()
        };

        let mut output = String::from("# Protocol Steps\n\n");
        output.push_str(&Steps(steps).to_string());
        output.push('\n');
        output.push_str(&self.store.window().to_string());
        self.renderer.render(&output)
    }

    fn render_updated(&self, id: u64) -> Result<()> {
        match self.store.get_step(id) {
            Some(step) => self.renderer.render(&UpdateResult::new(step.clone()).to_string()),
            None => self.renderer.render(&OperationStatus::not_found(id).to_string()),
        }
    }

    async fn set_status(mut self, id: u64, status: StepStatus) -> Result<()> {
        if self.store.set_status(id, status).await {
            let message = format!("Step {id} status set to {}", status.as_str());
            self.renderer.render(&OperationStatus::success(message).to_string())
        } else {
            self.renderer.render(&OperationStatus::not_found(id).to_string())
        }
    }
}
