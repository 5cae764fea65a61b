//! Example protocol generation for demonstrations.

use jiff::civil::Date;
use log::info;

use super::{add_days, StepStore};
use crate::models::{to_days, DurationUnit};
use crate::params::CreateStep;

struct ExampleStep {
    name: &'static str,
    description: &'static str,
    duration: f64,
    unit: DurationUnit,
    responsible: &'static str,
    color: &'static str,
    technical_post: &'static str,
}

const EXAMPLE_STEPS: &[ExampleStep] = &[
    ExampleStep {
        name: "Preparation and securing",
        description: "Set up safety equipment and prepare the work zone",
        duration: 2.0,
        unit: DurationUnit::Days,
        responsible: "Safety team",
        color: "#10b981",
        technical_post: "SAFE",
    },
    ExampleStep {
        name: "Equipment shutdown",
        description: "Progressive shutdown of all affected equipment",
        duration: 4.0,
        unit: DurationUnit::Hours,
        responsible: "Operators",
        color: "#f59e0b",
        technical_post: "OPS",
    },
    ExampleStep {
        name: "Main circuit purge and drainage",
        description: "Complete purge and drainage of the main circuit",
        duration: 3.0,
        unit: DurationUnit::Days,
        responsible: "Mechanical team",
        color: "#3b82f6",
        technical_post: "MECH",
    },
    ExampleStep {
        name: "Secondary circuit drainage",
        description: "Drainage of all secondary circuits",
        duration: 8.0,
        unit: DurationUnit::Hours,
        responsible: "Mechanical team",
        color: "#6366f1",
        technical_post: "MECH",
    },
    ExampleStep {
        name: "Electrical isolation",
        description: "Electrical isolation and lockout",
        duration: 45.0,
        unit: DurationUnit::Minutes,
        responsible: "Electricians",
        color: "#eab308",
        technical_post: "ELEC",
    },
    ExampleStep {
        name: "Inspection and cleaning",
        description: "Visual inspection and equipment cleaning",
        duration: 2.0,
        unit: DurationUnit::Days,
        responsible: "Maintenance team",
        color: "#8b5cf6",
        technical_post: "MAINT",
    },
    ExampleStep {
        name: "Repairs and modifications",
        description: "Execution of repair and modification work",
        duration: 5.0,
        unit: DurationUnit::Days,
        responsible: "Maintenance team",
        color: "#ec4899",
        technical_post: "MAINT",
    },
    ExampleStep {
        name: "Tests and trials",
        description: "Functional tests and trial runs",
        duration: 12.0,
        unit: DurationUnit::Hours,
        responsible: "Engineering",
        color: "#14b8a6",
        technical_post: "ENG",
    },
    ExampleStep {
        name: "Return to service",
        description: "Progressive restart of the equipment",
        duration: 2.0,
        unit: DurationUnit::Days,
        responsible: "Operators",
        color: "#10b981",
        technical_post: "OPS",
    },
];

impl StepStore {
    /// Replaces the protocol with a nine-step demonstration chain starting
    /// at `first_start`, each step depending on the previous one, and
    /// derives the shutdown window from the generated schedule. Returns
    /// the number of steps created.
    ///
    /// Unconditional: callers that need overwrite protection (the CLI
    /// does) confirm before calling.
    pub async fn seed_example_protocol(&mut self, first_start: Date) -> usize {
        self.data.steps.clear();

        let mut current = first_start;
        let mut previous_id: Option<u64> = None;

        for example in EXAMPLE_STEPS {
            let span_days = to_days(example.duration, example.unit).trunc() as i64;
            let end = add_days(current, span_days);

            let created = self
                .add_step(&CreateStep {
                    name: example.name.to_string(),
                    description: Some(example.description.to_string()),
                    start_date: Some(current),
                    end_date: Some(end),
                    duration: Some(example.duration),
                    duration_unit: Some(example.unit),
                    responsible: Some(example.responsible.to_string()),
                    technical_post: Some(example.technical_post.to_string()),
                    color: Some(example.color.to_string()),
                    dependencies: previous_id.into_iter().collect(),
                    comment: None,
                })
                .await;

            previous_id = Some(created.id);
            current = add_days(end, 1);
        }

        let window_end = add_days(current, -1);
        self.set_window(first_start, window_end).await;

        info!("Seeded {} example step(s)", EXAMPLE_STEPS.len());
        EXAMPLE_STEPS.len()
    }
}
