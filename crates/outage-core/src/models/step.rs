//! Step model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{DurationUnit, StepStatus};

/// Default bar color assigned to new steps.
pub const DEFAULT_STEP_COLOR: &str = "#3b82f6";

fn default_color() -> String {
    DEFAULT_STEP_COLOR.to_string()
}

/// Represents an individual step within the shutdown protocol.
///
/// Serialized with camelCase keys and ISO-8601 dates; the field defaults
/// keep deserialization tolerant of legacy blobs that predate the
/// duration/unit split (repaired by the store's load-time migration).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique identifier, assigned at creation, immutable
    pub id: u64,

    /// Short name of the step
    pub name: String,

    /// Detailed description of the work
    #[serde(default)]
    pub description: String,

    /// First day of the step (day resolution)
    pub start_date: Date,

    /// Last day of the step; `end_date >= start_date` is expected but not
    /// enforced
    pub end_date: Date,

    /// User-facing duration magnitude, in `duration_unit`
    #[serde(default)]
    pub duration: f64,

    /// Unit of `duration`
    #[serde(default)]
    pub duration_unit: DurationUnit,

    /// Duration converted to fractional days; derived cache and the
    /// canonical layout unit
    #[serde(default)]
    pub duration_days: f64,

    /// Current status; `Done` is a sticky manual override
    #[serde(default)]
    pub status: StepStatus,

    /// Team or person responsible for the step
    #[serde(default)]
    pub responsible: String,

    /// Technical post / functional location code
    #[serde(default)]
    pub technical_post: String,

    /// Free-form note
    #[serde(default)]
    pub comment: String,

    /// Ids of steps that must be `Done` before this one may start
    #[serde(default)]
    pub dependencies: Vec<u64>,

    /// Manual list position, contiguous 1..N after any reorder
    pub order: u32,

    /// Display color, no semantic weight
    #[serde(default = "default_color")]
    pub color: String,
}

impl Step {
    /// Compact duration label in the user-facing unit (`3d`, `12h`, `45min`).
    pub fn duration_label(&self) -> String {
        format!("{}{}", self.duration, self.duration_unit.short_label())
    }
}
