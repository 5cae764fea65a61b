//! Status enumeration for protocol steps.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step statuses.
///
/// Every status except [`StepStatus::Done`] is derived from the current
/// date against the step's date window; `Done` is a manual override that
/// survives every recomputation until it is explicitly cleared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum StepStatus {
    /// Step has not started yet
    #[default]
    NotStarted,

    /// Today falls within the step's date window
    InProgress,

    /// Step was manually marked complete (sticky)
    Done,

    /// The step's end date has passed without completion
    Late,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notstarted" | "not_started" => Ok(StepStatus::NotStarted),
            "inprogress" | "in_progress" => Ok(StepStatus::InProgress),
            "done" => Ok(StepStatus::Done),
            "late" => Ok(StepStatus::Late),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::NotStarted => "notStarted",
            StepStatus::InProgress => "inProgress",
            StepStatus::Done => "done",
            StepStatus::Late => "late",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outage_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(StepStatus::Late.with_icon(), "⚠ Late");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Done => "✓ Done",
            StepStatus::InProgress => "➤ In Progress",
            StepStatus::NotStarted => "○ Not Started",
            StepStatus::Late => "⚠ Late",
        }
    }

    /// Derive a status from a step's date window at day granularity.
    ///
    /// This is the pure date rule only; it never returns
    /// [`StepStatus::Done`]. Stickiness of the manual `Done` override is
    /// applied by the store before calling this.
    pub fn from_dates(start: Date, end: Date, today: Date) -> Self {
        if end < today {
            StepStatus::Late
        } else if start <= today && today <= end {
            StepStatus::InProgress
        } else {
            StepStatus::NotStarted
        }
    }
}
