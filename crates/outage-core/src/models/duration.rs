//! Duration units and the day-fraction conversion used for layout.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unit in which a step's user-facing duration is expressed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    /// Whole or fractional calendar days
    #[default]
    Days,

    /// Hours, converted to days at 24h/day
    Hours,

    /// Minutes, converted to days at 1440min/day
    Minutes,
}

impl FromStr for DurationUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "days" | "day" => Ok(DurationUnit::Days),
            "hours" | "hour" => Ok(DurationUnit::Hours),
            "minutes" | "minute" => Ok(DurationUnit::Minutes),
            _ => Err(format!("Invalid duration unit: {s}")),
        }
    }
}

impl DurationUnit {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Hours => "hours",
            DurationUnit::Minutes => "minutes",
        }
    }

    /// Short label used in compact duration displays (`3d`, `12h`, `45min`).
    pub fn short_label(&self) -> &'static str {
        match self {
            DurationUnit::Days => "d",
            DurationUnit::Hours => "h",
            DurationUnit::Minutes => "min",
        }
    }
}

/// Converts a duration in the given unit to fractional days.
///
/// The result is the canonical layout unit for all bar geometry. Returns
/// `0.0` for zero or negative input; any positive duration yields a
/// strictly positive fraction (a 1-minute step is ~0.0007 days, never 0).
///
/// # Examples
///
/// ```rust
/// use outage_core::models::{to_days, DurationUnit};
///
/// assert_eq!(to_days(3.0, DurationUnit::Days), 3.0);
/// assert_eq!(to_days(12.0, DurationUnit::Hours), 0.5);
/// assert_eq!(to_days(720.0, DurationUnit::Minutes), 0.5);
/// ```
pub fn to_days(duration: f64, unit: DurationUnit) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }

    match unit {
        DurationUnit::Minutes => duration / (60.0 * 24.0),
        DurationUnit::Hours => duration / 24.0,
        DurationUnit::Days => duration,
    }
}
