//! The persisted protocol aggregate and the shutdown window.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Step;

/// The overall outage period, independent of individual step dates.
///
/// Contextual metadata only: no step scheduling rule reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShutdownWindow {
    /// First day of the outage, if set
    pub start: Option<Date>,

    /// Last day of the outage, if set
    pub end: Option<Date>,
}

impl ShutdownWindow {
    /// True when neither bound has been set.
    pub fn is_unset(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// The full persisted shape: step list plus window bounds.
///
/// Serializes to `{ "steps": [...], "windowStart": ..., "windowEnd": ... }`
/// with ISO-8601 date strings, the blob stored under the protocol storage
/// key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolData {
    /// Steps in insertion order
    #[serde(default)]
    pub steps: Vec<Step>,

    /// First day of the outage
    #[serde(default)]
    pub window_start: Option<Date>,

    /// Last day of the outage
    #[serde(default)]
    pub window_end: Option<Date>,
}

impl ProtocolData {
    /// The window bounds as a [`ShutdownWindow`].
    pub fn window(&self) -> ShutdownWindow {
        ShutdownWindow {
            start: self.window_start,
            end: self.window_end,
        }
    }
}
