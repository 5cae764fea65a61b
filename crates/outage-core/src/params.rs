//! Parameter structures for protocol operations.
//!
//! Shared parameter types that can be used across different interfaces
//! (CLI today, other front ends later) without framework-specific derives.
//! Interface layers wrap these with their own derives (clap, etc.) and
//! convert via `From`/accessor methods, keeping the core free of UI
//! framework dependencies.
//!
//! Validation of user input happens here, at the boundary, so that the
//! store itself only ever sees well-formed values: an out-of-range
//! duration is an [`InvalidInput`](crate::ProtocolError::InvalidInput)
//! error before it reaches a mutation.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::models::DurationUnit;

/// Parameters for creating a new step.
///
/// Every field except `name` is optional; the store fills computed
/// defaults (id, order, status, derived duration) on insert. Omitted
/// dates default to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStep {
    /// Short name of the step (required)
    pub name: String,
    /// Detailed description of the work
    pub description: Option<String>,
    /// First day of the step; defaults to today
    pub start_date: Option<Date>,
    /// Last day of the step; defaults to today
    pub end_date: Option<Date>,
    /// Duration magnitude in `duration_unit`; defaults to 1
    pub duration: Option<f64>,
    /// Unit of `duration`; defaults to days
    pub duration_unit: Option<DurationUnit>,
    /// Team or person responsible
    pub responsible: Option<String>,
    /// Technical post / functional location code
    pub technical_post: Option<String>,
    /// Display color
    pub color: Option<String>,
    /// Ids of predecessor steps
    #[serde(default)]
    pub dependencies: Vec<u64>,
    /// Free-form note
    pub comment: Option<String>,
}

impl CreateStep {
    /// Validate creation parameters.
    ///
    /// # Errors
    ///
    /// * `ProtocolError::InvalidInput` - when `name` is empty or the
    ///   duration is zero or negative
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProtocolError::invalid_input("name", "Name must not be empty"));
        }
        if let Some(duration) = self.duration {
            if duration <= 0.0 {
                return Err(ProtocolError::invalid_input(
                    "duration",
                    format!("Duration must be positive, got {duration}"),
                ));
            }
        }
        Ok(())
    }
}

/// Partial-update patch for an existing step.
///
/// Only the fields set to `Some` are applied; the store then chains the
/// duration/date re-derivation rules in their documented precedence
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStep {
    /// New short name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New first day
    pub start_date: Option<Date>,
    /// New last day
    pub end_date: Option<Date>,
    /// New duration magnitude
    pub duration: Option<f64>,
    /// New duration unit
    pub duration_unit: Option<DurationUnit>,
    /// New responsible team or person
    pub responsible: Option<String>,
    /// New technical post code
    pub technical_post: Option<String>,
    /// New display color
    pub color: Option<String>,
    /// Replacement dependency list (not a merge)
    pub dependencies: Option<Vec<u64>>,
    /// New free-form note
    pub comment: Option<String>,
}

impl UpdateStep {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.duration.is_none()
            && self.duration_unit.is_none()
            && self.responsible.is_none()
            && self.technical_post.is_none()
            && self.color.is_none()
            && self.dependencies.is_none()
            && self.comment.is_none()
    }

    /// Validate update parameters.
    ///
    /// # Errors
    ///
    /// * `ProtocolError::InvalidInput` - when a provided duration is zero
    ///   or negative, or a provided name is empty
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ProtocolError::invalid_input("name", "Name must not be empty"));
            }
        }
        if let Some(duration) = self.duration {
            if duration <= 0.0 {
                return Err(ProtocolError::invalid_input(
                    "duration",
                    format!("Duration must be positive, got {duration}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_step_validate_rejects_empty_name() {
        let params = CreateStep::default();
        assert!(matches!(
            params.validate(),
            Err(ProtocolError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_create_step_validate_rejects_non_positive_duration() {
        let params = CreateStep {
            name: "Drain".to_string(),
            duration: Some(0.0),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = CreateStep {
            name: "Drain".to_string(),
            duration: Some(2.5),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_update_step_is_empty() {
        assert!(UpdateStep::default().is_empty());
        let patch = UpdateStep {
            comment: Some("checked".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_update_step_validate() {
        let patch = UpdateStep {
            duration: Some(-1.0),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        let patch = UpdateStep {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
