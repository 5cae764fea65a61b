//! Result wrapper types for displaying mutation outcomes.

use std::fmt;

use crate::models::Step;

/// Formats the outcome of a step creation: a confirmation line followed
/// by the created step's details.
pub struct CreateResult {
    pub step: Step,
}

impl CreateResult {
    pub fn new(step: Step) -> Self {
        Self { step }
    }
}

impl fmt::Display for CreateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created step with ID: {}", self.step.id)?;
        writeln!(f)?;
        write!(f, "{}", self.step)
    }
}

/// Formats the outcome of a step update.
pub struct UpdateResult {
    pub step: Step,
}

impl UpdateResult {
    pub fn new(step: Step) -> Self {
        Self { step }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated step {}", self.step.id)?;
        writeln!(f)?;
        write!(f, "{}", self.step)
    }
}

/// Formats the outcome of a step deletion.
pub struct DeleteResult {
    pub id: u64,
    pub name: String,
}

impl DeleteResult {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted step {}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{DurationUnit, StepStatus, DEFAULT_STEP_COLOR};

    fn sample_step() -> Step {
        Step {
            id: 4,
            name: "Tests and trials".to_string(),
            description: String::new(),
            start_date: date(2025, 3, 20),
            end_date: date(2025, 3, 20),
            duration: 12.0,
            duration_unit: DurationUnit::Hours,
            duration_days: 0.5,
            status: StepStatus::NotStarted,
            responsible: String::new(),
            technical_post: String::new(),
            comment: String::new(),
            dependencies: vec![],
            order: 4,
            color: DEFAULT_STEP_COLOR.to_string(),
        }
    }

    #[test]
    fn test_create_result_display() {
        let output = format!("{}", CreateResult::new(sample_step()));
        assert!(output.contains("Created step with ID: 4"));
        assert!(output.contains("Tests and trials"));
        assert!(output.contains("12h"));
    }

    #[test]
    fn test_update_result_display() {
        let output = format!("{}", UpdateResult::new(sample_step()));
        assert!(output.contains("Updated step 4"));
    }

    #[test]
    fn test_delete_result_display() {
        let output = format!("{}", DeleteResult::new(4, "Tests and trials"));
        assert_eq!(output, "Deleted step 4: Tests and trials\n");
    }
}
