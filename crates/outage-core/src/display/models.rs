//! Display implementations for domain models.
//!
//! All output is markdown for rich terminal rendering, with conditional
//! sections so sparse steps stay compact.

use std::fmt;

use super::date::DayDate;
use crate::models::{DurationUnit, ShutdownWindow, Step, StepStatus};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.name, self.status.with_icon())?;
        writeln!(f)?;

        writeln!(
            f,
            "- Dates: {} → {} ({})",
            DayDate(self.start_date),
            DayDate(self.end_date),
            self.duration_label()
        )?;
        if !self.responsible.is_empty() {
            writeln!(f, "- Responsible: {}", self.responsible)?;
        }
        if !self.technical_post.is_empty() {
            writeln!(f, "- Technical post: {}", self.technical_post)?;
        }
        if !self.dependencies.is_empty() {
            let ids: Vec<String> = self.dependencies.iter().map(u64::to_string).collect();
            writeln!(f, "- Depends on: {}", ids.join(", "))?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        if !self.comment.is_empty() {
            writeln!(f)?;
            writeln!(f, "> {}", self.comment)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for ShutdownWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                writeln!(f, "Shutdown window: {} → {}", DayDate(start), DayDate(end))
            }
            (Some(start), None) => writeln!(f, "Shutdown window starts {}", DayDate(start)),
            (None, Some(end)) => writeln!(f, "Shutdown window ends {}", DayDate(end)),
            (None, None) => writeln!(f, "No shutdown window set."),
        }
    }
}
