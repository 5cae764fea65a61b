//! Data models for the shutdown protocol.
//!
//! This module contains the core domain types: the [`Step`] unit of
//! schedulable work, its [`StepStatus`] and [`DurationUnit`] enumerations,
//! and the [`ProtocolData`] aggregate that is persisted as a single JSON
//! blob. Display implementations live in [`crate::display::models`] to keep
//! data structures and presentation separated.
//!
//! Two derived quantities matter everywhere else in the crate:
//!
//! - `duration_days` (see [`to_days`]) is the canonical fractional-day
//!   duration used for all Gantt geometry.
//! - `status` is recomputed from today's date by the store, with the manual
//!   `Done` override kept sticky (see [`StepStatus::from_dates`]).

pub mod duration;
pub mod protocol;
pub mod status;
pub mod step;


// Re-export all public types at the models level
pub use duration::{to_days, DurationUnit};
pub use protocol::{ProtocolData, ShutdownWindow};
pub use status::StepStatus;
pub use step::{Step, DEFAULT_STEP_COLOR};
