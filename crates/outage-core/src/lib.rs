//! Core library for the Outage shutdown-protocol planning application.
//!
//! This crate provides the scheduling model for industrial plant shutdown
//! protocols: the canonical step store (CRUD, dependency-consistency
//! maintenance, status derivation), the Gantt layout engine that turns
//! steps into geometry and drag gestures into date patches, and the
//! storage collaborators the store persists through.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the [`Step`] unit of schedulable work, its
//!   status/duration enumerations, and the persisted protocol aggregate.
//! - **Store** ([`store`]): [`StepStore`] owns the step list and shutdown
//!   window; every mutation keeps derived fields consistent and writes
//!   through an injected [`storage::Storage`] collaborator. In-memory
//!   state is the session's source of truth: reads see mutations
//!   immediately, persistence is eventual and failures only log.
//! - **Gantt** ([`gantt`]): a pure derived-data layer, no state and no
//!   rendering; interface layers consume its geometry.
//! - **Display** ([`display`]): markdown formatting for models and
//!   operation results, separate from mutation logic.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use outage_core::{params::CreateStep, storage::MemoryStorage, StepStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = StepStoreBuilder::new()
//!     .with_storage(Arc::new(MemoryStorage::new()))
//!     .build()
//!     .await?;
//!
//! let step = store
//!     .add_step(&CreateStep {
//!         name: "Main circuit drainage".to_string(),
//!         duration: Some(3.0),
//!         ..Default::default()
//!     })
//!     .await;
//! println!("Created: {}", step);
//!
//! assert!(store.can_start(step.id));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod gantt;
pub mod models;
pub mod params;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, OperationStatus, Steps, UpdateResult};
pub use error::{ProtocolError, Result};
pub use models::{
    to_days, DurationUnit, ProtocolData, ShutdownWindow, Step, StepStatus,
};
pub use params::{CreateStep, UpdateStep};
pub use store::{SaveDebouncer, StepStore, StepStoreBuilder};
