//! Canonical step store for the shutdown protocol.
//!
//! [`StepStore`] owns the in-memory step list and shutdown window,
//! maintains referential and derived-field consistency, and delegates
//! persistence to an injected [`Storage`] collaborator. Mutations are
//! synchronous in-memory edits followed by an awaited persistence call;
//! reads always observe the latest mutation regardless of whether the
//! save has completed or even succeeded (optimistic, no rollback).
//!
//! Expected conditions never raise: a mutation against an unknown step id
//! logs a warning and returns `false`, and a failed save logs a warning
//! while the in-memory state stays the session's source of truth.

use std::sync::Arc;

use jiff::civil::Date;
use jiff::{Span, Zoned};
use log::{debug, info, warn};
use tokio::task;

use crate::error::{ProtocolError, Result};
use crate::models::{
    to_days, DurationUnit, ProtocolData, ShutdownWindow, Step, StepStatus, DEFAULT_STEP_COLOR,
};
use crate::params::{CreateStep, UpdateStep};
use crate::storage::{Storage, PROTOCOL_KEY};

pub mod builder;
pub mod debounce;
pub mod demo;


pub use builder::StepStoreBuilder;
pub use debounce::SaveDebouncer;

/// Owns the canonical step list and shutdown window.
pub struct StepStore {
    data: ProtocolData,
    next_id: u64,
    storage: Arc<dyn Storage>,
}

impl StepStore {
    /// Creates an empty store over the given storage collaborator.
    ///
    /// Call [`StepStore::load`] (or use [`StepStoreBuilder`]) to pull the
    /// persisted state in.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            data: ProtocolData::default(),
            next_id: 1,
            storage,
        }
    }

    /// Loads the persisted protocol, repairing legacy step data and
    /// recomputing statuses.
    ///
    /// Steps persisted before the duration/unit split get `duration`
    /// defaulted from `duration_days` (or 1) in days, and a missing
    /// `duration_days` cache is recomputed; when anything was repaired the
    /// data is re-persisted once, so the migration is idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend fails to read or the
    /// stored blob does not parse; an absent blob initializes an empty
    /// protocol instead.
    pub async fn load(&mut self) -> Result<()> {
        let storage = Arc::clone(&self.storage);
        let loaded = task::spawn_blocking(move || storage.load(PROTOCOL_KEY))
            .await
            .map_err(ProtocolError::join)??;

        match loaded {
            Some(value) => {
                self.data = serde_json::from_value(value)?;
                info!("Loaded {} step(s)", self.data.steps.len());

                if self.migrate_legacy() {
                    info!("Migrated legacy steps to the duration/unit structure");
                    self.persist().await;
                }
            }
            None => {
                info!("No stored protocol found, starting empty");
                self.data = ProtocolData::default();
            }
        }

        self.next_id = self
            .data
            .steps
            .iter()
            .map(|s| s.id)
            .max()
            .map_or(1, |max| max + 1);
        self.refresh_statuses(Zoned::now().date());
        Ok(())
    }

    /// Repairs steps missing the user-facing duration fields. Returns
    /// whether anything changed.
    fn migrate_legacy(&mut self) -> bool {
        let mut migrated = false;
        for step in &mut self.data.steps {
            if step.duration <= 0.0 {
                step.duration = if step.duration_days > 0.0 {
                    step.duration_days
                } else {
                    1.0
                };
                step.duration_unit = DurationUnit::Days;
                migrated = true;
            }
            if step.duration_days <= 0.0 {
                step.duration_days = to_days(step.duration, step.duration_unit);
                migrated = true;
            }
        }
        migrated
    }

    /// Recomputes every step's status from its date window at `today`.
    ///
    /// The manual `Done` override is sticky: a done step is never
    /// downgraded here.
    pub fn refresh_statuses(&mut self, today: Date) {
        for step in &mut self.data.steps {
            if step.status != StepStatus::Done {
                step.status = StepStatus::from_dates(step.start_date, step.end_date, today);
            }
        }
    }

    /// Constructs a step from the given parameters plus computed defaults,
    /// appends it and persists. Returns the created step.
    pub async fn add_step(&mut self, params: &CreateStep) -> Step {
        let today = Zoned::now().date();
        let duration_unit = params.duration_unit.unwrap_or_default();
        let duration = params.duration.unwrap_or(1.0);

        let step = Step {
            id: self.allocate_id(),
            name: params.name.clone(),
            description: params.description.clone().unwrap_or_default(),
            start_date: params.start_date.unwrap_or(today),
            end_date: params.end_date.unwrap_or(today),
            duration,
            duration_unit,
            duration_days: to_days(duration, duration_unit),
            status: StepStatus::NotStarted,
            responsible: params.responsible.clone().unwrap_or_default(),
            technical_post: params.technical_post.clone().unwrap_or_default(),
            comment: params.comment.clone().unwrap_or_default(),
            dependencies: params.dependencies.clone(),
            order: self.data.steps.len() as u32 + 1,
            color: params
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_STEP_COLOR.to_string()),
        };

        info!("Added step {}: {}", step.id, step.name);
        self.data.steps.push(step.clone());
        self.persist().await;
        step
    }

    /// Applies a partial patch to a step, chaining the duration/date
    /// re-derivation rules, then persists.
    ///
    /// Re-derivation precedence:
    /// 1. a new `duration` or `duration_unit` recomputes `duration_days`
    ///    from the unit conversion;
    /// 2. otherwise new dates recompute `duration_days` as the inclusive
    ///    day count, clamped at 1;
    /// 3. and a new `duration` without an explicit new `end_date` pushes
    ///    `end_date` to `start_date + duration_days` (chains with rule 1).
    ///
    /// Returns `false` (with a log line) when the id is unknown.
    pub async fn update_step(&mut self, id: u64, changes: UpdateStep) -> bool {
        let Some(step) = self.data.steps.iter_mut().find(|s| s.id == id) else {
            warn!("Cannot update step {id}: not found");
            return false;
        };

        let duration_changed = changes.duration.is_some();
        let unit_changed = changes.duration_unit.is_some();
        let dates_changed = changes.start_date.is_some() || changes.end_date.is_some();
        let end_date_given = changes.end_date.is_some();

        if let Some(name) = changes.name {
            step.name = name;
        }
        if let Some(description) = changes.description {
            step.description = description;
        }
        if let Some(start_date) = changes.start_date {
            step.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            step.end_date = end_date;
        }
        if let Some(duration) = changes.duration {
            step.duration = duration;
        }
        if let Some(duration_unit) = changes.duration_unit {
            step.duration_unit = duration_unit;
        }
        if let Some(responsible) = changes.responsible {
            step.responsible = responsible;
        }
        if let Some(technical_post) = changes.technical_post {
            step.technical_post = technical_post;
        }
        if let Some(color) = changes.color {
            step.color = color;
        }
        if let Some(dependencies) = changes.dependencies {
            step.dependencies = dependencies;
        }
        if let Some(comment) = changes.comment {
            step.comment = comment;
        }

        if duration_changed || unit_changed {
            step.duration_days = to_days(step.duration, step.duration_unit);
        } else if dates_changed {
            let span_days = i64::from((step.end_date - step.start_date).get_days());
            step.duration_days = (span_days + 1).max(1) as f64;
        }

        if duration_changed && !end_date_given {
            step.end_date = add_days(step.start_date, step.duration_days as i64);
        }

        debug!("Updated step {id}");
        self.persist().await;
        true
    }

    /// Removes a step and strips its id from every remaining step's
    /// dependency list, then persists. Returns `false` when the id is
    /// unknown.
    pub async fn delete_step(&mut self, id: u64) -> bool {
        let Some(index) = self.data.steps.iter().position(|s| s.id == id) else {
            warn!("Cannot delete step {id}: not found");
            return false;
        };

        let removed = self.data.steps.remove(index);
        for step in &mut self.data.steps {
            step.dependencies.retain(|dep| *dep != id);
        }

        info!("Deleted step {}: {}", removed.id, removed.name);
        self.persist().await;
        true
    }

    /// Unconditional manual status override, including leaving `Done`.
    ///
    /// A non-`Done` override only lasts until the next status
    /// recomputation; `Done` is sticky across recomputation and reloads.
    pub async fn set_status(&mut self, id: u64, status: StepStatus) -> bool {
        let Some(step) = self.data.steps.iter_mut().find(|s| s.id == id) else {
            warn!("Cannot set status of step {id}: not found");
            return false;
        };

        info!("Step {} status: {}", id, status.as_str());
        step.status = status;
        self.persist().await;
        true
    }

    /// Stores the overall outage window and persists.
    pub async fn set_window(&mut self, start: Date, end: Date) {
        self.data.window_start = Some(start);
        self.data.window_end = Some(end);
        info!("Shutdown window set: {start} to {end}");
        self.persist().await;
    }

    /// Rebuilds the step list in the given id order and reassigns
    /// contiguous `order` values, then persists.
    ///
    /// Unknown ids are skipped; steps absent from `ids_in_order` are
    /// dropped from the protocol.
    pub async fn reorder(&mut self, ids_in_order: &[u64]) {
        let mut remaining = std::mem::take(&mut self.data.steps);
        let mut reordered = Vec::with_capacity(ids_in_order.len());

        for id in ids_in_order {
            if let Some(pos) = remaining.iter().position(|s| s.id == *id) {
                let mut step = remaining.remove(pos);
                step.order = reordered.len() as u32 + 1;
                reordered.push(step);
            }
        }

        self.data.steps = reordered;
        info!("Steps reordered ({} kept)", self.data.steps.len());
        self.persist().await;
    }

    /// True iff the step has no dependencies or every dependency is
    /// `Done`. A dependency id that no longer resolves blocks its
    /// successor until cleanup removes it.
    pub fn can_start(&self, id: u64) -> bool {
        let Some(step) = self.get_step(id) else {
            return true;
        };
        step.dependencies
            .iter()
            .all(|dep| self.get_step(*dep).is_some_and(|d| d.status == StepStatus::Done))
    }

    /// Steps in insertion order.
    pub fn steps(&self) -> &[Step] {
        &self.data.steps
    }

    /// Steps sorted by their manual `order` value.
    pub fn steps_by_order(&self) -> Vec<Step> {
        let mut steps = self.data.steps.clone();
        steps.sort_by_key(|s| s.order);
        steps
    }

    /// Steps sorted by start date.
    pub fn steps_by_date(&self) -> Vec<Step> {
        let mut steps = self.data.steps.clone();
        steps.sort_by_key(|s| s.start_date);
        steps
    }

    /// Looks up a single step by id.
    pub fn get_step(&self, id: u64) -> Option<&Step> {
        self.data.steps.iter().find(|s| s.id == id)
    }

    /// The overall outage window.
    pub fn window(&self) -> ShutdownWindow {
        self.data.window()
    }

    /// Number of steps in the protocol.
    pub fn len(&self) -> usize {
        self.data.steps.len()
    }

    /// True when the protocol has no steps.
    pub fn is_empty(&self) -> bool {
        self.data.steps.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Writes the current protocol through the storage collaborator.
    ///
    /// Failures are logged, not raised: the in-memory state remains the
    /// session's source of truth and the caller's edit stays visible.
    /// Returns whether the save reached storage.
    pub async fn persist(&self) -> bool {
        let value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to serialize protocol: {err}");
                return false;
            }
        };

        let storage = Arc::clone(&self.storage);
        match task::spawn_blocking(move || storage.save(PROTOCOL_KEY, &value)).await {
            Ok(Ok(())) => {
                debug!("Protocol saved");
                true
            }
            Ok(Err(err)) => {
                warn!("Failed to persist protocol, changes may not be saved: {err}");
                false
            }
            Err(err) => {
                warn!("Persistence task failed: {err}");
                false
            }
        }
    }
}

/// Shifts a civil date by whole days, saturating at the calendar bounds.
pub(crate) fn add_days(date: Date, days: i64) -> Date {
    date.saturating_add(Span::new().days(days))
}
