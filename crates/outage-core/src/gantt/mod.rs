//! Gantt layout engine.
//!
//! Pure derived-data layer over the step list: computes the visible date
//! range, converts step dates to pixel geometry, resolves dependency
//! arrows, and interprets drag gestures as date-shift patches for the
//! store. It holds no state and performs no persistence or rendering;
//! renderers (terminal chart, SVG export, anything else) consume the
//! geometry it produces.

use jiff::civil::Date;

use crate::models::{Step, StepStatus};
use crate::params::UpdateStep;
use crate::store::add_days;


/// Geometry constants for the chart, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttConfig {
    /// Width of one calendar day
    pub day_width: f64,
    /// Height of one step row
    pub row_height: f64,
    /// Height of the timeline header above the rows
    pub header_height: f64,
    /// Width of the task-name panel left of the chart
    pub left_panel_width: f64,
    /// Minimum number of days the range spans, however few steps exist
    pub min_visible_days: i64,
}

impl Default for GanttConfig {
    fn default() -> Self {
        Self {
            day_width: 40.0,
            row_height: 50.0,
            header_height: 80.0,
            left_panel_width: 300.0,
            min_visible_days: 30,
        }
    }
}

/// Bar fill color for a status.
pub fn status_color(status: StepStatus) -> &'static str {
    match status {
        StepStatus::NotStarted => "#94a3b8",
        StepStatus::InProgress => "#3b82f6",
        StepStatus::Done => "#10b981",
        StepStatus::Late => "#ef4444",
    }
}

/// The visible date range of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First visible day
    pub start: Date,
    /// Last visible day
    pub end: Date,
    /// Number of day columns to draw (at least `min_visible_days`)
    pub days: i64,
}

/// Computes the visible range for the given steps.
///
/// Empty input yields `[today, today + min_visible_days]`; otherwise the
/// range is `[min(start) - 2, max(end) + 2]` (fixed two-day padding),
/// widened to at least `min_visible_days` columns.
pub fn compute_date_range(steps: &[Step], today: Date, config: &GanttConfig) -> DateRange {
    if steps.is_empty() {
        return DateRange {
            start: today,
            end: add_days(today, config.min_visible_days),
            days: config.min_visible_days,
        };
    }

    let mut min_date = steps[0].start_date;
    let mut max_date = steps[0].end_date;
    for step in steps {
        if step.start_date < min_date {
            min_date = step.start_date;
        }
        if step.end_date > max_date {
            max_date = step.end_date;
        }
    }

    let start = add_days(min_date, -2);
    let end = add_days(max_date, 2);
    let days = i64::from((end - start).get_days()) + 1;

    DateRange {
        start,
        end,
        days: days.max(config.min_visible_days),
    }
}

/// Whole calendar days between the range start and `date` (negative when
/// `date` precedes the range).
pub fn day_offset(date: Date, range_start: Date) -> i64 {
    i64::from((date - range_start).get_days())
}

/// Horizontal geometry of one step bar, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub left: f64,
    pub width: f64,
}

/// Lays out a step's bar against the range start. Width is the fractional
/// `duration_days`, so a 12-hour step draws half a day column.
pub fn layout_bar(step: &Step, range_start: Date, config: &GanttConfig) -> BarLayout {
    BarLayout {
        left: day_offset(step.start_date, range_start) as f64 * config.day_width,
        width: step.duration_days * config.day_width,
    }
}

/// One dependency arrow, as indices into the laid-out step slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Row index of the predecessor
    pub from: usize,
    /// Row index of the dependent step
    pub to: usize,
}

/// Resolves every dependency into an edge between row indices.
///
/// Dependency ids that do not resolve within `steps` (deleted steps,
/// stale data) are silently skipped.
pub fn layout_dependency_edges(steps: &[Step]) -> Vec<DependencyEdge> {
    let mut edges = Vec::new();
    for (to, step) in steps.iter().enumerate() {
        for dep_id in &step.dependencies {
            if let Some(from) = steps.iter().position(|s| s.id == *dep_id) {
                edges.push(DependencyEdge { from, to });
            }
        }
    }
    edges
}

/// Endpoints of one dependency arrow: from the end of the predecessor's
/// bar to the start of the dependent's bar, each at its row's vertical
/// center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePath {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl EdgePath {
    /// The four corners of the elbow polyline renderers draw: right out
    /// of the source, vertical jog at the midpoint, into the target.
    pub fn elbow(&self) -> [(f64, f64); 4] {
        let mid_x = (self.x1 + self.x2) / 2.0;
        [
            (self.x1, self.y1),
            (mid_x, self.y1),
            (mid_x, self.y2),
            (self.x2, self.y2),
        ]
    }
}

/// Computes the pixel path for one edge over the laid-out steps.
pub fn edge_path(
    edge: DependencyEdge,
    steps: &[Step],
    range_start: Date,
    config: &GanttConfig,
) -> EdgePath {
    let row_center = |index: usize| {
        config.header_height + index as f64 * config.row_height + config.row_height / 2.0
    };

    let source = layout_bar(&steps[edge.from], range_start, config);
    let target = layout_bar(&steps[edge.to], range_start, config);

    EdgePath {
        x1: source.left + source.width,
        y1: row_center(edge.from),
        x2: target.left,
        y2: row_center(edge.to),
    }
}

/// Interprets a horizontal drag as a date shift.
///
/// The pixel delta is rounded to whole days; a zero-day drag is a no-op
/// (`None`). Otherwise both dates shift by the same delta, keeping the
/// bar span, and the result is the explicit two-date patch to submit via
/// `StepStore::update_step` (supplying both dates routes the store's
/// re-derivation through the date rule, so the duration survives).
pub fn apply_drag(step: &Step, pixel_delta_x: f64, day_width: f64) -> Option<UpdateStep> {
    let delta_days = (pixel_delta_x / day_width).round() as i64;
    if delta_days == 0 {
        return None;
    }

    let new_start = add_days(step.start_date, delta_days);
    // A fractional duration occupies its ceiling day window
    let bar_span_days = (step.duration_days.ceil() as i64 - 1).max(0);
    let new_end = add_days(new_start, bar_span_days);

    Some(UpdateStep {
        start_date: Some(new_start),
        end_date: Some(new_end),
        ..Default::default()
    })
}
