//! Text Gantt chart for the terminal.
//!
//! Renders the core layout engine's geometry at a scale of
//! `cells_per_day` terminal cells per calendar day: the same bar and
//! range math the SVG export uses, quantized to character columns.

use jiff::civil::Date;
use jiff::Span;
use outage_core::gantt::{compute_date_range, layout_bar, layout_dependency_edges, GanttConfig};
use outage_core::{Step, StepStatus};

const NAME_WIDTH: usize = 24;

fn bar_char(status: StepStatus) -> char {
    match status {
        StepStatus::NotStarted => '░',
        StepStatus::InProgress => '█',
        StepStatus::Done => '▓',
        StepStatus::Late => '▒',
    }
}

fn clip_name(name: &str) -> String {
    let mut clipped: String = name.chars().take(NAME_WIDTH).collect();
    if name.chars().count() > NAME_WIDTH {
        clipped.pop();
        clipped.push('…');
    }
    clipped
}

/// Renders the step list as a text chart, sorted the way the caller
/// sorted it (one row per step).
pub fn render_text_chart(steps: &[Step], today: Date, cells_per_day: usize) -> String {
    if steps.is_empty() {
        return "No steps to chart. Add steps or run `outage demo`.\n".to_string();
    }

    let config = GanttConfig {
        day_width: cells_per_day as f64,
        ..Default::default()
    };
    let range = compute_date_range(steps, today, &config);
    let total_cells = range.days as usize * cells_per_day;

    let mut output = String::new();

    // Date ruler with a tick every week
    let mut ruler = vec![' '; total_cells];
    let mut tick = 0;
    while tick < range.days {
        let day = range.start.saturating_add(Span::new().days(tick));
        let label = day.strftime("%m-%d").to_string();
        let pos = tick as usize * cells_per_day;
        for (offset, ch) in label.chars().enumerate() {
            if pos + offset < total_cells {
                ruler[pos + offset] = ch;
            }
        }
        tick += 7;
    }
    output.push_str(&" ".repeat(NAME_WIDTH + 2));
    output.push_str(&ruler.iter().collect::<String>());
    output.push('\n');

    // Today marker
    let today_offset = i64::from((today - range.start).get_days());
    if (0..range.days).contains(&today_offset) {
        let mut marker = vec![' '; total_cells];
        marker[today_offset as usize * cells_per_day] = '▼';
        output.push_str(&" ".repeat(NAME_WIDTH + 2));
        output.push_str(&marker.iter().collect::<String>());
        output.push('\n');
    }

    // One bar row per step
    for step in steps {
        let bar = layout_bar(step, range.start, &config);
        let left = bar.left.max(0.0).round() as usize;
        let width = (bar.width.round() as usize).max(1);
        let width = width.min(total_cells.saturating_sub(left).max(1));

        let mut row = vec![' '; total_cells];
        for cell in row.iter_mut().skip(left).take(width) {
            *cell = bar_char(step.status);
        }

        output.push_str(&format!("{:<NAME_WIDTH$} │", clip_name(&step.name)));
        output.push_str(&row.iter().collect::<String>());
        output.push_str(&format!(" {}\n", step.duration_label()));
    }

    // Dependency arrows, by name
    let edges = layout_dependency_edges(steps);
    if !edges.is_empty() {
        output.push('\n');
        output.push_str("Dependencies:\n");
        for edge in edges {
            output.push_str(&format!(
                "  {} ─▶ {}\n",
                steps[edge.from].name, steps[edge.to].name
            ));
        }
    }

    output.push('\n');
    output.push_str("Legend: ░ not started  █ in progress  ▓ done  ▒ late\n");
    output
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use outage_core::models::{DurationUnit, DEFAULT_STEP_COLOR};

    use super::*;

    fn step(id: u64, name: &str, start: Date, end: Date, duration_days: f64) -> Step {
        Step {
            id,
            name: name.to_string(),
            description: String::new(),
            start_date: start,
            end_date: end,
            duration: duration_days,
            duration_unit: DurationUnit::Days,
            duration_days,
            status: StepStatus::NotStarted,
            responsible: String::new(),
            technical_post: String::new(),
            comment: String::new(),
            dependencies: vec![],
            order: id as u32,
            color: DEFAULT_STEP_COLOR.to_string(),
        }
    }

    #[test]
    fn test_empty_chart_message() {
        let output = render_text_chart(&[], date(2025, 3, 15), 2);
        assert!(output.contains("No steps to chart"));
    }

    #[test]
    fn test_bar_offsets_follow_layout() {
        let steps = [
            step(1, "Preparation", date(2025, 3, 10), date(2025, 3, 11), 2.0),
            step(2, "Drainage", date(2025, 3, 12), date(2025, 3, 14), 3.0),
        ];
        let output = render_text_chart(&steps, date(2025, 3, 10), 2);

        // Range starts two days before the first step: bars start at
        // column offset 2 days * 2 cells
        let prep_row = output
            .lines()
            .find(|l| l.starts_with("Preparation"))
            .unwrap();
        let chart_part = prep_row.split('│').nth(1).unwrap();
        assert!(chart_part.starts_with("    ░░░░"));

        let drain_row = output.lines().find(|l| l.starts_with("Drainage")).unwrap();
        let chart_part = drain_row.split('│').nth(1).unwrap();
        assert!(chart_part.starts_with("        ░░░░░░"));
        assert!(drain_row.ends_with("3d"));
    }

    #[test]
    fn test_dependencies_listed_by_name() {
        let mut b = step(2, "Drainage", date(2025, 3, 12), date(2025, 3, 14), 3.0);
        b.dependencies = vec![1];
        let steps = [
            step(1, "Preparation", date(2025, 3, 10), date(2025, 3, 11), 2.0),
            b,
        ];
        let output = render_text_chart(&steps, date(2025, 3, 10), 1);
        assert!(output.contains("Preparation ─▶ Drainage"));
    }

    #[test]
    fn test_long_names_are_clipped() {
        let steps = [step(
            1,
            "A very long step name that will not fit the panel",
            date(2025, 3, 10),
            date(2025, 3, 11),
            2.0,
        )];
        let output = render_text_chart(&steps, date(2025, 3, 10), 1);
        assert!(output.contains('…'));
    }
}
