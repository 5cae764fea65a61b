//! SVG export of the Gantt chart.
//!
//! Produces a standalone vector document from the core layout engine:
//! day grid, one bar per step colored by status, dashed dependency
//! arrows with an arrowhead marker, and a marker line on today.

use std::fmt::Write as _;

use jiff::civil::Date;
use jiff::Span;
use outage_core::gantt::{
    compute_date_range, day_offset, edge_path, layout_bar, layout_dependency_edges, status_color,
    GanttConfig,
};
use outage_core::Step;

const BAR_HEIGHT: f64 = 34.0;
const BAR_TOP_INSET: f64 = 8.0;

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders the step list (pre-sorted by the caller) as an SVG document.
pub fn render_svg(steps: &[Step], today: Date, config: &GanttConfig) -> String {
    let range = compute_date_range(steps, today, config);
    let chart_width = range.days as f64 * config.day_width;
    let width = config.left_panel_width + chart_width;
    let height = config.header_height + steps.len().max(1) as f64 * config.row_height;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    );
    svg.push_str(concat!(
        "  <defs>\n",
        "    <marker id=\"arrowhead\" markerWidth=\"10\" markerHeight=\"10\" refX=\"8\" refY=\"3\" orient=\"auto\">\n",
        "      <polygon points=\"0 0, 10 3, 0 6\" fill=\"#6366f1\" />\n",
        "    </marker>\n",
        "  </defs>\n",
    ));
    let _ = writeln!(svg, r#"  <rect width="{width}" height="{height}" fill="white" />"#);

    // Step names in the left panel
    for (row, step) in steps.iter().enumerate() {
        let y = config.header_height + row as f64 * config.row_height + config.row_height / 2.0;
        let _ = writeln!(
            svg,
            r##"  <text x="12" y="{y}" dominant-baseline="middle" font-size="13" fill="#1e293b">{}</text>"##,
            xml_escape(&step.name)
        );
    }

    // Chart contents are laid out relative to the range start; shift the
    // whole group right of the name panel
    let _ = writeln!(svg, r#"  <g transform="translate({},0)">"#, config.left_panel_width);

    // Day grid and weekly date labels
    for day in 0..range.days {
        let x = day as f64 * config.day_width;
        let _ = writeln!(
            svg,
            r##"    <line x1="{x}" y1="{}" x2="{x}" y2="{height}" stroke="#e2e8f0" stroke-width="1" />"##,
            config.header_height
        );
        if day % 7 == 0 {
            let label = range
                .start
                .saturating_add(Span::new().days(day))
                .strftime("%b %d")
                .to_string();
            let _ = writeln!(
                svg,
                r##"    <text x="{}" y="{}" font-size="11" fill="#64748b">{label}</text>"##,
                x + 4.0,
                config.header_height - 10.0
            );
        }
    }

    // Today marker
    let today_x = day_offset(today, range.start) as f64 * config.day_width;
    if (0.0..=chart_width).contains(&today_x) {
        let _ = writeln!(
            svg,
            r##"    <line x1="{today_x}" y1="0" x2="{today_x}" y2="{height}" stroke="#ef4444" stroke-width="2" />"##
        );
    }

    // Step bars
    for (row, step) in steps.iter().enumerate() {
        let bar = layout_bar(step, range.start, config);
        let y = config.header_height + row as f64 * config.row_height + BAR_TOP_INSET;
        let _ = writeln!(
            svg,
            r#"    <rect x="{}" y="{y}" width="{}" height="{BAR_HEIGHT}" rx="6" fill="{}"><title>{} ({})</title></rect>"#,
            bar.left,
            bar.width,
            status_color(step.status),
            xml_escape(&step.name),
            step.duration_label()
        );
    }

    // Dependency arrows, end of predecessor to start of dependent
    for edge in layout_dependency_edges(steps) {
        let path = edge_path(edge, steps, range.start, config);
        let [(x1, y1), (mx, _), (_, y2), (x2, _)] = path.elbow();
        let _ = writeln!(
            svg,
            r##"    <path d="M {x1} {y1} L {mx} {y1} L {mx} {y2} L {x2} {y2}" fill="none" stroke="#6366f1" stroke-width="2" stroke-dasharray="5,5" marker-end="url(#arrowhead)" />"##
        );
    }

    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}
