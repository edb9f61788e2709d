//! SVG rendering of the contribution garden.
//!
//! Pure text generation: one `<g>` per calendar day with a
//! month-colored background square, an optional bottom-anchored accent
//! overlay scaled to the day's contribution count, and a tooltip.

use chrono::NaiveDate;

use crate::calendar::{column_count, layout_year, ContributionIndex, ROWS};
use crate::github::ContributionDay;

/// Cell edge length in pixels. The intensity overlay is quantized
/// against this unit.
pub const BOX_SIZE: u32 = 14;

/// Gap between adjacent cells.
pub const BOX_MARGIN: u32 = 3;

/// Outer margin on both axes, leaving room for axis labels.
pub const X_OFFSET: u32 = 40;
pub const Y_OFFSET: u32 = 40;

/// One fill color per month, January first.
pub const MONTH_COLORS: [&str; 12] = [
    "#FF69B4", "#33CCFF", "#FFA07A", "#8F0A1A", "#ba7022", "#6495ED",
    "#DC143C", "#00BFFF", "#FFC080", "#4682B4", "#FF6347", "#7A288A",
];

/// Accent color for the contribution overlay.
pub const ACCENT_COLOR: &str = "#87f408";

/// Overlay height in pixels for a day's contribution count.
///
/// A step function rather than a linear scale: one or two
/// contributions stay visually distinct from zero, and the bar
/// saturates at ten. Heights are rounded to whole pixels.
pub fn intensity_height(count: u32) -> u32 {
    let fifths = match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=7 => 3,
        8..=9 => 4,
        _ => 5,
    };
    ((BOX_SIZE * fifths) as f64 / 5.0).round() as u32
}

/// Tooltip text, e.g. "Friday, March 15, 2024: 12 contributions".
pub fn tooltip(date: NaiveDate, count: u32) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!(
        "{}: {} contribution{}",
        date.format("%A, %B %d, %Y"),
        count,
        plural
    )
}

/// Render the full SVG document for `year`.
pub fn render(days: &[ContributionDay], year: i32) -> String {
    let index = ContributionIndex::new(days);
    let step = BOX_SIZE + BOX_MARGIN;

    let mut elements = String::new();
    for cell in layout_year(year) {
        let x = X_OFFSET + cell.column * step;
        let y = Y_OFFSET + cell.row * step;
        let count = index.count_for(cell.date);
        let color = MONTH_COLORS[cell.month as usize];

        elements.push_str("  <g>\n");
        elements.push_str(&format!("    <title>{}</title>\n", tooltip(cell.date, count)));
        elements.push_str(&format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"2\" ry=\"2\"/>\n",
            x, y, BOX_SIZE, BOX_SIZE, color
        ));

        let overlay = intensity_height(count);
        if overlay > 0 {
            elements.push_str(&format!(
                "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"2\" ry=\"2\"/>\n",
                x,
                y + (BOX_SIZE - overlay),
                BOX_SIZE,
                overlay,
                ACCENT_COLOR
            ));
        }
        elements.push_str("  </g>\n");
    }

    let width = X_OFFSET * 2 + column_count(year) * step;
    let height = Y_OFFSET * 2 + ROWS * step;

    format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n{}</svg>\n",
        width, height, elements
    )
}
