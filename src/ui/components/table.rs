//! Launch list rendered as a table.
//!
//! ```text
//!    MISSION              DATE                   FLIGHT  STATUS
//!  ★ Starlink-5           04/01/2022, 13:49:00   #134    Success
//! ```
//!
//! The selected row is drawn in the selection colors across the full width.
//! Search matches inside the mission name are highlighted on other rows.

use crate::ui::helpers::Canvas;
use crate::ui::viewmodel::DisplayItem;

const DATE_WIDTH: usize = 22;
const FLIGHT_WIDTH: usize = 8;
/// Star column, including the leading margin.
const MARKER_WIDTH: usize = 3;
const NAME_GAP: usize = 2;

/// Width of the mission column: longest name on screen, at least the heading.
fn name_width(items: &[DisplayItem]) -> usize {
    items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("MISSION".len())
}

/// Renders the bold column headings.
pub fn render_table_headers(canvas: &mut Canvas<'_>, items: &[DisplayItem]) {
    let width = name_width(items) + NAME_GAP;
    let fg = &canvas.theme().colors.header_fg;

    canvas.bold().fg(fg).text(&format!(
        "{:MARKER_WIDTH$}{:<width$}{:<DATE_WIDTH$}{:<FLIGHT_WIDTH$}STATUS",
        "", "MISSION", "DATE", "FLIGHT"
    ));
    canvas.newline();
}

/// Renders every row in `items`.
pub fn render_table_rows(canvas: &mut Canvas<'_>, items: &[DisplayItem]) {
    let width = name_width(items);
    for item in items {
        render_table_row(canvas, item, width);
    }
}

fn render_table_row(canvas: &mut Canvas<'_>, item: &DisplayItem, name_width: usize) {
    let theme = canvas.theme();
    let colors = &theme.colors;
    let base_fg = if item.is_selected { &colors.selection_fg } else { &colors.text_normal };

    if item.is_selected {
        canvas.fg(&colors.selection_fg).bg(&colors.selection_bg);
    } else {
        canvas.fg(&colors.text_normal);
    }

    if item.is_favorite {
        if !item.is_selected {
            canvas.fg(&colors.favorite_fg);
        }
        canvas.text(" ★ ").fg(base_fg);
    } else {
        canvas.pad(MARKER_WIDTH);
    }

    canvas.highlighted(&item.name, &item.highlight_ranges, item.is_selected);
    if item.is_selected {
        // highlighted() resets styles after each match; restore the selection
        canvas.fg(&colors.selection_fg).bg(&colors.selection_bg);
    }
    let name_len = item.name.chars().count();
    canvas.pad(name_width.saturating_sub(name_len) + NAME_GAP);

    let flight = format!("#{}", item.flight_number);
    canvas.text(&format!("{:<DATE_WIDTH$}{flight:<FLIGHT_WIDTH$}", item.date));

    if !item.is_selected {
        canvas.fg(theme.outcome_color(item.outcome));
    }
    let outcome = item.outcome.to_string();
    canvas.text(&outcome);

    let used = MARKER_WIDTH
        + name_width
        + NAME_GAP
        + DATE_WIDTH.max(item.date.chars().count())
        + FLIGHT_WIDTH.max(flight.len())
        + outcome.len();
    let fill = canvas.cols().saturating_sub(used);
    canvas.pad(fill);
    canvas.newline();
}
