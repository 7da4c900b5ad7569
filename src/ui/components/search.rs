//! Filter bar: search box plus the year, successful-only and favorites-only
//! toggles.
//!
//! ```text
//!  Search: starlink… │ Year: 2021 │ [x] Successful │ [ ] Favorites (3)
//! ```
//!
//! A trailing `…` marks typed text that the debouncer has not applied yet.

use crate::ui::helpers::{truncate, Canvas};
use crate::ui::viewmodel::FilterBarInfo;

const SEPARATOR: &str = " │ ";

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Renders the filter bar on a single line.
pub fn render_filter_bar(canvas: &mut Canvas<'_>, bar: &FilterBarInfo) {
    let colors = &canvas.theme().colors;
    let (border, normal, dim) = (
        colors.search_bar_border.clone(),
        colors.text_normal.clone(),
        colors.text_dim.clone(),
    );

    let toggles = format!(
        "Year: {}{SEPARATOR}{} Successful{SEPARATOR}{} Favorites ({})",
        bar.year,
        checkbox(bar.successful_only),
        checkbox(bar.favorites_only),
        bar.favorite_count,
    );

    let query = if bar.query.is_empty() {
        "type /text to search".to_string()
    } else if bar.pending {
        format!("{}…", bar.query)
    } else {
        bar.query.clone()
    };

    let room = canvas
        .cols()
        .saturating_sub(" Search: ".len() + SEPARATOR.chars().count() + toggles.chars().count());
    let query = truncate(&query, room.max(8));

    canvas.fg(&border).text(" Search: ");
    if bar.query.is_empty() {
        canvas.fg(&dim);
    } else {
        canvas.fg(&normal);
    }
    canvas.text(&query).fg(&border).text(SEPARATOR).fg(&normal).text(&toggles);
    canvas.newline();
}
