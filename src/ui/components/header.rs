//! Title bar and results summary.

use crate::ui::helpers::{truncate, Canvas};
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered, bold title line.
pub fn render_header(canvas: &mut Canvas<'_>, header: &HeaderInfo) {
    let colors = &canvas.theme().colors;
    let fg = colors.header_fg.clone();
    let bg = colors.header_bg.clone();

    canvas.bold().fg(&fg);
    if let Some(bg) = &bg {
        canvas.bg(bg);
    }
    canvas.centered(&header.title);
}

/// Renders the "Showing X of Y launches" line, blank while nothing is loaded.
pub fn render_summary(canvas: &mut Canvas<'_>, header: &HeaderInfo) {
    let dim = canvas.theme().colors.text_dim.clone();
    let summary = truncate(&header.summary, canvas.cols().saturating_sub(1));
    canvas.fg(&dim).text(" ").text(&summary).newline();
}
