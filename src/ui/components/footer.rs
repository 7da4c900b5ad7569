//! Status line and keybinding footer.

use crate::ui::helpers::{truncate, Canvas};
use crate::ui::viewmodel::FooterInfo;

/// Renders the one-line status notice, or an empty line.
pub fn render_status(canvas: &mut Canvas<'_>, status: Option<&str>) {
    if let Some(status) = status {
        let color = canvas.theme().colors.failed_fg.clone();
        let text = truncate(status, canvas.cols().saturating_sub(1));
        canvas.fg(&color).text(" ").text(&text);
    }
    canvas.newline();
}

/// Renders centered, dimmed keybinding hints.
pub fn render_footer(canvas: &mut Canvas<'_>, footer: &FooterInfo) {
    let dim = canvas.theme().colors.text_dim.clone();
    canvas.fg(&dim).centered(&footer.keybindings);
}
