//! Message shown in place of the launch list.

use crate::ui::helpers::Canvas;
use crate::ui::viewmodel::EmptyState;

/// Blank lines above the message.
const TOP_MARGIN: usize = 3;

/// Renders a centered message with a dimmed subtitle.
pub fn render_empty_state(canvas: &mut Canvas<'_>, empty: &EmptyState) {
    for _ in 0..TOP_MARGIN {
        canvas.newline();
    }

    let colors = &canvas.theme().colors;
    let (fg, dim) = (colors.empty_state_fg.clone(), colors.text_dim.clone());

    canvas.bold().fg(&fg).centered(&empty.message);
    canvas.dim().fg(&dim).centered(&empty.subtitle);
}
