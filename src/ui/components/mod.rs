//! UI components, each drawing one part of the frame into a [`Canvas`].
//!
//! # Components
//!
//! - [`header`]: title bar and results summary
//! - [`search`]: filter bar
//! - [`table`]: launch list
//! - [`detail`]: single-launch view
//! - [`empty`]: message shown instead of the list
//! - [`footer`]: status line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Filter bar]          list and empty views only
//! [Summary]
//! [Column headings]     list view only
//! [Rows | Detail | Empty message]
//! [Blank padding]
//! [Status]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::Canvas;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::{render_footer, render_status};
use header::{render_header, render_summary};
use search::render_filter_bar;
use table::{render_table_headers, render_table_rows};

/// Lines drawn by [`render_bottom`].
pub const BOTTOM_ROWS: usize = 3;

/// Renders everything above the status line.
pub fn render_body(canvas: &mut Canvas<'_>, vm: &UIViewModel) {
    let border = canvas.theme().colors.border.as_str();

    render_header(canvas, &vm.header);
    canvas.rule(border);

    if let Some(detail) = &vm.detail {
        render_detail(canvas, detail);
        return;
    }

    render_filter_bar(canvas, &vm.filter_bar);
    render_summary(canvas, &vm.header);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(canvas, empty);
        return;
    }

    render_table_headers(canvas, &vm.display_items);
    render_table_rows(canvas, &vm.display_items);
}

/// Renders the status line, a border and the footer.
pub fn render_bottom(canvas: &mut Canvas<'_>, vm: &UIViewModel) {
    let border = canvas.theme().colors.border.as_str();

    render_status(canvas, vm.status.as_deref());
    canvas.rule(border);
    render_footer(canvas, &vm.footer);
}
