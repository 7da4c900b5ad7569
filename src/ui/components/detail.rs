//! Detail view of a single launch.

use crate::ui::helpers::{wrap, Canvas};
use crate::ui::viewmodel::{DetailInfo, RocketPanel};

const INDENT: &str = "  ";

fn section_title(canvas: &mut Canvas<'_>, title: &str) {
    let fg = &canvas.theme().colors.header_fg;
    canvas.newline();
    canvas.bold().fg(fg).text(INDENT).text(title).newline();
}

fn paragraph(canvas: &mut Canvas<'_>, text: &str, color: &str) {
    let width = canvas.cols().saturating_sub(INDENT.len() * 2);
    for line in wrap(text, width) {
        canvas.fg(color).text(INDENT).text(&line).newline();
    }
}

fn field(canvas: &mut Canvas<'_>, label: &str, value: &str) {
    let colors = &canvas.theme().colors;
    canvas
        .fg(&colors.text_dim)
        .text(INDENT)
        .text(label)
        .text(": ")
        .fg(&colors.text_normal)
        .text(value)
        .newline();
}

/// Renders the launch name, outcome, date, description, rocket and links.
pub fn render_detail(canvas: &mut Canvas<'_>, detail: &DetailInfo) {
    let theme = canvas.theme();
    let colors = &theme.colors;

    canvas.newline();
    canvas.bold().fg(&colors.text_normal).text(INDENT).text(&detail.name);
    if detail.is_favorite {
        canvas.fg(&colors.favorite_fg).text(" ★");
    }
    canvas.newline();

    canvas
        .text(INDENT)
        .fg(theme.outcome_color(detail.outcome))
        .text(detail.outcome.detail_label())
        .fg(&colors.text_dim)
        .text(&format!("  Flight #{}", detail.flight_number))
        .newline();
    field(canvas, "Date", &detail.date);

    section_title(canvas, "Mission Details");
    match &detail.details {
        Some(details) if !details.trim().is_empty() => paragraph(canvas, details, &colors.text_normal),
        _ => paragraph(canvas, "No details available for this mission.", &colors.text_dim),
    }

    match &detail.rocket {
        RocketPanel::Loaded(rocket) => {
            section_title(canvas, "Rocket");
            field(canvas, "Name", &rocket.name);
            field(canvas, "Type", &rocket.rocket_type);
            field(canvas, "Company", &rocket.company);
            field(canvas, "Success Rate", &rocket.success_rate);
            field(canvas, "Cost per Launch", &rocket.cost);
            if !rocket.description.is_empty() {
                paragraph(canvas, &rocket.description, &colors.text_dim);
            }
        }
        RocketPanel::Loading => {
            section_title(canvas, "Rocket");
            paragraph(canvas, "Loading rocket details...", &colors.text_dim);
        }
        RocketPanel::Unavailable => {}
    }

    if !detail.links.is_empty() || detail.patch.is_some() {
        section_title(canvas, "Links");
        for (label, url) in &detail.links {
            field(canvas, label, url);
        }
        if let Some(patch) = &detail.patch {
            field(canvas, "Mission Patch", patch);
        }
    }
}
