//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns state into a
//! [`UIViewModel`], then the components draw it into a string. Nothing here
//! touches the terminal; the binary prints the returned frame.

use crate::app::state::LIST_CHROME_ROWS;
use crate::app::AppState;
use crate::storage::KeyValueStore;
use crate::ui::components::{self, BOTTOM_ROWS};
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders a full-screen ANSI frame of exactly `rows` lines when the content
/// fits.
pub fn render<S: KeyValueStore>(state: &AppState<S>, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders the current view without colors, footer or padding, listing every
/// visible launch. Used by the one-shot commands.
pub fn render_plain<S: KeyValueStore>(state: &AppState<S>, cols: usize) -> String {
    let rows = state.filtered_launches.len() + LIST_CHROME_ROWS;
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut canvas = Canvas::new(&state.theme, cols, false);
    components::render_body(&mut canvas, &viewmodel);
    canvas.finish()
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new(theme, cols, true);

    components::render_body(&mut canvas, vm);
    while canvas.lines() + BOTTOM_ROWS < rows {
        canvas.newline();
    }
    components::render_bottom(&mut canvas, vm);

    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{LoadState, ViewMode};
    use crate::domain::{Launch, Rocket};
    use crate::storage::{FavoritesStore, MemoryStore};
    use std::time::Duration;

    fn loaded_state() -> AppState<MemoryStore> {
        let favorites = FavoritesStore::load(MemoryStore::default());
        let mut state = AppState::new(favorites, Theme::default(), Duration::from_millis(300));

        let mut crs = Launch::new("crs20", "CRS-20", "2020-03-07T04:50:31.000Z");
        crs.flight_number = 91;
        crs.success = Some(true);
        crs.rocket = "falcon9".to_string();
        crs.details = Some("SpaceX's 20th and final Crew Resupply Mission.".to_string());
        let mut demo = Launch::new("demo2", "Crew Dragon Demo-2", "2020-05-30T19:22:00.000Z");
        demo.flight_number = 94;
        demo.success = Some(true);

        state.launches = vec![crs, demo];
        state.load_state = LoadState::Ready;
        state.apply_filters();
        state
    }

    #[test]
    fn full_frame_fills_the_screen() {
        let state = loaded_state();
        let frame = render(&state, 24, 100);

        assert_eq!(frame.lines().count(), 24);
        assert!(frame.contains("SpaceX Mission Explorer"));
        assert!(frame.contains("Crew Dragon Demo-2"));
        assert!(frame.contains("q: quit"));
    }

    #[test]
    fn plain_list_has_no_escapes() {
        let state = loaded_state();
        let out = render_plain(&state, 100);

        assert!(!out.contains('\u{001b}'));
        assert!(out.contains("Showing 2 of 2 launches"));
        assert!(out.contains("MISSION"));
        assert!(out.contains("#91"));
        // newest first
        let demo = out.find("Crew Dragon Demo-2").unwrap_or(usize::MAX);
        let crs = out.find("CRS-20").unwrap_or(0);
        assert!(demo < crs);
    }

    #[test]
    fn detail_shows_rocket_once_loaded() {
        let mut state = loaded_state();
        state.view_mode = ViewMode::Detail {
            launch_id: "crs20".to_string(),
        };
        state.pending_rocket = Some("falcon9".to_string());
        assert!(render_plain(&state, 80).contains("Loading rocket details..."));

        let rocket = Rocket {
            id: "falcon9".to_string(),
            name: "Falcon 9".to_string(),
            cost_per_launch: 50_000_000,
            ..Rocket::default()
        };
        state.rockets.insert("falcon9".to_string(), rocket);
        state.pending_rocket = None;

        let out = render_plain(&state, 80);
        assert!(out.contains("Mission Success"));
        assert!(out.contains("Crew Resupply Mission."));
        assert!(out.contains("$50,000,000"));
        assert!(!out.contains("MISSION"));
    }

    #[test]
    fn failed_load_renders_retry_hint() {
        let mut state = loaded_state();
        state.launches.clear();
        state.load_state = LoadState::Failed("Data source error: timeout".to_string());
        state.apply_filters();

        let out = render_plain(&state, 80);
        assert!(out.contains("Failed to load SpaceX launches."));
        assert!(out.contains("Press r to retry."));
    }
}
