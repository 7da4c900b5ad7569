//! Event handling and state transitions.
//!
//! [`handle_event`] is the single entry point for everything that changes
//! [`AppState`]: user commands, debounce ticks and worker responses. It
//! mutates the state and returns whether a redraw is needed together with the
//! [`Action`]s the event loop must carry out.
//!
//! ```text
//! input / tick / worker ──▶ Event ──▶ handle_event ──▶ (render?, actions)
//!                                           │                   │
//!                                           ▼                   ▼
//!                                       AppState          worker requests
//! ```

use crate::app::filter::YearFilter;
use crate::app::{Action, AppState, LoadState, ViewMode};
use crate::domain::error::Result;
use crate::storage::KeyValueStore;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::time::Instant;

/// Things that can happen to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Initial fetch of the launch list.
    Load,
    /// Refetch the launch list, bypassing the cache.
    Refresh,

    /// Search text typed at `at`; applied after the debounce delay.
    SearchInput { query: String, at: Instant },
    /// Search text applied immediately.
    SearchSubmit(String),
    ClearSearch,
    /// Clock tick used to flush debounced search text.
    Tick(Instant),

    SetYear(YearFilter),
    ToggleSuccessfulOnly,
    ToggleFavoritesOnly,

    /// Toggles the favorite flag of the selected or displayed launch.
    ToggleFavorite,

    KeyDown,
    KeyUp,
    OpenDetails,
    CloseDetails,
    Quit,

    WorkerResponse(WorkerResponse),
}

/// Processes one event.
///
/// Returns `(render, actions)`: `render` is `true` when the visible frame
/// changed.
///
/// # Errors
///
/// Nothing in the handler is fatal today; the `Result` leaves room for
/// collaborators that can fail. Favorites write failures are reported through
/// [`AppState::status`] instead.
pub fn handle_event<S: KeyValueStore>(state: &mut AppState<S>, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = event_name(event)).entered();

    match event {
        Event::Load => {
            state.load_state = LoadState::Loading;
            Ok((true, vec![Action::PostToWorker(WorkerMessage::FetchLaunches { force: false })]))
        }
        Event::Refresh => {
            if state.load_state == LoadState::Loading {
                tracing::debug!("refresh ignored, fetch already in flight");
                return Ok((false, vec![]));
            }
            state.load_state = LoadState::Loading;
            state.status = None;
            Ok((true, vec![Action::PostToWorker(WorkerMessage::FetchLaunches { force: true })]))
        }

        Event::SearchInput { query, at } => {
            state.push_search(query.clone(), *at);
            Ok((true, vec![]))
        }
        Event::SearchSubmit(query) => {
            state.apply_search_now(query);
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.apply_search_now("");
            Ok((true, vec![]))
        }
        Event::Tick(now) => Ok((state.flush_search(*now), vec![])),

        Event::SetYear(year) => {
            if state.filter.year == *year {
                return Ok((false, vec![]));
            }
            state.filter.year = year.clone();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleSuccessfulOnly => {
            state.filter.successful_only = !state.filter.successful_only;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleFavoritesOnly => {
            state.filter.favorites_only = !state.filter.favorites_only;
            state.apply_filters();
            Ok((true, vec![]))
        }

        Event::ToggleFavorite => {
            let target = match &state.view_mode {
                ViewMode::Detail { launch_id } => Some(launch_id.clone()),
                ViewMode::List => state.selected_launch().map(|l| l.id.clone()),
            };
            let Some(id) = target else {
                tracing::debug!("no launch to favorite");
                return Ok((false, vec![]));
            };

            match state.favorites.toggle(&id) {
                Ok(now_favorite) => {
                    tracing::debug!(launch_id = %id, now_favorite, "favorite toggled");
                    state.status = None;
                    state.apply_filters();
                }
                Err(e) => {
                    tracing::warn!(launch_id = %id, error = %e, "favorite not saved");
                    state.status = Some(format!("Could not save favorites: {e}"));
                }
            }
            Ok((true, vec![]))
        }

        Event::KeyDown | Event::KeyUp => {
            if state.view_mode != ViewMode::List || state.filtered_launches.is_empty() {
                return Ok((false, vec![]));
            }
            if *event == Event::KeyDown {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::OpenDetails => open_details(state),
        Event::CloseDetails => {
            if state.view_mode == ViewMode::List {
                return Ok((false, vec![]));
            }
            state.view_mode = ViewMode::List;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::WorkerResponse(response) => Ok((handle_worker_response(state, response), vec![])),
    }
}

fn open_details<S: KeyValueStore>(state: &mut AppState<S>) -> Result<(bool, Vec<Action>)> {
    if state.view_mode != ViewMode::List {
        return Ok((false, vec![]));
    }
    let Some(launch) = state.selected_launch() else {
        return Ok((false, vec![]));
    };
    let launch_id = launch.id.clone();
    let rocket_id = launch.rocket.clone();

    tracing::debug!(launch_id = %launch_id, rocket_id = %rocket_id, "opening details");
    state.view_mode = ViewMode::Detail { launch_id };

    let mut actions = vec![];
    let cached = state.rockets.contains_key(&rocket_id);
    let in_flight = state.pending_rocket.as_deref() == Some(rocket_id.as_str());
    if !rocket_id.is_empty() && !cached && !in_flight {
        state.pending_rocket = Some(rocket_id.clone());
        actions.push(Action::PostToWorker(WorkerMessage::FetchRocket { id: rocket_id }));
    }
    Ok((true, actions))
}

fn handle_worker_response<S: KeyValueStore>(state: &mut AppState<S>, response: &WorkerResponse) -> bool {
    match response {
        WorkerResponse::LaunchesLoaded { launches } => {
            tracing::debug!(count = launches.len(), "launches loaded");
            state.launches.clone_from(launches);
            state.load_state = LoadState::Ready;
            state.apply_filters();

            if let ViewMode::Detail { launch_id } = &state.view_mode {
                if state.launch_by_id(launch_id).is_none() {
                    state.view_mode = ViewMode::List;
                }
            }
            true
        }
        WorkerResponse::LaunchesFailed { message } => {
            tracing::warn!(error = %message, "launch list unavailable");
            state.launches.clear();
            state.load_state = LoadState::Failed(message.clone());
            state.view_mode = ViewMode::List;
            state.apply_filters();
            true
        }
        WorkerResponse::RocketLoaded { rocket } => {
            tracing::debug!(rocket_id = %rocket.id, "rocket loaded");
            if state.pending_rocket.as_deref() == Some(rocket.id.as_str()) {
                state.pending_rocket = None;
            }
            state.rockets.insert(rocket.id.clone(), rocket.clone());
            state.view_mode != ViewMode::List
        }
        WorkerResponse::RocketFailed { id, message } => {
            tracing::warn!(rocket_id = %id, error = %message, "rocket unavailable");
            if state.pending_rocket.as_deref() == Some(id.as_str()) {
                state.pending_rocket = None;
            }
            state.view_mode != ViewMode::List
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Load => "load",
        Event::Refresh => "refresh",
        Event::SearchInput { .. } => "search_input",
        Event::SearchSubmit(_) => "search_submit",
        Event::ClearSearch => "clear_search",
        Event::Tick(_) => "tick",
        Event::SetYear(_) => "set_year",
        Event::ToggleSuccessfulOnly => "toggle_successful_only",
        Event::ToggleFavoritesOnly => "toggle_favorites_only",
        Event::ToggleFavorite => "toggle_favorite",
        Event::KeyDown => "key_down",
        Event::KeyUp => "key_up",
        Event::OpenDetails => "open_details",
        Event::CloseDetails => "close_details",
        Event::Quit => "quit",
        Event::WorkerResponse(_) => "worker_response",
    }
}
