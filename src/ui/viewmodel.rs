//! View model types representing renderable UI state.
//!
//! View models are computed by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by the renderer. They hold display-ready strings and flags only,
//! no business logic.

use crate::domain::LaunchOutcome;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    pub filter_bar: FilterBarInfo,

    /// Launch rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Set when the detail view is open; replaces the list.
    pub detail: Option<DetailInfo>,

    /// Set when there is nothing to list; replaces the list.
    pub empty_state: Option<EmptyState>,

    /// One-line notice, e.g. a failed favorites write.
    pub status: Option<String>,

    pub footer: FooterInfo,
}

/// One row of the launch list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    /// Local launch time, `dd/mm/yyyy, HH:MM:SS` or `TBD`.
    pub date: String,
    pub flight_number: u32,
    pub outcome: LaunchOutcome,
    pub is_favorite: bool,
    pub is_selected: bool,
    /// Character ranges of `name` matching the applied search.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Title and results summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// "Showing X of Y launches ..." line; empty while loading.
    pub summary: String,
}

/// Current filter criteria as shown above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Search text as typed.
    pub query: String,
    /// `true` while typed text has not been applied yet.
    pub pending: bool,
    pub year: String,
    pub successful_only: bool,
    pub favorites_only: bool,
    pub favorite_count: usize,
}

/// Detail view of one launch.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailInfo {
    pub name: String,
    pub outcome: LaunchOutcome,
    pub flight_number: u32,
    pub is_favorite: bool,
    /// Long local date, or `Date TBD`.
    pub date: String,
    pub details: Option<String>,
    pub rocket: RocketPanel,
    /// `(label, url)` pairs.
    pub links: Vec<(String, String)>,
    pub patch: Option<String>,
}

/// Rocket section of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum RocketPanel {
    Loading,
    Loaded(RocketInfo),
    /// Fetch failed or the launch has no rocket; the section is omitted.
    Unavailable,
}

/// Display-ready rocket fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RocketInfo {
    pub name: String,
    pub rocket_type: String,
    pub company: String,
    /// e.g. `97%`.
    pub success_rate: String,
    /// e.g. `$50,000,000`.
    pub cost: String,
    pub description: String,
}

/// Message shown instead of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Keybinding hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
