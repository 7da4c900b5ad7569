//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for one explorer session. It
//! separates core data (fetched launches, favorites, filter criteria) from
//! derived state (the filtered list and the selection), and recomputes the
//! derived part through [`AppState::apply_filters`] whenever an input changes.
//!
//! # State Components
//!
//! - **Launches**: every launch from the last successful fetch
//! - **Filtered Launches**: output of [`visible`] for the current criteria
//! - **Filter**: search text as typed, year, success and favorites toggles
//! - **Applied Search**: the debounced search text actually filtering the list
//! - **Favorites**: the persisted favorites set
//! - **Rockets**: rocket details fetched this session, keyed by rocket id
//!
//! # Example
//!
//! ```rust
//! use spacex_explorer::app::AppState;
//! use spacex_explorer::storage::{FavoritesStore, MemoryStore};
//! use spacex_explorer::ui::Theme;
//! use std::time::Duration;
//!
//! let favorites = FavoritesStore::load(MemoryStore::default());
//! let mut state = AppState::new(favorites, Theme::default(), Duration::from_millis(300));
//! state.apply_filters();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.display_items.is_empty());
//! ```

use super::debounce::Debouncer;
use super::filter::{visible, FilterState};
use super::modes::{LoadState, ViewMode};
use crate::domain::{Launch, Rocket};
use crate::storage::{FavoritesStore, KeyValueStore};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, RocketInfo,
    RocketPanel, UIViewModel,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Application title shown in the header.
pub const APP_TITLE: &str = "SpaceX Mission Explorer";

/// Rows taken by everything except list rows: title, border, filter bar,
/// summary, column headers, status line, border, footer.
pub const LIST_CHROME_ROWS: usize = 8;

/// Longest launch name shown in the list before truncation.
pub const NAME_COLUMN_WIDTH: usize = 36;

const LIST_KEYS: &str = "/: search  y: year  s: success  f: favs  j/k: move  *: star  o: open  r: refresh  q: quit";
const DETAIL_KEYS: &str = "*: favorite  b: back  q: quit";

/// Central application state container.
#[derive(Debug)]
pub struct AppState<S: KeyValueStore> {
    /// Every launch from the last successful fetch, in source order.
    pub launches: Vec<Launch>,

    /// Launches passing the current filters, newest first.
    pub filtered_launches: Vec<Launch>,

    /// Zero-based index into `filtered_launches`.
    pub selected_index: usize,

    /// Filter criteria. `filter.search` is the text as typed.
    pub filter: FilterState,

    /// Search text currently applied to the list.
    pub applied_search: String,

    search: Debouncer<String>,

    pub favorites: FavoritesStore<S>,

    pub view_mode: ViewMode,

    pub load_state: LoadState,

    /// Rockets fetched this session.
    pub rockets: HashMap<String, Rocket>,

    /// Rocket id with a fetch in flight.
    pub pending_rocket: Option<String>,

    /// One-line notice for the user, cleared by the next successful action.
    pub status: Option<String>,

    pub theme: Theme,
}

impl<S: KeyValueStore> AppState<S> {
    /// Creates a state with no launches, waiting for the first fetch.
    #[must_use]
    pub fn new(favorites: FavoritesStore<S>, theme: Theme, search_delay: Duration) -> Self {
        Self {
            launches: vec![],
            filtered_launches: vec![],
            selected_index: 0,
            filter: FilterState::default(),
            applied_search: String::new(),
            search: Debouncer::new(search_delay),
            favorites,
            view_mode: ViewMode::List,
            load_state: LoadState::Loading,
            rockets: HashMap::new(),
            pending_rocket: None,
            status: None,
            theme,
        }
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_launches.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_launches.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_launches.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_launches.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Launch under the cursor.
    #[must_use]
    pub fn selected_launch(&self) -> Option<&Launch> {
        self.filtered_launches.get(self.selected_index)
    }

    /// Moves the cursor to the launch with `id`. Returns `false` if it is not listed.
    pub fn select_launch(&mut self, id: &str) -> bool {
        match self.filtered_launches.iter().position(|l| l.id == id) {
            Some(index) => {
                self.selected_index = index;
                true
            }
            None => false,
        }
    }

    /// Any fetched launch by id, listed or not.
    #[must_use]
    pub fn launch_by_id(&self, id: &str) -> Option<&Launch> {
        self.launches.iter().find(|l| l.id == id)
    }

    /// Launch shown by the detail view.
    #[must_use]
    pub fn detail_launch(&self) -> Option<&Launch> {
        match &self.view_mode {
            ViewMode::Detail { launch_id } => self.launch_by_id(launch_id),
            ViewMode::List => None,
        }
    }

    /// Records typed search text; it is applied once the debounce delay passes.
    pub fn push_search(&mut self, query: String, now: Instant) {
        self.filter.search.clone_from(&query);
        self.search.push(query, now);
    }

    /// Applies the debounced search if its deadline has passed.
    ///
    /// Returns `true` whenever a pending query was consumed, even one that
    /// leaves the list unchanged.
    pub fn flush_search(&mut self, now: Instant) -> bool {
        let Some(query) = self.search.poll(now) else {
            return false;
        };
        if query == self.applied_search {
            tracing::debug!(query = %query, "debounced search unchanged");
            return true;
        }

        tracing::debug!(query = %query, "debounced search applied");
        self.applied_search = query;
        self.apply_filters();
        true
    }

    /// Applies search text immediately, dropping any pending input.
    pub fn apply_search_now(&mut self, query: &str) {
        self.search.cancel();
        self.filter.search = query.to_string();
        self.applied_search = query.to_string();
        self.apply_filters();
    }

    /// When the pending search text is due, if any.
    #[must_use]
    pub const fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Recomputes `filtered_launches` and clamps the cursor.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("apply_filters",
            total = self.launches.len(),
            applied_search_len = self.applied_search.len(),
            year = %self.filter.year
        )
        .entered();

        let criteria = FilterState {
            search: self.applied_search.clone(),
            ..self.filter.clone()
        };
        let filtered: Vec<Launch> = visible(&self.launches, &self.favorites, &criteria)
            .into_iter()
            .cloned()
            .collect();
        self.filtered_launches = filtered;

        if self.filtered_launches.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_launches.len() - 1);
        }
    }

    /// The "Showing X of Y launches" line for the applied criteria.
    #[must_use]
    pub fn summary(&self) -> String {
        self.filter.summary(
            self.filtered_launches.len(),
            self.launches.len(),
            self.favorites.count(),
            &self.applied_search,
        )
    }

    /// Computes a renderable view model for a `rows` x `cols` terminal.
    ///
    /// The list is windowed around the cursor so the selected row stays in
    /// view. Pass `usize::MAX` rows to get every row.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let mut vm = UIViewModel {
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            display_items: vec![],
            selected_index: 0,
            detail: None,
            empty_state: None,
            status: self.status.clone(),
            footer: self.compute_footer(),
        };

        if let Some(launch) = self.detail_launch() {
            vm.detail = Some(self.compute_detail(launch));
            return vm;
        }

        if let Some(empty) = self.compute_empty_state() {
            vm.empty_state = Some(empty);
            return vm;
        }

        let available_rows = rows.saturating_sub(LIST_CHROME_ROWS).max(1);
        let total = self.filtered_launches.len();

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = visible_start.saturating_add(available_rows).min(total);
        if visible_end - visible_start < available_rows && total >= available_rows {
            visible_start = visible_end - available_rows;
        }

        let name_width = NAME_COLUMN_WIDTH.min(cols.saturating_sub(40).max(12));
        vm.display_items = self.filtered_launches[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, launch)| {
                self.compute_display_item(launch, visible_start + offset, name_width)
            })
            .collect();
        vm.selected_index = self.selected_index - visible_start;
        vm
    }

    fn compute_display_item(&self, launch: &Launch, absolute_idx: usize, name_width: usize) -> DisplayItem {
        let name = truncate(&launch.name, name_width);
        let highlight_ranges = match_ranges(&name, &self.applied_search);

        DisplayItem {
            name,
            date: launch.display_date(),
            flight_number: launch.flight_number,
            outcome: launch.outcome(),
            is_favorite: self.favorites.is_favorite(&launch.id),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_detail(&self, launch: &Launch) -> DetailInfo {
        let rocket = if launch.rocket.is_empty() {
            RocketPanel::Unavailable
        } else if let Some(rocket) = self.rockets.get(&launch.rocket) {
            RocketPanel::Loaded(RocketInfo {
                name: rocket.name.clone(),
                rocket_type: rocket.rocket_type.clone(),
                company: rocket.company.clone(),
                success_rate: rocket.success_rate_label(),
                cost: rocket.cost_label(),
                description: rocket.description.clone(),
            })
        } else if self.pending_rocket.as_deref() == Some(launch.rocket.as_str()) {
            RocketPanel::Loading
        } else {
            RocketPanel::Unavailable
        };

        DetailInfo {
            name: launch.name.clone(),
            outcome: launch.outcome(),
            flight_number: launch.flight_number,
            is_favorite: self.favorites.is_favorite(&launch.id),
            date: launch.display_date_long(),
            details: launch.details.clone(),
            rocket,
            links: launch
                .links
                .external()
                .into_iter()
                .map(|(label, url)| (label.to_string(), url.to_string()))
                .collect(),
            patch: launch.links.patch.large.clone(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let summary = match self.load_state {
            LoadState::Ready => self.summary(),
            LoadState::Loading | LoadState::Failed(_) => String::new(),
        };
        HeaderInfo {
            title: APP_TITLE.to_string(),
            summary,
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        FilterBarInfo {
            query: self.filter.search.clone(),
            pending: self.search.is_pending(),
            year: self.filter.year.to_string(),
            successful_only: self.filter.successful_only,
            favorites_only: self.filter.favorites_only,
            favorite_count: self.favorites.count(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle) = match &self.load_state {
            LoadState::Loading => (
                "Loading launches...".to_string(),
                "Fetching data from the SpaceX API".to_string(),
            ),
            LoadState::Failed(reason) => (
                "Failed to load SpaceX launches.".to_string(),
                format!("{reason}. Press r to retry."),
            ),
            LoadState::Ready if self.filtered_launches.is_empty() => {
                let subtitle = if self.filter.favorites_only {
                    "You haven't favorited any missions yet."
                } else {
                    "Try adjusting your filters to see more results."
                };
                ("No missions found".to_string(), subtitle.to_string())
            }
            LoadState::Ready => return None,
        };
        Some(EmptyState { message, subtitle })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.view_mode {
            ViewMode::List => LIST_KEYS,
            ViewMode::Detail { .. } => DETAIL_KEYS,
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::YearFilter;
    use crate::storage::MemoryStore;

    fn state_with(launches: Vec<Launch>) -> AppState<MemoryStore> {
        let favorites = FavoritesStore::load(MemoryStore::default());
        let mut state = AppState::new(favorites, Theme::default(), Duration::from_millis(300));
        state.launches = launches;
        state.load_state = LoadState::Ready;
        state.apply_filters();
        state
    }

    fn numbered(count: usize) -> Vec<Launch> {
        (0..count)
            .map(|i| {
                let mut launch = Launch::new(format!("id{i}"), format!("Mission {i}"), format!("{}-01-01", 2006 + i));
                launch.flight_number = u32::try_from(i + 1).unwrap_or(u32::MAX);
                launch
            })
            .collect()
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with(numbered(3));
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn filtering_clamps_selection() {
        let mut state = state_with(numbered(5));
        state.selected_index = 4;
        state.filter.year = YearFilter::Year("2010".to_string());
        state.apply_filters();

        assert_eq!(state.filtered_launches.len(), 1);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_launch().map(|l| l.id.as_str()), Some("id4"));
    }

    #[test]
    fn typed_search_waits_for_debounce() {
        let mut state = state_with(numbered(12));
        let t0 = Instant::now();

        state.push_search("Mission 1".to_string(), t0);
        assert_eq!(state.filtered_launches.len(), 12);
        assert!(!state.flush_search(t0 + Duration::from_millis(299)));

        assert!(state.flush_search(t0 + Duration::from_millis(300)));
        // "Mission 1", "Mission 10", "Mission 11"
        assert_eq!(state.filtered_launches.len(), 3);
        assert_eq!(state.search_deadline(), None);
    }

    #[test]
    fn unchanged_debounced_search_still_redraws() {
        let mut state = state_with(numbered(12));
        let t0 = Instant::now();
        state.apply_search_now("Mission 1");

        state.push_search("Mission 10".to_string(), t0);
        state.push_search("Mission 1".to_string(), t0 + Duration::from_millis(100));
        assert!(state.compute_viewmodel(24, 100).filter_bar.pending);

        assert!(state.flush_search(t0 + Duration::from_millis(400)));
        assert!(!state.compute_viewmodel(24, 100).filter_bar.pending);
        assert_eq!(state.filtered_launches.len(), 3);
        assert!(!state.flush_search(t0 + Duration::from_millis(800)));
    }

    #[test]
    fn footer_hints_fit_the_default_width() {
        let mut state = state_with(numbered(1));
        let list = state.compute_viewmodel(24, 100).footer.keybindings;
        assert!(list.chars().count() <= 90, "{list}");
        assert!(list.ends_with("q: quit"));

        state.view_mode = ViewMode::Detail {
            launch_id: state.filtered_launches[0].id.clone(),
        };
        assert!(state.compute_viewmodel(24, 100).footer.keybindings.contains("b: back"));
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = state_with(numbered(30));
        state.selected_index = 20;

        let vm = state.compute_viewmodel(LIST_CHROME_ROWS + 10, 120);
        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].name, state.filtered_launches[20].name);
    }

    #[test]
    fn empty_states_follow_load_state() {
        let mut state = state_with(vec![]);
        state.load_state = LoadState::Loading;
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("Loading launches...".to_string()));

        state.load_state = LoadState::Ready;
        state.filter.favorites_only = true;
        state.apply_filters();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.map(|e| e.subtitle),
            Some("You haven't favorited any missions yet.".to_string())
        );
    }

    #[test]
    fn summary_uses_applied_search_not_typed_text() {
        let mut state = state_with(numbered(3));
        state.push_search("Mission 2".to_string(), Instant::now());
        assert_eq!(state.summary(), "Showing 3 of 3 launches");

        state.apply_search_now("Mission 2");
        assert_eq!(state.summary(), r#"Showing 1 of 3 launches matching "Mission 2""#);
    }
}
