//! Launch filtering and ranking.
//!
//! [`visible`] derives the list the user sees from three inputs: every fetched
//! launch, the favorites set and the current [`FilterState`]. It is a pure
//! function and is simply recomputed whenever one of its inputs changes.
//!
//! # Filtering Algorithm
//!
//! 1. **Text**: case-insensitive substring match on the launch name
//! 2. **Year**: four-digit year of the canonical UTC timestamp
//! 3. **Success**: only launches whose outcome is exactly `Success`
//! 4. **Favorites**: only launches in the favorites set
//! 5. **Ranking**: canonical timestamp, newest first, stable on ties
//!
//! The filters are conjunctive. Launches with an unparseable timestamp never
//! match a specific year and sort after every dated launch.

use crate::domain::{Launch, LaunchOutcome};
use crate::storage::FavoriteLookup;
use std::cmp::Ordering;
use std::fmt;

/// First year offered by the year selector.
pub const FIRST_LAUNCH_YEAR: i32 = 2006;

/// Year criterion of the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum YearFilter {
    #[default]
    All,
    /// A four-digit year, compared as a string against [`Launch::year`].
    Year(String),
}

impl YearFilter {
    /// Parses user input: `all` (any case) or empty selects every year.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Year(input.to_string())
        }
    }

    fn matches(&self, launch: &Launch) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => launch.year().is_some_and(|y| y == *year),
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Year(year) => f.write_str(year),
        }
    }
}

/// User-selected filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub year: YearFilter,
    pub successful_only: bool,
    pub favorites_only: bool,
}

impl FilterState {
    /// Builds the "Showing X of Y launches" line shown above the list.
    ///
    /// `search` is the debounced search text actually applied, which can lag
    /// behind [`FilterState::search`] while the user is typing.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacex_explorer::app::filter::{FilterState, YearFilter};
    ///
    /// let filter = FilterState { year: YearFilter::Year("2020".into()), ..Default::default() };
    /// assert_eq!(filter.summary(3, 187, 0, "crew"), r#"Showing 3 of 187 launches from 2020 matching "crew""#);
    /// ```
    #[must_use]
    pub fn summary(&self, shown: usize, total: usize, favorite_count: usize, search: &str) -> String {
        let mut line = format!("Showing {shown} of {total} launches");
        if self.favorites_only {
            line.push_str(&format!(" from your {favorite_count} favorites"));
        }
        if self.successful_only {
            line.push_str(" (successful only)");
        }
        if let YearFilter::Year(year) = &self.year {
            line.push_str(&format!(" from {year}"));
        }
        if !search.is_empty() {
            line.push_str(&format!(" matching \"{search}\""));
        }
        line
    }
}

/// Returns the launches passing every filter, newest first.
///
/// # Examples
///
/// ```
/// use spacex_explorer::app::filter::{visible, FilterState};
/// use spacex_explorer::domain::Launch;
/// use std::collections::HashSet;
///
/// let launches = vec![
///     Launch::new("1", "Starlink-6", "2021-01-01"),
///     Launch::new("2", "Starlink-5", "2022-01-01"),
/// ];
/// let shown = visible(&launches, &HashSet::<String>::new(), &FilterState::default());
/// assert_eq!(shown[0].name, "Starlink-5");
/// ```
#[must_use]
pub fn visible<'a, F>(launches: &'a [Launch], favorites: &F, filter: &FilterState) -> Vec<&'a Launch>
where
    F: FavoriteLookup + ?Sized,
{
    let _span = tracing::debug_span!("visible_launches",
        total = launches.len(),
        search_len = filter.search.len(),
        year = %filter.year,
        successful_only = filter.successful_only,
        favorites_only = filter.favorites_only
    ).entered();

    let needle = filter.search.to_lowercase();

    let mut shown: Vec<(&Launch, Option<i64>)> = launches
        .iter()
        .filter(|launch| needle.is_empty() || launch.name.to_lowercase().contains(&needle))
        .filter(|launch| filter.year.matches(launch))
        .filter(|launch| !filter.successful_only || launch.outcome() == LaunchOutcome::Success)
        .filter(|launch| !filter.favorites_only || favorites.is_favorite(&launch.id))
        .map(|launch| (launch, launch.utc_timestamp().map(|dt| dt.timestamp_millis())))
        .collect();

    // sort_by is stable, so equal timestamps keep their input order.
    shown.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    tracing::debug!(visible = shown.len(), "filters applied");
    shown.into_iter().map(|(launch, _)| launch).collect()
}

/// Years offered by the year selector, newest first, down to 2006.
///
/// # Examples
///
/// ```
/// use spacex_explorer::app::filter::available_years;
///
/// assert_eq!(available_years(2008), vec!["2008", "2007", "2006"]);
/// ```
#[must_use]
pub fn available_years(current_year: i32) -> Vec<String> {
    (FIRST_LAUNCH_YEAR..=current_year)
        .rev()
        .map(|year| year.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn launch(id: &str, name: &str, date: &str, success: Option<bool>) -> Launch {
        let mut launch = Launch::new(id, name, date);
        launch.success = success;
        launch
    }

    fn starlinks() -> Vec<Launch> {
        vec![
            launch("s5", "Starlink-5", "2022-01-01", Some(true)),
            launch("s6", "Starlink-6", "2021-01-01", Some(false)),
        ]
    }

    fn names<'a>(launches: &[&'a Launch]) -> Vec<&'a str> {
        launches.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn search_and_success_filters_combine() {
        let launches = starlinks();
        let filter = FilterState {
            search: "starlink".to_string(),
            year: YearFilter::All,
            successful_only: true,
            favorites_only: false,
        };

        let shown = visible(&launches, &HashSet::<String>::new(), &filter);
        assert_eq!(names(&shown), vec!["Starlink-5"]);
    }

    #[test]
    fn no_filters_orders_newest_first() {
        let mut launches = starlinks();
        launches.reverse();

        let shown = visible(&launches, &HashSet::<String>::new(), &FilterState::default());
        assert_eq!(names(&shown), vec!["Starlink-5", "Starlink-6"]);
    }

    #[test]
    fn search_is_case_insensitive_both_ways() {
        let launches = vec![launch("1", "CRS-20", "2020-03-07", Some(true))];
        let filter = FilterState { search: "cRs".to_string(), ..Default::default() };
        assert_eq!(visible(&launches, &HashSet::<String>::new(), &filter).len(), 1);

        let filter = FilterState { search: "demo".to_string(), ..Default::default() };
        assert!(visible(&launches, &HashSet::<String>::new(), &filter).is_empty());
    }

    #[test]
    fn year_filter_uses_utc_year_and_skips_undated_launches() {
        let mut late = launch("late", "Late Night", "2021-01-01T03:00:00.000Z", Some(true));
        late.date_local = "2020-12-31T22:00:00-05:00".to_string();
        let launches = vec![
            late,
            launch("undated", "Undated", "TBD", None),
            launch("old", "Old", "2020-06-01", Some(true)),
        ];

        let filter = FilterState { year: YearFilter::Year("2020".to_string()), ..Default::default() };
        assert_eq!(names(&visible(&launches, &HashSet::<String>::new(), &filter)), vec!["Old"]);

        let all = visible(&launches, &HashSet::<String>::new(), &FilterState::default());
        assert_eq!(names(&all), vec!["Late Night", "Old", "Undated"]);
    }

    #[test]
    fn upcoming_and_unknown_never_count_as_successful() {
        let mut upcoming = launch("u", "Upcoming", "2030-01-01", Some(true));
        upcoming.upcoming = true;
        let launches = vec![upcoming, launch("n", "Unknown", "2019-01-01", None)];

        let filter = FilterState { successful_only: true, ..Default::default() };
        assert!(visible(&launches, &HashSet::<String>::new(), &filter).is_empty());
    }

    #[test]
    fn favorites_filter_consults_lookup() {
        let launches = starlinks();
        let favorites: HashSet<String> = ["s6".to_string()].into_iter().collect();

        let filter = FilterState { favorites_only: true, ..Default::default() };
        assert_eq!(names(&visible(&launches, &favorites, &filter)), vec!["Starlink-6"]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let launches = vec![
            launch("a", "Alpha", "2020-01-01", None),
            launch("b", "Bravo", "2020-01-01T00:00:00Z", None),
            launch("c", "Charlie", "2021-01-01", None),
        ];
        let shown = visible(&launches, &HashSet::<String>::new(), &FilterState::default());
        assert_eq!(names(&shown), vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn summary_mentions_every_active_filter() {
        let filter = FilterState {
            search: "star".to_string(),
            year: YearFilter::All,
            successful_only: true,
            favorites_only: true,
        };
        assert_eq!(
            filter.summary(1, 10, 4, "star"),
            r#"Showing 1 of 10 launches from your 4 favorites (successful only) matching "star""#
        );
        assert_eq!(FilterState::default().summary(0, 0, 0, ""), "Showing 0 of 0 launches");
    }

    #[test]
    fn year_filter_parsing() {
        assert_eq!(YearFilter::parse("ALL"), YearFilter::All);
        assert_eq!(YearFilter::parse(" "), YearFilter::All);
        assert_eq!(YearFilter::parse("2019"), YearFilter::Year("2019".to_string()));
    }
}
