//! Launch domain model and timestamp handling.
//!
//! A [`Launch`] is one record from the launches endpoint. It carries two
//! timestamps: `date_utc` is canonical and drives filtering and ordering,
//! `date_local` is the launch-site wall clock and is only ever displayed.
//! Keeping the two apart matters: a launch late on 31 December local time can
//! already belong to the next year in UTC.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Placeholder shown when a timestamp cannot be parsed.
const DATE_TBD: &str = "TBD";

/// A single launch as delivered by the launch API.
///
/// Unknown fields in the API payload are ignored; every optional part of the
/// payload defaults so that partially populated records still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub date_utc: String,
    #[serde(default)]
    pub date_local: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub upcoming: bool,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub flight_number: u32,
    /// Identifier of the rocket that flew this launch.
    #[serde(default)]
    pub rocket: String,
    #[serde(default)]
    pub links: LaunchLinks,
}

/// Result of a launch as far as the API knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchOutcome {
    /// Not flown yet. Takes precedence over any success flag.
    Upcoming,
    Success,
    Failed,
    /// Flown, but the API has no verdict.
    Unknown,
}

impl LaunchOutcome {
    /// Longer label used by the detail view.
    #[must_use]
    pub const fn detail_label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Success => "Mission Success",
            Self::Failed => "Mission Failed",
            Self::Unknown => "Status Unknown",
        }
    }
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Upcoming => "Upcoming",
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// External links attached to a launch. All of them are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LaunchLinks {
    #[serde(default)]
    pub patch: PatchLinks,
    #[serde(default)]
    pub reddit: RedditLinks,
    #[serde(default)]
    pub flickr: FlickrLinks,
    #[serde(default)]
    pub presskit: Option<String>,
    #[serde(default)]
    pub webcast: Option<String>,
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
}

/// Mission patch images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatchLinks {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Reddit threads for the launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RedditLinks {
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub launch: Option<String>,
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub recovery: Option<String>,
}

/// Flickr photo URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlickrLinks {
    #[serde(default)]
    pub small: Vec<String>,
    #[serde(default)]
    pub original: Vec<String>,
}

impl LaunchLinks {
    /// Returns the labelled links the detail view offers, skipping absent ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacex_explorer::domain::LaunchLinks;
    ///
    /// let links = LaunchLinks {
    ///     wikipedia: Some("https://en.wikipedia.org/wiki/DemoSat".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(links.external(), vec![("Wikipedia", "https://en.wikipedia.org/wiki/DemoSat")]);
    /// ```
    #[must_use]
    pub fn external(&self) -> Vec<(&'static str, &str)> {
        [
            ("Watch Webcast", self.webcast.as_deref()),
            ("Wikipedia", self.wikipedia.as_deref()),
            ("Article", self.article.as_deref()),
            ("Press Kit", self.presskit.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

impl Launch {
    /// Creates a launch with the given identity and canonical date.
    ///
    /// The local date mirrors the canonical one and every optional field is
    /// empty. Mostly useful for fixtures; real launches come from the API.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacex_explorer::domain::{Launch, LaunchOutcome};
    ///
    /// let launch = Launch::new("5eb87cd9", "FalconSat", "2006-03-24T22:30:00.000Z");
    /// assert_eq!(launch.outcome(), LaunchOutcome::Unknown);
    /// assert_eq!(launch.year().as_deref(), Some("2006"));
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, date_utc: impl Into<String>) -> Self {
        let date_utc = date_utc.into();
        Self {
            id: id.into(),
            name: name.into(),
            date_local: date_utc.clone(),
            date_utc,
            success: None,
            upcoming: false,
            details: None,
            flight_number: 0,
            rocket: String::new(),
            links: LaunchLinks::default(),
        }
    }

    /// Classifies the launch. `upcoming` wins over whatever `success` says.
    #[must_use]
    pub const fn outcome(&self) -> LaunchOutcome {
        if self.upcoming {
            return LaunchOutcome::Upcoming;
        }
        match self.success {
            Some(true) => LaunchOutcome::Success,
            Some(false) => LaunchOutcome::Failed,
            None => LaunchOutcome::Unknown,
        }
    }

    /// Parses the canonical timestamp, or `None` if it is not a date.
    #[must_use]
    pub fn utc_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_utc(&self.date_utc)
    }

    /// Four-digit year of the canonical timestamp.
    #[must_use]
    pub fn year(&self) -> Option<String> {
        self.utc_timestamp().map(|dt| format!("{:04}", dt.year()))
    }

    /// Parses the local timestamp, keeping the launch site's offset.
    ///
    /// Timestamps without an offset are read as naive wall-clock time and given
    /// a zero offset so they display unchanged.
    #[must_use]
    pub fn local_time(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.date_local.trim();
        DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
            parse_naive(raw).map(|naive| naive.and_utc().fixed_offset())
        })
    }

    /// Short local date for list rows, e.g. `24/03/2006, 22:30:00`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.local_time().map_or_else(
            || DATE_TBD.to_string(),
            |dt| dt.format("%d/%m/%Y, %H:%M:%S").to_string(),
        )
    }

    /// Long local date for the detail view, e.g. `Friday, March 24, 2006 at 22:30:00`.
    #[must_use]
    pub fn display_date_long(&self) -> String {
        self.local_time().map_or_else(
            || format!("Date {DATE_TBD}"),
            |dt| dt.format("%A, %B %-d, %Y at %H:%M:%S").to_string(),
        )
    }
}

/// Parses a canonical timestamp into UTC.
///
/// Accepts RFC 3339 (what the API sends), a naive `YYYY-MM-DDTHH:MM:SS[.fff]`
/// taken as UTC, and a bare `YYYY-MM-DD` taken as midnight UTC.
///
/// # Examples
///
/// ```
/// use spacex_explorer::domain::launch::parse_utc;
///
/// assert!(parse_utc("2022-01-01").is_some());
/// assert!(parse_utc("2020-05-30T19:22:00.000Z").is_some());
/// assert!(parse_utc("soon").is_none());
/// ```
#[must_use]
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_naive(raw).map(|naive| naive.and_utc())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
