//! Range filter selections and resolved date ranges.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open UTC time range `[start, end)`.
///
/// Both bounds absent means "all time". The two bounds are always either
/// both present or both absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive start instant.
    pub start: Option<DateTime<Utc>>,
    /// Exclusive end instant.
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// The unbounded "all time" range.
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    /// Creates a bounded range `[start, end)`.
    #[must_use]
    pub const fn bounded(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns true if both bounds are present.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns true if the instant falls within the range. The unbounded
    /// range contains every instant.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => instant >= start && instant < end,
            _ => true,
        }
    }

    /// The range of identical duration immediately preceding this one:
    /// `previous.end == self.start`. Returns `None` for the unbounded range,
    /// which has no previous period.
    #[must_use]
    pub fn previous_period(&self) -> Option<Self> {
        let start = self.start?;
        let end = self.end?;
        let duration = end - start;
        Some(Self::bounded(start - duration, start))
    }
}

/// Dashboard date-range filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeFilter {
    /// No filtering; all orders.
    All,
    /// The current calendar day.
    Today,
    /// The current calendar month.
    ThisMonth,
    /// The previous calendar month.
    LastMonth,
    /// A specific calendar month.
    Month {
        /// Calendar year.
        year: i32,
        /// Calendar month, 1-12.
        month: u32,
    },
}

impl RangeFilter {
    /// Parses the query-string form of the filter.
    ///
    /// `filter` is one of `all`, `today`, `thisMonth`, `lastMonth`,
    /// `custom`; `custom` reads the companion `month` value (`YYYY-MM`,
    /// the HTML month-input format). Anything unrecognized, including a
    /// `custom` selection with a missing or unparseable month, falls back
    /// to [`RangeFilter::All`] rather than erroring.
    #[must_use]
    pub fn from_query(filter: &str, month: Option<&str>) -> Self {
        match filter {
            "today" => Self::Today,
            "thisMonth" => Self::ThisMonth,
            "lastMonth" => Self::LastMonth,
            "custom" => month.and_then(Self::parse_month).unwrap_or(Self::All),
            _ => Self::All,
        }
    }

    fn parse_month(value: &str) -> Option<Self> {
        let (year, month) = value.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        (1..=12).contains(&month).then_some(Self::Month { year, month })
    }

    /// Resolves the selection to a concrete range, relative to `now`.
    ///
    /// An out-of-range custom month resolves to the unbounded range.
    #[must_use]
    pub fn resolve(self, now: DateTime<Utc>) -> DateRange {
        let today = now.date_naive();
        let range = match self {
            Self::All => return DateRange::UNBOUNDED,
            Self::Today => today
                .checked_add_days(Days::new(1))
                .map(|tomorrow| DateRange::bounded(day_start(today), day_start(tomorrow))),
            Self::ThisMonth => month_range(today.year(), today.month()),
            Self::LastMonth => {
                let (year, month) = if today.month() == 1 {
                    (today.year() - 1, 12)
                } else {
                    (today.year(), today.month() - 1)
                };
                month_range(year, month)
            }
            Self::Month { year, month } => month_range(year, month),
        };
        range.unwrap_or(DateRange::UNBOUNDED)
    }

    /// Human-readable label for the selection ("Today", "August 2026", ...).
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All Time".to_string(),
            Self::Today => "Today".to_string(),
            Self::ThisMonth => "This Month".to_string(),
            Self::LastMonth => "Last Month".to_string(),
            Self::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1)
                .map_or_else(|| "All Time".to_string(), |d| d.format("%B %Y").to_string()),
        }
    }
}

/// First instant of the given calendar day, in UTC.
fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// `[first instant of the month, first instant of the next month)`.
fn month_range(year: i32, month: u32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(DateRange::bounded(day_start(start), day_start(end)))
}
