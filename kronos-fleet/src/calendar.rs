//! Prediction date picker: the selectable window and month navigation model.
//!
//! Dates are explicit year/month/day triples with defined rollover arithmetic.
//! Comparing calendar components keeps "same day" checks independent of
//! timezones and time-of-day, which instant-based comparisons are not.

use crate::constants::{CALENDAR_GRID_CELLS, PREDICTION_WINDOW_DAYS};
use serde::{Deserialize, Serialize};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        let index = usize::try_from(month.saturating_sub(1)).unwrap_or(0);
        DAYS_IN_MONTH.get(index).copied().unwrap_or(30)
    }
}

/// A calendar date as plain year/month/day components. Month and day are
/// 1-based. Ordering follows the derived field order, which is chronological.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlainDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PlainDate {
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Day-of-week index with Sunday as 0, via Zeller's congruence.
    #[must_use]
    pub fn weekday_from_sunday(self) -> u32 {
        let adjusted_month = if self.month < 3 {
            self.month + 12
        } else {
            self.month
        };
        let adjusted_year = if self.month < 3 {
            self.year - 1
        } else {
            self.year
        };
        let year_of_century = adjusted_year % 100;
        let zero_based_century = adjusted_year / 100;
        let weekday = (i32::try_from(self.day).unwrap_or(0)
            + (13 * (i32::try_from(adjusted_month).unwrap_or(0) + 1)) / 5
            + year_of_century
            + year_of_century / 4
            + zero_based_century / 4
            + (5 * zero_based_century))
            % 7;
        u32::try_from((weekday + 6) % 7).unwrap_or(0)
    }

    #[must_use]
    fn next_day(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self::new(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::new(self.year, self.month + 1, 1)
        } else {
            Self::new(self.year + 1, 1, 1)
        }
    }

    #[must_use]
    fn previous_day(self) -> Self {
        if self.day > 1 {
            Self::new(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            Self::new(self.year, self.month - 1, days_in_month(self.year, self.month - 1))
        } else {
            Self::new(self.year - 1, 12, 31)
        }
    }

    /// The date `offset` days away, rolling over months and years as needed.
    #[must_use]
    pub fn add_days(self, offset: i64) -> Self {
        let mut date = self;
        if offset >= 0 {
            for _ in 0..offset {
                date = date.next_day();
            }
        } else {
            for _ in 0..offset.unsigned_abs() {
                date = date.previous_day();
            }
        }
        date
    }

    /// Whether two values denote the same calendar day.
    #[must_use]
    pub fn same_day(self, other: Self) -> bool {
        self == other
    }
}

impl std::fmt::Display for PlainDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Navigation model for the forward-looking prediction picker.
///
/// `today` is captured once when the picker opens and anchors everything:
/// the selectable window is `[today, today + 30]` inclusive, and month
/// navigation is clamped to the months that window touches. Closing the
/// picker discards the whole value; reopening builds a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRange {
    today: PlainDate,
    max_date: PlainDate,
    selected: PlainDate,
    viewing_year: i32,
    viewing_month: u32,
}

impl CalendarRange {
    /// Open the picker anchored at `today`.
    #[must_use]
    pub fn open(today: PlainDate) -> Self {
        Self {
            today,
            max_date: today.add_days(PREDICTION_WINDOW_DAYS),
            selected: today,
            viewing_year: today.year,
            viewing_month: today.month,
        }
    }

    #[must_use]
    pub const fn today(&self) -> PlainDate {
        self.today
    }

    /// Inclusive upper bound of the selectable window.
    #[must_use]
    pub const fn max_date(&self) -> PlainDate {
        self.max_date
    }

    #[must_use]
    pub const fn selected(&self) -> PlainDate {
        self.selected
    }

    /// The month currently shown, as `(year, month)`.
    #[must_use]
    pub const fn viewing(&self) -> (i32, u32) {
        (self.viewing_year, self.viewing_month)
    }

    #[must_use]
    pub fn is_selectable(&self, date: PlainDate) -> bool {
        date >= self.today && date <= self.max_date
    }

    #[must_use]
    pub fn is_selected(&self, date: PlainDate) -> bool {
        date.same_day(self.selected)
    }

    /// Whether a date falls in the month currently shown.
    #[must_use]
    pub const fn in_viewing_month(&self, date: PlainDate) -> bool {
        date.year == self.viewing_year && date.month == self.viewing_month
    }

    /// Update the selection. Out-of-window dates are rejected as a no-op; the
    /// interface is expected to prevent them, this guards the call anyway.
    /// Returns whether the selection was applied.
    pub fn select(&mut self, date: PlainDate) -> bool {
        if self.is_selectable(date) {
            self.selected = date;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        (self.viewing_year, self.viewing_month) > (self.today.year, self.today.month)
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        (self.viewing_year, self.viewing_month) < (self.max_date.year, self.max_date.month)
    }

    /// Show the previous month, floored at the month containing `today`.
    /// Returns whether the view moved.
    pub fn previous_month(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        if self.viewing_month == 1 {
            self.viewing_year -= 1;
            self.viewing_month = 12;
        } else {
            self.viewing_month -= 1;
        }
        true
    }

    /// Show the next month, capped at the month containing `max_date`.
    /// Returns whether the view moved.
    pub fn next_month(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        if self.viewing_month == 12 {
            self.viewing_year += 1;
            self.viewing_month = 1;
        } else {
            self.viewing_month += 1;
        }
        true
    }

    /// The fixed 6x7 grid for the viewing month: 42 consecutive dates starting
    /// from the Sunday on or before the 1st. Recomputed on every call.
    pub fn grid(&self) -> impl Iterator<Item = PlainDate> + use<> {
        let first = PlainDate::new(self.viewing_year, self.viewing_month, 1);
        let start = first.add_days(-i64::from(first.weekday_from_sunday()));
        (0..CALENDAR_GRID_CELLS).map(move |offset| start.add_days(offset as i64))
    }
}
