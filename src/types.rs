//! Type definitions and constants for the calendar grid engine.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Full month grid padded to whole weeks.
    Month,
    /// Seven days around a reference date.
    Week,
    /// Single day.
    Day,
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(View::Month),
            "week" => Ok(View::Week),
            "day" => Ok(View::Day),
            other => Err(format!(
                "unrecognized view {other:?} (expected month, week or day)"
            )),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::Month => "month",
            View::Week => "week",
            View::Day => "day",
        })
    }
}

/// Navigation direction for stepping the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// A concrete calendar date with derived fields for rendering.
///
/// Immutable once constructed; everything is derived from `full_date`
/// and the configured name tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDescriptor {
    pub full_date: NaiveDate,
    /// Day of month, 1-31.
    pub date: u32,
    /// Weekday index, 0 = Sunday.
    pub weekday: u32,
    pub weekday_name: String,
    /// Month index, 0 = January.
    pub month: u32,
    pub month_name: String,
    pub year: i32,
}

/// One cell of a month/week/day grid.
///
/// `events` starts empty and is appended to by the event mapper after
/// the grid is built.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub full_date: NaiveDate,
    /// Day of month, 1-31.
    pub date: u32,
    /// Weekday index, 0 = Sunday.
    pub weekday: u32,
    pub weekday_name: String,
    pub is_weekend: bool,
    pub is_past: bool,
    pub is_today: bool,
    pub belongs_to_past_month: bool,
    pub belongs_to_next_month: bool,
    pub events: Vec<Event>,
}

/// User-supplied event. `start_date` is date text parsed during mapping.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Day-cell grid for a single month.
///
/// `day_cells` holds a whole number of weeks: leading cells from the
/// previous month, the displayed month, trailing cells from the next.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    /// Month index, 0 = January.
    pub month: u32,
    pub day_cells: Vec<DayCell>,
    /// Seven weekday labels, Sunday-first.
    pub header_labels: Vec<String>,
}

impl MonthGrid {
    /// Day cells partitioned into rows of seven, in grid order.
    pub fn week_rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.day_cells.chunks_exact(DAYS_PER_WEEK)
    }
}

/// Seven day cells spanning the week that contains a reference date.
#[derive(Debug, Clone)]
pub struct WeekView {
    pub year: i32,
    /// Month index of the reference date, 0 = January.
    pub month: u32,
    pub day_cells: Vec<DayCell>,
    pub header_labels: Vec<String>,
}

/// Single enriched day cell.
#[derive(Debug, Clone)]
pub struct DayView {
    pub cell: DayCell,
}

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: usize = 12;

/// Length of derived name abbreviations ("January" -> "Jan").
pub const ABBREVIATION_LEN: usize = 3;

pub const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DEFAULT_DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_FAINT: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
