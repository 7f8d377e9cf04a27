//! Month, week and day grid construction.

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::types::{
    DAYS_PER_WEEK, DateDescriptor, DayCell, DayView, MONTHS_PER_YEAR, MonthGrid, View, WeekView,
};

/// Gregorian leap year test.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day count of a month, by 0-based month index.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Build a date from a year, 0-based month and a possibly out-of-range
/// day number. Day numbers <= 0 or past the end of the month resolve
/// into the adjacent months; the grid padding relies on this overflow.
pub fn date_with_overflow(year: i32, month: u32, day: i64) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
    first + Duration::days(day - 1)
}

impl DateDescriptor {
    /// Wrap a concrete date with its derived rendering fields.
    pub fn from_date(date: NaiveDate, config: &CalendarConfig) -> Self {
        let weekday = date.weekday().num_days_from_sunday();
        let month = date.month0();
        DateDescriptor {
            full_date: date,
            date: date.day(),
            weekday,
            weekday_name: config.day_names[weekday as usize].clone(),
            month,
            month_name: config.month_names[month as usize].clone(),
            year: date.year(),
        }
    }
}

/// Fresh cell for a date, with membership and today flags unset.
fn day_cell(date: NaiveDate, day_names: &[String]) -> DayCell {
    let weekday = date.weekday().num_days_from_sunday();
    DayCell {
        full_date: date,
        date: date.day(),
        weekday,
        weekday_name: day_names[weekday as usize].clone(),
        is_weekend: weekday == 0 || weekday == 6,
        is_past: false,
        is_today: false,
        belongs_to_past_month: false,
        belongs_to_next_month: false,
        events: Vec::new(),
    }
}

fn check_day_names(config: &CalendarConfig) -> Result<(), CalendarError> {
    if config.day_names.len() != DAYS_PER_WEEK {
        return Err(CalendarError::Configuration {
            violations: vec![format!(
                "dayNames: expected {DAYS_PER_WEEK} entries, got {}",
                config.day_names.len()
            )],
        });
    }
    Ok(())
}

impl MonthGrid {
    /// Build the padded day-cell grid for one month (0-based index).
    ///
    /// Leading and trailing cells carry real dates from the adjacent
    /// months so that every row holds seven days. Pure function of its
    /// inputs; events are attached by the mapper afterwards.
    pub fn build(
        year: i32,
        month: u32,
        config: &CalendarConfig,
        today: &DateDescriptor,
    ) -> Result<Self, CalendarError> {
        if month >= MONTHS_PER_YEAR as u32 {
            return Err(CalendarError::Configuration {
                violations: vec![format!("month index {month} out of range 0-11")],
            });
        }
        check_day_names(config)?;

        let total_days = days_in_month(year, month);
        let first_weekday = date_with_overflow(year, month, 1)
            .weekday()
            .num_days_from_sunday();

        let mut day_cells = Vec::with_capacity(6 * DAYS_PER_WEEK);

        // Remainder days from the past month.
        for i in 1..=first_weekday {
            let date = date_with_overflow(year, month, i as i64 - first_weekday as i64);
            let mut cell = day_cell(date, &config.day_names);
            cell.belongs_to_past_month = true;
            cell.is_past = true;
            day_cells.push(cell);
        }

        // Days of the displayed month.
        for day in 1..=total_days {
            let date = date_with_overflow(year, month, day as i64);
            let mut cell = day_cell(date, &config.day_names);
            cell.is_past = date < today.full_date;
            cell.is_today = day == today.date && month == today.month && year == today.year;
            day_cells.push(cell);
        }

        // Remainder days in the next month.
        let last_weekday = date_with_overflow(year, month, total_days as i64)
            .weekday()
            .num_days_from_sunday();
        for i in 1..(DAYS_PER_WEEK as u32 - last_weekday) {
            let date = date_with_overflow(year, month, (total_days + i) as i64);
            let mut cell = day_cell(date, &config.day_names);
            cell.belongs_to_next_month = true;
            day_cells.push(cell);
        }

        log::debug!(
            "built {}-{:02} month grid with {} cells",
            year,
            month + 1,
            day_cells.len()
        );

        Ok(MonthGrid {
            year,
            month,
            day_cells,
            header_labels: config.header_labels(View::Month),
        })
    }
}

impl WeekView {
    /// Build the seven cells of the Sunday-first week containing
    /// `reference`. Cells outside the reference month keep their real
    /// dates and are flagged as past/next-month.
    pub fn build(
        reference: NaiveDate,
        config: &CalendarConfig,
        today: &DateDescriptor,
    ) -> Result<Self, CalendarError> {
        check_day_names(config)?;

        let sunday = reference - Duration::days(reference.weekday().num_days_from_sunday() as i64);
        let reference_month = (reference.year(), reference.month0());

        let mut day_cells = Vec::with_capacity(DAYS_PER_WEEK);
        for offset in 0..DAYS_PER_WEEK as i64 {
            let date = sunday + Duration::days(offset);
            let mut cell = day_cell(date, &config.day_names);
            cell.is_past = date < today.full_date;
            cell.is_today = date == today.full_date;
            cell.belongs_to_past_month = (date.year(), date.month0()) < reference_month;
            cell.belongs_to_next_month = (date.year(), date.month0()) > reference_month;
            day_cells.push(cell);
        }

        Ok(WeekView {
            year: reference.year(),
            month: reference.month0(),
            day_cells,
            header_labels: config.header_labels(View::Week),
        })
    }
}

impl DayView {
    /// Build the single cell for `reference`.
    pub fn build(
        reference: NaiveDate,
        config: &CalendarConfig,
        today: &DateDescriptor,
    ) -> Result<Self, CalendarError> {
        check_day_names(config)?;

        let mut cell = day_cell(reference, &config.day_names);
        cell.is_past = reference < today.full_date;
        cell.is_today = reference == today.full_date;
        Ok(DayView { cell })
    }
}
