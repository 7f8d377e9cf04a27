//! Event parsing and event-to-day mapping.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::error::CalendarError;
use crate::types::{DayCell, Event, MonthGrid};

/// Accepted textual date formats, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%m/%d/%Y"];

/// Parse date text such as "2020-05-05" or "May 5, 2020".
pub fn parse_calendar_date(text: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = text.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(CalendarError::InvalidEventDate {
        value: text.to_string(),
    })
}

/// Composite key identifying one day cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayKey {
    pub year: i32,
    /// Month index, 0 = January.
    pub month: u32,
    pub day: u32,
}

impl DayKey {
    pub fn for_date(date: NaiveDate) -> Self {
        DayKey {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }
}

/// Where an event's start date falls relative to a grid's target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonthRelation {
    Same,
    Previous,
    Next,
    OutOfRange,
}

/// Classify against the target, handling the Dec/Jan year rollover in
/// both directions.
fn classify(event_date: NaiveDate, year: i32, month: u32) -> MonthRelation {
    let (event_year, event_month) = (event_date.year(), event_date.month0());

    if event_month == month && event_year == year {
        return MonthRelation::Same;
    }

    let in_previous = if month == 0 {
        event_month == 11 && event_year == year - 1
    } else {
        event_month == month - 1 && event_year == year
    };
    if in_previous {
        return MonthRelation::Previous;
    }

    let in_next = if month == 11 {
        event_month == 0 && event_year == year + 1
    } else {
        event_month == month + 1 && event_year == year
    };
    if in_next {
        MonthRelation::Next
    } else {
        MonthRelation::OutOfRange
    }
}

/// Bucket events by day key for a grid targeting `year`/`month`, in one
/// pass and preserving input order within each bucket.
///
/// Events in adjacent months are re-keyed under the target month with
/// their day-of-month unchanged, so an April 30 event shown in a May
/// grid attaches to the May 30 cell. Events further away are excluded.
/// Unparseable dates are skipped with a warning; the batch continues.
pub fn month_event_map(year: i32, month: u32, events: &[Event]) -> HashMap<DayKey, Vec<Event>> {
    let mut map: HashMap<DayKey, Vec<Event>> = HashMap::new();

    for event in events {
        let start = match parse_calendar_date(&event.start_date) {
            Ok(date) => date,
            Err(err) => {
                log::warn!("skipping event {:?}: {}", event.title, err);
                continue;
            }
        };

        match classify(start, year, month) {
            MonthRelation::Same | MonthRelation::Previous | MonthRelation::Next => {
                let key = DayKey {
                    year,
                    month,
                    day: start.day(),
                };
                map.entry(key).or_default().push(event.clone());
            }
            MonthRelation::OutOfRange => {}
        }
    }

    map
}

/// Enrich a month grid: each cell whose own date matches a bucket key
/// receives a copy of that bucket, appended in bucket order.
pub fn map_events_to_days(grid: &mut MonthGrid, events: &[Event]) {
    let map = month_event_map(grid.year, grid.month, events);
    if map.is_empty() {
        return;
    }

    for cell in &mut grid.day_cells {
        if let Some(bucket) = map.get(&DayKey::for_date(cell.full_date)) {
            cell.events.extend(bucket.iter().cloned());
        }
    }
}

/// Attach events to arbitrary cells by exact date match. Week and day
/// views use true event dates; the month re-keying does not apply.
pub fn map_events_by_date(cells: &mut [DayCell], events: &[Event]) {
    let mut map: HashMap<DayKey, Vec<Event>> = HashMap::new();
    for event in events {
        match parse_calendar_date(&event.start_date) {
            Ok(date) => map
                .entry(DayKey::for_date(date))
                .or_default()
                .push(event.clone()),
            Err(err) => log::warn!("skipping event {:?}: {}", event.title, err),
        }
    }

    for cell in cells {
        if let Some(bucket) = map.get(&DayKey::for_date(cell.full_date)) {
            cell.events.extend(bucket.iter().cloned());
        }
    }
}
