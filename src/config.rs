//! Configuration options and the validation pass producing a typed config.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CalendarError;
use crate::events::parse_calendar_date;
use crate::types::{
    ABBREVIATION_LEN, DAYS_PER_WEEK, DEFAULT_DAY_NAMES, DEFAULT_MONTH_NAMES, Event,
    MONTHS_PER_YEAR, View,
};

/// Raw construction input. Every field is optional; unset fields fall back
/// to the defaults documented on [`CalendarConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    /// View name: "month", "week" or "day".
    pub initial_view: Option<String>,
    /// Date text in any supported format; defaults to today.
    pub initial_date: Option<String>,
    pub navigation: Option<bool>,
    pub allow_past: Option<bool>,
    pub allow_future: Option<bool>,
    pub has_events: Option<bool>,
    #[serde(default)]
    pub events: Vec<Event>,
    /// 12 full month names.
    pub month_names: Option<Vec<String>>,
    /// 12 abbreviated month names; derived from `month_names` when unset.
    pub month_abbreviations: Option<Vec<String>>,
    /// 7 full day names, Sunday-first.
    pub day_names: Option<Vec<String>>,
    /// 7 abbreviated day names; derived from `day_names` when unset.
    pub day_abbreviations: Option<Vec<String>>,
    /// View names whose weekday headers use the abbreviations.
    pub abbreviate_day_names: Option<Vec<String>>,
}

/// Validated configuration owned by the facade.
///
/// Defaults: month view, today's date, all behavior flags true, empty
/// event list, English name tables, abbreviations of the first three
/// characters, abbreviated headers for month and week views.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    pub initial_view: View,
    pub initial_date: NaiveDate,
    pub navigation: bool,
    pub allow_past: bool,
    pub allow_future: bool,
    pub has_events: bool,
    pub events: Vec<Event>,
    pub month_names: Vec<String>,
    pub month_abbreviations: Vec<String>,
    pub day_names: Vec<String>,
    pub day_abbreviations: Vec<String>,
    pub abbreviate_day_names: Vec<View>,
}

impl CalendarConfig {
    /// Validate raw options in a single pass.
    ///
    /// All violations are collected before failing, so the error lists
    /// every problem at once instead of the first one found.
    pub fn from_options(options: CalendarOptions, today: NaiveDate) -> Result<Self, CalendarError> {
        let mut violations = Vec::new();

        let initial_view = match options.initial_view.as_deref() {
            None => View::Month,
            Some(s) => match s.parse() {
                Ok(view) => view,
                Err(e) => {
                    violations.push(format!("initialView: {e}"));
                    View::Month
                }
            },
        };

        let initial_date = match options.initial_date.as_deref() {
            None => today,
            Some(s) => match parse_calendar_date(s) {
                Ok(date) => date,
                Err(_) => {
                    violations.push(format!("initialDate: unparseable date {s:?}"));
                    today
                }
            },
        };

        let month_names = named_table(
            options.month_names,
            MONTHS_PER_YEAR,
            "monthNames",
            &DEFAULT_MONTH_NAMES,
            &mut violations,
        );
        let day_names = named_table(
            options.day_names,
            DAYS_PER_WEEK,
            "dayNames",
            &DEFAULT_DAY_NAMES,
            &mut violations,
        );
        let month_abbreviations = abbreviation_table(
            options.month_abbreviations,
            &month_names,
            MONTHS_PER_YEAR,
            "monthAbbreviations",
            &mut violations,
        );
        let day_abbreviations = abbreviation_table(
            options.day_abbreviations,
            &day_names,
            DAYS_PER_WEEK,
            "dayAbbreviations",
            &mut violations,
        );

        let abbreviate_day_names = match options.abbreviate_day_names {
            None => vec![View::Month, View::Week],
            Some(names) => {
                let mut views = Vec::with_capacity(names.len());
                for name in &names {
                    match name.parse() {
                        Ok(view) => views.push(view),
                        Err(e) => violations.push(format!("abbreviateDayNames: {e}")),
                    }
                }
                views
            }
        };

        if !violations.is_empty() {
            return Err(CalendarError::Configuration { violations });
        }

        Ok(CalendarConfig {
            initial_view,
            initial_date,
            navigation: options.navigation.unwrap_or(true),
            allow_past: options.allow_past.unwrap_or(true),
            allow_future: options.allow_future.unwrap_or(true),
            has_events: options.has_events.unwrap_or(true),
            events: options.events,
            month_names,
            month_abbreviations,
            day_names,
            day_abbreviations,
            abbreviate_day_names,
        })
    }

    /// Weekday labels for a view, abbreviated when the view is configured
    /// to use abbreviations.
    pub fn header_labels(&self, view: View) -> Vec<String> {
        if self.abbreviate_day_names.contains(&view) {
            self.day_abbreviations.clone()
        } else {
            self.day_names.clone()
        }
    }
}

/// Check every event in the batch for required fields.
///
/// Used at construction time, where a bad event rejects the whole
/// configuration. The mapper handles its own per-event skipping.
pub fn validate_events(events: &[Event]) -> Result<(), CalendarError> {
    for (index, event) in events.iter().enumerate() {
        if event.title.trim().is_empty() {
            return Err(CalendarError::InvalidEvent {
                index,
                reason: "title must be a non-empty string".to_string(),
            });
        }
        if event.start_date.trim().is_empty() {
            return Err(CalendarError::InvalidEvent {
                index,
                reason: "startDate is required".to_string(),
            });
        }
        if parse_calendar_date(&event.start_date).is_err() {
            return Err(CalendarError::InvalidEvent {
                index,
                reason: format!("unparseable startDate {:?}", event.start_date),
            });
        }
    }
    Ok(())
}

fn named_table(
    supplied: Option<Vec<String>>,
    expected: usize,
    field: &str,
    defaults: &[&str],
    violations: &mut Vec<String>,
) -> Vec<String> {
    match supplied {
        None => defaults.iter().map(|s| s.to_string()).collect(),
        Some(names) if names.len() == expected => names,
        Some(names) => {
            violations.push(format!(
                "{field}: expected {expected} entries, got {}",
                names.len()
            ));
            defaults.iter().map(|s| s.to_string()).collect()
        }
    }
}

fn abbreviation_table(
    supplied: Option<Vec<String>>,
    full_names: &[String],
    expected: usize,
    field: &str,
    violations: &mut Vec<String>,
) -> Vec<String> {
    let derive = |names: &[String]| {
        names
            .iter()
            .map(|n| n.chars().take(ABBREVIATION_LEN).collect())
            .collect()
    };
    match supplied {
        None => derive(full_names),
        Some(names) if names.len() == expected => names,
        Some(names) => {
            violations.push(format!(
                "{field}: expected {expected} entries, got {}",
                names.len()
            ));
            derive(full_names)
        }
    }
}
