//! Calendar facade: owns the validated configuration, the today
//! snapshot and the currently built view.

use chrono::{Datelike, Duration, NaiveDate};

use crate::config::{CalendarConfig, CalendarOptions, validate_events};
use crate::error::CalendarError;
use crate::events;
use crate::grid::date_with_overflow;
use crate::types::{DateDescriptor, DayView, Direction, MonthGrid, View, WeekView};

/// Calendar instance returned to the caller. Views are rebuilt wholesale
/// whenever the active view or reference date changes; there is no
/// incremental update and no global registration.
#[derive(Debug)]
pub struct Calendar {
    config: CalendarConfig,
    today: DateDescriptor,
    current_date: DateDescriptor,
    active_view: View,
    month_grid: Option<MonthGrid>,
    week_view: Option<WeekView>,
    day_view: Option<DayView>,
}

impl Calendar {
    /// Validate `options`, snapshot today and build the initial view.
    ///
    /// Fails with [`CalendarError::Configuration`] for invalid options and
    /// [`CalendarError::InvalidEvent`] for a bad event in the batch.
    pub fn new(options: CalendarOptions) -> Result<Self, CalendarError> {
        Self::with_today(options, snapshot_today())
    }

    /// Like [`Calendar::new`] but with an explicit today snapshot.
    pub fn with_today(options: CalendarOptions, now: NaiveDate) -> Result<Self, CalendarError> {
        let config = CalendarConfig::from_options(options, now)?;
        validate_events(&config.events)?;

        let today = DateDescriptor::from_date(now, &config);
        let current_date = DateDescriptor::from_date(config.initial_date, &config);
        let active_view = config.initial_view;

        let mut calendar = Calendar {
            config,
            today,
            current_date,
            active_view,
            month_grid: None,
            week_view: None,
            day_view: None,
        };
        calendar.rebuild()?;
        Ok(calendar)
    }

    /// Switch the active view, optionally jumping to a new reference
    /// date, and rebuild it from scratch.
    pub fn set_active_view(
        &mut self,
        view: View,
        reference: Option<NaiveDate>,
    ) -> Result<(), CalendarError> {
        if let Some(date) = reference {
            self.current_date = DateDescriptor::from_date(date, &self.config);
        }
        self.active_view = view;
        self.rebuild()
    }

    /// Step the active view one unit backwards or forwards (a month, a
    /// week or a day depending on the view) and rebuild.
    ///
    /// Returns whether the view moved. Navigation can be disabled
    /// outright, and `allow_past`/`allow_future` clamp movement at the
    /// today snapshot's month, week or day.
    pub fn navigate(&mut self, direction: Direction) -> Result<bool, CalendarError> {
        if !self.config.navigation {
            return Ok(false);
        }

        let current = self.current_date.full_date;
        let target = match (self.active_view, direction) {
            (View::Month, Direction::Previous) => month_start(current, -1),
            (View::Month, Direction::Next) => month_start(current, 1),
            (View::Week, Direction::Previous) => current - Duration::days(7),
            (View::Week, Direction::Next) => current + Duration::days(7),
            (View::Day, Direction::Previous) => current - Duration::days(1),
            (View::Day, Direction::Next) => current + Duration::days(1),
        };

        if direction == Direction::Previous && !self.config.allow_past && self.is_before_today(target) {
            return Ok(false);
        }
        if direction == Direction::Next && !self.config.allow_future && self.is_after_today(target) {
            return Ok(false);
        }

        self.current_date = DateDescriptor::from_date(target, &self.config);
        self.rebuild()?;
        Ok(true)
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn today(&self) -> &DateDescriptor {
        &self.today
    }

    pub fn current_date(&self) -> &DateDescriptor {
        &self.current_date
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Built month grid; present after a month-view build.
    pub fn month_grid(&self) -> Option<&MonthGrid> {
        self.month_grid.as_ref()
    }

    pub fn week_view(&self) -> Option<&WeekView> {
        self.week_view.as_ref()
    }

    pub fn day_view(&self) -> Option<&DayView> {
        self.day_view.as_ref()
    }

    /// Rebuild the active view from the current reference date and map
    /// the configured events onto its cells.
    fn rebuild(&mut self) -> Result<(), CalendarError> {
        log::debug!(
            "rebuilding {} view at {}",
            self.active_view,
            self.current_date.full_date
        );
        match self.active_view {
            View::Month => {
                let mut grid = MonthGrid::build(
                    self.current_date.year,
                    self.current_date.month,
                    &self.config,
                    &self.today,
                )?;
                if self.config.has_events {
                    events::map_events_to_days(&mut grid, &self.config.events);
                }
                self.month_grid = Some(grid);
            }
            View::Week => {
                let mut view =
                    WeekView::build(self.current_date.full_date, &self.config, &self.today)?;
                if self.config.has_events {
                    events::map_events_by_date(&mut view.day_cells, &self.config.events);
                }
                self.week_view = Some(view);
            }
            View::Day => {
                let mut view =
                    DayView::build(self.current_date.full_date, &self.config, &self.today)?;
                if self.config.has_events {
                    events::map_events_by_date(
                        std::slice::from_mut(&mut view.cell),
                        &self.config.events,
                    );
                }
                self.day_view = Some(view);
            }
        }
        Ok(())
    }

    /// Whether `target` falls before today at the active view's
    /// granularity (month, week or day).
    fn is_before_today(&self, target: NaiveDate) -> bool {
        let today = self.today.full_date;
        match self.active_view {
            View::Month => (target.year(), target.month0()) < (today.year(), today.month0()),
            View::Week => week_start(target) < week_start(today),
            View::Day => target < today,
        }
    }

    fn is_after_today(&self, target: NaiveDate) -> bool {
        let today = self.today.full_date;
        match self.active_view {
            View::Month => (target.year(), target.month0()) > (today.year(), today.month0()),
            View::Week => week_start(target) > week_start(today),
            View::Day => target > today,
        }
    }
}

/// First day of the month `offset` months away from `date`.
fn month_start(date: NaiveDate, offset: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + offset;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32;
    date_with_overflow(year, month, 1)
}

/// Sunday of the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Today's date, respecting the CALGRID_TEST_TIME environment variable
/// for reproducible builds in tests.
pub fn snapshot_today() -> NaiveDate {
    if let Ok(test_time) = std::env::var("CALGRID_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
