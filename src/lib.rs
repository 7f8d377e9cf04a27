//! Calendar grid engine: month, week and day day-cell grids with events
//! mapped onto the correct cells.
//!
//! Features:
//! - Month grids padded with real dates from the adjacent months
//! - Week and day views built through the same facade
//! - Event bucketing by (year, month, day) key with Dec/Jan rollover
//! - Terminal rendering of the active view

pub mod args;
pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod formatter;
pub mod grid;
pub mod types;
