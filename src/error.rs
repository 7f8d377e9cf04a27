//! Error taxonomy for configuration and event mapping.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Construction-time configuration failure. Every violation found in
    /// the single validation pass is listed; no partial object is produced.
    #[error("invalid configuration: {}", violations.join("; "))]
    Configuration { violations: Vec<String> },

    /// An event in the configured batch failed required-field validation.
    /// Fatal to construction.
    #[error("invalid event at index {index}: {reason}")]
    InvalidEvent { index: usize, reason: String },

    /// A single event's start date failed to parse during mapping.
    /// Non-fatal there; the event is dropped and the batch continues.
    #[error("unparseable event date {value:?}")]
    InvalidEventDate { value: String },
}
