use chrono::NaiveTime;
use thiserror::Error;

/// Errors that can occur when validating a candidate event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event name cannot be empty")]
    EmptyName,
    #[error("End time must be after start time")]
    InvalidTimeRange,
    #[error("Day must be between 1 and 31, got {0}")]
    InvalidDay(u8),
}

/// A candidate event's interval intersects an existing event on the same day.
///
/// The store is left unchanged when this is returned; the presentation layer
/// decides how to notify.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("\"{candidate}\" overlaps \"{existing}\" ({existing_start} to {existing_end}) on day {day}")]
pub struct OverlapError {
    pub day: u8,
    pub candidate: String,
    pub existing: String,
    pub existing_start: NaiveTime,
    pub existing_end: NaiveTime,
}

/// An edit or delete referenced a day or index the store does not have.
///
/// The view only ever submits indices it just rendered, so hitting this is
/// an invariant violation rather than a user error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("No events stored for day {0}")]
    UnknownDay(u8),
    #[error("Event index {index} out of bounds for day {day} (have {len})")]
    OutOfBounds { day: u8, index: usize, len: usize },
}

/// Errors that can occur when replacing an event in place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Overlap(#[from] OverlapError),
}
