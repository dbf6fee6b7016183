//! Error types for calendar operations.

use thiserror::Error;

/// Errors that can occur in calendar operations.
///
/// All variants are non-fatal: the calendar stays fully usable after any
/// of them, and the failed operation leaves no partial state behind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Cannot schedule an event on a date in the past")]
    DateInPast,

    #[error("Requested time range overlaps an occupied slot")]
    SlotNotAvailable,

    #[error("Event not found")]
    EventNotFound,

    #[error("Reminder index out of range")]
    ReminderNotFound,

    #[error("Event start time is after its end time")]
    InvalidTimeRange,
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
