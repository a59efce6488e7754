//! Error types for schedule generation.

/// Result type for schedule generation
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Error type for schedule generation.
///
/// Everything else in the pipeline is lenient: unknown section labels fall
/// back to `OTHER`, unparsable age categories sort as age 0, and missing
/// optional fields are carried through empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Nothing to schedule. Surfaced to the operator instead of an empty schedule.
    #[error("No confirmed registrations to schedule")]
    NoConfirmedRegistrations,

    /// A configuration value is out of range.
    #[error("Invalid configuration: {field} {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// A time of day could not be parsed.
    #[error("Invalid time of day '{0}', expected HH:MM")]
    InvalidClockTime(String),
}
