//! Unified application error type.
//! CLI, config and export code return AppError; the layout engine reports
//! per-booking problems through BookingError so one bad record never aborts
//! a whole layout pass.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error(transparent)]
    InvalidTime(#[from] TimeParseError),

    #[error("Invalid timeline window: {0}")]
    Window(String),

    #[error("Unsupported input format: {0}")]
    InvalidInputFormat(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Why a time string was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("invalid time format '{0}' (expected HH:MM, HH:MM:SS, h:MM AM/PM or ISO-8601)")]
    Malformed(String),

    #[error("hour out of range in '{value}' (allowed {min}-{max})")]
    HourOutOfRange { value: String, min: u32, max: u32 },

    #[error("minute out of range in '{0}' (allowed 00-59)")]
    MinuteOutOfRange(String),

    #[error("second out of range in '{0}' (allowed 00-59)")]
    SecondOutOfRange(String),
}

/// Which time field of a booking carried the bad value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl TimeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeField::Start => "start_time",
            TimeField::End => "end_time",
        }
    }
}

/// Per-booking normalization failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("{}: {source}", .field.as_str())]
    Time {
        field: TimeField,
        source: TimeParseError,
    },

    #[error("end_time equals start_time ({0}), the booking has no duration")]
    EmptyInterval(String),

    #[error("{}: {minutes} is not a minute of the day (0-1440)", .field.as_str())]
    OutsideDay { field: TimeField, minutes: u32 },
}

impl BookingError {
    /// Name of the offending field, as reported in rejected-booking output.
    pub fn field(&self) -> &'static str {
        match self {
            BookingError::Time { field, .. } | BookingError::OutsideDay { field, .. } => {
                field.as_str()
            }
            BookingError::EmptyInterval(_) => "end_time",
        }
    }
}
