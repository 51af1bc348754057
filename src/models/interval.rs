use crate::errors::{BookingError, TimeField};
use crate::utils::time::{MINUTES_PER_DAY, format_minutes, time_to_minutes};

/// A booking's span in minutes since midnight of the layout day.
///
/// `end` lies in `(start, start + 1440]`; it goes past 1440 when the booking
/// crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    /// Build an interval from raw minutes. `start` must lie in 0..1440 and
    /// `end` in 0..=1440; an `end` before `start` is read as crossing
    /// midnight and moved to the next day.
    pub fn new(start: u32, end: u32) -> Result<Self, BookingError> {
        if start >= MINUTES_PER_DAY {
            return Err(BookingError::OutsideDay {
                field: TimeField::Start,
                minutes: start,
            });
        }
        if end > MINUTES_PER_DAY {
            return Err(BookingError::OutsideDay {
                field: TimeField::End,
                minutes: end,
            });
        }
        if end == start {
            return Err(BookingError::EmptyInterval(format_minutes(start)));
        }

        // both bounds are within the day, so the wrapped span stays under 24h
        let end = if end < start { end + MINUTES_PER_DAY } else { end };

        Ok(Self { start, end })
    }

    /// Parse both ends with the shared time parser.
    pub fn from_times(start: &str, end: &str) -> Result<Self, BookingError> {
        let s = time_to_minutes(start).map_err(|source| BookingError::Time {
            field: TimeField::Start,
            source,
        })?;
        let e = time_to_minutes(end).map_err(|source| BookingError::Time {
            field: TimeField::End,
            source,
        })?;
        Self::new(s, e)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end > MINUTES_PER_DAY
    }
}
