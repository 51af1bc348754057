//! Buffered overlap test between two booking intervals.

use crate::models::Interval;

/// Grace window applied between bars of the same row.
pub const DEFAULT_BUFFER_MINUTES: u32 = 15;

/// Two intervals overlap when each one, extended by `buffer_minutes`, reaches
/// past the other's start. Back-to-back bookings therefore still conflict
/// while the gap between them is shorter than the buffer. A buffer longer
/// than a day makes every pair conflict.
pub fn overlaps(a: &Interval, b: &Interval, buffer_minutes: u32) -> bool {
    a.end().saturating_add(buffer_minutes) > b.start()
        && b.end().saturating_add(buffer_minutes) > a.start()
}
