//! Booking timeline layout: normalizes booking times, packs bookings into
//! non-overlapping rows and positions every bar on the visible window.
//!
//! Everything here is a pure function of its inputs. Callers recompute the
//! layout whenever the booking list, the window or the clock changes.

pub mod overlap;
pub mod packing;
pub mod position;

pub use overlap::{DEFAULT_BUFFER_MINUTES, overlaps};
pub use packing::{PackingStrategy, Placement, RowAssignment, assign_rows};
pub use position::{
    BarStyle, TimelineWindow, WidthPadding, compute_bar_style, compute_now_marker_position,
};

use crate::models::{Booking, Interval, PositionedBooking, RejectedBooking};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutOptions {
    pub buffer_minutes: u32,
    pub window: TimelineWindow,
    pub padding: WidthPadding,
    pub strategy: PackingStrategy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
            window: TimelineWindow::default(),
            padding: WidthPadding::default(),
            strategy: PackingStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    /// Placed bookings, in processing order (start time, then duration).
    pub bookings: Vec<PositionedBooking>,
    pub row_count: usize,
    /// Records skipped because their times could not be normalized.
    pub rejected: Vec<RejectedBooking>,
}

impl TimelineLayout {
    /// Bookings grouped by row index.
    pub fn rows(&self) -> Vec<Vec<&PositionedBooking>> {
        let needed = self
            .bookings
            .iter()
            .map(|pb| pb.row + 1)
            .max()
            .unwrap_or(0)
            .max(self.row_count);

        let mut rows: Vec<Vec<&PositionedBooking>> = vec![Vec::new(); needed];
        for pb in &self.bookings {
            rows[pb.row].push(pb);
        }
        rows
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// Lay out one day's bookings.
///
/// Malformed records end up in `rejected`; they never prevent the rest
/// from being placed.
pub fn compute_layout(bookings: &[Booking], options: &LayoutOptions) -> TimelineLayout {
    let mut accepted: Vec<&Booking> = Vec::with_capacity(bookings.len());
    let mut intervals: Vec<Interval> = Vec::with_capacity(bookings.len());
    let mut rejected = Vec::new();

    // -----------------------------
    // Normalize times
    // -----------------------------
    for booking in bookings {
        match Interval::from_times(&booking.start_time, &booking.end_time) {
            Ok(iv) => {
                accepted.push(booking);
                intervals.push(iv);
            }
            Err(e) => rejected.push(RejectedBooking::new(booking, &e)),
        }
    }

    // -----------------------------
    // Rows, then bars
    // -----------------------------
    let assignment = assign_rows(&intervals, options.buffer_minutes, options.strategy);

    let positioned = assignment
        .placements
        .iter()
        .map(|p| {
            let iv = &intervals[p.index];
            let style = compute_bar_style(iv, &options.window, &options.padding);
            PositionedBooking {
                booking: accepted[p.index].clone(),
                row: p.row,
                left: style.left,
                width: style.width,
                start_minutes: iv.start(),
                end_minutes: iv.end(),
            }
        })
        .collect();

    TimelineLayout {
        bookings: positioned,
        row_count: assignment.row_count,
        rejected,
    }
}

/// Pack bookings with the default window, padding and first-fit strategy,
/// optionally overriding the buffer.
pub fn pack_into_rows(bookings: &[Booking], buffer_minutes: Option<u32>) -> TimelineLayout {
    let options = LayoutOptions {
        buffer_minutes: buffer_minutes.unwrap_or(DEFAULT_BUFFER_MINUTES),
        ..LayoutOptions::default()
    };
    compute_layout(bookings, &options)
}
