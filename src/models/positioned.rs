use super::booking::Booking;
use crate::errors::BookingError;
use serde::Serialize;

/// A booking placed on the timeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionedBooking {
    #[serde(flatten)]
    pub booking: Booking,
    pub row: usize,
    /// Offset from the window start, percent of the window (0–100).
    pub left: f64,
    /// Bar width, percent of the window (0–100). Includes the short-bar pad.
    pub width: f64,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

/// A record that could not be placed, with the reason.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RejectedBooking {
    pub id: String,
    pub field: &'static str,
    pub message: String,
}

impl RejectedBooking {
    pub fn new(booking: &Booking, err: &BookingError) -> Self {
        Self {
            id: booking.id.clone(),
            field: err.field(),
            message: err.to_string(),
        }
    }
}
