//! Terminal colors for booking bars, keyed on status.
use crate::models::BookingStatus;
use ansi_term::{Colour, Style};

pub fn style_for_status(status: BookingStatus) -> Style {
    match status {
        BookingStatus::Pending => Colour::Yellow.normal(),
        BookingStatus::Confirmed => Colour::Green.normal(),
        BookingStatus::Seated => Colour::Cyan.bold(),
        BookingStatus::Completed => Colour::Blue.normal(),
        BookingStatus::Cancelled | BookingStatus::NoShow => Colour::Fixed(244).dimmed(),
    }
}

/// Paint `text` with the status style, or leave it plain when `enabled` is
/// false (output redirected, tests).
pub fn paint_status(text: &str, status: BookingStatus, enabled: bool) -> String {
    if enabled {
        style_for_status(status).paint(text).to_string()
    } else {
        text.to_string()
    }
}
