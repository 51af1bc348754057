pub mod booking;
pub mod interval;
pub mod positioned;
pub mod status;

pub use booking::Booking;
pub use interval::Interval;
pub use positioned::{PositionedBooking, RejectedBooking};
pub use status::BookingStatus;
