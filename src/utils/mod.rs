pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{fit_to_width, pad_right};
pub use time::{format_minutes, time_to_minutes};
