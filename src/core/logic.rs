use crate::core::input::load_bookings;
use crate::core::layout::{LayoutOptions, TimelineLayout, compute_layout};
use crate::errors::AppResult;
use std::path::Path;

pub struct Core;

impl Core {
    /// Load a booking file and lay it out. Records rejected while reading
    /// come first in `rejected`, followed by those with unusable times.
    pub fn build_day_layout(path: &Path, options: &LayoutOptions) -> AppResult<TimelineLayout> {
        let loaded = load_bookings(path)?;

        let mut layout = compute_layout(&loaded.bookings, options);

        let mut rejected = loaded.rejected;
        rejected.append(&mut layout.rejected);
        layout.rejected = rejected;

        Ok(layout)
    }
}
