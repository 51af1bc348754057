//! Horizontal placement of bars and of the current-time marker, as
//! percentages of the visible timeline window.

use crate::errors::{AppError, AppResult};
use crate::models::Interval;
use crate::utils::time::{MINUTES_PER_DAY, format_minutes, parse_window_bound};
use chrono::{NaiveTime, Timelike};
use serde::Serialize;

/// Visible part of the day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineWindow {
    start: u32,
    end: u32,
}

impl Default for TimelineWindow {
    /// 1 AM to midnight.
    fn default() -> Self {
        Self {
            start: 60,
            end: MINUTES_PER_DAY,
        }
    }
}

impl TimelineWindow {
    pub fn new(start: u32, end: u32) -> AppResult<Self> {
        if end > MINUTES_PER_DAY {
            return Err(AppError::Window(format!(
                "end {} is past midnight",
                format_minutes(end)
            )));
        }
        if start >= end {
            return Err(AppError::Window(format!(
                "start {} must be before end {}",
                format_minutes(start),
                format_minutes(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Build from `HH:MM`-style bounds; `24:00` is accepted as the end.
    pub fn from_bounds(start: &str, end: &str) -> AppResult<Self> {
        Self::new(parse_window_bound(start)?, parse_window_bound(end)?)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn span(&self) -> u32 {
        self.end - self.start
    }

    /// Position of `minutes` as a percentage of the window, clamped to 0–100.
    pub fn percent_of(&self, minutes: u32) -> f64 {
        let offset = minutes as f64 - self.start as f64;
        (offset / self.span() as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Extra width given to short bars so they stay visible and clickable.
///
/// This is a presentation affordance, not a time adjustment: with the pad a
/// short bar is wider than its duration alone would make it. The defaults
/// (+2 points under 30 minutes, +0.5 under 60) are visual tuning values and
/// may need adjusting for a denser or sparser timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WidthPadding {
    pub short_threshold: u32,
    pub short_pad: f64,
    pub medium_threshold: u32,
    pub medium_pad: f64,
}

impl Default for WidthPadding {
    fn default() -> Self {
        Self {
            short_threshold: 30,
            short_pad: 2.0,
            medium_threshold: 60,
            medium_pad: 0.5,
        }
    }
}

impl WidthPadding {
    /// No padding at all; widths become strictly proportional.
    pub fn none() -> Self {
        Self {
            short_threshold: 0,
            short_pad: 0.0,
            medium_threshold: 0,
            medium_pad: 0.0,
        }
    }

    pub fn pad_for(&self, duration_minutes: u32) -> f64 {
        if duration_minutes < self.short_threshold {
            self.short_pad
        } else if duration_minutes < self.medium_threshold {
            self.medium_pad
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarStyle {
    pub left: f64,
    pub width: f64,
}

/// Position and width of a booking bar.
///
/// The end is capped at the window end (a booking running past midnight is
/// drawn up to the window edge only) and a start before the window is clipped
/// at the left edge. The bar never extends past 100%.
pub fn compute_bar_style(
    interval: &Interval,
    window: &TimelineWindow,
    padding: &WidthPadding,
) -> BarStyle {
    let left = window.percent_of(interval.start());

    let visible_start = interval.start().max(window.start());
    let visible_end = interval.end().min(window.end());

    if visible_end <= visible_start {
        return BarStyle { left, width: 0.0 };
    }

    let effective = visible_end - visible_start;
    let base = effective as f64 / window.span() as f64 * 100.0;
    let width = (base + padding.pad_for(effective)).min(100.0 - left);

    BarStyle { left, width }
}

/// Position of the current-time marker; same interpolation as a bar's left.
pub fn compute_now_marker_position(now: NaiveTime, window: &TimelineWindow) -> f64 {
    window.percent_of(now.hour() * 60 + now.minute())
}
