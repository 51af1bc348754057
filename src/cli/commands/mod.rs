pub mod config;
pub mod init;
pub mod layout;
pub mod now;

use crate::config::Config;
use crate::core::layout::TimelineWindow;
use crate::errors::AppResult;

/// Window from the config, with per-invocation `--start`/`--end` overrides.
pub(crate) fn resolve_window(
    cfg: &Config,
    start: &Option<String>,
    end: &Option<String>,
) -> AppResult<TimelineWindow> {
    TimelineWindow::from_bounds(
        start.as_deref().unwrap_or(&cfg.timeline_start),
        end.as_deref().unwrap_or(&cfg.timeline_end),
    )
}
