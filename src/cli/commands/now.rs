use super::resolve_window;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::compute_now_marker_position;
use crate::errors::AppResult;
use crate::utils::formatting::percent;
use crate::utils::time::parse_time_of_day;
use chrono::Local;

/// Handle the `now` command: print the marker position for the clock time
/// (or `--at`) on the configured window.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Now { at, start, end } = cmd {
        let window = resolve_window(cfg, start, end)?;

        let time = match at {
            Some(t) => parse_time_of_day(t)?,
            None => Local::now().time(),
        };

        let pos = compute_now_marker_position(time, &window);
        println!("Now marker at {}: {}", time.format("%H:%M"), percent(pos));
    }
    Ok(())
}
