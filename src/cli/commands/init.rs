use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file with default values. An existing file is
/// kept unless `--force` is given; in test mode nothing is written.
pub fn handle(path: &Path, force: bool, is_test: bool) -> AppResult<()> {
    info("Initializing rTimelane…");

    if is_test {
        info(format!("Test mode: configuration not written ({})", path.display()));
        return Ok(());
    }

    if path.exists() && !force {
        info(format!(
            "Configuration already present: {} (use --force to reset it)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save(path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
