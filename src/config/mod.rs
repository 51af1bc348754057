use crate::core::layout::{LayoutOptions, PackingStrategy, TimelineWindow, WidthPadding};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_buffer")]
    pub buffer_minutes: u32,
    #[serde(default = "default_timeline_start")]
    pub timeline_start: String,
    #[serde(default = "default_timeline_end")]
    pub timeline_end: String,
    #[serde(default)]
    pub strategy: PackingStrategy,
    #[serde(default = "default_chart_columns")]
    pub chart_columns: usize,
    #[serde(default = "default_short_pad")]
    pub short_pad: f64,
    #[serde(default = "default_short_threshold")]
    pub short_threshold: u32,
    #[serde(default = "default_medium_pad")]
    pub medium_pad: f64,
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: u32,
}

fn default_buffer() -> u32 {
    15
}
fn default_timeline_start() -> String {
    "01:00".to_string()
}
fn default_timeline_end() -> String {
    "24:00".to_string()
}
fn default_chart_columns() -> usize {
    92
}
fn default_short_pad() -> f64 {
    2.0
}
fn default_short_threshold() -> u32 {
    30
}
fn default_medium_pad() -> f64 {
    0.5
}
fn default_medium_threshold() -> u32 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_minutes: default_buffer(),
            timeline_start: default_timeline_start(),
            timeline_end: default_timeline_end(),
            strategy: PackingStrategy::default(),
            chart_columns: default_chart_columns(),
            short_pad: default_short_pad(),
            short_threshold: default_short_threshold(),
            medium_pad: default_medium_pad(),
            medium_threshold: default_medium_threshold(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimelane")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimelane.conf")
    }

    /// Resolve an optional `--config` override against the default location
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn window(&self) -> AppResult<TimelineWindow> {
        TimelineWindow::from_bounds(&self.timeline_start, &self.timeline_end)
    }

    pub fn padding(&self) -> WidthPadding {
        WidthPadding {
            short_threshold: self.short_threshold,
            short_pad: self.short_pad,
            medium_threshold: self.medium_threshold,
            medium_pad: self.medium_pad,
        }
    }

    /// Layout options described by this configuration
    pub fn layout_options(&self) -> AppResult<LayoutOptions> {
        if self.medium_threshold < self.short_threshold {
            return Err(AppError::Config(format!(
                "medium_threshold ({}) must not be below short_threshold ({})",
                self.medium_threshold, self.short_threshold
            )));
        }

        Ok(LayoutOptions {
            buffer_minutes: self.buffer_minutes,
            window: self.window()?,
            padding: self.padding(),
            strategy: self.strategy,
        })
    }
}
