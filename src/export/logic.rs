// src/export/logic.rs

use crate::core::layout::TimelineLayout;
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json, print_csv, print_json};
use crate::utils::path::expand_tilde;

/// High-level export of a computed layout.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `layout` to `file`.
    ///
    /// - `format`: json | csv (`table` is terminal-only)
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        layout: &TimelineLayout,
        format: OutputFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        match format {
            OutputFormat::Json => export_json(layout, &path),
            OutputFormat::Csv => export_csv(layout, &path),
            OutputFormat::Table => Err(AppError::Export(
                "table output cannot be written to a file, use json or csv".to_string(),
            )),
        }
    }

    /// Write `layout` to stdout as json or csv.
    pub fn print(layout: &TimelineLayout, format: OutputFormat) -> AppResult<()> {
        match format {
            OutputFormat::Json => print_json(layout),
            OutputFormat::Csv => print_csv(layout),
            OutputFormat::Table => Err(AppError::Export(
                "table output is rendered by the layout command".to_string(),
            )),
        }
    }
}
