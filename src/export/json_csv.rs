// src/export/json_csv.rs

use crate::core::layout::TimelineLayout;
use crate::errors::AppResult;
use crate::export::{PositionedExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Whole layout (bookings, row count, rejected records) as pretty JSON.
pub(crate) fn export_json(layout: &TimelineLayout, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(layout)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// One CSV line per positioned booking (header from serde).
pub(crate) fn export_csv(layout: &TimelineLayout, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for pb in &layout.bookings {
        wtr.serialize(PositionedExport::from(pb))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// JSON to stdout, for piping.
pub(crate) fn print_json(layout: &TimelineLayout) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(layout)?);
    Ok(())
}

/// CSV to stdout, for piping.
pub(crate) fn print_csv(layout: &TimelineLayout) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for pb in &layout.bookings {
        wtr.serialize(PositionedExport::from(pb))?;
    }
    wtr.flush()?;
    Ok(())
}
