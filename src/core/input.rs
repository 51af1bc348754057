//! Booking input files: JSON, CSV or YAML.
//!
//! Records that cannot be deserialized are collected as rejected, like
//! records with bad times, so one broken line never empties the timeline.

use crate::errors::{AppError, AppResult};
use crate::models::{Booking, RejectedBooking};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct LoadedBookings {
    pub bookings: Vec<Booking>,
    pub rejected: Vec<RejectedBooking>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(AppError::InvalidInputFormat(format!(
                "'{}' (expected .json, .csv, .yaml or .yml)",
                other
            ))),
        }
    }
}

pub fn load_bookings(path: &Path) -> AppResult<LoadedBookings> {
    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_bookings(&content, format)
}

pub fn parse_bookings(content: &str, format: InputFormat) -> AppResult<LoadedBookings> {
    match format {
        InputFormat::Json => {
            let value: Value = serde_json::from_str(content)?;
            from_records(value)
        }
        InputFormat::Yaml => {
            if content.trim().is_empty() {
                return Ok(LoadedBookings::default());
            }
            let value: Value = serde_yaml::from_str(content)?;
            from_records(value)
        }
        InputFormat::Csv => from_csv(content),
    }
}

fn rejected_record(id: String, message: String) -> RejectedBooking {
    RejectedBooking {
        id,
        field: "record",
        message,
    }
}

/// Accepts a bare array or an object wrapping it under `bookings`.
fn from_records(value: Value) -> AppResult<LoadedBookings> {
    let records = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("bookings") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                return Err(AppError::InvalidInputFormat(
                    "'bookings' must be a list".to_string(),
                ));
            }
        },
        Value::Null => Vec::new(),
        _ => {
            return Err(AppError::InvalidInputFormat(
                "expected a list of bookings".to_string(),
            ));
        }
    };

    let mut loaded = LoadedBookings::default();

    for (i, record) in records.into_iter().enumerate() {
        let id = match record.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => format!("#{}", i + 1),
        };

        match serde_json::from_value::<Booking>(record) {
            Ok(b) => loaded.bookings.push(b),
            Err(e) => loaded.rejected.push(rejected_record(id, e.to_string())),
        }
    }

    Ok(loaded)
}

fn from_csv(content: &str) -> AppResult<LoadedBookings> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut loaded = LoadedBookings::default();

    for (i, result) in reader.deserialize::<Booking>().enumerate() {
        match result {
            Ok(b) => loaded.bookings.push(b),
            // header is line 1
            Err(e) => loaded
                .rejected
                .push(rejected_record(format!("line {}", i + 2), e.to_string())),
        }
    }

    Ok(loaded)
}
