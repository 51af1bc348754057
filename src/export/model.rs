// src/export/model.rs

use crate::models::PositionedBooking;
use crate::utils::time::format_minutes;
use serde::Serialize;

/// Flat row for CSV export of a positioned booking.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PositionedExport {
    pub id: String,
    pub customer: String,
    pub start: String,
    pub end: String,
    pub row: usize,
    pub left: f64,
    pub width: f64,
    pub status: String,
    pub guests: Option<u32>,
    pub table: String,
}

impl From<&PositionedBooking> for PositionedExport {
    fn from(pb: &PositionedBooking) -> Self {
        let b = &pb.booking;
        Self {
            id: b.id.clone(),
            customer: b.customer_name.clone().unwrap_or_default(),
            start: format_minutes(pb.start_minutes),
            end: format_minutes(pb.end_minutes),
            row: pb.row,
            left: round2(pb.left),
            width: round2(pb.width),
            status: b.status_or_default().as_str().to_string(),
            guests: b.guest_count,
            table: b.table.clone().unwrap_or_default(),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
