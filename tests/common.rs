#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimelane::models::Booking;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtl() -> Command {
    cargo_bin_cmd!("rtimelane")
}

/// Path for a throwaway config file inside the system temp dir (removed first)
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimelane.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimelane_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp input file and return its path
pub fn write_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimelane_in.{}", name, ext));
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

pub fn booking(id: &str, start: &str, end: &str) -> Booking {
    Booking::new(id, start, end)
}

/// Evening service used by several CLI tests:
/// two overlapping tables plus a late one that fits back in row 0.
pub const EVENING_JSON: &str = r#"[
  {"id": 1, "customerName": "Rossi", "startTime": "19:00", "endTime": "20:30", "guestCount": 4, "status": "confirmed"},
  {"id": 2, "customerName": "Bianchi", "startTime": "7:30 PM", "endTime": "9:00 PM", "guestCount": 2, "status": "PENDING"},
  {"id": 3, "customerName": "Verdi", "startTime": "21:00", "endTime": "22:30", "guestCount": 6}
]"#;

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
