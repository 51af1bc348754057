use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{EVENING_JSON, rtl, setup_test_config, temp_out, write_input};

#[test]
fn test_layout_json_to_stdout() {
    let cfg = setup_test_config("layout_json");
    let input = write_input("layout_json", "json", EVENING_JSON);

    let output = rtl()
        .args(["--config", &cfg, "--test", "layout", &input, "--format", "json"])
        .output()
        .expect("run rtimelane");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(v["rowCount"], 2);

    let bookings = v["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 3);
    assert_eq!(bookings[0]["id"], "1");
    assert_eq!(bookings[0]["row"], 0);
    assert_eq!(bookings[1]["id"], "2");
    assert_eq!(bookings[1]["row"], 1);
    assert_eq!(bookings[2]["row"], 0);
    assert_eq!(bookings[1]["startMinutes"], 1170);
    assert!(v["rejected"].as_array().unwrap().is_empty());
}

#[test]
fn test_layout_table_output() {
    let cfg = setup_test_config("layout_table");
    let input = write_input("layout_table", "json", EVENING_JSON);

    rtl()
        .args(["--config", &cfg, "--test", "layout", &input])
        .assert()
        .success()
        .stdout(contains("Timeline 01:00 - 24:00"))
        .stdout(contains("Rossi"))
        .stdout(contains("19:30"))
        .stdout(contains("3 booking(s) in 2 row(s), buffer 15 min, first-fit"));
}

#[test]
fn test_layout_with_chart() {
    let cfg = setup_test_config("layout_chart");
    let input = write_input("layout_chart", "json", EVENING_JSON);

    rtl()
        .args([
            "--config", &cfg, "--test", "layout", &input, "--chart", "--now", "20:00",
        ])
        .assert()
        .success()
        .stdout(contains("R0"))
        .stdout(contains("R1"))
        .stdout(contains("v now"))
        .stdout(contains("[Ros"));
}

#[test]
fn test_now_flag_needs_chart() {
    let cfg = setup_test_config("layout_now_no_chart");
    let input = write_input("layout_now_no_chart", "json", EVENING_JSON);

    rtl()
        .args(["--config", &cfg, "--test", "layout", &input, "--now", "20:00"])
        .assert()
        .failure()
        .stderr(contains("--chart"));
}

#[test]
fn test_chart_with_json_format_warns() {
    let cfg = setup_test_config("layout_chart_json");
    let input = write_input("layout_chart_json", "json", EVENING_JSON);

    rtl()
        .args([
            "--config", &cfg, "--test", "layout", &input, "--chart", "--format", "json",
        ])
        .assert()
        .success()
        .stdout(contains("\"rowCount\": 2"))
        .stderr(contains("--chart only applies to table output"));
}

#[test]
fn test_buffer_flag_overrides_config() {
    let cfg = setup_test_config("layout_buffer");
    let input = write_input(
        "layout_buffer",
        "json",
        r#"[{"id":"a","startTime":"12:00","endTime":"13:00"},{"id":"b","startTime":"13:00","endTime":"14:00"}]"#,
    );

    rtl()
        .args(["--config", &cfg, "--test", "layout", &input])
        .assert()
        .success()
        .stdout(contains("in 2 row(s)"));

    rtl()
        .args(["--config", &cfg, "--test", "layout", &input, "--buffer", "0"])
        .assert()
        .success()
        .stdout(contains("in 1 row(s)"));
}

#[test]
fn test_config_file_is_honoured() {
    let cfg = setup_test_config("layout_cfg_file");
    fs::write(&cfg, "buffer_minutes: 0\nstrategy: earliest-end\n").unwrap();
    let input = write_input(
        "layout_cfg_file",
        "json",
        r#"[{"id":"a","startTime":"12:00","endTime":"13:00"},{"id":"b","startTime":"13:00","endTime":"14:00"}]"#,
    );

    rtl()
        .args(["--config", &cfg, "--test", "layout", &input])
        .assert()
        .success()
        .stdout(contains("in 1 row(s), buffer 0 min, earliest-end"));
}

#[test]
fn test_bad_record_is_reported_and_others_placed() {
    let cfg = setup_test_config("layout_bad_record");
    let input = write_input(
        "layout_bad_record",
        "csv",
        "id,startTime,endTime\nok,18:00,19:00\nbad,25:00,26:00\n",
    );

    rtl()
        .args(["--config", &cfg, "--test", "layout", &input])
        .assert()
        .success()
        .stderr(contains("Skipped booking 'bad' (start_time)"))
        .stdout(contains("1 booking(s) in 1 row(s)"));
}

#[test]
fn test_empty_file_is_not_an_error() {
    let cfg = setup_test_config("layout_empty");
    let input = write_input("layout_empty", "json", "[]");

    rtl()
        .args(["--config", &cfg, "--test", "layout", &input])
        .assert()
        .success()
        .stdout(contains("No bookings to lay out"));
}

#[test]
fn test_export_csv_and_refuse_overwrite() {
    let cfg = setup_test_config("export_csv");
    let input = write_input("export_csv", "json", EVENING_JSON);
    let out = temp_out("export_csv", "csv");

    rtl()
        .args([
            "--config", &cfg, "--test", "layout", &input, "--format", "csv", "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,customer,start,end,row,left,width,status,guests,table")
    );
    assert!(lines.next().unwrap().starts_with("1,Rossi,19:00,20:30,0,"));
    assert_eq!(content.lines().count(), 4);

    // second run without --force: answer "no"
    rtl()
        .args([
            "--config", &cfg, "--test", "layout", &input, "--format", "csv", "--out", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    rtl()
        .args([
            "--config", &cfg, "--test", "layout", &input, "--format", "json", "--out", &out,
            "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("\"rowCount\": 2"));
}

#[test]
fn test_unsupported_input_extension_fails() {
    let cfg = setup_test_config("layout_txt");
    let input = write_input("layout_txt", "txt", "whatever");

    rtl()
        .args(["--config", &cfg, "--test", "layout", &input])
        .assert()
        .failure()
        .stderr(contains("Unsupported input format"));
}

#[test]
fn test_invalid_window_fails() {
    let cfg = setup_test_config("layout_window");
    let input = write_input("layout_window", "json", EVENING_JSON);

    rtl()
        .args([
            "--config", &cfg, "--test", "layout", &input, "--start", "10:00", "--end", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid timeline window"));
}

#[test]
fn test_now_marker_at_given_time() {
    let cfg = setup_test_config("now_at");

    rtl()
        .args(["--config", &cfg, "--test", "now", "--at", "12:30"])
        .assert()
        .success()
        .stdout(contains("Now marker at 12:30: 50.00%"));

    rtl()
        .args(["--config", &cfg, "--test", "now", "--at", "6:00 PM", "--start", "12:00", "--end", "24:00"])
        .assert()
        .success()
        .stdout(contains("Now marker at 18:00: 50.00%"));
}

#[test]
fn test_now_rejects_bad_time() {
    let cfg = setup_test_config("now_bad");

    rtl()
        .args(["--config", &cfg, "--test", "now", "--at", "12:75"])
        .assert()
        .failure()
        .stderr(contains("minute out of range"));
}

#[test]
fn test_init_writes_config_then_print_shows_it() {
    let cfg = setup_test_config("init_print");

    rtl()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));
    assert!(fs::metadata(&cfg).is_ok());

    rtl()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(
            contains("buffer_minutes: 15")
                .and(contains("timeline_end:"))
                .and(contains("24:00")),
        );

    // second init keeps the file
    rtl()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_init_in_test_mode_writes_nothing() {
    let cfg = setup_test_config("init_test_mode");

    rtl()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();
    assert!(fs::metadata(&cfg).is_err());
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = setup_test_config("broken_cfg");
    fs::write(&cfg, "buffer_minutes: [not a number\n").unwrap();

    rtl()
        .args(["--config", &cfg, "--test", "now", "--at", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
