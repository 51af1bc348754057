use rtimelane::errors::TimeParseError;
use rtimelane::utils::time::{format_minutes, parse_time_of_day, parse_window_bound, time_to_minutes};

#[test]
fn test_24h_and_12h_forms_agree() {
    assert_eq!(time_to_minutes("13:30").unwrap(), 810);
    assert_eq!(time_to_minutes("1:30 PM").unwrap(), 810);
    assert_eq!(time_to_minutes("01:30 pm").unwrap(), 810);
    assert_eq!(time_to_minutes("1:30PM").unwrap(), 810);
    assert_eq!(time_to_minutes("1:30 p.m.").unwrap(), 810);
}

#[test]
fn test_noon_and_midnight_in_12h_form() {
    assert_eq!(time_to_minutes("12:00 AM").unwrap(), 0);
    assert_eq!(time_to_minutes("12:15 PM").unwrap(), 735);
    assert_eq!(time_to_minutes("11:59 PM").unwrap(), 1439);
}

#[test]
fn test_seconds_are_truncated() {
    assert_eq!(time_to_minutes("23:59:59").unwrap(), 1439);
    assert_eq!(time_to_minutes("08:05:30 am").unwrap(), 485);
    assert_eq!(time_to_minutes(" 00:00 ").unwrap(), 0);
}

#[test]
fn test_iso_datetimes_use_wall_clock() {
    assert_eq!(time_to_minutes("2025-10-02T13:30:00Z").unwrap(), 810);
    assert_eq!(time_to_minutes("2025-10-02T13:30:00+02:00").unwrap(), 810);
    assert_eq!(time_to_minutes("2025-10-02T13:30:00.250").unwrap(), 810);
    assert_eq!(time_to_minutes("2025-10-02 08:05").unwrap(), 485);
}

#[test]
fn test_out_of_range_hours_are_rejected() {
    assert_eq!(
        time_to_minutes("25:00"),
        Err(TimeParseError::HourOutOfRange {
            value: "25:00".to_string(),
            min: 0,
            max: 23
        })
    );
    assert_eq!(
        time_to_minutes("13:30 PM"),
        Err(TimeParseError::HourOutOfRange {
            value: "13:30 PM".to_string(),
            min: 1,
            max: 12
        })
    );
    assert!(matches!(
        time_to_minutes("0:30 AM"),
        Err(TimeParseError::HourOutOfRange { .. })
    ));
}

#[test]
fn test_out_of_range_minutes_and_seconds_are_rejected() {
    assert_eq!(
        time_to_minutes("10:60"),
        Err(TimeParseError::MinuteOutOfRange("10:60".to_string()))
    );
    assert_eq!(
        time_to_minutes("10:00:61"),
        Err(TimeParseError::SecondOutOfRange("10:00:61".to_string()))
    );
}

#[test]
fn test_malformed_input_is_an_error_not_a_value() {
    for bad in ["", "abc", "10", "10:5", "10-30", "1030", "10:30 XM", "2025-13-40T10:00:00"] {
        assert!(
            matches!(time_to_minutes(bad), Err(TimeParseError::Malformed(_))),
            "expected Malformed for {bad:?}"
        );
    }
}

#[test]
fn test_error_message_names_the_value() {
    let err = time_to_minutes("7:75").unwrap_err();
    assert!(err.to_string().contains("7:75"));
}

#[test]
fn test_parse_time_of_day_returns_naive_time() {
    let t = parse_time_of_day("9:05 pm").unwrap();
    assert_eq!(t.format("%H:%M").to_string(), "21:05");
}

#[test]
fn test_window_bound_accepts_end_of_day() {
    assert_eq!(parse_window_bound("24:00").unwrap(), 1440);
    assert_eq!(parse_window_bound("01:00").unwrap(), 60);
    assert!(parse_window_bound("24:30").is_err());
}

#[test]
fn test_format_minutes() {
    assert_eq!(format_minutes(810), "13:30");
    assert_eq!(format_minutes(5), "00:05");
    assert_eq!(format_minutes(1440), "24:00");
    assert_eq!(format_minutes(1500), "01:00+1");
}
