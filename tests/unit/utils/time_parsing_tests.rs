// Parameterized tests for clock-time parsing, formatting and snapping

use or_board::utils::time::{minutes_to_time, round_to_slot, time_to_minutes, ClockTime};
use test_case::test_case;

#[test_case("00:00", 0 ; "midnight")]
#[test_case("07:00", 420 ; "board opens")]
#[test_case("13:30", 810 ; "afternoon")]
#[test_case("23:59", 1439 ; "last minute")]
#[test_case("24:30", 1470 ; "past midnight")]
#[test_case(" 08:05 ", 485 ; "surrounding whitespace")]
fn test_time_to_minutes(text: &str, expected: i32) {
    assert_eq!(time_to_minutes(text), expected);
}

#[test_case("" ; "empty")]
#[test_case("8" ; "no separator")]
#[test_case("xx:15" ; "bad hour")]
#[test_case("08:60" ; "minute out of range")]
#[test_case("-1:00" ; "negative hour")]
fn test_malformed_time_is_zero(text: &str) {
    assert_eq!(time_to_minutes(text), 0);
    assert!(text.parse::<ClockTime>().is_err());
}

#[test_case(0.0, "00:00")]
#[test_case(65.0, "01:05")]
#[test_case(719.5, "12:00" ; "half rounds up")]
#[test_case(1440.0, "24:00" ; "no wrap")]
fn test_minutes_to_time(minutes: f64, expected: &str) {
    assert_eq!(minutes_to_time(minutes), expected);
}

#[test_case(482.0, 480)]
#[test_case(482.5, 485 ; "half slot rounds up")]
#[test_case(487.4, 485)]
#[test_case(-3.0, -5)]
fn test_round_to_slot(minutes: f64, expected: i32) {
    assert_eq!(round_to_slot(minutes), expected);
}
