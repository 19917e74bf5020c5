// Integration tests for the public time adapter surface
use pretty_assertions::assert_eq;
use timepicker::{
    AvailabilityConstraint, Granularity, Period, TimeError, TimeFormat, TimeValue,
    TimepickerOptions, format_hour, from_date_time_to_string, is_between, is_same_or_after,
    is_time_available, is_twenty_four, normalize, parse_time,
};

fn at(hour: u32, minute: u32) -> TimeValue {
    TimeValue::from_hm(hour, minute).unwrap()
}

fn canonical(input: &str) -> Option<String> {
    normalize(input).map(|t| t.to_string())
}

#[test]
fn test_normalize_examples() {
    assert_eq!(canonical("18:30").as_deref(), Some("18:30"));
    assert_eq!(canonical("6:30 pm").as_deref(), Some("18:30"));
    assert_eq!(canonical("12:00 am").as_deref(), Some("00:00"));
    assert_eq!(canonical("1815").as_deref(), Some("18:15"));

    assert_eq!(canonical(""), None);
    assert_eq!(normalize(None::<&str>), None);
    assert_eq!(canonical("1:2"), None);
}

#[test]
fn test_normalize_then_format_is_canonical() {
    let opts = TimepickerOptions::default();
    for input in ["18:30", "6:30 pm", "6:30 PM", "12:00 am", "1815", "0815", "9:05", "12:45 pm"] {
        let expected = canonical(input).unwrap();
        let value = parse_time(input, &opts).unwrap();
        let rendered = from_date_time_to_string(&value, TimeFormat::TwentyFour);
        assert_eq!(rendered, expected, "Failed for input: {}", input);
        assert_eq!(canonical(&rendered), Some(rendered.clone()), "Not idempotent: {}", input);
    }
}

#[test]
fn test_twelve_hour_display_round_trips() {
    let opts = TimepickerOptions::default();
    for (hour, minute) in [(0, 0), (0, 30), (11, 59), (12, 0), (12, 30), (13, 5), (23, 59)] {
        let shown = from_date_time_to_string(&at(hour, minute), TimeFormat::Twelve);
        let back = parse_time(&shown, &opts).unwrap();
        assert_eq!((back.hour(), back.minute()), (hour, minute), "Failed for display: {}", shown);
    }
}

#[test]
fn test_format_hour_examples() {
    assert_eq!(format_hour(12, TimeFormat::Twelve, Period::Am), 0);
    assert_eq!(format_hour(12, TimeFormat::Twelve, Period::Pm), 12);
    assert_eq!(format_hour(6, TimeFormat::Twelve, Period::Pm), 18);
    assert_eq!(format_hour(6, TimeFormat::TwentyFour, Period::Pm), 6);
    assert!(is_twenty_four(TimeFormat::TwentyFour));
}

#[test]
fn test_hour_granularity_ignores_minutes() {
    assert!(is_same_or_after(&at(15, 30), &at(15, 0), Granularity::Hours));
    assert!(!is_same_or_after(&at(15, 30), &at(16, 0), Granularity::Hours));
    assert!(is_same_or_after(&at(14, 59), &at(14, 0), Granularity::Hours));
}

#[test]
fn test_between_at_minute_granularity() {
    let (min, max) = (at(14, 0), at(16, 0));
    assert!(is_between(&at(15, 0), &min, &max, Granularity::Minutes));
    assert!(is_between(&at(14, 0), &min, &max, Granularity::Minutes));
    assert!(is_between(&at(16, 0), &min, &max, Granularity::Minutes));
    assert!(!is_between(&at(13, 59), &min, &max, Granularity::Minutes));
    assert!(!is_between(&at(16, 1), &min, &max, Granularity::Minutes));
}

#[test]
fn test_time_available_examples() {
    let (min, max) = (at(14, 0), at(16, 0));
    assert_eq!(is_time_available("", Some(&min), Some(&max), None, None, None), Ok(None));
    assert_eq!(is_time_available("14:30", Some(&min), Some(&max), None, None, None), Ok(Some(true)));
    assert_eq!(is_time_available("13:00", Some(&min), Some(&max), None, None, None), Ok(Some(false)));
}

#[test]
fn test_minutes_gap_examples() {
    let result = is_time_available("14:07", None, None, None, Some(15), None);
    assert_eq!(result, Err(TimeError::MinutesGapMismatch { minutes: 7, minutes_gap: 15 }));

    let result = is_time_available("14:15", None, None, None, Some(15), Some(TimeFormat::TwentyFour));
    assert_eq!(result, Ok(Some(true)));
}

#[test]
fn test_bound_combinations() {
    let (min, max) = (at(10, 0), at(18, 0));
    let cases = [
        (Some(&min), None, "09:00", false),
        (Some(&min), None, "19:00", true),
        (None, Some(&max), "09:00", true),
        (None, Some(&max), "19:00", false),
        (Some(&min), Some(&max), "12:00", true),
        (Some(&min), Some(&max), "19:00", false),
        (None, None, "00:00", true),
        (None, None, "23:59", true),
    ];

    for (min, max, time, expected) in cases {
        let result = is_time_available(time, min, max, None, None, None);
        assert_eq!(result, Ok(Some(expected)), "Failed for {} with min {:?} max {:?}", time, min.is_some(), max.is_some());
    }
}

#[test]
fn test_localized_input_under_constraint() {
    let constraint = AvailabilityConstraint::new()
        .with_min(at(14, 0))
        .with_max(at(16, 0))
        .with_minutes_gap(15);
    let opts = TimepickerOptions::with_locale("ar-EG");

    assert_eq!(constraint.check("١٤:٣٠", &opts), Ok(Some(true)));
    assert_eq!(constraint.check("١٣:٠٠", &opts), Ok(Some(false)));
    assert!(constraint.check("١٤:٠٧", &opts).is_err());
}
