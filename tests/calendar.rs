// Tests for handing a wall-clock value off to a full chrono date-time.
#![cfg(feature = "calendar")]

use chrono::{NaiveDate, Timelike};
use logline_walltime::{to_calendar, CalendarOptions, LogLineError, TimeOfDay, TimeZoneSpec};

#[test]
fn default_conversion_is_floating_and_neutral() {
    let converted = TimeOfDay::new(7, 45, 30)
        .to_calendar_default()
        .expect("in-range time converts");

    assert_eq!(converted.datetime.date(), NaiveDate::from_ymd_opt(1, 1, 1).expect("date"));
    assert_eq!(converted.datetime.hour(), 7);
    assert_eq!(converted.datetime.minute(), 45);
    assert_eq!(converted.datetime.second(), 30);
    assert_eq!(converted.locale, "und");
    assert_eq!(converted.time_zone, TimeZoneSpec::Floating);
}

#[test]
fn caller_overrides_are_applied() {
    let date = NaiveDate::from_ymd_opt(1999, 12, 31).expect("date");
    let options = CalendarOptions::default().with_date(date).with_locale("en-US");
    let converted = to_calendar(&TimeOfDay::new(23, 59, 59), &options).expect("convert");

    assert_eq!(converted.datetime.date(), date);
    assert_eq!(converted.locale, "en-US");
    assert_eq!(converted.time_zone, TimeZoneSpec::Floating);
    assert_eq!(converted.time_of_day().to_string(), "23:59:59");
}

#[test]
fn parsed_out_of_range_value_cannot_be_converted() {
    let value = TimeOfDay::parse("99:99:99").expect("shape is valid");
    let err = value.to_calendar_default().unwrap_err();
    assert!(matches!(err, LogLineError::InvalidArgument(_)));
}

#[test]
fn converted_value_serializes_with_tags() {
    let converted = TimeOfDay::new(1, 2, 3)
        .to_calendar_default()
        .expect("convert");
    let json = serde_json::to_value(&converted).expect("serialize");
    assert_eq!(json["datetime"], "0001-01-01T01:02:03");
    assert_eq!(json["locale"], "und");
    assert_eq!(json["time_zone"], "floating");
}
