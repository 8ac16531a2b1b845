//! Hand-off to a full calendar date-time.
//!
//! A [`TimeOfDay`] carries no date, so the conversion anchors it at a
//! reference date (day one of the common era unless overridden) and tags
//! it with a culture-neutral locale and a floating time zone. The
//! conversion is compiled in with the `calendar` feature; without it every
//! call fails with [`LogLineError::UnavailableDependency`]. The feature adds
//! no crate of its own: chrono is always linked for the local clock, so
//! turning it off only leaves the conversion out of the build.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use logline_core::errors::{LogLineError, Result};
use serde::{Deserialize, Serialize};

use crate::time_of_day::TimeOfDay;

/// BCP-47 "undetermined" tag, used as the culture-neutral locale.
pub const NEUTRAL_LOCALE: &str = "und";

/// Time zone attached to a converted value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeZoneSpec {
    /// Wall-clock only; not tied to any instant.
    #[default]
    Floating,
    /// An IANA identifier carried through verbatim. It is never resolved.
    Named(String),
}

impl fmt::Display for TimeZoneSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSpec::Floating => f.write_str("floating"),
            TimeZoneSpec::Named(name) => f.write_str(name),
        }
    }
}

/// Parameters of the calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOptions {
    pub date: NaiveDate,
    pub locale: String,
    pub time_zone: TimeZoneSpec,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            date: epoch_day_one(),
            locale: NEUTRAL_LOCALE.to_string(),
            time_zone: TimeZoneSpec::Floating,
        }
    }
}

impl CalendarOptions {
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_time_zone(mut self, time_zone: TimeZoneSpec) -> Self {
        self.time_zone = time_zone;
        self
    }
}

fn epoch_day_one() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// A [`TimeOfDay`] anchored to a date, with its locale and zone tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDateTime {
    pub datetime: NaiveDateTime,
    pub locale: String,
    pub time_zone: TimeZoneSpec,
}

impl CalendarDateTime {
    /// Drops the date and tags, returning the wall-clock part.
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from(self.datetime.time())
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({})",
            self.datetime.format("%Y-%m-%dT%H:%M:%S"),
            self.time_zone,
            self.locale
        )
    }
}

/// Anchors `time` at `options.date`.
///
/// Fields outside 0-23 / 0-59 cannot be represented by a calendar value
/// and are rejected with [`LogLineError::InvalidArgument`].
#[cfg(feature = "calendar")]
pub fn to_calendar(time: &TimeOfDay, options: &CalendarOptions) -> Result<CalendarDateTime> {
    let component = |value: i64| u32::try_from(value).ok();
    let naive = match (
        component(time.hour()),
        component(time.minute()),
        component(time.second()),
    ) {
        (Some(h), Some(m), Some(s)) => chrono::NaiveTime::from_hms_opt(h, m, s),
        _ => None,
    }
    .ok_or_else(|| {
        LogLineError::InvalidArgument(format!("time {time} is outside the calendar day"))
    })?;

    tracing::trace!(%time, date = %options.date, "anchored wall-clock time");

    Ok(CalendarDateTime {
        datetime: options.date.and_time(naive),
        locale: options.locale.clone(),
        time_zone: options.time_zone.clone(),
    })
}

#[cfg(not(feature = "calendar"))]
pub fn to_calendar(_time: &TimeOfDay, _options: &CalendarOptions) -> Result<CalendarDateTime> {
    Err(LogLineError::UnavailableDependency(
        "calendar conversion requires the `calendar` feature".to_string(),
    ))
}

#[cfg(all(test, feature = "calendar"))]
mod tests {
    use super::*;

    #[test]
    fn defaults_anchor_at_day_one_floating_and_neutral() {
        let options = CalendarOptions::default();
        assert_eq!(options.date, NaiveDate::from_ymd_opt(1, 1, 1).expect("date"));
        assert_eq!(options.locale, "und");
        assert_eq!(options.time_zone, TimeZoneSpec::Floating);
    }

    #[test]
    fn converts_with_overrides() {
        let options = CalendarOptions::default()
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"))
            .with_locale("pt-BR")
            .with_time_zone(TimeZoneSpec::Named("America/Sao_Paulo".into()));
        let converted = to_calendar(&TimeOfDay::new(13, 5, 9), &options).expect("convert");
        assert_eq!(converted.to_string(), "2024-03-01T13:05:09 [America/Sao_Paulo] (pt-BR)");
        assert_eq!(converted.time_of_day(), TimeOfDay::new(13, 5, 9));
    }

    #[test]
    fn rejects_fields_outside_the_day() {
        for time in [
            TimeOfDay::new(24, 0, 0),
            TimeOfDay::new(0, 60, 0),
            TimeOfDay::new(0, 0, 60),
            TimeOfDay::new(-1, 0, 0),
        ] {
            let err = to_calendar(&time, &CalendarOptions::default()).unwrap_err();
            assert!(matches!(err, LogLineError::InvalidArgument(_)), "{time}");
        }
    }
}
