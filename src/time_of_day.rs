//! Wall-clock time of day.
//!
//! [`TimeOfDay`] holds an hour, minute and second with no date and no
//! time zone. It is built from explicit fields, from the local clock or
//! from the `hh:mm:ss` text form, and it renders back to that form.
//! Field ranges are never checked: `99:99:99` parses, and an hour of 123
//! renders as `123:00:00`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Local, NaiveTime, Timelike};
use logline_core::errors::{LogLineError, Result};
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// [`Clock`] backed by the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Optional fields used to construct a [`TimeOfDay`].
///
/// Deserializes from a JSON object. Unknown keys are ignored and `null`
/// counts as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<i64>,
}

impl TimeFields {
    pub fn hour(mut self, hour: i64) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(mut self, minute: i64) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(mut self, second: i64) -> Self {
        self.second = Some(second);
        self
    }

    pub fn build(self) -> TimeOfDay {
        TimeOfDay::from(self)
    }
}

/// Immutable hour/minute/second triple.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeOfDay {
    hour: i64,
    minute: i64,
    second: i64,
}

impl TimeOfDay {
    /// Builds a value from explicit fields. No range validation is applied.
    pub const fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Starts a builder where every field not set reads as zero.
    pub fn builder() -> TimeFields {
        TimeFields::default()
    }

    /// Builds a value from a JSON object of `hour`, `minute` and `second`.
    ///
    /// Missing keys read as zero and unknown keys are ignored. A known key
    /// holding anything other than an integer or `null` is rejected.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self> {
        let fields: TimeFields = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|err| LogLineError::InvalidArgument(format!("invalid time fields: {err}")))?;
        Ok(fields.into())
    }

    /// Captures the current local wall-clock time.
    pub fn now() -> Self {
        Self::now_with(&LocalClock)
    }

    /// Captures the current time from `clock`.
    pub fn now_with(clock: &impl Clock) -> Self {
        let value = Self::from(clock.now());
        tracing::trace!(time = %value, "captured wall-clock time");
        value
    }

    /// Parses the exact `hh:mm:ss` form (two ASCII digits per field).
    pub fn parse(input: &str) -> Result<Self> {
        let Some(captures) = time_pattern().captures(input) else {
            tracing::debug!(input, "rejected time string");
            return Err(LogLineError::invalid_time_format());
        };

        let field = |idx: usize| -> Result<i64> {
            captures[idx]
                .parse::<i64>()
                .map_err(|_| LogLineError::invalid_time_format())
        };

        Ok(Self::new(field(1)?, field(2)?, field(3)?))
    }

    /// Parses a dynamically typed value, which must be a JSON string.
    pub fn parse_value(input: &Value) -> Result<Self> {
        match input {
            Value::String(text) => Self::parse(text),
            other => {
                tracing::debug!(kind = value_kind(other), "time parse without a string");
                Err(LogLineError::no_string_supplied())
            }
        }
    }

    pub fn hour(&self) -> i64 {
        self.hour
    }

    pub fn minute(&self) -> i64 {
        self.minute
    }

    pub fn second(&self) -> i64 {
        self.second
    }

    /// Converts into a full calendar date-time using the default anchor.
    ///
    /// See [`crate::calendar::to_calendar`] for the failure modes.
    pub fn to_calendar_default(&self) -> Result<crate::calendar::CalendarDateTime> {
        crate::calendar::to_calendar(self, &crate::calendar::CalendarOptions::default())
    }
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("invalid hh:mm:ss pattern")
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<TimeFields> for TimeOfDay {
    fn from(fields: TimeFields) -> Self {
        Self::new(
            fields.hour.unwrap_or(0),
            fields.minute.unwrap_or(0),
            fields.second.unwrap_or(0),
        )
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::new(
            i64::from(time.hour()),
            i64::from(time.minute()),
            i64::from(time.second()),
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = LogLineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Equality and hashing follow the rendered text, not the raw fields.
impl PartialEq for TimeOfDay {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for TimeOfDay {}

impl Hash for TimeOfDay {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimeOfDayVisitor;

        impl Visitor<'_> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a time string in hh:mm:ss form")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<TimeOfDay, E>
            where
                E: de::Error,
            {
                TimeOfDay::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}
