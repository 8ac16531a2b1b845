//! LogLine wall-clock time of day.
//!
//! A small, immutable `hh:mm:ss` value for logging and fast-path code
//! that needs the clock reading but none of the calendar or time zone
//! machinery.
//!
//! * `time_of_day`: the [`TimeOfDay`] value, its parser and formatter
//! * `calendar`: optional hand-off to a full chrono date-time
//!
//! ```
//! use logline_walltime::TimeOfDay;
//!
//! let t: TimeOfDay = "09:30:00".parse().unwrap();
//! assert_eq!(t.hour(), 9);
//! assert_eq!(format!("started at {t}"), "started at 09:30:00");
//! ```

pub mod calendar;
pub mod time_of_day;

pub use calendar::{to_calendar, CalendarDateTime, CalendarOptions, TimeZoneSpec};
pub use logline_core::errors::{LogLineError, Result};
pub use time_of_day::{Clock, LocalClock, TimeFields, TimeOfDay};
